//! In-memory [`DscsSdk`] implementation for tests and development machines.
//!
//! The mock keeps one register per process value parameter, records every
//! mutating call, and can be told to fail the next call to a given vendor
//! function. Getters read the registers without being recorded, so call logs
//! in tests stay focused on writes.

use super::DscsSdk;
use crate::error::{DscsError, Result, VendorStatus};
use crate::pv::{ParamId, PvValue};
use crate::types::{
    Axis, ConnectionType, DeviceDescriptor, DeviceIndex, InputTransformationState, InterfaceType,
    LimiterState, TargetMode, XzChannel,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// One recorded mutating vendor call.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkCall {
    /// Vendor function name
    pub function: &'static str,
    /// Raw axis or channel selector, when the call takes one
    pub axis: Option<u32>,
    /// Arguments of the call in declaration order
    pub values: Vec<f64>,
}

#[derive(Default)]
struct MockState {
    registers: HashMap<ParamId, PvValue>,
    devices: Vec<DeviceDescriptor>,
    calls: Vec<SdkCall>,
    fail_next: HashMap<&'static str, VendorStatus>,
}

/// Mock DSCS library holding its registers in memory.
pub struct MockDscsSdk {
    state: Mutex<MockState>,
}

impl MockDscsSdk {
    /// Creates a mock with one discoverable USB device.
    pub fn new() -> Self {
        Self::with_devices(vec![DeviceDescriptor {
            id: 4223,
            serial_no: "DSCS-0001".to_string(),
            address: "USB".to_string(),
        }])
    }

    /// Creates a mock with the given discoverable devices.
    pub fn with_devices(devices: Vec<DeviceDescriptor>) -> Self {
        Self {
            state: Mutex::new(MockState {
                devices,
                ..MockState::default()
            }),
        }
    }

    /// Replaces the set of discoverable devices.
    pub fn set_devices(&self, devices: Vec<DeviceDescriptor>) {
        self.state.lock().devices = devices;
    }

    /// Seeds a register, as if the hardware held this value.
    pub fn set_register(&self, param: ParamId, value: PvValue) {
        self.state.lock().registers.insert(param, value);
    }

    /// Current register content, if any setter or seed has touched it.
    pub fn register(&self, param: ParamId) -> Option<PvValue> {
        self.state.lock().registers.get(&param).copied()
    }

    /// All mutating calls recorded so far, in order.
    pub fn calls(&self) -> Vec<SdkCall> {
        self.state.lock().calls.clone()
    }

    /// Drops the recorded call log.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Makes the next call to `function` fail with `status`.
    pub fn fail_next_call(&self, function: &'static str, status: VendorStatus) {
        self.state.lock().fail_next.insert(function, status);
    }

    fn fail_check(state: &mut MockState, function: &'static str) -> Result<()> {
        match state.fail_next.remove(function) {
            Some(status) => Err(DscsError::Vendor { function, status }),
            None => Ok(()),
        }
    }

    fn get(&self, function: &'static str, param: ParamId) -> Result<i32> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, function)?;
        Ok(state
            .registers
            .get(&param)
            .copied()
            .unwrap_or(param.kind().zero())
            .as_i32())
    }

    fn get_f64(&self, function: &'static str, param: ParamId) -> Result<f64> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, function)?;
        Ok(state
            .registers
            .get(&param)
            .copied()
            .unwrap_or(param.kind().zero())
            .as_f64())
    }

    fn set(
        &self,
        function: &'static str,
        param: ParamId,
        axis: Option<u32>,
        value: PvValue,
    ) -> Result<()> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, function)?;
        state.calls.push(SdkCall {
            function,
            axis,
            values: vec![value.as_f64()],
        });
        state.registers.insert(param, value);
        Ok(())
    }

    fn command(&self, function: &'static str, axis: Option<u32>, values: Vec<f64>) -> Result<()> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, function)?;
        state.calls.push(SdkCall {
            function,
            axis,
            values,
        });
        Ok(())
    }
}

impl Default for MockDscsSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl DscsSdk for MockDscsSdk {
    fn version(&self) -> String {
        "1.4.2 (mock)".to_string()
    }

    fn discover(&self, _ifaces: InterfaceType) -> Result<u32> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, "DSCS_discover")?;
        Ok(state.devices.len() as u32)
    }

    fn device_info(&self, dev: DeviceIndex) -> Result<DeviceDescriptor> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, "DSCS_getDeviceInfo")?;
        state
            .devices
            .get(dev.0 as usize)
            .cloned()
            .ok_or(DscsError::Vendor {
                function: "DSCS_getDeviceInfo",
                status: VendorStatus::NoDevice,
            })
    }

    fn connection_type(&self, dev: DeviceIndex) -> Result<ConnectionType> {
        let state = self.state.lock();
        if (dev.0 as usize) < state.devices.len() {
            Ok(ConnectionType::Control)
        } else {
            Ok(ConnectionType::None)
        }
    }

    fn connect(&self, dev: DeviceIndex) -> Result<()> {
        let devices = self.state.lock().devices.len();
        if (dev.0 as usize) >= devices {
            return Err(DscsError::Vendor {
                function: "DSCS_connect",
                status: VendorStatus::NoDevice,
            });
        }
        self.command("DSCS_connect", None, vec![f64::from(dev.0)])
    }

    fn disconnect(&self, dev: DeviceIndex) -> Result<()> {
        self.command("DSCS_disconnect", None, vec![f64::from(dev.0)])
    }

    fn set_data_output_enabled(&self, _dev: DeviceIndex, enable: bool) -> Result<()> {
        self.command(
            "DSCS_setDataOutputEnabled",
            None,
            vec![f64::from(enable as i32)],
        )
    }

    fn osa_ps(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getOSA_PS", ParamId::OsaPs(axis))
    }

    fn set_osa_ps(&self, _dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.set(
            "DSCS_setOSA_PS",
            ParamId::OsaPs(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn bs_ps(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getBS_PS", ParamId::BsPs(axis))
    }

    fn set_bs_ps(&self, _dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.set(
            "DSCS_setBS_PS",
            ParamId::BsPs(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn aux_dac(&self, _dev: DeviceIndex, aux: u8) -> Result<i32> {
        self.get("DSCS_getAUX_DAC", ParamId::AuxDac(aux))
    }

    fn set_aux_dac(&self, _dev: DeviceIndex, aux: u8, value: i32) -> Result<()> {
        self.set(
            "DSCS_setAUX_DAC",
            ParamId::AuxDac(aux),
            Some(u32::from(aux)),
            PvValue::Int(value),
        )
    }

    fn nfo_ps(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getNFO_PS", ParamId::NfoPs(axis))
    }

    fn set_nfo_ps(&self, _dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.set(
            "DSCS_setNFO_PS",
            ParamId::NfoPs(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn sam_ps(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getSAM_PS", ParamId::SamPs(axis))
    }

    fn set_sam_ps(&self, _dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.set(
            "DSCS_setSAM_PS",
            ParamId::SamPs(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn nfo_sg(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getNFO_SG", ParamId::NfoSg(axis))
    }

    fn sam_cp_d(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getSAM_CP_D", ParamId::SamCpD(axis))
    }

    fn xz_zx(&self, _dev: DeviceIndex, channel: XzChannel) -> Result<i32> {
        self.get("DSCS_getXZ_ZX", ParamId::XzZx(channel))
    }

    fn aux_adc(&self, _dev: DeviceIndex, aux: u8) -> Result<i32> {
        self.get("DSCS_getAUX_ADC", ParamId::AuxAdc(aux))
    }

    fn nfo(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getNFO", ParamId::Nfo(axis))
    }

    fn sam(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getSAM", ParamId::Sam(axis))
    }

    fn setpoint_modulation_frequency(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get(
            "DSCS_getSetpointModulationFrequency",
            ParamId::SetpointFrequency(axis),
        )
    }

    fn set_setpoint_modulation_frequency(
        &self,
        _dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.set(
            "DSCS_setSetpointModulationFrequency",
            ParamId::SetpointFrequency(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn setpoint_modulation_phase(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get(
            "DSCS_getSetpointModulationPhase",
            ParamId::SetpointPhase(axis),
        )
    }

    fn set_setpoint_modulation_phase(
        &self,
        _dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.set(
            "DSCS_setSetpointModulationPhase",
            ParamId::SetpointPhase(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn setpoint_modulation_amplitude(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get(
            "DSCS_getSetpointModulationAmplitude",
            ParamId::SetpointAmplitude(axis),
        )
    }

    fn set_setpoint_modulation_amplitude(
        &self,
        _dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.set(
            "DSCS_setSetpointModulationAmplitude",
            ParamId::SetpointAmplitude(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn reset_setpoint_modulation_phase(&self, _dev: DeviceIndex) -> Result<()> {
        self.command("DSCS_resetSetpointModulationPhase", None, Vec::new())
    }

    fn external_adc_shift(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getExternalADCShift", ParamId::ExternalAdcShift)
    }

    fn set_external_adc_shift(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setExternalADCShift",
            ParamId::ExternalAdcShift,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_enabled(&self, _dev: DeviceIndex, axis: Axis) -> Result<bool> {
        self.get("DSCS_getPIControllerEnabled", ParamId::PiEnabled(axis))
            .map(|v| v != 0)
    }

    fn set_pi_enabled(&self, _dev: DeviceIndex, axis: Axis, enable: bool) -> Result<()> {
        self.set(
            "DSCS_setPIControllerEnabled",
            ParamId::PiEnabled(axis),
            Some(axis.to_raw()),
            PvValue::Int(enable as i32),
        )
    }

    fn pi_inverted(&self, _dev: DeviceIndex, axis: Axis) -> Result<bool> {
        self.get("DSCS_getPIControllerInverted", ParamId::PiInverted(axis))
            .map(|v| v != 0)
    }

    fn set_pi_inverted(&self, _dev: DeviceIndex, axis: Axis, inverted: bool) -> Result<()> {
        self.set(
            "DSCS_setPIControllerInverted",
            ParamId::PiInverted(axis),
            Some(axis.to_raw()),
            PvValue::Int(inverted as i32),
        )
    }

    fn pi_i_value_nfo(&self, _dev: DeviceIndex) -> Result<f64> {
        self.get_f64("DSCS_getPIControllerIValueNFO", ParamId::PiIValueNfo)
    }

    fn set_pi_i_value_nfo(&self, _dev: DeviceIndex, value: f64) -> Result<()> {
        self.set(
            "DSCS_setPIControllerIValueNFO",
            ParamId::PiIValueNfo,
            None,
            PvValue::Float(value),
        )
    }

    fn pi_p_value_nfo(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getPIControllerPValueNFO", ParamId::PiPValueNfo)
    }

    fn set_pi_p_value_nfo(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerPValueNFO",
            ParamId::PiPValueNfo,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_i_value_sam(&self, _dev: DeviceIndex) -> Result<f64> {
        self.get_f64("DSCS_getPIControllerIValueSAM", ParamId::PiIValueSam)
    }

    fn set_pi_i_value_sam(&self, _dev: DeviceIndex, value: f64) -> Result<()> {
        self.set(
            "DSCS_setPIControllerIValueSAM",
            ParamId::PiIValueSam,
            None,
            PvValue::Float(value),
        )
    }

    fn pi_p_value_sam(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getPIControllerPValueSAM", ParamId::PiPValueSam)
    }

    fn set_pi_p_value_sam(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerPValueSAM",
            ParamId::PiPValueSam,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_limit_nfo(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getPIControllerLimitNFO", ParamId::PiLimitNfo)
    }

    fn set_pi_limit_nfo(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerLimitNFO",
            ParamId::PiLimitNfo,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_average_nfo(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getPIControllerAverageNFO", ParamId::PiAverageNfo)
    }

    fn set_pi_average_nfo(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerAverageNFO",
            ParamId::PiAverageNfo,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_limit_sam(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getPIControllerLimitSAM", ParamId::PiLimitSam)
    }

    fn set_pi_limit_sam(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerLimitSAM",
            ParamId::PiLimitSam,
            None,
            PvValue::Int(value),
        )
    }

    fn pi_target_position(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get(
            "DSCS_getPIControllerTargetPosition",
            ParamId::PiTargetPosition(axis),
        )
    }

    fn set_pi_target_position(&self, _dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.set(
            "DSCS_setPIControllerTargetPosition",
            ParamId::PiTargetPosition(axis),
            Some(axis.to_raw()),
            PvValue::Int(value),
        )
    }

    fn pi_target_mode(&self, _dev: DeviceIndex) -> Result<TargetMode> {
        self.get("DSCS_getPIControllerTargetMode", ParamId::PiTargetMode)
            .map(TargetMode::from_raw)
    }

    fn set_pi_target_mode(&self, _dev: DeviceIndex, mode: TargetMode) -> Result<()> {
        self.set(
            "DSCS_setPIControllerTargetMode",
            ParamId::PiTargetMode,
            None,
            PvValue::Int(mode.to_raw()),
        )
    }

    fn reset_pi_controller(&self, _dev: DeviceIndex) -> Result<()> {
        self.command("DSCS_resetPIController", None, Vec::new())
    }

    fn pi_nfo_output(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getPIControllerNFOOutput", ParamId::PiNfoOutput(axis))
    }

    fn pi_sam_output(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get("DSCS_getPIControllerSAMOutput", ParamId::PiSamOutput(axis))
    }

    fn nfo_adc_limits(&self, _dev: DeviceIndex) -> Result<(i32, i32)> {
        let min = self.get("DSCS_getNFOADCLimits", ParamId::NfoAdcLimitMin)?;
        let max = self.get("DSCS_getNFOADCLimits", ParamId::NfoAdcLimitMax)?;
        Ok((min, max))
    }

    fn set_nfo_adc_limits(&self, _dev: DeviceIndex, min: i32, max: i32) -> Result<()> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, "DSCS_setNFOADCLimits")?;
        state.calls.push(SdkCall {
            function: "DSCS_setNFOADCLimits",
            axis: None,
            values: vec![f64::from(min), f64::from(max)],
        });
        state
            .registers
            .insert(ParamId::NfoAdcLimitMin, PvValue::Int(min));
        state
            .registers
            .insert(ParamId::NfoAdcLimitMax, PvValue::Int(max));
        Ok(())
    }

    fn nfo_slew_rate_limit(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getNFOSlewRateLimit", ParamId::NfoSlewRateLimit)
    }

    fn set_nfo_slew_rate_limit(&self, _dev: DeviceIndex, limit: i32) -> Result<()> {
        self.set(
            "DSCS_setNFOSlewRateLimit",
            ParamId::NfoSlewRateLimit,
            None,
            PvValue::Int(limit),
        )
    }

    fn sam_adc_limits(&self, _dev: DeviceIndex) -> Result<(i32, i32)> {
        let min = self.get("DSCS_getSAMADCLimits", ParamId::SamAdcLimitMin)?;
        let max = self.get("DSCS_getSAMADCLimits", ParamId::SamAdcLimitMax)?;
        Ok((min, max))
    }

    fn set_sam_adc_limits(&self, _dev: DeviceIndex, min: i32, max: i32) -> Result<()> {
        let mut state = self.state.lock();
        Self::fail_check(&mut state, "DSCS_setSAMADCLimits")?;
        state.calls.push(SdkCall {
            function: "DSCS_setSAMADCLimits",
            axis: None,
            values: vec![f64::from(min), f64::from(max)],
        });
        state
            .registers
            .insert(ParamId::SamAdcLimitMin, PvValue::Int(min));
        state
            .registers
            .insert(ParamId::SamAdcLimitMax, PvValue::Int(max));
        Ok(())
    }

    fn sam_slew_rate_limit(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getSAMSlewRateLimit", ParamId::SamSlewRateLimit)
    }

    fn set_sam_slew_rate_limit(&self, _dev: DeviceIndex, limit: i32) -> Result<()> {
        self.set(
            "DSCS_setSAMSlewRateLimit",
            ParamId::SamSlewRateLimit,
            None,
            PvValue::Int(limit),
        )
    }

    fn limiter_state(&self, _dev: DeviceIndex) -> Result<LimiterState> {
        self.get("DSCS_getLimiterState", ParamId::LimiterState)
            .map(LimiterState::from_bits_retain)
    }

    fn set_input_transformation_matrix(
        &self,
        _dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()> {
        self.command(
            "DSCS_setInputTransformationMatrix",
            None,
            vec![
                f64::from(row),
                f64::from(column),
                f64::from(coeff1),
                f64::from(coeff2),
                f64::from(coeff3),
            ],
        )
    }

    fn input_transformation_result(&self, _dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get(
            "DSCS_getInputTransformationResult",
            ParamId::InputResult(axis),
        )
    }

    fn input_transformation_average(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getInputTransformationAverage", ParamId::InputAverage)
    }

    fn input_transformation_state(&self, _dev: DeviceIndex) -> Result<InputTransformationState> {
        self.get("DSCS_getInputTransformationState", ParamId::InputState)
            .map(InputTransformationState::from_raw)
    }

    fn set_output_transformation_matrix(
        &self,
        _dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()> {
        self.command(
            "DSCS_setOutputTransformationMatrix",
            None,
            vec![
                f64::from(row),
                f64::from(column),
                f64::from(coeff1),
                f64::from(coeff2),
                f64::from(coeff3),
            ],
        )
    }

    fn output_transformation_result(&self, _dev: DeviceIndex, axis: Axis) -> Result<(i32, i32)> {
        let nfo = self.get(
            "DSCS_getOutputTransformationResult",
            ParamId::OutputNfoResult(axis),
        )?;
        let sam = self.get(
            "DSCS_getOutputTransformationResult",
            ParamId::OutputSamResult(axis),
        )?;
        Ok((nfo, sam))
    }

    fn trajectory_line_start_x(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineStartX", ParamId::TrajStartX)
    }

    fn set_trajectory_line_start_x(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineStartX",
            ParamId::TrajStartX,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_line_end_x(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineEndX", ParamId::TrajEndX)
    }

    fn set_trajectory_line_end_x(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineEndX",
            ParamId::TrajEndX,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_line_speed_x(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineSpeedX", ParamId::TrajSpeedX)
    }

    fn set_trajectory_line_speed_x(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineSpeedX",
            ParamId::TrajSpeedX,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_line_start_y(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineStartY", ParamId::TrajStartY)
    }

    fn set_trajectory_line_start_y(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineStartY",
            ParamId::TrajStartY,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_line_dist_y(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineDistY", ParamId::TrajDistY)
    }

    fn set_trajectory_line_dist_y(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineDistY",
            ParamId::TrajDistY,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_line_count_y(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryLineCountY", ParamId::TrajCountY)
    }

    fn set_trajectory_line_count_y(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryLineCountY",
            ParamId::TrajCountY,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_turn_time(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryTurnTime", ParamId::TrajTurnTime)
    }

    fn set_trajectory_turn_time(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryTurnTime",
            ParamId::TrajTurnTime,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_pos_time(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryPosTime", ParamId::TrajPosTime)
    }

    fn set_trajectory_pos_time(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryPosTime",
            ParamId::TrajPosTime,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_anti_hyst(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectoryAntiHyst", ParamId::TrajAntiHyst)
    }

    fn set_trajectory_anti_hyst(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectoryAntiHyst",
            ParamId::TrajAntiHyst,
            None,
            PvValue::Int(value),
        )
    }

    fn trajectory_settings(&self, _dev: DeviceIndex) -> Result<i32> {
        self.get("DSCS_getTrajectorySettings", ParamId::TrajSettings)
    }

    fn set_trajectory_settings(&self, _dev: DeviceIndex, value: i32) -> Result<()> {
        self.set(
            "DSCS_setTrajectorySettings",
            ParamId::TrajSettings,
            None,
            PvValue::Int(value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_records_call_and_register() {
        let sdk = MockDscsSdk::new();
        let dev = DeviceIndex(0);
        sdk.set_osa_ps(dev, Axis::Y, 1200).unwrap();

        assert_eq!(sdk.osa_ps(dev, Axis::Y).unwrap(), 1200);
        // The untouched sibling axis stays at its default
        assert_eq!(sdk.osa_ps(dev, Axis::X).unwrap(), 0);

        let calls = sdk.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function, "DSCS_setOSA_PS");
        assert_eq!(calls[0].axis, Some(1));
        assert_eq!(calls[0].values, vec![1200.0]);
    }

    #[test]
    fn test_fail_next_call_fires_once() {
        let sdk = MockDscsSdk::new();
        let dev = DeviceIndex(0);
        sdk.fail_next_call("DSCS_getNFO", VendorStatus::Timeout);

        let err = sdk.nfo(dev, Axis::X).unwrap_err();
        assert!(err.is_timeout());

        // Subsequent calls succeed again
        assert_eq!(sdk.nfo(dev, Axis::X).unwrap(), 0);
    }

    #[test]
    fn test_adc_limits_share_registers() {
        let sdk = MockDscsSdk::new();
        let dev = DeviceIndex(0);
        sdk.set_nfo_adc_limits(dev, -5000, 5000).unwrap();
        assert_eq!(sdk.nfo_adc_limits(dev).unwrap(), (-5000, 5000));
        assert_eq!(
            sdk.register(ParamId::NfoAdcLimitMin),
            Some(PvValue::Int(-5000))
        );
    }

    #[test]
    fn test_connect_rejects_bad_index() {
        let sdk = MockDscsSdk::new();
        let err = sdk.connect(DeviceIndex(5)).unwrap_err();
        assert!(matches!(
            err,
            DscsError::Vendor {
                status: VendorStatus::NoDevice,
                ..
            }
        ));
    }

    #[test]
    fn test_i_values_are_float_registers() {
        let sdk = MockDscsSdk::new();
        let dev = DeviceIndex(0);
        sdk.set_pi_i_value_nfo(dev, 0.125).unwrap();
        assert_eq!(sdk.pi_i_value_nfo(dev).unwrap(), 0.125);
    }
}
