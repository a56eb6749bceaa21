//! Vendor library implementation of [`DscsSdk`].
//!
//! The vendor documents the library as not thread safe, so every call goes
//! through one process-wide lock held for the duration of the FFI call.
//! Without the `hardware` feature the linked stubs panic when called; use
//! [`MockDscsSdk`](super::MockDscsSdk) on machines without the SDK.

use super::DscsSdk;
use crate::error::{DscsError, Result};
use crate::types::{
    Axis, ConnectionType, DeviceDescriptor, DeviceIndex, InputTransformationState, InterfaceType,
    LimiterState, TargetMode, XzChannel,
};
use parking_lot::Mutex;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

/// [`DscsSdk`] backed by `libdscs` through the `dscs-sys` bindings.
pub struct LibDscsSdk {
    ffi_lock: Mutex<()>,
}

impl LibDscsSdk {
    /// Creates the library wrapper. No vendor call happens until discovery.
    pub fn new() -> Self {
        Self {
            ffi_lock: Mutex::new(()),
        }
    }

    /// Runs a status-returning call under the FFI lock.
    fn call(&self, function: &'static str, f: impl FnOnce() -> c_int) -> Result<()> {
        let _guard = self.ffi_lock.lock();
        DscsError::check(function, f())
    }

    /// Runs a call with one integer out-parameter under the FFI lock.
    fn get_int(&self, function: &'static str, f: impl FnOnce(*mut c_int) -> c_int) -> Result<i32> {
        let _guard = self.ffi_lock.lock();
        let mut value: c_int = 0;
        DscsError::check(function, f(&mut value))?;
        Ok(value)
    }

    /// Runs a call with one double out-parameter under the FFI lock.
    fn get_f64(&self, function: &'static str, f: impl FnOnce(*mut f64) -> c_int) -> Result<f64> {
        let _guard = self.ffi_lock.lock();
        let mut value: f64 = 0.0;
        DscsError::check(function, f(&mut value))?;
        Ok(value)
    }

    /// Runs a call with two integer out-parameters under the FFI lock.
    fn get_pair(
        &self,
        function: &'static str,
        f: impl FnOnce(*mut c_int, *mut c_int) -> c_int,
    ) -> Result<(i32, i32)> {
        let _guard = self.ffi_lock.lock();
        let mut a: c_int = 0;
        let mut b: c_int = 0;
        DscsError::check(function, f(&mut a, &mut b))?;
        Ok((a, b))
    }
}

impl Default for LibDscsSdk {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies a NUL-terminated vendor string buffer into an owned `String`.
fn c_buf_to_string(buf: &[c_char]) -> String {
    // SAFETY: the vendor library NUL-terminates its 16 byte string buffers
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

// SAFETY notes for the method bodies: every closure passes pointers to
// locals that outlive the vendor call, and the FFI lock serializes the
// non-thread-safe library.
impl DscsSdk for LibDscsSdk {
    fn version(&self) -> String {
        let _guard = self.ffi_lock.lock();
        // SAFETY: the library returns a pointer to a static version string
        let ptr = unsafe { dscs_sys::DSCS_getVersion() };
        if ptr.is_null() {
            return "unknown".to_string();
        }
        // SAFETY: non-null pointer from the library, NUL-terminated
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    fn discover(&self, ifaces: InterfaceType) -> Result<u32> {
        let _guard = self.ffi_lock.lock();
        let mut dev_count: u32 = 0;
        let code = unsafe { dscs_sys::DSCS_discover(ifaces.to_raw(), &mut dev_count) };
        DscsError::check("DSCS_discover", code)?;
        Ok(dev_count)
    }

    fn device_info(&self, dev: DeviceIndex) -> Result<DeviceDescriptor> {
        let _guard = self.ffi_lock.lock();
        let mut id: c_int = 0;
        let mut serial = [0 as c_char; 16];
        let mut address = [0 as c_char; 16];
        // SAFETY: string buffers are 16 bytes, the minimum the API requires
        let code = unsafe {
            dscs_sys::DSCS_getDeviceInfo(dev.0, &mut id, serial.as_mut_ptr(), address.as_mut_ptr())
        };
        DscsError::check("DSCS_getDeviceInfo", code)?;
        Ok(DeviceDescriptor {
            id,
            serial_no: c_buf_to_string(&serial),
            address: c_buf_to_string(&address),
        })
    }

    fn connection_type(&self, dev: DeviceIndex) -> Result<ConnectionType> {
        let _guard = self.ffi_lock.lock();
        let raw = unsafe { dscs_sys::DSCS_getConnectionType(dev.0) };
        Ok(ConnectionType::from_raw(raw))
    }

    fn connect(&self, dev: DeviceIndex) -> Result<()> {
        self.call("DSCS_connect", || unsafe { dscs_sys::DSCS_connect(dev.0) })
    }

    fn disconnect(&self, dev: DeviceIndex) -> Result<()> {
        self.call("DSCS_disconnect", || unsafe {
            dscs_sys::DSCS_disconnect(dev.0)
        })
    }

    fn set_data_output_enabled(&self, dev: DeviceIndex, enable: bool) -> Result<()> {
        self.call("DSCS_setDataOutputEnabled", || unsafe {
            dscs_sys::DSCS_setDataOutputEnabled(dev.0, enable as dscs_sys::bln32)
        })
    }

    fn osa_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getOSA_PS", |v| unsafe {
            dscs_sys::DSCS_getOSA_PS(dev.0, axis.to_raw(), v)
        })
    }

    fn set_osa_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.call("DSCS_setOSA_PS", || unsafe {
            dscs_sys::DSCS_setOSA_PS(dev.0, axis.to_raw(), value)
        })
    }

    fn bs_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getBS_PS", |v| unsafe {
            dscs_sys::DSCS_getBS_PS(dev.0, axis.to_raw(), v)
        })
    }

    fn set_bs_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.call("DSCS_setBS_PS", || unsafe {
            dscs_sys::DSCS_setBS_PS(dev.0, axis.to_raw(), value)
        })
    }

    fn aux_dac(&self, dev: DeviceIndex, aux: u8) -> Result<i32> {
        self.get_int("DSCS_getAUX_DAC", |v| unsafe {
            dscs_sys::DSCS_getAUX_DAC(dev.0, aux as dscs_sys::DSCS_AUX_ADC, v)
        })
    }

    fn set_aux_dac(&self, dev: DeviceIndex, aux: u8, value: i32) -> Result<()> {
        self.call("DSCS_setAUX_DAC", || unsafe {
            dscs_sys::DSCS_setAUX_DAC(dev.0, aux as dscs_sys::DSCS_AUX_ADC, value)
        })
    }

    fn nfo_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getNFO_PS", |v| unsafe {
            dscs_sys::DSCS_getNFO_PS(dev.0, axis.to_raw(), v)
        })
    }

    fn set_nfo_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.call("DSCS_setNFO_PS", || unsafe {
            dscs_sys::DSCS_setNFO_PS(dev.0, axis.to_raw(), value)
        })
    }

    fn sam_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSAM_PS", |v| unsafe {
            dscs_sys::DSCS_getSAM_PS(dev.0, axis.to_raw(), v)
        })
    }

    fn set_sam_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.call("DSCS_setSAM_PS", || unsafe {
            dscs_sys::DSCS_setSAM_PS(dev.0, axis.to_raw(), value)
        })
    }

    fn nfo_sg(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getNFO_SG", |v| unsafe {
            dscs_sys::DSCS_getNFO_SG(dev.0, axis.to_raw(), v)
        })
    }

    fn sam_cp_d(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSAM_CP_D", |v| unsafe {
            dscs_sys::DSCS_getSAM_CP_D(dev.0, axis.to_raw(), v)
        })
    }

    fn xz_zx(&self, dev: DeviceIndex, channel: XzChannel) -> Result<i32> {
        self.get_int("DSCS_getXZ_ZX", |v| unsafe {
            dscs_sys::DSCS_getXZ_ZX(dev.0, channel.to_raw(), v)
        })
    }

    fn aux_adc(&self, dev: DeviceIndex, aux: u8) -> Result<i32> {
        self.get_int("DSCS_getAUX_ADC", |v| unsafe {
            dscs_sys::DSCS_getAUX_ADC(dev.0, aux as dscs_sys::DSCS_AUX_ADC, v)
        })
    }

    fn nfo(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getNFO", |v| unsafe {
            dscs_sys::DSCS_getNFO(dev.0, axis.to_raw(), v)
        })
    }

    fn sam(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSAM", |v| unsafe {
            dscs_sys::DSCS_getSAM(dev.0, axis.to_raw(), v)
        })
    }

    fn setpoint_modulation_frequency(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSetpointModulationFrequency", |v| unsafe {
            dscs_sys::DSCS_getSetpointModulationFrequency(dev.0, axis.to_raw(), v)
        })
    }

    fn set_setpoint_modulation_frequency(
        &self,
        dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.call("DSCS_setSetpointModulationFrequency", || unsafe {
            dscs_sys::DSCS_setSetpointModulationFrequency(dev.0, axis.to_raw(), value)
        })
    }

    fn setpoint_modulation_phase(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSetpointModulationPhase", |v| unsafe {
            dscs_sys::DSCS_getSetpointModulationPhase(dev.0, axis.to_raw(), v)
        })
    }

    fn set_setpoint_modulation_phase(
        &self,
        dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.call("DSCS_setSetpointModulationPhase", || unsafe {
            dscs_sys::DSCS_setSetpointModulationPhase(dev.0, axis.to_raw(), value)
        })
    }

    fn setpoint_modulation_amplitude(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getSetpointModulationAmplitude", |v| unsafe {
            dscs_sys::DSCS_getSetpointModulationAmplitude(dev.0, axis.to_raw(), v)
        })
    }

    fn set_setpoint_modulation_amplitude(
        &self,
        dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.call("DSCS_setSetpointModulationAmplitude", || unsafe {
            dscs_sys::DSCS_setSetpointModulationAmplitude(dev.0, axis.to_raw(), value)
        })
    }

    fn reset_setpoint_modulation_phase(&self, dev: DeviceIndex) -> Result<()> {
        self.call("DSCS_resetSetpointModulationPhase", || unsafe {
            dscs_sys::DSCS_resetSetpointModulationPhase(dev.0)
        })
    }

    fn external_adc_shift(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getExternalADCShift", |v| unsafe {
            dscs_sys::DSCS_getExternalADCShift(dev.0, v)
        })
    }

    fn set_external_adc_shift(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setExternalADCShift", || unsafe {
            dscs_sys::DSCS_setExternalADCShift(dev.0, value)
        })
    }

    fn pi_enabled(&self, dev: DeviceIndex, axis: Axis) -> Result<bool> {
        self.get_int("DSCS_getPIControllerEnabled", |v| unsafe {
            dscs_sys::DSCS_getPIControllerEnabled(dev.0, axis.to_raw(), v)
        })
        .map(|v| v != 0)
    }

    fn set_pi_enabled(&self, dev: DeviceIndex, axis: Axis, enable: bool) -> Result<()> {
        self.call("DSCS_setPIControllerEnabled", || unsafe {
            dscs_sys::DSCS_setPIControllerEnabled(dev.0, axis.to_raw(), enable as dscs_sys::bln32)
        })
    }

    fn pi_inverted(&self, dev: DeviceIndex, axis: Axis) -> Result<bool> {
        self.get_int("DSCS_getPIControllerInverted", |v| unsafe {
            dscs_sys::DSCS_getPIControllerInverted(dev.0, axis.to_raw(), v)
        })
        .map(|v| v != 0)
    }

    fn set_pi_inverted(&self, dev: DeviceIndex, axis: Axis, inverted: bool) -> Result<()> {
        self.call("DSCS_setPIControllerInverted", || unsafe {
            dscs_sys::DSCS_setPIControllerInverted(
                dev.0,
                axis.to_raw(),
                inverted as dscs_sys::bln32,
            )
        })
    }

    fn pi_i_value_nfo(&self, dev: DeviceIndex) -> Result<f64> {
        self.get_f64("DSCS_getPIControllerIValueNFO", |v| unsafe {
            dscs_sys::DSCS_getPIControllerIValueNFO(dev.0, v)
        })
    }

    fn set_pi_i_value_nfo(&self, dev: DeviceIndex, value: f64) -> Result<()> {
        self.call("DSCS_setPIControllerIValueNFO", || unsafe {
            dscs_sys::DSCS_setPIControllerIValueNFO(dev.0, value)
        })
    }

    fn pi_p_value_nfo(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getPIControllerPValueNFO", |v| unsafe {
            dscs_sys::DSCS_getPIControllerPValueNFO(dev.0, v)
        })
    }

    fn set_pi_p_value_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerPValueNFO", || unsafe {
            dscs_sys::DSCS_setPIControllerPValueNFO(dev.0, value)
        })
    }

    fn pi_i_value_sam(&self, dev: DeviceIndex) -> Result<f64> {
        self.get_f64("DSCS_getPIControllerIValueSAM", |v| unsafe {
            dscs_sys::DSCS_getPIControllerIValueSAM(dev.0, v)
        })
    }

    fn set_pi_i_value_sam(&self, dev: DeviceIndex, value: f64) -> Result<()> {
        self.call("DSCS_setPIControllerIValueSAM", || unsafe {
            dscs_sys::DSCS_setPIControllerIValueSAM(dev.0, value)
        })
    }

    fn pi_p_value_sam(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getPIControllerPValueSAM", |v| unsafe {
            dscs_sys::DSCS_getPIControllerPValueSAM(dev.0, v)
        })
    }

    fn set_pi_p_value_sam(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerPValueSAM", || unsafe {
            dscs_sys::DSCS_setPIControllerPValueSAM(dev.0, value)
        })
    }

    fn pi_limit_nfo(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getPIControllerLimitNFO", |v| unsafe {
            dscs_sys::DSCS_getPIControllerLimitNFO(dev.0, v)
        })
    }

    fn set_pi_limit_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerLimitNFO", || unsafe {
            dscs_sys::DSCS_setPIControllerLimitNFO(dev.0, value)
        })
    }

    fn pi_average_nfo(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getPIControllerAverageNFO", |v| unsafe {
            dscs_sys::DSCS_getPIControllerAverageNFO(dev.0, v)
        })
    }

    fn set_pi_average_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerAverageNFO", || unsafe {
            dscs_sys::DSCS_setPIControllerAverageNFO(dev.0, value)
        })
    }

    fn pi_limit_sam(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getPIControllerLimitSAM", |v| unsafe {
            dscs_sys::DSCS_getPIControllerLimitSAM(dev.0, v)
        })
    }

    fn set_pi_limit_sam(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerLimitSAM", || unsafe {
            dscs_sys::DSCS_setPIControllerLimitSAM(dev.0, value)
        })
    }

    fn pi_target_position(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getPIControllerTargetPosition", |v| unsafe {
            dscs_sys::DSCS_getPIControllerTargetPosition(dev.0, axis.to_raw(), v)
        })
    }

    fn set_pi_target_position(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()> {
        self.call("DSCS_setPIControllerTargetPosition", || unsafe {
            dscs_sys::DSCS_setPIControllerTargetPosition(dev.0, axis.to_raw(), value)
        })
    }

    fn pi_target_mode(&self, dev: DeviceIndex) -> Result<TargetMode> {
        self.get_int("DSCS_getPIControllerTargetMode", |v| unsafe {
            dscs_sys::DSCS_getPIControllerTargetMode(dev.0, v)
        })
        .map(TargetMode::from_raw)
    }

    fn set_pi_target_mode(&self, dev: DeviceIndex, mode: TargetMode) -> Result<()> {
        self.call("DSCS_setPIControllerTargetMode", || unsafe {
            dscs_sys::DSCS_setPIControllerTargetMode(dev.0, mode.to_raw())
        })
    }

    fn reset_pi_controller(&self, dev: DeviceIndex) -> Result<()> {
        self.call("DSCS_resetPIController", || unsafe {
            dscs_sys::DSCS_resetPIController(dev.0)
        })
    }

    fn pi_nfo_output(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getPIControllerNFOOutput", |v| unsafe {
            dscs_sys::DSCS_getPIControllerNFOOutput(dev.0, axis.to_raw(), v)
        })
    }

    fn pi_sam_output(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getPIControllerSAMOutput", |v| unsafe {
            dscs_sys::DSCS_getPIControllerSAMOutput(dev.0, axis.to_raw(), v)
        })
    }

    fn nfo_adc_limits(&self, dev: DeviceIndex) -> Result<(i32, i32)> {
        self.get_pair("DSCS_getNFOADCLimits", |min, max| unsafe {
            dscs_sys::DSCS_getNFOADCLimits(dev.0, min, max)
        })
    }

    fn set_nfo_adc_limits(&self, dev: DeviceIndex, min: i32, max: i32) -> Result<()> {
        self.call("DSCS_setNFOADCLimits", || unsafe {
            dscs_sys::DSCS_setNFOADCLimits(dev.0, min, max)
        })
    }

    fn nfo_slew_rate_limit(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getNFOSlewRateLimit", |v| unsafe {
            dscs_sys::DSCS_getNFOSlewRateLimit(dev.0, v)
        })
    }

    fn set_nfo_slew_rate_limit(&self, dev: DeviceIndex, limit: i32) -> Result<()> {
        self.call("DSCS_setNFOSlewRateLimit", || unsafe {
            dscs_sys::DSCS_setNFOSlewRateLimit(dev.0, limit)
        })
    }

    fn sam_adc_limits(&self, dev: DeviceIndex) -> Result<(i32, i32)> {
        self.get_pair("DSCS_getSAMADCLimits", |min, max| unsafe {
            dscs_sys::DSCS_getSAMADCLimits(dev.0, min, max)
        })
    }

    fn set_sam_adc_limits(&self, dev: DeviceIndex, min: i32, max: i32) -> Result<()> {
        self.call("DSCS_setSAMADCLimits", || unsafe {
            dscs_sys::DSCS_setSAMADCLimits(dev.0, min, max)
        })
    }

    fn sam_slew_rate_limit(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getSAMSlewRateLimit", |v| unsafe {
            dscs_sys::DSCS_getSAMSlewRateLimit(dev.0, v)
        })
    }

    fn set_sam_slew_rate_limit(&self, dev: DeviceIndex, limit: i32) -> Result<()> {
        self.call("DSCS_setSAMSlewRateLimit", || unsafe {
            dscs_sys::DSCS_setSAMSlewRateLimit(dev.0, limit)
        })
    }

    fn limiter_state(&self, dev: DeviceIndex) -> Result<LimiterState> {
        self.get_int("DSCS_getLimiterState", |v| unsafe {
            dscs_sys::DSCS_getLimiterState(dev.0, v)
        })
        .map(LimiterState::from_bits_retain)
    }

    fn set_input_transformation_matrix(
        &self,
        dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()> {
        self.call("DSCS_setInputTransformationMatrix", || unsafe {
            dscs_sys::DSCS_setInputTransformationMatrix(
                dev.0,
                row as c_int,
                column as c_int,
                coeff1,
                coeff2,
                coeff3,
            )
        })
    }

    fn input_transformation_result(&self, dev: DeviceIndex, axis: Axis) -> Result<i32> {
        self.get_int("DSCS_getInputTransformationResult", |v| unsafe {
            dscs_sys::DSCS_getInputTransformationResult(dev.0, axis.to_raw(), v)
        })
    }

    fn input_transformation_average(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getInputTransformationAverage", |v| unsafe {
            dscs_sys::DSCS_getInputTransformationAverage(dev.0, v)
        })
    }

    fn input_transformation_state(&self, dev: DeviceIndex) -> Result<InputTransformationState> {
        self.get_int("DSCS_getInputTransformationState", |v| unsafe {
            dscs_sys::DSCS_getInputTransformationState(dev.0, v)
        })
        .map(InputTransformationState::from_raw)
    }

    fn set_output_transformation_matrix(
        &self,
        dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()> {
        self.call("DSCS_setOutputTransformationMatrix", || unsafe {
            dscs_sys::DSCS_setOutputTransformationMatrix(
                dev.0,
                row as c_int,
                column as c_int,
                coeff1,
                coeff2,
                coeff3,
            )
        })
    }

    fn output_transformation_result(&self, dev: DeviceIndex, axis: Axis) -> Result<(i32, i32)> {
        self.get_pair("DSCS_getOutputTransformationResult", |nfo, sam| unsafe {
            dscs_sys::DSCS_getOutputTransformationResult(dev.0, axis.to_raw(), nfo, sam)
        })
    }

    fn trajectory_line_start_x(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineStartX", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineStartX(dev.0, v)
        })
    }

    fn set_trajectory_line_start_x(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineStartX", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineStartX(dev.0, value)
        })
    }

    fn trajectory_line_end_x(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineEndX", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineEndX(dev.0, v)
        })
    }

    fn set_trajectory_line_end_x(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineEndX", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineEndX(dev.0, value)
        })
    }

    fn trajectory_line_speed_x(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineSpeedX", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineSpeedX(dev.0, v)
        })
    }

    fn set_trajectory_line_speed_x(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineSpeedX", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineSpeedX(dev.0, value)
        })
    }

    fn trajectory_line_start_y(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineStartY", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineStartY(dev.0, v)
        })
    }

    fn set_trajectory_line_start_y(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineStartY", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineStartY(dev.0, value)
        })
    }

    fn trajectory_line_dist_y(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineDistY", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineDistY(dev.0, v)
        })
    }

    fn set_trajectory_line_dist_y(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineDistY", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineDistY(dev.0, value)
        })
    }

    fn trajectory_line_count_y(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryLineCountY", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryLineCountY(dev.0, v)
        })
    }

    fn set_trajectory_line_count_y(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryLineCountY", || unsafe {
            dscs_sys::DSCS_setTrajectoryLineCountY(dev.0, value)
        })
    }

    fn trajectory_turn_time(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryTurnTime", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryTurnTime(dev.0, v)
        })
    }

    fn set_trajectory_turn_time(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryTurnTime", || unsafe {
            dscs_sys::DSCS_setTrajectoryTurnTime(dev.0, value)
        })
    }

    fn trajectory_pos_time(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryPosTime", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryPosTime(dev.0, v)
        })
    }

    fn set_trajectory_pos_time(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryPosTime", || unsafe {
            dscs_sys::DSCS_setTrajectoryPosTime(dev.0, value)
        })
    }

    fn trajectory_anti_hyst(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectoryAntiHyst", |v| unsafe {
            dscs_sys::DSCS_getTrajectoryAntiHyst(dev.0, v)
        })
    }

    fn set_trajectory_anti_hyst(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectoryAntiHyst", || unsafe {
            dscs_sys::DSCS_setTrajectoryAntiHyst(dev.0, value)
        })
    }

    fn trajectory_settings(&self, dev: DeviceIndex) -> Result<i32> {
        self.get_int("DSCS_getTrajectorySettings", |v| unsafe {
            dscs_sys::DSCS_getTrajectorySettings(dev.0, v)
        })
    }

    fn set_trajectory_settings(&self, dev: DeviceIndex, value: i32) -> Result<()> {
        self.call("DSCS_setTrajectorySettings", || unsafe {
            dscs_sys::DSCS_setTrajectorySettings(dev.0, value)
        })
    }
}
