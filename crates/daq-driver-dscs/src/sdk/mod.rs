//! Abstraction over the vendor control library.
//!
//! [`DscsSdk`] mirrors the vendor API one method per call, with typed
//! selectors and `Result` returns instead of status codes. Two
//! implementations exist: [`LibDscsSdk`] calls through the FFI bindings and
//! [`MockDscsSdk`] runs against an in-memory register map for tests and
//! development without hardware.

mod ffi;
mod mock;

pub use ffi::LibDscsSdk;
pub use mock::{MockDscsSdk, SdkCall};

use crate::error::Result;
use crate::types::{
    Axis, ConnectionType, DeviceDescriptor, DeviceIndex, InputTransformationState, InterfaceType,
    LimiterState, TargetMode, XzChannel,
};

/// Vendor library access, one method per call.
///
/// All methods block for the duration of the underlying call. Implementations
/// must be safe to share between the poller thread and host dispatch threads;
/// the controller additionally serializes call groups with its own device
/// lock.
pub trait DscsSdk: Send + Sync {
    /// Version string of the control library.
    fn version(&self) -> String;

    /// Searches the given interfaces for devices and returns how many were
    /// found. Must not be called while any device is connected.
    fn discover(&self, ifaces: InterfaceType) -> Result<u32>;

    /// Descriptor of a discovered device.
    fn device_info(&self, dev: DeviceIndex) -> Result<DeviceDescriptor>;

    /// Kind of connection currently held to the device.
    fn connection_type(&self, dev: DeviceIndex) -> Result<ConnectionType>;

    /// Connects the control session.
    fn connect(&self, dev: DeviceIndex) -> Result<()>;

    /// Closes the control session.
    fn disconnect(&self, dev: DeviceIndex) -> Result<()>;

    /// Enables or disables streaming on the secondary data connection.
    fn set_data_output_enabled(&self, dev: DeviceIndex, enable: bool) -> Result<()>;

    /// OSA power supply output (x, y).
    fn osa_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the OSA power supply output (x, y).
    fn set_osa_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()>;

    /// BS power supply output (x, y).
    fn bs_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the BS power supply output (x, y).
    fn set_bs_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()>;

    /// Auxiliary DAC output (0-3).
    fn aux_dac(&self, dev: DeviceIndex, aux: u8) -> Result<i32>;
    /// Sets an auxiliary DAC output (0-3).
    fn set_aux_dac(&self, dev: DeviceIndex, aux: u8, value: i32) -> Result<()>;

    /// NFO power supply output.
    fn nfo_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the NFO power supply output.
    fn set_nfo_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()>;

    /// SAM power supply output.
    fn sam_ps(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the SAM power supply output.
    fn set_sam_ps(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()>;

    /// NFO strain gauge input.
    fn nfo_sg(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// SAM capacitive displacement input.
    fn sam_cp_d(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// XZ_ZX interferometer input.
    fn xz_zx(&self, dev: DeviceIndex, channel: XzChannel) -> Result<i32>;
    /// Auxiliary ADC input (0-2).
    fn aux_adc(&self, dev: DeviceIndex, aux: u8) -> Result<i32>;
    /// NFO position input.
    fn nfo(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// SAM position input.
    fn sam(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;

    /// Setpoint modulation frequency.
    fn setpoint_modulation_frequency(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the setpoint modulation frequency.
    fn set_setpoint_modulation_frequency(
        &self,
        dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()>;

    /// Setpoint modulation phase.
    fn setpoint_modulation_phase(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the setpoint modulation phase.
    fn set_setpoint_modulation_phase(&self, dev: DeviceIndex, axis: Axis, value: i32)
        -> Result<()>;

    /// Setpoint modulation amplitude.
    fn setpoint_modulation_amplitude(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the setpoint modulation amplitude.
    fn set_setpoint_modulation_amplitude(
        &self,
        dev: DeviceIndex,
        axis: Axis,
        value: i32,
    ) -> Result<()>;

    /// Resets the setpoint modulation phase of all three axes at once.
    fn reset_setpoint_modulation_phase(&self, dev: DeviceIndex) -> Result<()>;

    /// Shift applied to the external ADC samples.
    fn external_adc_shift(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the shift applied to the external ADC samples.
    fn set_external_adc_shift(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// Whether the PI controller is enabled for an axis.
    fn pi_enabled(&self, dev: DeviceIndex, axis: Axis) -> Result<bool>;
    /// Enables or disables the PI controller for an axis.
    fn set_pi_enabled(&self, dev: DeviceIndex, axis: Axis, enable: bool) -> Result<()>;

    /// Whether the PI controller sign is inverted for an axis.
    fn pi_inverted(&self, dev: DeviceIndex, axis: Axis) -> Result<bool>;
    /// Sets the PI controller sign inversion for an axis.
    fn set_pi_inverted(&self, dev: DeviceIndex, axis: Axis, inverted: bool) -> Result<()>;

    /// PI controller I value for the NFO signal.
    fn pi_i_value_nfo(&self, dev: DeviceIndex) -> Result<f64>;
    /// Sets the PI controller I value for the NFO signal.
    fn set_pi_i_value_nfo(&self, dev: DeviceIndex, value: f64) -> Result<()>;

    /// PI controller P value for the NFO signal.
    fn pi_p_value_nfo(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the PI controller P value for the NFO signal.
    fn set_pi_p_value_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// PI controller I value for the SAM signal.
    fn pi_i_value_sam(&self, dev: DeviceIndex) -> Result<f64>;
    /// Sets the PI controller I value for the SAM signal.
    fn set_pi_i_value_sam(&self, dev: DeviceIndex, value: f64) -> Result<()>;

    /// PI controller P value for the SAM signal.
    fn pi_p_value_sam(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the PI controller P value for the SAM signal.
    fn set_pi_p_value_sam(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// PI controller output limit for the NFO signal.
    fn pi_limit_nfo(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the PI controller output limit for the NFO signal.
    fn set_pi_limit_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// PI controller input averaging for the NFO signal.
    fn pi_average_nfo(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the PI controller input averaging for the NFO signal.
    fn set_pi_average_nfo(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// PI controller output limit for the SAM signal.
    fn pi_limit_sam(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the PI controller output limit for the SAM signal.
    fn set_pi_limit_sam(&self, dev: DeviceIndex, value: i32) -> Result<()>;

    /// PI controller target position for an axis.
    fn pi_target_position(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Sets the PI controller target position for an axis.
    fn set_pi_target_position(&self, dev: DeviceIndex, axis: Axis, value: i32) -> Result<()>;

    /// PI controller target source selection.
    fn pi_target_mode(&self, dev: DeviceIndex) -> Result<TargetMode>;
    /// Sets the PI controller target source selection.
    fn set_pi_target_mode(&self, dev: DeviceIndex, mode: TargetMode) -> Result<()>;

    /// Resets the PI controller.
    fn reset_pi_controller(&self, dev: DeviceIndex) -> Result<()>;

    /// PI controller NFO output for an axis.
    fn pi_nfo_output(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// PI controller SAM output for an axis.
    fn pi_sam_output(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;

    /// Lower and upper NFO ADC limit, read in one call.
    fn nfo_adc_limits(&self, dev: DeviceIndex) -> Result<(i32, i32)>;
    /// Sets both NFO ADC limits in one call.
    fn set_nfo_adc_limits(&self, dev: DeviceIndex, min: i32, max: i32) -> Result<()>;

    /// NFO slew rate limit.
    fn nfo_slew_rate_limit(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the NFO slew rate limit.
    fn set_nfo_slew_rate_limit(&self, dev: DeviceIndex, limit: i32) -> Result<()>;

    /// Lower and upper SAM ADC limit, read in one call.
    fn sam_adc_limits(&self, dev: DeviceIndex) -> Result<(i32, i32)>;
    /// Sets both SAM ADC limits in one call.
    fn set_sam_adc_limits(&self, dev: DeviceIndex, min: i32, max: i32) -> Result<()>;

    /// SAM slew rate limit.
    fn sam_slew_rate_limit(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the SAM slew rate limit.
    fn set_sam_slew_rate_limit(&self, dev: DeviceIndex, limit: i32) -> Result<()>;

    /// Bitmask of currently engaged limiters.
    fn limiter_state(&self, dev: DeviceIndex) -> Result<LimiterState>;

    /// Writes one coefficient of the 3x15 input transformation matrix as the
    /// three 16 bit words of its 8.40 fixed point representation.
    fn set_input_transformation_matrix(
        &self,
        dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()>;

    /// Input transformation result for an axis.
    fn input_transformation_result(&self, dev: DeviceIndex, axis: Axis) -> Result<i32>;
    /// Average of the input transformation coordinates.
    fn input_transformation_average(&self, dev: DeviceIndex) -> Result<i32>;
    /// State of the input transformation pipeline.
    fn input_transformation_state(&self, dev: DeviceIndex) -> Result<InputTransformationState>;

    /// Writes one coefficient of the 6x7 output transformation matrix as the
    /// three 16 bit words of its 8.40 fixed point representation.
    fn set_output_transformation_matrix(
        &self,
        dev: DeviceIndex,
        row: u32,
        column: u32,
        coeff1: i32,
        coeff2: i32,
        coeff3: i32,
    ) -> Result<()>;

    /// NFO and SAM result of the output transformation for an axis, read in
    /// one call.
    fn output_transformation_result(&self, dev: DeviceIndex, axis: Axis) -> Result<(i32, i32)>;

    /// Trajectory line start, x direction.
    fn trajectory_line_start_x(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line start, x direction.
    fn set_trajectory_line_start_x(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory line end, x direction.
    fn trajectory_line_end_x(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line end, x direction.
    fn set_trajectory_line_end_x(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory line speed, x direction.
    fn trajectory_line_speed_x(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line speed, x direction.
    fn set_trajectory_line_speed_x(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory line start, y direction.
    fn trajectory_line_start_y(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line start, y direction.
    fn set_trajectory_line_start_y(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory line spacing, y direction.
    fn trajectory_line_dist_y(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line spacing, y direction.
    fn set_trajectory_line_dist_y(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory line count, y direction.
    fn trajectory_line_count_y(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory line count, y direction.
    fn set_trajectory_line_count_y(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory turnaround time.
    fn trajectory_turn_time(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory turnaround time.
    fn set_trajectory_turn_time(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory positioning time.
    fn trajectory_pos_time(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory positioning time.
    fn set_trajectory_pos_time(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory anti-hysteresis setting.
    fn trajectory_anti_hyst(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory anti-hysteresis setting.
    fn set_trajectory_anti_hyst(&self, dev: DeviceIndex, value: i32) -> Result<()>;
    /// Trajectory settings word.
    fn trajectory_settings(&self, dev: DeviceIndex) -> Result<i32>;
    /// Sets the trajectory settings word.
    fn set_trajectory_settings(&self, dev: DeviceIndex, value: i32) -> Result<()>;
}
