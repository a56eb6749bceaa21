//! Device controller: discovery, background polling and host write dispatch.
//!
//! [`DscsController::connect`] discovers devices on the configured
//! interfaces, selects the one carrying the configured hardware ID, opens the
//! control session and populates the process value table. A background
//! thread then re-reads every register each poll period and publishes the
//! readbacks; host writes are dispatched to the matching vendor setter and
//! mirrored into the setpoint cache.
//!
//! All vendor calls of one operation run under a device lock so a host write
//! never interleaves with a poll cycle.

use crate::config::DscsConfig;
use crate::error::{DscsError, Result};
use crate::pv::{ParamId, PvIndex, PvRole, PvTable, PvValue};
use crate::sdk::DscsSdk;
use crate::types::{
    ConnectionType, DeviceDescriptor, DeviceIndex, InputTransformationState, LimiterState,
    TargetMode,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Rows of the input transformation matrix.
pub const INPUT_MATRIX_ROWS: u32 = 3;
/// Columns of the input transformation matrix.
pub const INPUT_MATRIX_COLUMNS: u32 = 15;
/// Rows of the output transformation matrix.
pub const OUTPUT_MATRIX_ROWS: u32 = 6;
/// Columns of the output transformation matrix.
pub const OUTPUT_MATRIX_COLUMNS: u32 = 7;

const FIXED_POINT_FRACTION_BITS: u32 = 40;

/// Splits a transformation coefficient into the three 16 bit words of its
/// signed 8.40 fixed point representation, most significant word first.
fn split_fixed_coeff(coeff: f64) -> Result<(i32, i32, i32)> {
    if !coeff.is_finite() || coeff.abs() >= 128.0 {
        return Err(DscsError::CoefficientOutOfRange { value: coeff });
    }
    let fixed = (coeff * (1u64 << FIXED_POINT_FRACTION_BITS) as f64).round() as i64;
    let bits = (fixed as u64) & 0xFFFF_FFFF_FFFF;
    let c1 = ((bits >> 32) & 0xFFFF) as i32;
    let c2 = ((bits >> 16) & 0xFFFF) as i32;
    let c3 = (bits & 0xFFFF) as i32;
    Ok((c1, c2, c3))
}

struct ControllerInner {
    sdk: Arc<dyn DscsSdk>,
    dev: DeviceIndex,
    descriptor: DeviceDescriptor,
    /// Serializes groups of vendor calls against the poller.
    device_lock: Mutex<()>,
    table: PvTable,
    poll_period: Duration,
}

/// Handle to one connected DSCS controller.
pub struct DscsController {
    inner: Arc<ControllerInner>,
    running: Arc<AtomicBool>,
    poller: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for DscsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DscsController")
            .field("descriptor", &self.inner.descriptor)
            .finish_non_exhaustive()
    }
}

impl DscsController {
    /// Discovers devices, selects the configured one and connects to it.
    ///
    /// Runs one synchronous poll cycle so the readback caches are populated
    /// before the call returns, then starts the background poller unless the
    /// configuration disables it.
    pub fn connect(config: &DscsConfig, sdk: Arc<dyn DscsSdk>) -> Result<Self> {
        config.validate()?;
        let (dev, descriptor) = select_device(sdk.as_ref(), config)?;

        // A control session left over from a crashed client blocks connect,
        // so drop any stale one first.
        let _ = sdk.disconnect(dev);
        sdk.connect(dev)?;
        info!(
            device = %dev,
            id = descriptor.id,
            serial = %descriptor.serial_no,
            address = %descriptor.address,
            library = %sdk.version(),
            "connected to DSCS controller"
        );

        let controller = Self {
            inner: Arc::new(ControllerInner {
                sdk,
                dev,
                descriptor,
                device_lock: Mutex::new(()),
                table: PvTable::new(),
                poll_period: config.poll_period(),
            }),
            running: Arc::new(AtomicBool::new(false)),
            poller: Mutex::new(None),
        };
        controller.poll_now();
        if config.auto_start_poller {
            controller.start_poller();
        }
        Ok(controller)
    }

    /// Descriptor of the connected device.
    pub fn device_descriptor(&self) -> &DeviceDescriptor {
        &self.inner.descriptor
    }

    /// Version string of the control library.
    pub fn library_version(&self) -> String {
        self.inner.sdk.version()
    }

    /// Kind of connection currently held to the device.
    pub fn connection_type(&self) -> Result<ConnectionType> {
        let _guard = self.inner.device_lock.lock();
        self.inner.sdk.connection_type(self.inner.dev)
    }

    /// Last polled limiter bitmask.
    pub fn limiter_state(&self) -> LimiterState {
        let raw = self
            .inner
            .table
            .readback_value(ParamId::LimiterState)
            .map(PvValue::as_i32)
            .unwrap_or(0);
        LimiterState::from_bits_retain(raw)
    }

    /// Process value table of this controller.
    pub fn table(&self) -> &PvTable {
        &self.inner.table
    }

    /// Looks a process value up by name.
    pub fn index_of(&self, name: &str) -> Option<PvIndex> {
        self.inner.table.index_of(name)
    }

    /// Current cached value of a process value.
    pub fn read(&self, index: PvIndex) -> Option<PvValue> {
        self.inner.table.read(index)
    }

    /// Subscribes to changes of a process value.
    pub fn subscribe(&self, index: PvIndex) -> Option<watch::Receiver<PvValue>> {
        self.inner.table.subscribe(index)
    }

    /// Writes a setpoint process value through to the device.
    ///
    /// Integral values written to the float registers are converted; float
    /// values written to integer registers are rejected. The setpoint cache
    /// is only updated after the vendor call succeeded.
    pub fn write(&self, index: PvIndex, value: PvValue) -> Result<()> {
        let entry = self
            .inner
            .table
            .entry(index)
            .ok_or_else(|| DscsError::UnknownParameter {
                name: format!("#{}", index),
            })?;
        if entry.role() != PvRole::Setpoint {
            return Err(DscsError::ReadOnlyParameter {
                name: entry.name().to_string(),
            });
        }
        let value = entry
            .kind()
            .coerce(value)
            .ok_or_else(|| DscsError::TypeMismatch {
                name: entry.name().to_string(),
                expected: entry.kind().label(),
            })?;
        let param = entry.param();
        {
            let _guard = self.inner.device_lock.lock();
            self.dispatch_write(param, value)?;
        }
        self.inner.table.apply_setpoint(param, value);
        debug!(pv = %entry.name(), value = %value, "setpoint written");
        Ok(())
    }

    /// Writes a setpoint process value addressed by name.
    pub fn write_named(&self, name: &str, value: PvValue) -> Result<()> {
        let index = self
            .index_of(name)
            .ok_or_else(|| DscsError::UnknownParameter {
                name: name.to_string(),
            })?;
        self.write(index, value)
    }

    fn dispatch_write(&self, param: ParamId, value: PvValue) -> Result<()> {
        let sdk = self.inner.sdk.as_ref();
        let dev = self.inner.dev;
        match param {
            ParamId::OsaPs(a) => sdk.set_osa_ps(dev, a, value.as_i32()),
            ParamId::BsPs(a) => sdk.set_bs_ps(dev, a, value.as_i32()),
            ParamId::AuxDac(n) => sdk.set_aux_dac(dev, n, value.as_i32()),
            ParamId::NfoPs(a) => sdk.set_nfo_ps(dev, a, value.as_i32()),
            ParamId::SamPs(a) => sdk.set_sam_ps(dev, a, value.as_i32()),
            ParamId::SetpointFrequency(a) => {
                sdk.set_setpoint_modulation_frequency(dev, a, value.as_i32())
            }
            ParamId::SetpointPhase(a) => sdk.set_setpoint_modulation_phase(dev, a, value.as_i32()),
            ParamId::SetpointAmplitude(a) => {
                sdk.set_setpoint_modulation_amplitude(dev, a, value.as_i32())
            }
            ParamId::ExternalAdcShift => sdk.set_external_adc_shift(dev, value.as_i32()),
            ParamId::PiEnabled(a) => sdk.set_pi_enabled(dev, a, value.as_i32() != 0),
            ParamId::PiInverted(a) => sdk.set_pi_inverted(dev, a, value.as_i32() != 0),
            ParamId::PiIValueNfo => sdk.set_pi_i_value_nfo(dev, value.as_f64()),
            ParamId::PiPValueNfo => sdk.set_pi_p_value_nfo(dev, value.as_i32()),
            ParamId::PiIValueSam => sdk.set_pi_i_value_sam(dev, value.as_f64()),
            ParamId::PiPValueSam => sdk.set_pi_p_value_sam(dev, value.as_i32()),
            ParamId::PiLimitNfo => sdk.set_pi_limit_nfo(dev, value.as_i32()),
            ParamId::PiAverageNfo => sdk.set_pi_average_nfo(dev, value.as_i32()),
            ParamId::PiLimitSam => sdk.set_pi_limit_sam(dev, value.as_i32()),
            ParamId::PiTargetPosition(a) => sdk.set_pi_target_position(dev, a, value.as_i32()),
            ParamId::PiTargetMode => {
                sdk.set_pi_target_mode(dev, TargetMode::from_raw(value.as_i32()))
            }
            // The device only accepts both ADC limits in one call, so the
            // untouched bound is taken from the setpoint cache, falling back
            // to the polled readback.
            ParamId::NfoAdcLimitMin => {
                let max = self.cached_bound(ParamId::NfoAdcLimitMax);
                sdk.set_nfo_adc_limits(dev, value.as_i32(), max)
            }
            ParamId::NfoAdcLimitMax => {
                let min = self.cached_bound(ParamId::NfoAdcLimitMin);
                sdk.set_nfo_adc_limits(dev, min, value.as_i32())
            }
            ParamId::NfoSlewRateLimit => sdk.set_nfo_slew_rate_limit(dev, value.as_i32()),
            ParamId::SamAdcLimitMin => {
                let max = self.cached_bound(ParamId::SamAdcLimitMax);
                sdk.set_sam_adc_limits(dev, value.as_i32(), max)
            }
            ParamId::SamAdcLimitMax => {
                let min = self.cached_bound(ParamId::SamAdcLimitMin);
                sdk.set_sam_adc_limits(dev, min, value.as_i32())
            }
            ParamId::SamSlewRateLimit => sdk.set_sam_slew_rate_limit(dev, value.as_i32()),
            ParamId::TrajStartX => sdk.set_trajectory_line_start_x(dev, value.as_i32()),
            ParamId::TrajEndX => sdk.set_trajectory_line_end_x(dev, value.as_i32()),
            ParamId::TrajSpeedX => sdk.set_trajectory_line_speed_x(dev, value.as_i32()),
            ParamId::TrajStartY => sdk.set_trajectory_line_start_y(dev, value.as_i32()),
            ParamId::TrajDistY => sdk.set_trajectory_line_dist_y(dev, value.as_i32()),
            ParamId::TrajCountY => sdk.set_trajectory_line_count_y(dev, value.as_i32()),
            ParamId::TrajTurnTime => sdk.set_trajectory_turn_time(dev, value.as_i32()),
            ParamId::TrajPosTime => sdk.set_trajectory_pos_time(dev, value.as_i32()),
            ParamId::TrajAntiHyst => sdk.set_trajectory_anti_hyst(dev, value.as_i32()),
            ParamId::TrajSettings => sdk.set_trajectory_settings(dev, value.as_i32()),
            // Read-only parameters have no setpoint entries, the role check
            // rejects them before dispatch.
            _ => Err(DscsError::ReadOnlyParameter { name: param.name() }),
        }
    }

    fn cached_bound(&self, param: ParamId) -> i32 {
        self.inner
            .table
            .setpoint_value(param)
            .or_else(|| self.inner.table.readback_value(param))
            .map(PvValue::as_i32)
            .unwrap_or(0)
    }

    /// Writes one coefficient of the 3x15 input transformation matrix.
    pub fn set_input_transformation_coefficient(
        &self,
        row: u32,
        column: u32,
        coeff: f64,
    ) -> Result<()> {
        if row >= INPUT_MATRIX_ROWS || column >= INPUT_MATRIX_COLUMNS {
            return Err(DscsError::InvalidMatrixIndex {
                row,
                column,
                rows: INPUT_MATRIX_ROWS,
                columns: INPUT_MATRIX_COLUMNS,
            });
        }
        let (c1, c2, c3) = split_fixed_coeff(coeff)?;
        let _guard = self.inner.device_lock.lock();
        self.inner
            .sdk
            .set_input_transformation_matrix(self.inner.dev, row, column, c1, c2, c3)
    }

    /// Writes one coefficient of the 6x7 output transformation matrix.
    pub fn set_output_transformation_coefficient(
        &self,
        row: u32,
        column: u32,
        coeff: f64,
    ) -> Result<()> {
        if row >= OUTPUT_MATRIX_ROWS || column >= OUTPUT_MATRIX_COLUMNS {
            return Err(DscsError::InvalidMatrixIndex {
                row,
                column,
                rows: OUTPUT_MATRIX_ROWS,
                columns: OUTPUT_MATRIX_COLUMNS,
            });
        }
        let (c1, c2, c3) = split_fixed_coeff(coeff)?;
        let _guard = self.inner.device_lock.lock();
        self.inner
            .sdk
            .set_output_transformation_matrix(self.inner.dev, row, column, c1, c2, c3)
    }

    /// Resets the PI controller of all three axes.
    pub fn reset_pi_controller(&self) -> Result<()> {
        let _guard = self.inner.device_lock.lock();
        self.inner.sdk.reset_pi_controller(self.inner.dev)
    }

    /// Resets the setpoint modulation phase of all three axes.
    pub fn reset_setpoint_modulation_phase(&self) -> Result<()> {
        let _guard = self.inner.device_lock.lock();
        self.inner.sdk.reset_setpoint_modulation_phase(self.inner.dev)
    }

    /// Enables or disables streaming on the secondary data connection.
    pub fn set_data_output_enabled(&self, enable: bool) -> Result<()> {
        let _guard = self.inner.device_lock.lock();
        self.inner
            .sdk
            .set_data_output_enabled(self.inner.dev, enable)
    }

    /// Runs one poll cycle on the calling thread.
    pub fn poll_now(&self) {
        poll_once(&self.inner);
    }

    /// Starts the background poller. Does nothing if it is already running.
    pub fn start_poller(&self) {
        let mut slot = self.poller.lock();
        if slot.is_some() {
            return;
        }
        self.running.store(true, Ordering::SeqCst);
        let inner = Arc::clone(&self.inner);
        let running = Arc::clone(&self.running);
        let handle = std::thread::spawn(move || {
            info!(
                period_ms = inner.poll_period.as_millis() as u64,
                "poller started"
            );
            while running.load(Ordering::SeqCst) {
                poll_once(&inner);
                // Sleep in short steps so stop_poller never waits out a full
                // poll period.
                let mut remaining = inner.poll_period;
                while running.load(Ordering::SeqCst) && !remaining.is_zero() {
                    let step = remaining.min(Duration::from_millis(50));
                    std::thread::sleep(step);
                    remaining = remaining.saturating_sub(step);
                }
            }
            info!("poller stopped");
        });
        *slot = Some(handle);
    }

    /// Stops the background poller and waits for it to exit.
    pub fn stop_poller(&self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.poller.lock().take() {
            if handle.join().is_err() {
                warn!("poller thread panicked");
            }
        }
    }

    /// True while the background poller is running.
    pub fn is_polling(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for DscsController {
    fn drop(&mut self) {
        self.stop_poller();
        if let Err(e) = self.inner.sdk.disconnect(self.inner.dev) {
            warn!(device = %self.inner.dev, error = %e, "disconnect failed");
        }
    }
}

fn select_device(
    sdk: &dyn DscsSdk,
    config: &DscsConfig,
) -> Result<(DeviceIndex, DeviceDescriptor)> {
    let count = sdk.discover(config.interface)?;
    if count == 0 {
        return Err(DscsError::NoDevicesFound);
    }
    for no in 0..count {
        let dev = DeviceIndex(no);
        let descriptor = sdk.device_info(dev)?;
        if descriptor.id == config.device_id {
            return Ok((dev, descriptor));
        }
        debug!(device = %dev, id = descriptor.id, "skipping device, id does not match");
    }
    Err(DscsError::DeviceNotFound {
        device_id: config.device_id,
    })
}

fn record_int(snapshot: &mut Vec<(ParamId, PvValue)>, param: ParamId, result: Result<i32>) {
    match result {
        Ok(v) => snapshot.push((param, PvValue::Int(v))),
        Err(e) => warn!(pv = %param.name(), error = %e, "poll failed"),
    }
}

fn record_float(snapshot: &mut Vec<(ParamId, PvValue)>, param: ParamId, result: Result<f64>) {
    match result {
        Ok(v) => snapshot.push((param, PvValue::Float(v))),
        Err(e) => warn!(pv = %param.name(), error = %e, "poll failed"),
    }
}

fn record_pair(
    snapshot: &mut Vec<(ParamId, PvValue)>,
    params: (ParamId, ParamId),
    result: Result<(i32, i32)>,
) {
    match result {
        Ok((a, b)) => {
            snapshot.push((params.0, PvValue::Int(a)));
            snapshot.push((params.1, PvValue::Int(b)));
        }
        Err(e) => warn!(pv = %params.0.name(), error = %e, "poll failed"),
    }
}

/// Reads every register once and publishes the values as readbacks.
///
/// Failures of individual reads are logged and skipped, the previous readback
/// stays in place. The device lock is dropped before publishing so
/// subscribers never observe it held.
fn poll_once(inner: &ControllerInner) {
    let sdk = inner.sdk.as_ref();
    let dev = inner.dev;
    let mut snapshot: Vec<(ParamId, PvValue)> = Vec::with_capacity(96);
    {
        let _guard = inner.device_lock.lock();
        for param in ParamId::all() {
            match param {
                ParamId::OsaPs(a) => record_int(&mut snapshot, param, sdk.osa_ps(dev, a)),
                ParamId::BsPs(a) => record_int(&mut snapshot, param, sdk.bs_ps(dev, a)),
                ParamId::AuxDac(n) => record_int(&mut snapshot, param, sdk.aux_dac(dev, n)),
                ParamId::NfoPs(a) => record_int(&mut snapshot, param, sdk.nfo_ps(dev, a)),
                ParamId::SamPs(a) => record_int(&mut snapshot, param, sdk.sam_ps(dev, a)),
                ParamId::NfoSg(a) => record_int(&mut snapshot, param, sdk.nfo_sg(dev, a)),
                ParamId::SamCpD(a) => record_int(&mut snapshot, param, sdk.sam_cp_d(dev, a)),
                ParamId::XzZx(c) => record_int(&mut snapshot, param, sdk.xz_zx(dev, c)),
                ParamId::AuxAdc(n) => record_int(&mut snapshot, param, sdk.aux_adc(dev, n)),
                ParamId::Nfo(a) => record_int(&mut snapshot, param, sdk.nfo(dev, a)),
                ParamId::Sam(a) => record_int(&mut snapshot, param, sdk.sam(dev, a)),
                ParamId::SetpointFrequency(a) => record_int(
                    &mut snapshot,
                    param,
                    sdk.setpoint_modulation_frequency(dev, a),
                ),
                ParamId::SetpointPhase(a) => {
                    record_int(&mut snapshot, param, sdk.setpoint_modulation_phase(dev, a));
                }
                ParamId::SetpointAmplitude(a) => record_int(
                    &mut snapshot,
                    param,
                    sdk.setpoint_modulation_amplitude(dev, a),
                ),
                ParamId::ExternalAdcShift => {
                    record_int(&mut snapshot, param, sdk.external_adc_shift(dev));
                }
                ParamId::PiEnabled(a) => {
                    record_int(&mut snapshot, param, sdk.pi_enabled(dev, a).map(i32::from));
                }
                ParamId::PiInverted(a) => {
                    record_int(&mut snapshot, param, sdk.pi_inverted(dev, a).map(i32::from));
                }
                ParamId::PiIValueNfo => {
                    record_float(&mut snapshot, param, sdk.pi_i_value_nfo(dev));
                }
                ParamId::PiPValueNfo => record_int(&mut snapshot, param, sdk.pi_p_value_nfo(dev)),
                ParamId::PiIValueSam => {
                    record_float(&mut snapshot, param, sdk.pi_i_value_sam(dev));
                }
                ParamId::PiPValueSam => record_int(&mut snapshot, param, sdk.pi_p_value_sam(dev)),
                ParamId::PiLimitNfo => record_int(&mut snapshot, param, sdk.pi_limit_nfo(dev)),
                ParamId::PiAverageNfo => record_int(&mut snapshot, param, sdk.pi_average_nfo(dev)),
                ParamId::PiLimitSam => record_int(&mut snapshot, param, sdk.pi_limit_sam(dev)),
                ParamId::PiTargetPosition(a) => {
                    record_int(&mut snapshot, param, sdk.pi_target_position(dev, a));
                }
                ParamId::PiTargetMode => record_int(
                    &mut snapshot,
                    param,
                    sdk.pi_target_mode(dev).map(TargetMode::to_raw),
                ),
                ParamId::PiNfoOutput(a) => {
                    record_int(&mut snapshot, param, sdk.pi_nfo_output(dev, a));
                }
                ParamId::PiSamOutput(a) => {
                    record_int(&mut snapshot, param, sdk.pi_sam_output(dev, a));
                }
                ParamId::NfoAdcLimitMin => record_pair(
                    &mut snapshot,
                    (ParamId::NfoAdcLimitMin, ParamId::NfoAdcLimitMax),
                    sdk.nfo_adc_limits(dev),
                ),
                // Read together with the lower limit.
                ParamId::NfoAdcLimitMax => {}
                ParamId::NfoSlewRateLimit => {
                    record_int(&mut snapshot, param, sdk.nfo_slew_rate_limit(dev));
                }
                ParamId::SamAdcLimitMin => record_pair(
                    &mut snapshot,
                    (ParamId::SamAdcLimitMin, ParamId::SamAdcLimitMax),
                    sdk.sam_adc_limits(dev),
                ),
                // Read together with the lower limit.
                ParamId::SamAdcLimitMax => {}
                ParamId::SamSlewRateLimit => {
                    record_int(&mut snapshot, param, sdk.sam_slew_rate_limit(dev));
                }
                ParamId::LimiterState => record_int(
                    &mut snapshot,
                    param,
                    sdk.limiter_state(dev).map(|s| s.bits()),
                ),
                ParamId::InputResult(a) => {
                    record_int(&mut snapshot, param, sdk.input_transformation_result(dev, a));
                }
                ParamId::InputAverage => {
                    record_int(&mut snapshot, param, sdk.input_transformation_average(dev));
                }
                ParamId::InputState => record_int(
                    &mut snapshot,
                    param,
                    sdk.input_transformation_state(dev)
                        .map(InputTransformationState::to_raw),
                ),
                ParamId::OutputNfoResult(a) => record_pair(
                    &mut snapshot,
                    (ParamId::OutputNfoResult(a), ParamId::OutputSamResult(a)),
                    sdk.output_transformation_result(dev, a),
                ),
                // Read together with the NFO result.
                ParamId::OutputSamResult(_) => {}
                ParamId::TrajStartX => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_start_x(dev));
                }
                ParamId::TrajEndX => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_end_x(dev));
                }
                ParamId::TrajSpeedX => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_speed_x(dev));
                }
                ParamId::TrajStartY => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_start_y(dev));
                }
                ParamId::TrajDistY => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_dist_y(dev));
                }
                ParamId::TrajCountY => {
                    record_int(&mut snapshot, param, sdk.trajectory_line_count_y(dev));
                }
                ParamId::TrajTurnTime => {
                    record_int(&mut snapshot, param, sdk.trajectory_turn_time(dev));
                }
                ParamId::TrajPosTime => {
                    record_int(&mut snapshot, param, sdk.trajectory_pos_time(dev));
                }
                ParamId::TrajAntiHyst => {
                    record_int(&mut snapshot, param, sdk.trajectory_anti_hyst(dev));
                }
                ParamId::TrajSettings => {
                    record_int(&mut snapshot, param, sdk.trajectory_settings(dev));
                }
            }
        }
    }
    for (param, value) in snapshot {
        inner.table.apply_readback(param, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fixed_coeff_one() {
        assert_eq!(split_fixed_coeff(1.0).unwrap(), (0x0100, 0, 0));
    }

    #[test]
    fn test_split_fixed_coeff_half() {
        assert_eq!(split_fixed_coeff(0.5).unwrap(), (0x0080, 0, 0));
    }

    #[test]
    fn test_split_fixed_coeff_negative_one() {
        // Two's complement over the 48 bit word
        assert_eq!(split_fixed_coeff(-1.0).unwrap(), (0xFF00, 0, 0));
    }

    #[test]
    fn test_split_fixed_coeff_smallest_step() {
        let step = 1.0 / (1u64 << FIXED_POINT_FRACTION_BITS) as f64;
        assert_eq!(split_fixed_coeff(step).unwrap(), (0, 0, 1));
    }

    #[test]
    fn test_split_fixed_coeff_range() {
        assert!(split_fixed_coeff(127.999).is_ok());
        assert!(matches!(
            split_fixed_coeff(128.0),
            Err(DscsError::CoefficientOutOfRange { .. })
        ));
        assert!(matches!(
            split_fixed_coeff(-129.0),
            Err(DscsError::CoefficientOutOfRange { .. })
        ));
        assert!(split_fixed_coeff(f64::NAN).is_err());
    }
}
