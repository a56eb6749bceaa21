//! Process value table.
//!
//! Every device register is exposed as a named process value (PV). Writable
//! registers get two entries, a setpoint (`"NFO_PS_X"`) and a readback
//! (`"NFO_PS_X_RBV"`); read-only registers get a single readback entry under
//! their plain name. Hosts address entries either by name or by the dense
//! numeric index assigned at registration.
//!
//! Each entry owns a `tokio::sync::watch` channel so hosts can subscribe to
//! value changes; the senders are usable from plain threads, which lets the
//! blocking poller publish readbacks without a runtime.

use crate::types::{Axis, XzChannel};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Logical device parameter behind one or two process values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    /// OSA power supply output (x, y)
    OsaPs(Axis),
    /// BS power supply output (x, y)
    BsPs(Axis),
    /// Auxiliary DAC output (0-3)
    AuxDac(u8),
    /// NFO power supply output
    NfoPs(Axis),
    /// SAM power supply output
    SamPs(Axis),
    /// NFO strain gauge input
    NfoSg(Axis),
    /// SAM capacitive displacement input
    SamCpD(Axis),
    /// XZ_ZX interferometer input
    XzZx(XzChannel),
    /// Auxiliary ADC input (0-2)
    AuxAdc(u8),
    /// NFO position input
    Nfo(Axis),
    /// SAM position input
    Sam(Axis),
    /// Setpoint modulation frequency
    SetpointFrequency(Axis),
    /// Setpoint modulation phase
    SetpointPhase(Axis),
    /// Setpoint modulation amplitude
    SetpointAmplitude(Axis),
    /// Shift applied to the external ADC samples
    ExternalAdcShift,
    /// PI controller enable
    PiEnabled(Axis),
    /// PI controller sign inversion
    PiInverted(Axis),
    /// PI controller I value for the NFO signal
    PiIValueNfo,
    /// PI controller P value for the NFO signal
    PiPValueNfo,
    /// PI controller I value for the SAM signal
    PiIValueSam,
    /// PI controller P value for the SAM signal
    PiPValueSam,
    /// PI controller output limit for the NFO signal
    PiLimitNfo,
    /// PI controller input averaging for the NFO signal
    PiAverageNfo,
    /// PI controller output limit for the SAM signal
    PiLimitSam,
    /// PI controller target position
    PiTargetPosition(Axis),
    /// PI controller target source selection
    PiTargetMode,
    /// PI controller NFO output
    PiNfoOutput(Axis),
    /// PI controller SAM output
    PiSamOutput(Axis),
    /// Lower NFO ADC limit (written together with the upper limit)
    NfoAdcLimitMin,
    /// Upper NFO ADC limit (written together with the lower limit)
    NfoAdcLimitMax,
    /// NFO slew rate limit
    NfoSlewRateLimit,
    /// Lower SAM ADC limit (written together with the upper limit)
    SamAdcLimitMin,
    /// Upper SAM ADC limit (written together with the lower limit)
    SamAdcLimitMax,
    /// SAM slew rate limit
    SamSlewRateLimit,
    /// Engaged limiter bitmask
    LimiterState,
    /// Input transformation result
    InputResult(Axis),
    /// Average of the input transformation coordinates
    InputAverage,
    /// Input transformation state
    InputState,
    /// NFO result of the output transformation
    OutputNfoResult(Axis),
    /// SAM result of the output transformation
    OutputSamResult(Axis),
    /// Trajectory line start, x direction
    TrajStartX,
    /// Trajectory line end, x direction
    TrajEndX,
    /// Trajectory line speed, x direction
    TrajSpeedX,
    /// Trajectory line start, y direction
    TrajStartY,
    /// Trajectory line spacing, y direction
    TrajDistY,
    /// Trajectory line count, y direction
    TrajCountY,
    /// Trajectory turnaround time
    TrajTurnTime,
    /// Trajectory positioning time
    TrajPosTime,
    /// Trajectory anti-hysteresis setting
    TrajAntiHyst,
    /// Trajectory settings word
    TrajSettings,
}

impl ParamId {
    /// All parameters in registration order.
    pub fn all() -> Vec<ParamId> {
        let mut ids = Vec::with_capacity(96);
        for axis in Axis::PLANE {
            ids.push(ParamId::OsaPs(axis));
        }
        for axis in Axis::PLANE {
            ids.push(ParamId::BsPs(axis));
        }
        for aux in 0..4 {
            ids.push(ParamId::AuxDac(aux));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::NfoPs(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::SamPs(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::NfoSg(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::SamCpD(axis));
        }
        for channel in XzChannel::ALL {
            ids.push(ParamId::XzZx(channel));
        }
        for aux in 0..3 {
            ids.push(ParamId::AuxAdc(aux));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::Nfo(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::Sam(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::SetpointFrequency(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::SetpointPhase(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::SetpointAmplitude(axis));
        }
        ids.push(ParamId::ExternalAdcShift);
        for axis in Axis::ALL {
            ids.push(ParamId::PiEnabled(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::PiInverted(axis));
        }
        ids.extend([
            ParamId::PiIValueNfo,
            ParamId::PiPValueNfo,
            ParamId::PiIValueSam,
            ParamId::PiPValueSam,
            ParamId::PiLimitNfo,
            ParamId::PiAverageNfo,
            ParamId::PiLimitSam,
        ]);
        for axis in Axis::ALL {
            ids.push(ParamId::PiTargetPosition(axis));
        }
        ids.push(ParamId::PiTargetMode);
        for axis in Axis::ALL {
            ids.push(ParamId::PiNfoOutput(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::PiSamOutput(axis));
        }
        ids.extend([
            ParamId::NfoAdcLimitMin,
            ParamId::NfoAdcLimitMax,
            ParamId::NfoSlewRateLimit,
            ParamId::SamAdcLimitMin,
            ParamId::SamAdcLimitMax,
            ParamId::SamSlewRateLimit,
            ParamId::LimiterState,
        ]);
        for axis in Axis::ALL {
            ids.push(ParamId::InputResult(axis));
        }
        ids.extend([ParamId::InputAverage, ParamId::InputState]);
        for axis in Axis::ALL {
            ids.push(ParamId::OutputNfoResult(axis));
        }
        for axis in Axis::ALL {
            ids.push(ParamId::OutputSamResult(axis));
        }
        ids.extend([
            ParamId::TrajStartX,
            ParamId::TrajEndX,
            ParamId::TrajSpeedX,
            ParamId::TrajStartY,
            ParamId::TrajDistY,
            ParamId::TrajCountY,
            ParamId::TrajTurnTime,
            ParamId::TrajPosTime,
            ParamId::TrajAntiHyst,
            ParamId::TrajSettings,
        ]);
        ids
    }

    /// Base process value name (the setpoint name for writable parameters).
    pub fn name(self) -> String {
        match self {
            ParamId::OsaPs(a) => format!("OSA_PS_{}", a),
            ParamId::BsPs(a) => format!("BS_PS_{}", a),
            ParamId::AuxDac(n) => format!("AUX_DAC_{}", n),
            ParamId::NfoPs(a) => format!("NFO_PS_{}", a),
            ParamId::SamPs(a) => format!("SAM_PS_{}", a),
            ParamId::NfoSg(a) => format!("NFO_SG_{}", a),
            ParamId::SamCpD(a) => format!("SAM_CP_D_{}", a),
            ParamId::XzZx(c) => format!("XZ_ZX_{}", c.label()),
            ParamId::AuxAdc(n) => format!("AUX_ADC_{}", n),
            ParamId::Nfo(a) => format!("NFO_{}", a),
            ParamId::Sam(a) => format!("SAM_{}", a),
            ParamId::SetpointFrequency(a) => format!("SETPT_FREQ_{}", a),
            ParamId::SetpointPhase(a) => format!("SETPT_PHASE_{}", a),
            ParamId::SetpointAmplitude(a) => format!("SETPT_AMP_{}", a),
            ParamId::ExternalAdcShift => "EXT_ADC_SHIFT".to_string(),
            ParamId::PiEnabled(a) => format!("PI_EN_{}", a),
            ParamId::PiInverted(a) => format!("PI_INV_{}", a),
            ParamId::PiIValueNfo => "PI_IVAL_NFO".to_string(),
            ParamId::PiPValueNfo => "PI_PVAL_NFO".to_string(),
            ParamId::PiIValueSam => "PI_IVAL_SAM".to_string(),
            ParamId::PiPValueSam => "PI_PVAL_SAM".to_string(),
            ParamId::PiLimitNfo => "PI_LIM_NFO".to_string(),
            ParamId::PiAverageNfo => "PI_AVG_NFO".to_string(),
            ParamId::PiLimitSam => "PI_LIM_SAM".to_string(),
            ParamId::PiTargetPosition(a) => format!("PI_TARG_POS_{}", a),
            ParamId::PiTargetMode => "PI_TARG_MODE".to_string(),
            ParamId::PiNfoOutput(a) => format!("PI_NFO_OUT_{}", a),
            ParamId::PiSamOutput(a) => format!("PI_SAM_OUT_{}", a),
            ParamId::NfoAdcLimitMin => "NFO_ADC_LIM_MIN".to_string(),
            ParamId::NfoAdcLimitMax => "NFO_ADC_LIM_MAX".to_string(),
            ParamId::NfoSlewRateLimit => "NFO_SLEW_LIM".to_string(),
            ParamId::SamAdcLimitMin => "SAM_ADC_LIM_MIN".to_string(),
            ParamId::SamAdcLimitMax => "SAM_ADC_LIM_MAX".to_string(),
            ParamId::SamSlewRateLimit => "SAM_SLEW_LIM".to_string(),
            ParamId::LimiterState => "LIM_STATE".to_string(),
            ParamId::InputResult(a) => format!("INP_TRANS_RES_{}", a),
            ParamId::InputAverage => "INP_TRANS_AVG".to_string(),
            ParamId::InputState => "INP_TRANS_STATE".to_string(),
            ParamId::OutputNfoResult(a) => format!("OUT_TRANS_NFO_RES_{}", a),
            ParamId::OutputSamResult(a) => format!("OUT_TRANS_SAM_RES_{}", a),
            ParamId::TrajStartX => "TRAJ_START_X".to_string(),
            ParamId::TrajEndX => "TRAJ_END_X".to_string(),
            ParamId::TrajSpeedX => "TRAJ_SPEED_X".to_string(),
            ParamId::TrajStartY => "TRAJ_START_Y".to_string(),
            ParamId::TrajDistY => "TRAJ_DIST_Y".to_string(),
            ParamId::TrajCountY => "TRAJ_COUNT_Y".to_string(),
            ParamId::TrajTurnTime => "TRAJ_TURN_TIME".to_string(),
            ParamId::TrajPosTime => "TRAJ_POS_TIME".to_string(),
            ParamId::TrajAntiHyst => "TRAJ_ANTI_HYST".to_string(),
            ParamId::TrajSettings => "TRAJ_SETTINGS".to_string(),
        }
    }

    /// Access mode of this parameter.
    pub fn access(self) -> PvAccess {
        match self {
            ParamId::NfoSg(_)
            | ParamId::SamCpD(_)
            | ParamId::XzZx(_)
            | ParamId::AuxAdc(_)
            | ParamId::Nfo(_)
            | ParamId::Sam(_)
            | ParamId::PiNfoOutput(_)
            | ParamId::PiSamOutput(_)
            | ParamId::LimiterState
            | ParamId::InputResult(_)
            | ParamId::InputAverage
            | ParamId::InputState
            | ParamId::OutputNfoResult(_)
            | ParamId::OutputSamResult(_) => PvAccess::ReadOnly,
            _ => PvAccess::ReadWrite,
        }
    }

    /// Scalar kind of this parameter.
    ///
    /// The PI controller I values are the only floating point registers the
    /// device exposes.
    pub fn kind(self) -> PvKind {
        match self {
            ParamId::PiIValueNfo | ParamId::PiIValueSam => PvKind::Float,
            _ => PvKind::Int,
        }
    }
}

/// Access mode of a process value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvAccess {
    /// Readback only
    ReadOnly,
    /// Setpoint and readback
    ReadWrite,
}

/// Scalar kind of a process value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvKind {
    /// 32 bit integer register
    Int,
    /// Double precision register
    Float,
}

impl PvKind {
    /// Zero value of this kind, used to initialize cache entries.
    pub fn zero(self) -> PvValue {
        match self {
            PvKind::Int => PvValue::Int(0),
            PvKind::Float => PvValue::Float(0.0),
        }
    }

    /// Coerces a host value to this kind.
    ///
    /// Integral writes to float registers are converted rather than rejected;
    /// float writes to integer registers are rejected.
    pub fn coerce(self, value: PvValue) -> Option<PvValue> {
        match (self, value) {
            (PvKind::Int, PvValue::Int(_)) | (PvKind::Float, PvValue::Float(_)) => Some(value),
            (PvKind::Float, PvValue::Int(v)) => Some(PvValue::Float(v as f64)),
            (PvKind::Int, PvValue::Float(_)) => None,
        }
    }

    /// Human-readable kind name for error messages.
    pub fn label(self) -> &'static str {
        match self {
            PvKind::Int => "integer",
            PvKind::Float => "float",
        }
    }
}

/// Scalar value of a process value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PvValue {
    /// Integer value
    Int(i32),
    /// Floating point value
    Float(f64),
}

impl PvValue {
    /// Integer view of the value (floats are truncated).
    pub fn as_i32(self) -> i32 {
        match self {
            PvValue::Int(v) => v,
            PvValue::Float(v) => v as i32,
        }
    }

    /// Floating point view of the value.
    pub fn as_f64(self) -> f64 {
        match self {
            PvValue::Int(v) => v as f64,
            PvValue::Float(v) => v,
        }
    }
}

impl fmt::Display for PvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PvValue::Int(v) => write!(f, "{}", v),
            PvValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Role of a table entry for its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvRole {
    /// Last value written by a host
    Setpoint,
    /// Last value polled from the device
    Readback,
}

/// Dense numeric index of a process value, assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PvIndex(pub usize);

impl fmt::Display for PvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One process value: name, role and current value with change notification.
pub struct PvEntry {
    name: String,
    param: ParamId,
    role: PvRole,
    tx: watch::Sender<PvValue>,
    written: AtomicBool,
}

impl PvEntry {
    fn new(name: String, param: ParamId, role: PvRole) -> Self {
        let (tx, _rx) = watch::channel(param.kind().zero());
        Self {
            name,
            param,
            role,
            tx,
            written: AtomicBool::new(false),
        }
    }

    /// Process value name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter behind this entry.
    pub fn param(&self) -> ParamId {
        self.param
    }

    /// Role of this entry.
    pub fn role(&self) -> PvRole {
        self.role
    }

    /// Scalar kind of this entry.
    pub fn kind(&self) -> PvKind {
        self.param.kind()
    }

    /// Current cached value.
    pub fn value(&self) -> PvValue {
        *self.tx.borrow()
    }

    /// Subscribes to changes of this entry.
    pub fn subscribe(&self) -> watch::Receiver<PvValue> {
        self.tx.subscribe()
    }

    fn store(&self, value: PvValue) {
        self.written.store(true, Ordering::Release);
        self.tx.send_replace(value);
    }
}

impl fmt::Debug for PvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PvEntry")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("value", &self.value())
            .finish()
    }
}

/// Table of all process values of one controller.
pub struct PvTable {
    entries: Vec<PvEntry>,
    by_name: HashMap<String, PvIndex>,
    setpoints: HashMap<ParamId, PvIndex>,
    readbacks: HashMap<ParamId, PvIndex>,
}

impl Default for PvTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PvTable {
    /// Builds the table with one setpoint and one readback entry per
    /// writable parameter and one readback entry per read-only parameter.
    pub fn new() -> Self {
        let mut table = Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            setpoints: HashMap::new(),
            readbacks: HashMap::new(),
        };
        for param in ParamId::all() {
            let base = param.name();
            match param.access() {
                PvAccess::ReadWrite => {
                    table.push(PvEntry::new(base.clone(), param, PvRole::Setpoint));
                    table.push(PvEntry::new(format!("{}_RBV", base), param, PvRole::Readback));
                }
                PvAccess::ReadOnly => {
                    table.push(PvEntry::new(base, param, PvRole::Readback));
                }
            }
        }
        table
    }

    fn push(&mut self, entry: PvEntry) {
        let index = PvIndex(self.entries.len());
        self.by_name.insert(entry.name.clone(), index);
        match entry.role {
            PvRole::Setpoint => self.setpoints.insert(entry.param, index),
            PvRole::Readback => self.readbacks.insert(entry.param, index),
        };
        self.entries.push(entry);
    }

    /// Number of registered process values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table is empty (it never is after construction).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a process value up by name.
    pub fn index_of(&self, name: &str) -> Option<PvIndex> {
        self.by_name.get(name).copied()
    }

    /// Entry at a numeric index.
    pub fn entry(&self, index: PvIndex) -> Option<&PvEntry> {
        self.entries.get(index.0)
    }

    /// Iterates over all entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = &PvEntry> {
        self.entries.iter()
    }

    /// Current cached value of a process value.
    pub fn read(&self, index: PvIndex) -> Option<PvValue> {
        self.entry(index).map(PvEntry::value)
    }

    /// Subscribes to changes of a process value.
    pub fn subscribe(&self, index: PvIndex) -> Option<watch::Receiver<PvValue>> {
        self.entry(index).map(PvEntry::subscribe)
    }

    /// Stores a polled readback and notifies subscribers.
    pub(crate) fn apply_readback(&self, param: ParamId, value: PvValue) {
        if let Some(index) = self.readbacks.get(&param) {
            self.entries[index.0].store(value);
        }
    }

    /// Stores a written setpoint and notifies subscribers.
    pub(crate) fn apply_setpoint(&self, param: ParamId, value: PvValue) {
        if let Some(index) = self.setpoints.get(&param) {
            self.entries[index.0].store(value);
        }
    }

    /// Last written setpoint, if the host has written one.
    pub(crate) fn setpoint_value(&self, param: ParamId) -> Option<PvValue> {
        let entry = &self.entries[self.setpoints.get(&param)?.0];
        entry.written.load(Ordering::Acquire).then(|| entry.value())
    }

    /// Last polled readback, if a poll has stored one.
    pub(crate) fn readback_value(&self, param: ParamId) -> Option<PvValue> {
        let entry = &self.entries[self.readbacks.get(&param)?.0];
        entry.written.load(Ordering::Acquire).then(|| entry.value())
    }
}

impl fmt::Debug for PvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PvTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parameter_has_entries() {
        let table = PvTable::new();
        for param in ParamId::all() {
            let base = param.name();
            match param.access() {
                PvAccess::ReadWrite => {
                    assert!(table.index_of(&base).is_some(), "missing {}", base);
                    assert!(
                        table.index_of(&format!("{}_RBV", base)).is_some(),
                        "missing {}_RBV",
                        base
                    );
                }
                PvAccess::ReadOnly => {
                    assert!(table.index_of(&base).is_some(), "missing {}", base);
                }
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let table = PvTable::new();
        assert_eq!(table.by_name.len(), table.len());
    }

    #[test]
    fn test_i_values_are_float() {
        assert_eq!(ParamId::PiIValueNfo.kind(), PvKind::Float);
        assert_eq!(ParamId::PiIValueSam.kind(), PvKind::Float);
        assert_eq!(ParamId::PiPValueNfo.kind(), PvKind::Int);
        assert_eq!(ParamId::NfoPs(Axis::X).kind(), PvKind::Int);
    }

    #[test]
    fn test_coerce_int_to_float() {
        assert_eq!(
            PvKind::Float.coerce(PvValue::Int(7)),
            Some(PvValue::Float(7.0))
        );
        assert_eq!(PvKind::Int.coerce(PvValue::Float(1.5)), None);
        assert_eq!(PvKind::Int.coerce(PvValue::Int(3)), Some(PvValue::Int(3)));
    }

    #[test]
    fn test_readback_apply_and_read() {
        let table = PvTable::new();
        let param = ParamId::Nfo(Axis::Y);
        let index = table.index_of("NFO_Y").unwrap();

        assert_eq!(table.read(index), Some(PvValue::Int(0)));
        table.apply_readback(param, PvValue::Int(1234));
        assert_eq!(table.read(index), Some(PvValue::Int(1234)));
        assert_eq!(table.readback_value(param), Some(PvValue::Int(1234)));
    }

    #[test]
    fn test_setpoint_value_tracks_writes() {
        let table = PvTable::new();
        let param = ParamId::NfoAdcLimitMax;

        // Untouched setpoints report no value, so callers can fall back to
        // the readback
        assert_eq!(table.setpoint_value(param), None);
        table.apply_setpoint(param, PvValue::Int(500));
        assert_eq!(table.setpoint_value(param), Some(PvValue::Int(500)));
    }

    #[tokio::test]
    async fn test_subscription_sees_readback() {
        let table = PvTable::new();
        let index = table.index_of("SAM_Z").unwrap();
        let mut rx = table.subscribe(index).unwrap();

        table.apply_readback(ParamId::Sam(Axis::Z), PvValue::Int(-42));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), PvValue::Int(-42));
    }
}
