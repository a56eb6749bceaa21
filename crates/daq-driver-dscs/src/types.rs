//! Selector and descriptor types shared across the driver.
//!
//! These mirror the selector enumerations of the vendor library with typed
//! Rust equivalents, plus the device descriptor returned by discovery.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positioner axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// All three axes in device order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes of the planar outputs (OSA and BS power supplies).
    pub const PLANE: [Axis; 2] = [Axis::X, Axis::Y];

    /// Raw selector value for the vendor calls.
    pub fn to_raw(self) -> dscs_sys::DSCS_Axis {
        match self {
            Axis::X => dscs_sys::DSCS_AxisX,
            Axis::Y => dscs_sys::DSCS_AxisY,
            Axis::Z => dscs_sys::DSCS_AxisZ,
        }
    }

    /// Uppercase axis letter, used in process value names.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selector for the two XZ_ZX interferometer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XzChannel {
    /// XZ input
    Xz,
    /// ZX input
    Zx,
}

impl XzChannel {
    /// Both inputs in device order.
    pub const ALL: [XzChannel; 2] = [XzChannel::Xz, XzChannel::Zx];

    /// Raw selector value for the vendor calls.
    pub fn to_raw(self) -> dscs_sys::DSCS_XZ_ZX {
        match self {
            XzChannel::Xz => dscs_sys::DSCS_IndexXZ,
            XzChannel::Zx => dscs_sys::DSCS_IndexZX,
        }
    }

    /// Name fragment used in process value names.
    pub fn label(self) -> &'static str {
        match self {
            XzChannel::Xz => "XZ",
            XzChannel::Zx => "ZX",
        }
    }
}

/// Interfaces searched during device discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    /// USB only
    Usb,
    /// TCP only
    Tcp,
    /// All supported interfaces
    All,
}

impl InterfaceType {
    /// Raw value for the discovery call.
    pub fn to_raw(self) -> dscs_sys::DSCS_InterfaceType {
        match self {
            InterfaceType::Usb => dscs_sys::DSCS_IfUsb,
            InterfaceType::Tcp => dscs_sys::DSCS_IfTcp,
            InterfaceType::All => dscs_sys::DSCS_IfAll,
        }
    }
}

/// Kind of connection currently held to a device.
///
/// A device accepts a primary connection for control and configuration and a
/// secondary one for data acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    /// Not connected
    None,
    /// Primary control connection
    Control,
    /// Secondary data acquisition connection
    Data,
}

impl ConnectionType {
    /// Converts the raw vendor value; unexpected values map to `None`.
    pub fn from_raw(raw: dscs_sys::DSCS_ConnectionType) -> Self {
        match raw {
            x if x == dscs_sys::DSCS_ConControl => ConnectionType::Control,
            x if x == dscs_sys::DSCS_ConData => ConnectionType::Data,
            _ => ConnectionType::None,
        }
    }
}

/// Source selection for the PI controller target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Follow the static target position registers
    TargetPosition,
    /// Follow the setpoint modulation generator
    SetpointModulation,
}

impl TargetMode {
    /// Converts the raw vendor value; unexpected values map to
    /// `TargetPosition`.
    pub fn from_raw(raw: dscs_sys::DSCS_TargetMode) -> Self {
        if raw == dscs_sys::DSCS_TmSetpointModulation {
            TargetMode::SetpointModulation
        } else {
            TargetMode::TargetPosition
        }
    }

    /// Raw value for the vendor calls.
    pub fn to_raw(self) -> dscs_sys::DSCS_TargetMode {
        match self {
            TargetMode::TargetPosition => dscs_sys::DSCS_TmTargetPosition,
            TargetMode::SetpointModulation => dscs_sys::DSCS_TmSetpointModulation,
        }
    }
}

/// State of the input transformation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTransformationState {
    /// Transformation disabled
    Disabled,
    /// Transformation running
    Running,
    /// Matrix not valid
    Invalid,
    /// Unrecognized state value
    Unknown(i32),
}

impl InputTransformationState {
    /// Converts the raw vendor value.
    pub fn from_raw(raw: dscs_sys::DSCS_InputTransformationState) -> Self {
        match raw {
            x if x == dscs_sys::DSCS_ItsDisabled => InputTransformationState::Disabled,
            x if x == dscs_sys::DSCS_ItsRunning => InputTransformationState::Running,
            x if x == dscs_sys::DSCS_ItsInvalid => InputTransformationState::Invalid,
            other => InputTransformationState::Unknown(other),
        }
    }

    /// Raw value as stored in the process value cache.
    pub fn to_raw(self) -> i32 {
        match self {
            InputTransformationState::Disabled => dscs_sys::DSCS_ItsDisabled,
            InputTransformationState::Running => dscs_sys::DSCS_ItsRunning,
            InputTransformationState::Invalid => dscs_sys::DSCS_ItsInvalid,
            InputTransformationState::Unknown(other) => other,
        }
    }
}

bitflags! {
    /// Bitmask describing which output limiters are currently engaged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LimiterState: i32 {
        /// NFO output clipped at the lower ADC limit
        const NFO_ADC_MIN = dscs_sys::DSCS_LimNfoAdcMin;
        /// NFO output clipped at the upper ADC limit
        const NFO_ADC_MAX = dscs_sys::DSCS_LimNfoAdcMax;
        /// SAM output clipped at the lower ADC limit
        const SAM_ADC_MIN = dscs_sys::DSCS_LimSamAdcMin;
        /// SAM output clipped at the upper ADC limit
        const SAM_ADC_MAX = dscs_sys::DSCS_LimSamAdcMax;
        /// NFO output slew rate limited
        const NFO_SLEW_RATE = dscs_sys::DSCS_LimNfoSlewRate;
        /// SAM output slew rate limited
        const SAM_SLEW_RATE = dscs_sys::DSCS_LimSamSlewRate;
    }
}

/// Sequence number assigned to a device by discovery.
///
/// Valid until the next discovery run; all vendor calls address devices
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIndex(pub u32);

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptor of a discovered device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// Programmed hardware ID
    pub id: i32,
    /// Serial number string
    pub serial_no: String,
    /// Interface address ("USB" or a dotted-decimal IP)
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_raw_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_raw(), axis as u32);
        }
    }

    #[test]
    fn test_target_mode_from_raw() {
        assert_eq!(
            TargetMode::from_raw(dscs_sys::DSCS_TmSetpointModulation),
            TargetMode::SetpointModulation
        );
        // Unknown values fall back to the static target registers
        assert_eq!(TargetMode::from_raw(99), TargetMode::TargetPosition);
    }

    #[test]
    fn test_input_transformation_state_unknown() {
        assert_eq!(
            InputTransformationState::from_raw(42),
            InputTransformationState::Unknown(42)
        );
        assert_eq!(InputTransformationState::Unknown(42).to_raw(), 42);
    }

    #[test]
    fn test_limiter_state_bits() {
        let state = LimiterState::from_bits_retain(
            dscs_sys::DSCS_LimNfoAdcMin | dscs_sys::DSCS_LimSamSlewRate,
        );
        assert!(state.contains(LimiterState::NFO_ADC_MIN));
        assert!(state.contains(LimiterState::SAM_SLEW_RATE));
        assert!(!state.contains(LimiterState::NFO_ADC_MAX));
    }
}
