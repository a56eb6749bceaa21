//! Error types for DSCS operations.
//!
//! Every vendor call returns an integer status code; [`VendorStatus`] maps
//! each code to its fixed human-readable message and [`DscsError`] wraps it
//! together with the driver's own failure modes.

use std::fmt;
use thiserror::Error;

/// Result type alias for DSCS operations.
pub type Result<T> = std::result::Result<T, DscsError>;

/// Status code returned by the vendor library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorStatus {
    /// Call succeeded
    Ok,
    /// Unspecified failure
    GeneralError,
    /// Communication timed out
    Timeout,
    /// No active connection to the device
    NotConnected,
    /// Low-level driver communication failure
    DriverError,
    /// Device is locked by another client
    DeviceLocked,
    /// Unknown error reported by the library
    Unknown,
    /// Invalid device number passed to a call
    NoDevice,
    /// A parameter exceeded its allowed range
    ParamOutOfRange,
    /// Status code not known to this driver
    Other(i32),
}

impl VendorStatus {
    /// Maps a raw status code to its variant.
    pub fn from_raw(code: i32) -> Self {
        match code {
            x if x == dscs_sys::DSCS_Ok => VendorStatus::Ok,
            x if x == dscs_sys::DSCS_Error => VendorStatus::GeneralError,
            x if x == dscs_sys::DSCS_Timeout => VendorStatus::Timeout,
            x if x == dscs_sys::DSCS_NotConnected => VendorStatus::NotConnected,
            x if x == dscs_sys::DSCS_DriverError => VendorStatus::DriverError,
            x if x == dscs_sys::DSCS_DeviceLocked => VendorStatus::DeviceLocked,
            x if x == dscs_sys::DSCS_Unknown => VendorStatus::Unknown,
            x if x == dscs_sys::DSCS_NoDevice => VendorStatus::NoDevice,
            x if x == dscs_sys::DSCS_ParamOutOfRg => VendorStatus::ParamOutOfRange,
            other => VendorStatus::Other(other),
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorStatus::Ok => write!(f, "No error"),
            VendorStatus::GeneralError => write!(f, "Unspecified error"),
            VendorStatus::Timeout => write!(f, "Communication timeout"),
            VendorStatus::NotConnected => write!(f, "No active connection to device"),
            VendorStatus::DriverError => write!(f, "Error in communication with driver"),
            VendorStatus::DeviceLocked => write!(f, "Device is already in use by other"),
            VendorStatus::Unknown => write!(f, "Unknown error"),
            VendorStatus::NoDevice => write!(f, "Invalid device number in function call"),
            VendorStatus::ParamOutOfRange => write!(f, "A parameter exceeds the allowed range"),
            VendorStatus::Other(code) => write!(f, "Unknown error code ({})", code),
        }
    }
}

/// Errors that can occur when working with a DSCS controller.
#[derive(Error, Debug)]
pub enum DscsError {
    /// A vendor call returned a non-zero status code
    #[error("{function}: {status}")]
    Vendor {
        /// Name of the vendor function that failed
        function: &'static str,
        /// Decoded status code
        status: VendorStatus,
    },

    /// Discovery completed without finding any device
    #[error("No DSCS devices found during discovery")]
    NoDevicesFound,

    /// No discovered device carries the configured hardware ID
    #[error("No discovered DSCS device matches hardware id {device_id}")]
    DeviceNotFound {
        /// The hardware ID that was searched for
        device_id: i32,
    },

    /// Process value name or index not present in the table
    #[error("Unknown process value '{name}'")]
    UnknownParameter {
        /// The rejected name or index
        name: String,
    },

    /// Write attempted on a read-only process value
    #[error("Process value '{name}' is read-only")]
    ReadOnlyParameter {
        /// Name of the read-only process value
        name: String,
    },

    /// Written value does not match the process value's scalar kind
    #[error("Process value '{name}' expects {expected} values")]
    TypeMismatch {
        /// Name of the process value
        name: String,
        /// Expected scalar kind
        expected: &'static str,
    },

    /// Transformation matrix index outside the device's matrix dimensions
    #[error("Matrix index ({row}, {column}) out of range for a {rows}x{columns} matrix")]
    InvalidMatrixIndex {
        /// Rejected row
        row: u32,
        /// Rejected column
        column: u32,
        /// Number of rows in the matrix
        rows: u32,
        /// Number of columns in the matrix
        columns: u32,
    },

    /// Transformation coefficient outside the 8.40 fixed point range
    #[error("Matrix coefficient {value} outside the representable range (-128, 128)")]
    CoefficientOutOfRange {
        /// Rejected coefficient
        value: f64,
    },

    /// Configuration failed validation or could not be loaded
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },
}

impl DscsError {
    /// Converts a vendor status code into a `Result`, tagging failures with
    /// the originating function name.
    pub(crate) fn check(function: &'static str, code: i32) -> Result<()> {
        if code == dscs_sys::DSCS_Ok {
            Ok(())
        } else {
            Err(DscsError::Vendor {
                function,
                status: VendorStatus::from_raw(code),
            })
        }
    }

    /// Check if this is a communication timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DscsError::Vendor {
                status: VendorStatus::Timeout,
                ..
            }
        )
    }

    /// Check if the device is locked by another client.
    pub fn is_device_locked(&self) -> bool {
        matches!(
            self,
            DscsError::Vendor {
                status: VendorStatus::DeviceLocked,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(VendorStatus::Timeout.to_string(), "Communication timeout");
        assert_eq!(
            VendorStatus::NotConnected.to_string(),
            "No active connection to device"
        );
        assert_eq!(
            VendorStatus::DeviceLocked.to_string(),
            "Device is already in use by other"
        );
        assert_eq!(
            VendorStatus::NoDevice.to_string(),
            "Invalid device number in function call"
        );
        assert_eq!(
            VendorStatus::ParamOutOfRange.to_string(),
            "A parameter exceeds the allowed range"
        );
        assert_eq!(
            VendorStatus::Other(77).to_string(),
            "Unknown error code (77)"
        );
    }

    #[test]
    fn test_check_maps_codes() {
        assert!(DscsError::check("DSCS_connect", dscs_sys::DSCS_Ok).is_ok());

        let err = DscsError::check("DSCS_connect", dscs_sys::DSCS_Timeout)
            .err()
            .map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("DSCS_connect: Communication timeout")
        );
    }

    #[test]
    fn test_predicates() {
        let err = DscsError::Vendor {
            function: "DSCS_getNFO",
            status: VendorStatus::Timeout,
        };
        assert!(err.is_timeout());
        assert!(!err.is_device_locked());
    }

    #[test]
    fn test_from_raw_unknown_code() {
        assert_eq!(VendorStatus::from_raw(1234), VendorStatus::Other(1234));
    }
}
