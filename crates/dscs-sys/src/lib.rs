//! Low-level FFI bindings for the NHands DSCS control library.
//!
//! This crate provides raw, unsafe bindings to `libdscs`, the vendor
//! user-space library for the DSCS digital nanopositioning controller.
//! Devices are discovered over USB, identified by a sequence number, and
//! controlled through blocking getter/setter calls that each return an
//! integer status code (`DSCS_Ok` on success).
//!
//! # Safety
//!
//! All functions in this crate are `unsafe` as they are direct FFI bindings.
//! The vendor documents the library as not thread safe; callers must
//! serialize access themselves. For a safe wrapper, use the
//! `daq-driver-dscs` crate instead.
//!
//! # Features
//!
//! - `dscs-sdk`: Generate bindings from the installed vendor headers.
//!   Without this feature, pre-defined bindings with panicking link stubs
//!   are used so the workspace builds on machines without the SDK.
//!
//! # Example (unsafe)
//!
//! ```no_run
//! use dscs_sys::*;
//!
//! unsafe {
//!     let mut dev_count = 0;
//!     if DSCS_discover(DSCS_IfAll, &mut dev_count) == DSCS_Ok && dev_count > 0 {
//!         if DSCS_connect(0) == DSCS_Ok {
//!             let mut value = 0;
//!             DSCS_getNFO(0, DSCS_AxisX, &mut value);
//!             println!("NFO x: {}", value);
//!             DSCS_disconnect(0);
//!         }
//!     }
//! }
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(clippy::all)]

// Include the generated bindings
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_constants() {
        // Success must be zero; the driver relies on it
        assert_eq!(DSCS_Ok, 0);
        // The remaining codes must stay distinct
        let codes = [
            DSCS_Error,
            DSCS_Timeout,
            DSCS_NotConnected,
            DSCS_DriverError,
            DSCS_DeviceLocked,
            DSCS_Unknown,
            DSCS_NoDevice,
            DSCS_ParamOutOfRg,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, DSCS_Ok);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_axis_constants() {
        assert_eq!(DSCS_AxisX, 0);
        assert_eq!(DSCS_AxisY, 1);
        assert_eq!(DSCS_AxisZ, 2);
    }

    #[test]
    fn test_limiter_bits_disjoint() {
        let bits = [
            DSCS_LimNfoAdcMin,
            DSCS_LimNfoAdcMax,
            DSCS_LimSamAdcMin,
            DSCS_LimSamAdcMax,
            DSCS_LimNfoSlewRate,
            DSCS_LimSamSlewRate,
        ];
        let mut seen = 0;
        for bit in bits {
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
    }
}
