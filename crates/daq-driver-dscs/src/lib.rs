//! Driver for the NHands DSCS digital nanopositioning controller.
//!
//! The DSCS controls a three axis scan stage through two cascaded actuator
//! stages (NFO and SAM) with PI position control, setpoint modulation,
//! coordinate transformations and output limiters. The vendor control
//! library exposes each register through a get/set call pair; this crate
//! turns those registers into named process values with cached readbacks and
//! change subscriptions.
//!
//! # Architecture
//!
//! * [`sdk`] wraps the vendor library behind the [`DscsSdk`] trait, with
//!   [`LibDscsSdk`] calling through FFI and [`MockDscsSdk`] running against
//!   an in-memory register map.
//! * [`pv`] holds the process value table: one setpoint and one `_RBV`
//!   readback entry per writable register, a single entry per read-only
//!   register, each with a `watch` channel for subscriptions.
//! * [`controller`] ties the two together: device discovery and selection,
//!   a background poll thread that refreshes every readback, and host write
//!   dispatch to the matching vendor setter.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use daq_driver_dscs::{DscsConfig, DscsController, MockDscsSdk, PvValue};
//!
//! # fn main() -> daq_driver_dscs::Result<()> {
//! let config = DscsConfig {
//!     device_id: 4223,
//!     ..DscsConfig::default()
//! };
//! let controller = DscsController::connect(&config, Arc::new(MockDscsSdk::new()))?;
//!
//! controller.write_named("NFO_PS_X", PvValue::Int(1500))?;
//! controller.poll_now();
//! let index = controller.index_of("NFO_PS_X_RBV").unwrap();
//! assert_eq!(controller.read(index), Some(PvValue::Int(1500)));
//! # Ok(())
//! # }
//! ```
//!
//! Real hardware needs the `hardware` feature and the vendor SDK installed;
//! see the `dscs-sys` crate for the build requirements.

pub mod config;
pub mod controller;
pub mod error;
pub mod pv;
pub mod sdk;
pub mod types;

pub use config::DscsConfig;
pub use controller::{
    DscsController, INPUT_MATRIX_COLUMNS, INPUT_MATRIX_ROWS, OUTPUT_MATRIX_COLUMNS,
    OUTPUT_MATRIX_ROWS,
};
pub use error::{DscsError, Result, VendorStatus};
pub use pv::{ParamId, PvAccess, PvEntry, PvIndex, PvKind, PvRole, PvTable, PvValue};
pub use sdk::{DscsSdk, LibDscsSdk, MockDscsSdk, SdkCall};
pub use types::{
    Axis, ConnectionType, DeviceDescriptor, DeviceIndex, InputTransformationState, InterfaceType,
    LimiterState, TargetMode, XzChannel,
};
