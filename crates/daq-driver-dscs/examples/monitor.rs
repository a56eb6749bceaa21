//! Connects to a mock DSCS controller and dumps the process value table.
//!
//! Run with `RUST_LOG=debug` to see the driver's structured log output.

use anyhow::Result;
use daq_driver_dscs::{
    Axis, DscsConfig, DscsController, MockDscsSdk, ParamId, PvValue,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Seed a few registers so the dump shows non-zero readbacks.
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::Nfo(Axis::X), PvValue::Int(123_456));
    sdk.set_register(ParamId::Nfo(Axis::Y), PvValue::Int(-7_890));
    sdk.set_register(ParamId::PiIValueNfo, PvValue::Float(0.0625));

    let config = DscsConfig {
        device_id: 4223,
        poll_period_ms: 200,
        auto_start_poller: false,
        ..DscsConfig::default()
    };
    let controller = DscsController::connect(&config, sdk)?;

    let descriptor = controller.device_descriptor();
    println!(
        "connected to device {} (serial {}, address {}), library {}",
        descriptor.id,
        descriptor.serial_no,
        descriptor.address,
        controller.library_version()
    );

    controller.write_named("NFO_PS_X", PvValue::Int(2000))?;
    controller.write_named("PI_IVAL_NFO", PvValue::Float(0.125))?;
    controller.poll_now();

    println!("\nprocess values:");
    for entry in controller.table().entries() {
        println!("  {:24} {}", entry.name(), entry.value());
    }

    Ok(())
}
