//! Device discovery and selection.

use daq_driver_dscs::{
    DeviceDescriptor, DscsConfig, DscsController, DscsError, MockDscsSdk,
};
use std::sync::Arc;

fn config(device_id: i32) -> DscsConfig {
    DscsConfig {
        device_id,
        auto_start_poller: false,
        ..DscsConfig::default()
    }
}

fn device(id: i32, serial: &str) -> DeviceDescriptor {
    DeviceDescriptor {
        id,
        serial_no: serial.to_string(),
        address: "USB".to_string(),
    }
}

#[test]
fn no_devices_found() {
    let sdk = Arc::new(MockDscsSdk::with_devices(Vec::new()));
    let err = DscsController::connect(&config(1), sdk).unwrap_err();
    assert!(matches!(err, DscsError::NoDevicesFound));
}

#[test]
fn selects_device_by_hardware_id() {
    let sdk = Arc::new(MockDscsSdk::with_devices(vec![
        device(1, "DSCS-0001"),
        device(7, "DSCS-0007"),
        device(9, "DSCS-0009"),
    ]));
    let controller = DscsController::connect(&config(7), sdk).unwrap();

    let descriptor = controller.device_descriptor();
    assert_eq!(descriptor.id, 7);
    assert_eq!(descriptor.serial_no, "DSCS-0007");
}

#[test]
fn missing_hardware_id_is_reported() {
    let sdk = Arc::new(MockDscsSdk::with_devices(vec![
        device(1, "DSCS-0001"),
        device(2, "DSCS-0002"),
    ]));
    let err = DscsController::connect(&config(7), sdk).unwrap_err();
    assert!(matches!(err, DscsError::DeviceNotFound { device_id: 7 }));
    assert!(err.to_string().contains('7'));
}

#[test]
fn stale_session_is_dropped_before_connect() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = DscsController::connect(&config(4223), Arc::<MockDscsSdk>::clone(&sdk)).unwrap();

    let functions: Vec<_> = sdk.calls().iter().map(|c| c.function).collect();
    assert_eq!(functions, vec!["DSCS_disconnect", "DSCS_connect"]);
    drop(controller);

    // Dropping the controller closes the session
    let functions: Vec<_> = sdk.calls().iter().map(|c| c.function).collect();
    assert_eq!(
        functions,
        vec!["DSCS_disconnect", "DSCS_connect", "DSCS_disconnect"]
    );
}

#[test]
fn invalid_config_is_rejected_before_discovery() {
    let sdk = Arc::new(MockDscsSdk::new());
    let bad = DscsConfig {
        poll_period_ms: 0,
        ..config(4223)
    };
    let err = DscsController::connect(&bad, Arc::<MockDscsSdk>::clone(&sdk)).unwrap_err();
    assert!(matches!(err, DscsError::InvalidConfig { .. }));
    assert!(sdk.calls().is_empty());
}
