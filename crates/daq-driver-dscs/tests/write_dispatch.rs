//! Host write dispatch: setter mapping, type coercion and rejection paths.

use daq_driver_dscs::{
    DscsConfig, DscsController, DscsError, MockDscsSdk, ParamId, PvKind, PvRole, PvValue,
    VendorStatus,
};
use std::sync::Arc;

fn connect(sdk: &Arc<MockDscsSdk>) -> DscsController {
    let config = DscsConfig {
        device_id: 4223,
        auto_start_poller: false,
        ..DscsConfig::default()
    };
    let controller = DscsController::connect(&config, Arc::<MockDscsSdk>::clone(sdk)).unwrap();
    sdk.clear_calls();
    controller
}

#[test]
fn write_reaches_the_matching_setter() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    controller
        .write_named("NFO_PS_Y", PvValue::Int(2500))
        .unwrap();

    let calls = sdk.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].function, "DSCS_setNFO_PS");
    assert_eq!(calls[0].axis, Some(1));
    assert_eq!(calls[0].values, vec![2500.0]);

    // The setpoint cache reflects the write, the readback only after a poll
    let setpoint = controller.index_of("NFO_PS_Y").unwrap();
    let readback = controller.index_of("NFO_PS_Y_RBV").unwrap();
    assert_eq!(controller.read(setpoint), Some(PvValue::Int(2500)));
    assert_eq!(controller.read(readback), Some(PvValue::Int(0)));
    controller.poll_now();
    assert_eq!(controller.read(readback), Some(PvValue::Int(2500)));
}

#[test]
fn every_setpoint_dispatches_exactly_one_call() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    let setpoints: Vec<_> = controller
        .table()
        .entries()
        .filter(|e| e.role() == PvRole::Setpoint)
        .map(|e| (e.name().to_string(), e.kind()))
        .collect();
    assert!(!setpoints.is_empty());

    for (name, kind) in setpoints {
        let value = match kind {
            PvKind::Int => PvValue::Int(1),
            PvKind::Float => PvValue::Float(1.0),
        };
        sdk.clear_calls();
        controller.write_named(&name, value).unwrap();
        assert_eq!(sdk.calls().len(), 1, "write of {} made extra calls", name);
    }
}

#[test]
fn adc_limit_writes_carry_the_cached_sibling() {
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::NfoAdcLimitMax, PvValue::Int(800));
    let controller = connect(&sdk);

    // The upper bound comes from the polled readback
    controller
        .write_named("NFO_ADC_LIM_MIN", PvValue::Int(-100))
        .unwrap();
    let calls = sdk.calls();
    assert_eq!(calls[0].function, "DSCS_setNFOADCLimits");
    assert_eq!(calls[0].values, vec![-100.0, 800.0]);

    // The lower bound now comes from the setpoint just written
    sdk.clear_calls();
    controller
        .write_named("NFO_ADC_LIM_MAX", PvValue::Int(900))
        .unwrap();
    let calls = sdk.calls();
    assert_eq!(calls[0].values, vec![-100.0, 900.0]);
}

#[test]
fn integral_writes_to_float_registers_are_converted() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    controller.write_named("PI_IVAL_NFO", PvValue::Int(3)).unwrap();

    let calls = sdk.calls();
    assert_eq!(calls[0].function, "DSCS_setPIControllerIValueNFO");
    assert_eq!(calls[0].values, vec![3.0]);
    assert_eq!(sdk.register(ParamId::PiIValueNfo), Some(PvValue::Float(3.0)));

    let setpoint = controller.index_of("PI_IVAL_NFO").unwrap();
    assert_eq!(controller.read(setpoint), Some(PvValue::Float(3.0)));
}

#[test]
fn float_writes_to_integer_registers_are_rejected() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    let err = controller
        .write_named("NFO_PS_X", PvValue::Float(1.5))
        .unwrap_err();
    assert!(matches!(err, DscsError::TypeMismatch { .. }));
    assert!(err.to_string().contains("integer"));
    assert!(sdk.calls().is_empty());
}

#[test]
fn read_only_values_reject_writes() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    for name in ["NFO_X", "LIM_STATE", "PI_NFO_OUT_Z", "NFO_PS_X_RBV"] {
        let err = controller.write_named(name, PvValue::Int(1)).unwrap_err();
        assert!(
            matches!(err, DscsError::ReadOnlyParameter { .. }),
            "{} accepted a write",
            name
        );
    }
    assert!(sdk.calls().is_empty());
}

#[test]
fn unknown_names_are_rejected() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    let err = controller
        .write_named("NO_SUCH_PV", PvValue::Int(1))
        .unwrap_err();
    assert!(matches!(err, DscsError::UnknownParameter { .. }));
}

#[test]
fn failed_vendor_call_leaves_the_setpoint_cache_untouched() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);
    sdk.fail_next_call("DSCS_setOSA_PS", VendorStatus::NotConnected);

    let err = controller
        .write_named("OSA_PS_X", PvValue::Int(500))
        .unwrap_err();
    assert!(matches!(
        err,
        DscsError::Vendor {
            status: VendorStatus::NotConnected,
            ..
        }
    ));

    let setpoint = controller.index_of("OSA_PS_X").unwrap();
    assert_eq!(controller.read(setpoint), Some(PvValue::Int(0)));
}

#[test]
fn matrix_coefficients_are_split_into_fixed_point_words() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    controller
        .set_input_transformation_coefficient(1, 2, 1.0)
        .unwrap();
    let calls = sdk.calls();
    assert_eq!(calls[0].function, "DSCS_setInputTransformationMatrix");
    assert_eq!(calls[0].values, vec![1.0, 2.0, 256.0, 0.0, 0.0]);

    sdk.clear_calls();
    controller
        .set_output_transformation_coefficient(5, 6, -1.0)
        .unwrap();
    let calls = sdk.calls();
    assert_eq!(calls[0].function, "DSCS_setOutputTransformationMatrix");
    assert_eq!(calls[0].values, vec![5.0, 6.0, 65280.0, 0.0, 0.0]);
}

#[test]
fn matrix_bounds_are_enforced() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    assert!(matches!(
        controller.set_input_transformation_coefficient(3, 0, 1.0),
        Err(DscsError::InvalidMatrixIndex { rows: 3, .. })
    ));
    assert!(matches!(
        controller.set_input_transformation_coefficient(0, 15, 1.0),
        Err(DscsError::InvalidMatrixIndex { columns: 15, .. })
    ));
    assert!(matches!(
        controller.set_output_transformation_coefficient(6, 0, 1.0),
        Err(DscsError::InvalidMatrixIndex { rows: 6, .. })
    ));
    assert!(matches!(
        controller.set_input_transformation_coefficient(0, 0, 200.0),
        Err(DscsError::CoefficientOutOfRange { .. })
    ));
    assert!(sdk.calls().is_empty());
}

#[test]
fn commands_are_forwarded() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = connect(&sdk);

    controller.reset_pi_controller().unwrap();
    controller.reset_setpoint_modulation_phase().unwrap();
    controller.set_data_output_enabled(true).unwrap();

    let functions: Vec<_> = sdk.calls().iter().map(|c| c.function).collect();
    assert_eq!(
        functions,
        vec![
            "DSCS_resetPIController",
            "DSCS_resetSetpointModulationPhase",
            "DSCS_setDataOutputEnabled"
        ]
    );
}
