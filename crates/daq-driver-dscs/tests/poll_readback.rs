//! Poll cycle behavior: readback publication and failure isolation.

use daq_driver_dscs::{
    Axis, DscsConfig, DscsController, MockDscsSdk, ParamId, PvValue, VendorStatus,
};
use std::sync::Arc;
use std::time::Duration;

fn config() -> DscsConfig {
    DscsConfig {
        device_id: 4223,
        auto_start_poller: false,
        ..DscsConfig::default()
    }
}

fn read(controller: &DscsController, name: &str) -> PvValue {
    let index = controller.index_of(name).unwrap();
    controller.read(index).unwrap()
}

#[test]
fn seeded_registers_land_in_readbacks() {
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::Nfo(Axis::Y), PvValue::Int(123_456));
    sdk.set_register(ParamId::PiIValueNfo, PvValue::Float(0.25));
    sdk.set_register(ParamId::PiTargetMode, PvValue::Int(1));
    sdk.set_register(ParamId::InputState, PvValue::Int(2));
    sdk.set_register(ParamId::LimiterState, PvValue::Int(0x11));
    sdk.set_register(ParamId::TrajTurnTime, PvValue::Int(40));
    sdk.set_register(ParamId::XzZx(daq_driver_dscs::XzChannel::Zx), PvValue::Int(-9));

    // The connect itself runs the first poll cycle
    let controller = DscsController::connect(&config(), sdk).unwrap();

    assert_eq!(read(&controller, "NFO_Y"), PvValue::Int(123_456));
    assert_eq!(read(&controller, "PI_IVAL_NFO_RBV"), PvValue::Float(0.25));
    assert_eq!(read(&controller, "PI_TARG_MODE_RBV"), PvValue::Int(1));
    assert_eq!(read(&controller, "INP_TRANS_STATE"), PvValue::Int(2));
    assert_eq!(read(&controller, "LIM_STATE"), PvValue::Int(0x11));
    assert_eq!(read(&controller, "TRAJ_TURN_TIME_RBV"), PvValue::Int(40));
    assert_eq!(read(&controller, "XZ_ZX_ZX"), PvValue::Int(-9));
}

#[test]
fn paired_reads_fill_both_entries() {
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::NfoAdcLimitMin, PvValue::Int(-4000));
    sdk.set_register(ParamId::NfoAdcLimitMax, PvValue::Int(4000));
    sdk.set_register(ParamId::OutputNfoResult(Axis::Z), PvValue::Int(17));
    sdk.set_register(ParamId::OutputSamResult(Axis::Z), PvValue::Int(-17));

    let controller = DscsController::connect(&config(), sdk).unwrap();

    assert_eq!(read(&controller, "NFO_ADC_LIM_MIN_RBV"), PvValue::Int(-4000));
    assert_eq!(read(&controller, "NFO_ADC_LIM_MAX_RBV"), PvValue::Int(4000));
    assert_eq!(read(&controller, "OUT_TRANS_NFO_RES_Z"), PvValue::Int(17));
    assert_eq!(read(&controller, "OUT_TRANS_SAM_RES_Z"), PvValue::Int(-17));
}

#[test]
fn limiter_state_accessor_decodes_bits() {
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::LimiterState, PvValue::Int(0x21));
    let controller = DscsController::connect(&config(), sdk).unwrap();

    let state = controller.limiter_state();
    assert!(state.contains(daq_driver_dscs::LimiterState::NFO_ADC_MIN));
    assert!(state.contains(daq_driver_dscs::LimiterState::SAM_SLEW_RATE));
    assert!(!state.contains(daq_driver_dscs::LimiterState::NFO_ADC_MAX));
}

#[test]
fn failed_read_keeps_previous_value() {
    let sdk = Arc::new(MockDscsSdk::new());
    sdk.set_register(ParamId::Nfo(Axis::X), PvValue::Int(5));
    sdk.set_register(ParamId::Nfo(Axis::Y), PvValue::Int(6));
    let controller = DscsController::connect(&config(), Arc::<MockDscsSdk>::clone(&sdk)).unwrap();
    assert_eq!(read(&controller, "NFO_X"), PvValue::Int(5));

    // The register changes but the next read of it fails; the stale value
    // stays published and the rest of the cycle still runs.
    sdk.set_register(ParamId::Nfo(Axis::X), PvValue::Int(9));
    sdk.set_register(ParamId::Nfo(Axis::Y), PvValue::Int(66));
    sdk.fail_next_call("DSCS_getNFO", VendorStatus::Timeout);
    controller.poll_now();

    assert_eq!(read(&controller, "NFO_X"), PvValue::Int(5));
    assert_eq!(read(&controller, "NFO_Y"), PvValue::Int(66));

    // The failure was one-shot, the value catches up on the next cycle
    controller.poll_now();
    assert_eq!(read(&controller, "NFO_X"), PvValue::Int(9));
}

#[tokio::test]
async fn background_poller_publishes_changes() {
    let sdk = Arc::new(MockDscsSdk::new());
    let controller = DscsController::connect(
        &DscsConfig {
            device_id: 4223,
            poll_period_ms: 10,
            ..DscsConfig::default()
        },
        Arc::<MockDscsSdk>::clone(&sdk),
    )
    .unwrap();
    assert!(controller.is_polling());

    let index = controller.index_of("SAM_Z").unwrap();
    let mut rx = controller.subscribe(index).unwrap();
    sdk.set_register(ParamId::Sam(Axis::Z), PvValue::Int(777));

    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            rx.changed().await.unwrap();
            if *rx.borrow() == PvValue::Int(777) {
                break;
            }
        }
    })
    .await
    .expect("poller never published the new value");

    controller.stop_poller();
    assert!(!controller.is_polling());
}
