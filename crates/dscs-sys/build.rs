//! Build script for dscs-sys FFI bindings.
//!
//! This script generates Rust FFI bindings from the vendor DSCS headers
//! using bindgen. It supports two modes:
//!
//! 1. With `dscs-sdk` feature: Generates bindings from the installed headers
//! 2. Without feature: Uses pre-generated dummy bindings so the workspace
//!    builds and tests on machines without the vendor SDK

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-env-changed=DSCS_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=DSCS_LIB_DIR");

    #[cfg(feature = "dscs-sdk")]
    generate_bindings();

    #[cfg(not(feature = "dscs-sdk"))]
    generate_dummy_bindings();

    // Link against the vendor library when building with the SDK
    #[cfg(feature = "dscs-sdk")]
    {
        // Try pkg-config first
        if pkg_config::probe_library("dscs").is_ok() {
            return;
        }

        println!("cargo:rustc-link-lib=dscs");

        if let Ok(dir) = env::var("DSCS_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", dir);
            return;
        }

        // Fallback to standard locations
        let lib_paths = ["/usr/local/lib", "/usr/lib", "/usr/lib/x86_64-linux-gnu"];

        for path in lib_paths {
            if std::path::Path::new(path).join("libdscs.so").exists()
                || std::path::Path::new(path).join("libdscs.a").exists()
            {
                println!("cargo:rustc-link-search=native={}", path);
                break;
            }
        }
    }
}

#[cfg(feature = "dscs-sdk")]
fn generate_bindings() {
    // Determine include directory
    let include_dir = env::var("DSCS_INCLUDE_DIR").unwrap_or_else(|_| {
        if let Ok(lib) = pkg_config::probe_library("dscs") {
            lib.include_paths
                .first()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| "/usr/local/include".to_string())
        } else {
            for path in ["/usr/local/include", "/usr/include"] {
                if std::path::Path::new(path).join("dscs.h").exists() {
                    return path.to_string();
                }
            }
            "/usr/local/include".to_string()
        }
    });

    println!("cargo:rerun-if-changed={}/dscs.h", include_dir);

    let bindings = bindgen::Builder::default()
        .header("wrapper.h")
        .clang_arg(format!("-I{}", include_dir))
        // Allow all DSCS functions, types and constants
        .allowlist_function("DSCS_.*")
        .allowlist_type("DSCS_.*")
        .allowlist_type("bln32")
        .allowlist_var("DSCS_.*")
        // Use default enum style to keep constants at top level (matches dummy bindings)
        .default_enum_style(bindgen::EnumVariation::Consts)
        // Derive common traits
        .derive_debug(true)
        .derive_default(true)
        .derive_copy(true)
        // Parse block comments as doc comments
        .generate_comments(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate DSCS bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}

/// Generate dummy bindings when the SDK is not available.
/// This allows the crate to compile on systems without libdscs installed.
#[cfg(not(feature = "dscs-sdk"))]
fn generate_dummy_bindings() {
    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    let dummy = r#"
// Dummy bindings - dscs-sdk feature not enabled
//
// These are placeholder types and functions that allow the crate to compile
// without the vendor DSCS headers. Enable the `dscs-sdk` feature to generate
// real bindings from the installed SDK.

use std::os::raw::{c_char, c_int, c_uint};

/// Boolean type of the vendor library (0 = false, nonzero = true)
pub type bln32 = c_int;

/// Axis selector (x, y, z)
pub type DSCS_Axis = c_uint;

/// Auxiliary channel selector for AUX_DAC / AUX_ADC
pub type DSCS_AUX_ADC = c_uint;

/// Index selector for the XZ_ZX analog inputs
pub type DSCS_XZ_ZX = c_uint;

/// Interfaces to search during discovery
pub type DSCS_InterfaceType = c_int;

/// Kind of connection held to a device
pub type DSCS_ConnectionType = c_int;

/// Source selection for the PI controller target
pub type DSCS_TargetMode = c_int;

/// Bitmask describing which limiters are currently engaged
pub type DSCS_LimiterState = c_int;

/// State of the input transformation pipeline
pub type DSCS_InputTransformationState = c_int;

/// Callback for streamed data values on the secondary connection
pub type DSCS_DataCallback =
    Option<unsafe extern "C" fn(devNo: c_uint, length: c_uint, data: *const c_int)>;

// Status codes returned by every library call
pub const DSCS_Ok: c_int = 0;
pub const DSCS_Error: c_int = 1;
pub const DSCS_Timeout: c_int = 2;
pub const DSCS_NotConnected: c_int = 3;
pub const DSCS_DriverError: c_int = 4;
pub const DSCS_DeviceLocked: c_int = 5;
pub const DSCS_Unknown: c_int = 6;
pub const DSCS_NoDevice: c_int = 7;
pub const DSCS_ParamOutOfRg: c_int = 8;

// Axis selectors
pub const DSCS_AxisX: DSCS_Axis = 0;
pub const DSCS_AxisY: DSCS_Axis = 1;
pub const DSCS_AxisZ: DSCS_Axis = 2;

// XZ_ZX input indices
pub const DSCS_IndexXZ: DSCS_XZ_ZX = 0;
pub const DSCS_IndexZX: DSCS_XZ_ZX = 1;

// Discovery interfaces
pub const DSCS_IfNone: DSCS_InterfaceType = 0;
pub const DSCS_IfUsb: DSCS_InterfaceType = 1;
pub const DSCS_IfTcp: DSCS_InterfaceType = 2;
pub const DSCS_IfAll: DSCS_InterfaceType = 3;

// Connection types
pub const DSCS_ConNone: DSCS_ConnectionType = 0;
pub const DSCS_ConControl: DSCS_ConnectionType = 1;
pub const DSCS_ConData: DSCS_ConnectionType = 2;

// PI controller target modes
pub const DSCS_TmTargetPosition: DSCS_TargetMode = 0;
pub const DSCS_TmSetpointModulation: DSCS_TargetMode = 1;

// Limiter state bits
pub const DSCS_LimNfoAdcMin: DSCS_LimiterState = 0x01;
pub const DSCS_LimNfoAdcMax: DSCS_LimiterState = 0x02;
pub const DSCS_LimSamAdcMin: DSCS_LimiterState = 0x04;
pub const DSCS_LimSamAdcMax: DSCS_LimiterState = 0x08;
pub const DSCS_LimNfoSlewRate: DSCS_LimiterState = 0x10;
pub const DSCS_LimSamSlewRate: DSCS_LimiterState = 0x20;

// Input transformation states
pub const DSCS_ItsDisabled: DSCS_InputTransformationState = 0;
pub const DSCS_ItsRunning: DSCS_InputTransformationState = 1;
pub const DSCS_ItsInvalid: DSCS_InputTransformationState = 2;

// Panic stub implementations - these allow linking to succeed but will panic at
// runtime if called without the dscs-sdk feature enabled.
//
// This is intentional: it allows the workspace to build and test on systems
// without libdscs installed, while still catching any accidental usage at
// runtime.

const DSCS_SDK_PANIC_MSG: &str = "DSCS function called but dscs-sdk feature is not enabled. \
    Enable the dscs-sdk feature (or hardware in daq-driver-dscs) to use the real vendor library.";

#[no_mangle]
pub unsafe extern "C" fn DSCS_getVersion() -> *const c_char {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_discover(_ifaces: DSCS_InterfaceType, _devCount: *mut c_uint) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getDeviceInfo(
    _devNo: c_uint,
    _id: *mut c_int,
    _serialNo: *mut c_char,
    _address: *mut c_char,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getConnectionType(_devNo: c_uint) -> DSCS_ConnectionType {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_connect(_devNo: c_uint) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_disconnect(_devNo: c_uint) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setDataCallback(_devNo: c_uint, _callback: DSCS_DataCallback) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setDataOutputEnabled(_devNo: c_uint, _enable: bln32) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getOSA_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setOSA_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getBS_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setBS_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getAUX_DAC(_devNo: c_uint, _aux: DSCS_AUX_ADC, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setAUX_DAC(_devNo: c_uint, _aux: DSCS_AUX_ADC, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getNFO_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setNFO_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSAM_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSAM_PS(_devNo: c_uint, _axis: DSCS_Axis, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getNFO_SG(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSAM_CP_D(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getXZ_ZX(_devNo: c_uint, _index: DSCS_XZ_ZX, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getAUX_ADC(_devNo: c_uint, _aux: DSCS_AUX_ADC, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getNFO(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSAM(_devNo: c_uint, _axis: DSCS_Axis, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSetpointModulationFrequency(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSetpointModulationFrequency(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSetpointModulationPhase(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSetpointModulationPhase(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSetpointModulationAmplitude(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSetpointModulationAmplitude(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_resetSetpointModulationPhase(_devNo: c_uint) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getExternalADCShift(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setExternalADCShift(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerEnabled(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _enabled: *mut bln32,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerEnabled(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _enable: bln32,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerInverted(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _inverted: *mut bln32,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerInverted(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _inverted: bln32,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerIValueNFO(_devNo: c_uint, _value: *mut f64) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerIValueNFO(_devNo: c_uint, _value: f64) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerPValueNFO(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerPValueNFO(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerIValueSAM(_devNo: c_uint, _value: *mut f64) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerIValueSAM(_devNo: c_uint, _value: f64) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerPValueSAM(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerPValueSAM(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerLimitNFO(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerLimitNFO(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerAverageNFO(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerAverageNFO(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerLimitSAM(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerLimitSAM(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerTargetPosition(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerTargetPosition(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerTargetMode(
    _devNo: c_uint,
    _mode: *mut DSCS_TargetMode,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setPIControllerTargetMode(_devNo: c_uint, _mode: DSCS_TargetMode) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_resetPIController(_devNo: c_uint) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerNFOOutput(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getPIControllerSAMOutput(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _value: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getNFOADCLimits(_devNo: c_uint, _min: *mut c_int, _max: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setNFOADCLimits(_devNo: c_uint, _min: c_int, _max: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getNFOSlewRateLimit(_devNo: c_uint, _limit: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setNFOSlewRateLimit(_devNo: c_uint, _limit: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSAMADCLimits(_devNo: c_uint, _min: *mut c_int, _max: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSAMADCLimits(_devNo: c_uint, _min: c_int, _max: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getSAMSlewRateLimit(_devNo: c_uint, _limit: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setSAMSlewRateLimit(_devNo: c_uint, _limit: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getLimiterState(_devNo: c_uint, _state: *mut DSCS_LimiterState) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setInputTransformationMatrix(
    _devNo: c_uint,
    _row: c_int,
    _column: c_int,
    _coeff1: c_int,
    _coeff2: c_int,
    _coeff3: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getInputTransformationResult(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _result: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getInputTransformationAverage(_devNo: c_uint, _result: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getInputTransformationState(
    _devNo: c_uint,
    _state: *mut DSCS_InputTransformationState,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setOutputTransformationMatrix(
    _devNo: c_uint,
    _row: c_int,
    _column: c_int,
    _coeff1: c_int,
    _coeff2: c_int,
    _coeff3: c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getOutputTransformationResult(
    _devNo: c_uint,
    _axis: DSCS_Axis,
    _nfo: *mut c_int,
    _sam: *mut c_int,
) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineStartX(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineStartX(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineEndX(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineEndX(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineSpeedX(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineSpeedX(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineStartY(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineStartY(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineDistY(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineDistY(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryLineCountY(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryLineCountY(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryTurnTime(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryTurnTime(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryPosTime(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryPosTime(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectoryAntiHyst(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectoryAntiHyst(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_getTrajectorySettings(_devNo: c_uint, _value: *mut c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}

#[no_mangle]
pub unsafe extern "C" fn DSCS_setTrajectorySettings(_devNo: c_uint, _value: c_int) -> c_int {
    panic!("{}", DSCS_SDK_PANIC_MSG);
}
"#;

    std::fs::write(out_path.join("bindings.rs"), dummy).expect("Couldn't write dummy bindings!");
}
