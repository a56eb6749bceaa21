//! Driver configuration.
//!
//! Loaded from a TOML file with `DSCS_` prefixed environment variables
//! layered on top, so deployments can override single fields without editing
//! the file.

use crate::error::{DscsError, Result};
use crate::types::InterfaceType;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration of one DSCS controller connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DscsConfig {
    /// Hardware ID the target device must carry.
    pub device_id: i32,
    /// Interfaces searched during discovery.
    pub interface: InterfaceType,
    /// Poll period of the background poller in milliseconds.
    pub poll_period_ms: u64,
    /// Start the background poller right after connecting.
    pub auto_start_poller: bool,
}

impl Default for DscsConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            interface: InterfaceType::All,
            poll_period_ms: 1000,
            auto_start_poller: true,
        }
    }
}

impl DscsConfig {
    /// Loads the configuration from a TOML file, then applies `DSCS_`
    /// prefixed environment variables on top.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: DscsConfig = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DSCS_"))
            .extract()
            .map_err(|e| DscsError::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the field values for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.device_id < 0 {
            return Err(DscsError::InvalidConfig {
                message: format!("device_id must not be negative, got {}", self.device_id),
            });
        }
        if self.poll_period_ms == 0 {
            return Err(DscsError::InvalidConfig {
                message: "poll_period_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Poll period as a `Duration`.
    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poll_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DscsConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.interface, InterfaceType::All);
        assert_eq!(config.poll_period(), Duration::from_millis(1000));
        assert!(config.auto_start_poller);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "device_id = 4223\ninterface = \"usb\"\npoll_period_ms = 200"
        )
        .unwrap();

        let config = DscsConfig::load(file.path()).unwrap();
        assert_eq!(config.device_id, 4223);
        assert_eq!(config.interface, InterfaceType::Usb);
        assert_eq!(config.poll_period_ms, 200);
        // Unset fields keep their defaults
        assert!(config.auto_start_poller);
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("dscs.toml", "device_id = 1\npoll_period_ms = 1000")?;
            jail.set_env("DSCS_POLL_PERIOD_MS", "250");

            let config = DscsConfig::load("dscs.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.device_id, 1);
            assert_eq!(config.poll_period_ms, 250);
            Ok(())
        });
    }

    #[test]
    fn test_rejects_zero_poll_period() {
        let config = DscsConfig {
            poll_period_ms: 0,
            ..DscsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DscsError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_device_id() {
        let config = DscsConfig {
            device_id: -7,
            ..DscsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DscsError::InvalidConfig { .. })
        ));
    }
}
