use std::time::Duration;

use tracing::debug;

use crate::{
    constants::{
        DEFAULT_BAUD_RATE, DEFAULT_LINE_DELAY_MS, LINUX_DEFAULT_PORT, WINDOWS_DEFAULT_PORT,
    },
    error::{SendError, SendResult},
    interface::{DeviceInterfaceType, SerialportParams},
};

/// Host operating systems with a known default port for the target board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Map an OS identifier as reported by `std::env::consts::OS`
    pub fn from_os(os: &str) -> SendResult<Platform> {
        match os {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(SendError::UnsupportedPlatform(other.to_owned())),
        }
    }

    pub fn current() -> SendResult<Platform> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn default_port(&self) -> &'static str {
        match self {
            Platform::Linux => LINUX_DEFAULT_PORT,
            Platform::Windows => WINDOWS_DEFAULT_PORT,
        }
    }
}

/// Everything needed to open the channel and pace the transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferConfig {
    pub device_path: String,
    pub baud_rate: u32,
    pub line_delay: Duration,
}

impl TransferConfig {
    pub fn new(device_path: impl Into<String>, baud_rate: u32, line_delay_ms: u64) -> Self {
        TransferConfig {
            device_path: device_path.into(),
            baud_rate,
            line_delay: Duration::from_millis(line_delay_ms),
        }
    }
}

/// Figure out the full transfer config for the given OS identifier.
/// interface_type can be provided to override the default port and baud rate.
/// An unrecognised platform is an error even when a port is given.
/// Never touches any device.
pub fn config_for_platform(
    os: &str,
    interface_type: Option<DeviceInterfaceType>,
    line_delay_ms: Option<u64>,
) -> SendResult<TransferConfig> {
    let platform = Platform::from_os(os)?;

    let params = match interface_type {
        Some(DeviceInterfaceType::Serial(params)) => params,
        None => SerialportParams::default(),
    };

    let port = params
        .port
        .unwrap_or_else(|| platform.default_port().to_owned());

    let config = TransferConfig::new(
        port,
        params.baud.unwrap_or(DEFAULT_BAUD_RATE),
        line_delay_ms.unwrap_or(DEFAULT_LINE_DELAY_MS),
    );
    debug!("Resolved transfer config {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_linux_and_windows() {
        assert_eq!(Platform::from_os("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::Linux.default_port(), "/dev/ttyACM0");
        assert_eq!(Platform::Windows.default_port(), "COM3");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn current_platform_on_linux() {
        assert_eq!(Platform::current().unwrap(), Platform::Linux);
    }

    #[test]
    fn rejects_other_platforms() {
        for os in ["macos", "freebsd", ""] {
            match Platform::from_os(os) {
                Err(SendError::UnsupportedPlatform(name)) => assert_eq!(name, os),
                other => panic!("expected UnsupportedPlatform, got {:?}", other),
            }
        }
    }

    #[test]
    fn defaults_per_platform() {
        let config = config_for_platform("linux", None, None).unwrap();
        assert_eq!(config, TransferConfig::new("/dev/ttyACM0", 9600, 100));

        let config = config_for_platform("windows", None, None).unwrap();
        assert_eq!(config.device_path, "COM3");
    }

    #[test]
    fn overrides_take_precedence() {
        let interface = DeviceInterfaceType::Serial(SerialportParams {
            port: Some("/dev/ttyACM1".to_string()),
            baud: Some(9000),
        });
        let config = config_for_platform("linux", Some(interface), Some(20)).unwrap();
        assert_eq!(config, TransferConfig::new("/dev/ttyACM1", 9000, 20));
    }

    #[test]
    fn explicit_port_on_unsupported_platform_fails() {
        let interface = DeviceInterfaceType::Serial(SerialportParams {
            port: Some("/dev/cu.usbmodem1101".to_string()),
            baud: Some(9600),
        });
        match config_for_platform("macos", Some(interface), Some(10)) {
            Err(SendError::UnsupportedPlatform(os)) => assert_eq!(os, "macos"),
            other => panic!("expected UnsupportedPlatform, got {:?}", other),
        }
    }

    #[test]
    fn unsupported_platform_without_port_fails() {
        let interface = DeviceInterfaceType::Serial(SerialportParams {
            port: None,
            baud: Some(9600),
        });
        assert!(matches!(
            config_for_platform("haiku", Some(interface), None),
            Err(SendError::UnsupportedPlatform(_))
        ));
    }
}
