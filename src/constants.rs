pub(crate) const SERIAL_TIMEOUT_MS: u64 = 1000;

pub(crate) const DEFAULT_BAUD_RATE: u32 = 9600;
pub(crate) const DEFAULT_LINE_DELAY_MS: u64 = 100;

pub(crate) const LINUX_DEFAULT_PORT: &str = "/dev/ttyACM0";
pub(crate) const WINDOWS_DEFAULT_PORT: &str = "COM3";
