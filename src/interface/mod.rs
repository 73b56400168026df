pub mod serialport;

use crate::error::SendResult;

/// Optional overrides for the serial connection. Fields left as `None`
/// fall back to the platform defaults.
#[derive(Debug, Clone, Default)]
pub struct SerialportParams {
    pub port: Option<String>,
    pub baud: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum DeviceInterfaceType {
    Serial(SerialportParams),
}

/// Write side of the channel to the target device. Implementors release
/// the underlying resource on drop.
pub trait DeviceInterface {
    /// Write all bytes to the target device
    fn send(&mut self, bytes: &[u8]) -> SendResult<()>;

    /// Block until everything written so far has left the host
    fn flush_buffers(&mut self) -> SendResult<()>;

    /// Name of the underlying device, for log messages
    fn name(&self) -> String;
}
