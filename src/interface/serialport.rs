use tracing::{debug, info, trace};

use super::DeviceInterface;
use crate::constants::SERIAL_TIMEOUT_MS;

use crate::error::{SendError, SendResult};
use std::io::Write;

pub type ComPort = String;
pub type BaudRate = u32;

/// Serial port device_interface layer
pub struct SerialPortDevice {
    port_name: ComPort,
    serial_port: Box<dyn serialport::SerialPort>,
}

impl SerialPortDevice {
    pub fn new(port: ComPort, baud: BaudRate) -> SendResult<SerialPortDevice> {
        let serial_port = serialport::new(port.as_str(), baud)
            .timeout(std::time::Duration::from_millis(SERIAL_TIMEOUT_MS))
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .open()
            .map_err(|e| SendError::SerialUnavailable {
                port: port.clone(),
                reason: e.to_string(),
            })?;

        info!("Opened {} at {} baud", port, baud);
        Ok(SerialPortDevice {
            port_name: port,
            serial_port,
        })
    }
}

impl DeviceInterface for SerialPortDevice {
    fn send(&mut self, bytes: &[u8]) -> SendResult<()> {
        self.serial_port
            .write_all(bytes)
            .map_err(|e| SendError::Communication(format!("Write to {} failed: {}", self.port_name, e)))?;
        debug!("Sent bytes {:?}", bytes);
        Ok(())
    }

    fn flush_buffers(&mut self) -> SendResult<()> {
        self.serial_port.flush().map_err(|e| {
            SendError::Communication(format!("Failed to flush {}: {}", self.port_name, e))
        })?;
        trace!("Flushed {}", self.port_name);
        Ok(())
    }

    fn name(&self) -> String {
        self.port_name.clone()
    }
}

impl Drop for SerialPortDevice {
    fn drop(&mut self) {
        debug!("Closing {}", self.port_name);
    }
}
