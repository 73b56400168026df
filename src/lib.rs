use std::{fs, io, path::Path, thread, time::Duration};

use error::{SendError, SendResult};
use interface::{DeviceInterface, DeviceInterfaceType, serialport::SerialPortDevice};
pub use platform::{Platform, TransferConfig};
use tracing::{debug, info};

pub(crate) mod constants;
pub mod error;
pub mod framing;
pub mod interface;
pub mod platform;
pub(crate) mod util;

/// Read a source file fully into memory. The file handle is closed on return.
pub fn read_source(file_path: impl AsRef<Path>) -> SendResult<String> {
    let file_path = file_path.as_ref();
    let text = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SendError::FileNotFound(file_path.display().to_string()),
        _ => SendError::FileRead(format!("{}: {}", file_path.display(), e)),
    })?;
    info!("Read {} ({} bytes)", file_path.display(), text.len());

    Ok(text)
}

/// Progress of a single transfer. The channel is closed when the
/// transmitter drops, whatever state it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransferState {
    NotStarted,
    Sending,
    SentinelSent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferSummary {
    pub lines_sent: usize,
    pub bytes_sent: usize,
}

/// Owns the channel to the target for exactly one transfer. Every `send_*`
/// method consumes the transmitter, so the channel is closed when it returns.
pub struct Transmitter {
    device: Box<dyn DeviceInterface>,
    line_delay: Duration,
    progress_bar_enable: bool,
    state: TransferState,
}

impl Transmitter {
    /// Open the serial port described by `config`
    pub fn new(config: TransferConfig) -> SendResult<Self> {
        let device = SerialPortDevice::new(config.device_path, config.baud_rate)?;
        Ok(Self::from_interface(Box::new(device), config.line_delay))
    }

    /// Resolve the config for the given OS identifier, then open the port.
    /// An unsupported platform fails here before any device is touched.
    pub fn from_platform(
        os: &str,
        interface: Option<DeviceInterfaceType>,
        line_delay_ms: Option<u64>,
    ) -> SendResult<Self> {
        let config = platform::config_for_platform(os, interface, line_delay_ms)?;
        Self::new(config)
    }

    pub fn from_interface(device: Box<dyn DeviceInterface>, line_delay: Duration) -> Self {
        Transmitter {
            device,
            line_delay,
            progress_bar_enable: false,
            state: TransferState::NotStarted,
        }
    }

    pub fn progress_bar(&mut self, enable: bool) {
        self.progress_bar_enable = enable;
    }

    /// Read the whole file, then send it line by line followed by the sentinel
    pub fn send_file(self, file_path: impl AsRef<Path>) -> SendResult<TransferSummary> {
        let text = read_source(file_path)?;
        self.send_text(&text)
    }

    pub fn send_text(self, text: &str) -> SendResult<TransferSummary> {
        self.send_lines(&framing::split_lines(text))
    }

    /// Write each line normalised to a single trailing `\n`, flushing and
    /// pausing for the line delay after each one, then write `EOF\n`.
    pub fn send_lines<S: AsRef<str>>(mut self, lines: &[S]) -> SendResult<TransferSummary> {
        self.transmit(lines)
    }

    fn transmit<S: AsRef<str>>(&mut self, lines: &[S]) -> SendResult<TransferSummary> {
        let mut summary = TransferSummary::default();
        let pb = self
            .progress_bar_enable
            .then(|| util::line_progress_bar(lines.len() as u64, self.device.name()));

        self.state = TransferState::Sending;
        debug!("Sending {} lines to {}", lines.len(), self.device.name());

        for line in lines {
            let frame = framing::normalize_line(line.as_ref());
            self.device.send(frame.as_bytes())?;
            self.device.flush_buffers()?;

            summary.lines_sent += 1;
            summary.bytes_sent += frame.len();
            match &pb {
                Some(pb) => {
                    pb.set_message(frame.trim_end().to_owned());
                    pb.inc(1);
                }
                None => info!("Sent: {}", frame.trim_end()),
            }

            thread::sleep(self.line_delay);
        }

        let sentinel = framing::sentinel_frame();
        self.device.send(sentinel)?;
        self.device.flush_buffers()?;
        summary.bytes_sent += sentinel.len();
        self.state = TransferState::SentinelSent;

        if let Some(pb) = pb {
            pb.finish_with_message(framing::SENTINEL);
        }
        info!(
            "Sent {} lines ({} bytes) to {}",
            summary.lines_sent,
            summary.bytes_sent,
            self.device.name()
        );

        Ok(summary)
    }
}

impl Drop for Transmitter {
    fn drop(&mut self) {
        if self.state != TransferState::SentinelSent {
            debug!("Transfer aborted in state {:?}", self.state);
        }
        debug!("Closed {}", self.device.name());
    }
}
