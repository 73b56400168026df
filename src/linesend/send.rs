use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use linesend::{
    Transmitter,
    error::{SendError, SendResult},
    framing,
    interface::{DeviceInterfaceType, SerialportParams},
    platform,
};
use tracing::info;

/// Send a text file line by line to a microcontroller over a serial port
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub(crate) struct SendOptions {
    /// File to send
    file: PathBuf,

    /// Serial port (defaults to /dev/ttyACM0 on Linux, COM3 on Windows)
    #[clap(short, long)]
    serial: Option<String>,

    /// Baud rate
    #[clap(short, long)]
    baudrate: Option<u32>,

    /// Delay after each line in milliseconds
    #[clap(short, long)]
    delay_ms: Option<u64>,

    /// Print the bytes that would be sent instead of opening the port
    #[clap(long, default_value_t = false)]
    dry_run: bool,

    /// Show a progress bar instead of logging every line
    #[clap(short, long, default_value_t = false)]
    progress: bool,

    #[clap(short, long, default_value_t = false)]
    pub(crate) verbose: bool,
}

pub(crate) fn handle_send(opts: SendOptions) -> SendResult<()> {
    // Resolving the config rejects an unsupported host before any file or port is opened
    let interface = DeviceInterfaceType::Serial(SerialportParams {
        port: opts.serial.clone(),
        baud: opts.baudrate,
    });
    let config =
        platform::config_for_platform(std::env::consts::OS, Some(interface), opts.delay_ms)?;

    if opts.dry_run {
        return dry_run(&opts);
    }

    let mut transmitter = Transmitter::new(config)?;
    transmitter.progress_bar(opts.progress);
    transmitter.send_file(&opts.file)?;

    info!("Successfully sent {}", opts.file.display());
    Ok(())
}

fn dry_run(opts: &SendOptions) -> SendResult<()> {
    let text = linesend::read_source(&opts.file)?;

    io::stdout()
        .write_all(&framing::encode(&text))
        .map_err(|e| SendError::Communication(format!("Failed to write to stdout: {}", e)))?;

    Ok(())
}
