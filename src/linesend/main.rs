use std::process::ExitCode;

use clap::Parser;
use send::{SendOptions, handle_send};
use tracing::error;

mod send;

fn main() -> ExitCode {
    let opts = SendOptions::parse();

    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match handle_send(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
