//! Binary crate for the `city-info` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and credentials from the environment
//! - Logger initialization
//! - Printing the summary line and choosing the exit code

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
