// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::transport::{SendOptions, DEFAULT_BAUD_RATE};

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "send-kernel")]
#[command(about = "Send a kernel image to a waiting UART bootloader")]
pub struct Cli {
    /// Kernel image to send
    #[arg(value_name = "KERNEL_FILE")]
    pub kernel: PathBuf,

    /// Serial device (e.g., /dev/ttyUSB0)
    #[arg(value_name = "SERIAL_DEVICE")]
    pub device: String,

    /// Baud rate
    #[arg(short, long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Timeout for a single write, in milliseconds
    #[arg(long, default_value_t = 1000, value_name = "MS")]
    pub write_timeout_ms: u64,

    /// Settling delay between header and kernel, in milliseconds
    #[arg(long, default_value_t = 1000, value_name = "MS")]
    pub settle_ms: u64,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let opts = SendOptions {
        baud_rate: cli.baud,
        write_timeout: Duration::from_millis(cli.write_timeout_ms),
        settle_delay: Duration::from_millis(cli.settle_ms),
    };

    commands::send(&cli.kernel, &cli.device, &opts)
}
