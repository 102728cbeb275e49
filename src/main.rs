// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Send a kernel image to a waiting UART bootloader.
//!
//! Usage:
//!   send-kernel kernel8.img /dev/ttyUSB0
//!   send-kernel kernel8.img /dev/ttyUSB0 --baud 115200 --settle-ms 500

use anyhow::Result;
use clap::Parser;

use send_kernel::cli;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::Cli::parse();
    cli::run(args)
}
