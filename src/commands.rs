// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The `send` command: read the image, frame it, push it over the wire.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::ProgressBar;

use crate::error::Error;
use crate::frame::{Header, HEADER_LEN};
use crate::transport::{self, SendOptions};

/// Send a kernel image to the bootloader listening on `device`.
pub fn send(file: &Path, device: &str, opts: &SendOptions) -> Result<()> {
    let kernel = fs::read(file).map_err(|source| Error::FileRead {
        path: file.to_path_buf(),
        source,
    })?;
    let header = Header::for_payload(&kernel)?;

    println!("Kernel size: {} bytes", kernel.len());
    println!("Checksum: 0x{:02X}", header.checksum);

    // The send blocks for a couple of seconds (two settle delays plus the
    // writes themselves), so keep a spinner going while it runs.
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Sending to {}...", device));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let report = match transport::send(device, &header.to_bytes(), &kernel, opts) {
        Ok(report) => {
            spinner.finish_and_clear();
            report
        }
        Err(e) => {
            spinner.abandon();
            return Err(e.into());
        }
    };

    println!("Header sent: {} bytes", report.header_bytes);
    println!("Kernel sent: {} bytes", report.payload_bytes);

    if report.header_bytes != HEADER_LEN || report.payload_bytes != kernel.len() {
        bail!(
            "short write: header {}/{} bytes, kernel {}/{} bytes",
            report.header_bytes,
            HEADER_LEN,
            report.payload_bytes,
            kernel.len()
        );
    }

    Ok(())
}
