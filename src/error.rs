// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error kinds for the send pipeline.
//!
//! Every error aborts the current send attempt; nothing is retried
//! automatically. Retrying means re-running the whole pipeline.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The kernel image could not be read.
    #[error("failed to read kernel image {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The payload does not fit the 32-bit length field of the header.
    #[error("kernel image is {len} bytes, which exceeds the 32-bit length field")]
    OversizedPayload { len: usize },

    /// The serial device could not be opened (not found, permission denied,
    /// already in use).
    #[error("failed to open serial device {device}: {source}")]
    PortOpen {
        device: String,
        #[source]
        source: serialport::Error,
    },

    /// A write or flush did not complete within the configured timeout.
    #[error("write timed out after {timeout:?} while sending {frame}")]
    WriteTimeout {
        frame: &'static str,
        timeout: Duration,
    },

    /// Any other I/O failure during a write or flush.
    #[error("serial write failed while sending {frame}: {source}")]
    Write {
        frame: &'static str,
        #[source]
        source: io::Error,
    },
}
