// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host-side serial uploader for a UART kernel bootloader.
//!
//! Frames a kernel image with a 12-byte header (magic, length, additive
//! checksum) and writes header then payload to a serial device, with settle
//! delays for the receiver. Fire-and-forget: no acknowledgment is read back.

pub mod cli;
pub mod commands;
pub mod error;
pub mod frame;
pub mod transport;

pub use error::Error;
pub use frame::{checksum, Header, BOOT_MAGIC, HEADER_LEN};
pub use transport::{send, send_over, SendOptions, SendReport};
