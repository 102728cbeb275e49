// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial transport: deliver header then payload to the bootloader.
//!
//! The protocol is one-directional and best-effort: nothing is read back
//! from the receiver. Between the two writes the sender pauses so the
//! bootloader has time to parse the header and set up its receive loop.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::error::Error;

/// Default baud rate expected by the bootloader's mini UART.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Default bound on a single write or flush.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Default pause around the header flush. The real minimum depends on the
/// receiver's firmware, so this is a parameter rather than a constant baked
/// into the write path.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Tuning knobs for one send operation.
#[derive(Debug, Clone, Copy)]
pub struct SendOptions {
    pub baud_rate: u32,
    pub write_timeout: Duration,
    /// Pause inserted after the header write and again before the payload
    /// write, giving the receiver time to settle.
    pub settle_delay: Duration,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Byte counts reported back to the caller, one per write. The caller is
/// expected to check both against the intended lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReport {
    pub header_bytes: usize,
    pub payload_bytes: usize,
}

/// Open `device` and transmit `header` then `payload`.
///
/// The port is owned by this function and dropped (closed) on every exit
/// path, success or failure. Fails with [`Error::PortOpen`] before any write
/// if the device cannot be opened.
pub fn send(
    device: &str,
    header: &[u8],
    payload: &[u8],
    opts: &SendOptions,
) -> Result<SendReport, Error> {
    log::debug!("opening {} at {} baud", device, opts.baud_rate);
    let mut port = serialport::new(device, opts.baud_rate)
        .timeout(opts.write_timeout)
        .open()
        .map_err(|source| Error::PortOpen {
            device: device.to_owned(),
            source,
        })?;

    send_over(&mut port, header, payload, opts)
}

/// Transmit `header` then `payload` to an already-open writer.
///
/// Write discipline: header, settle, flush, settle, payload, flush. Each
/// write is driven to completion or fails; a timed-out write maps to
/// [`Error::WriteTimeout`] and aborts the whole send.
pub fn send_over<W: Write>(
    writer: &mut W,
    header: &[u8],
    payload: &[u8],
    opts: &SendOptions,
) -> Result<SendReport, Error> {
    let header_bytes = write_fully(writer, header, "header", opts.write_timeout)?;
    log::debug!("header written ({} bytes)", header_bytes);

    // The bootloader needs this window to parse the header before payload
    // bytes start arriving.
    thread::sleep(opts.settle_delay);
    flush(writer, "header", opts.write_timeout)?;

    thread::sleep(opts.settle_delay);
    let payload_bytes = write_fully(writer, payload, "kernel", opts.write_timeout)?;
    flush(writer, "kernel", opts.write_timeout)?;
    log::debug!("kernel written ({} bytes)", payload_bytes);

    Ok(SendReport {
        header_bytes,
        payload_bytes,
    })
}

/// Write `buf` to completion, returning the byte count on success.
fn write_fully<W: Write>(
    writer: &mut W,
    buf: &[u8],
    frame: &'static str,
    timeout: Duration,
) -> Result<usize, Error> {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => {
                return Err(Error::Write {
                    frame,
                    source: io::Error::new(io::ErrorKind::WriteZero, "write returned 0 bytes"),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                return Err(Error::WriteTimeout { frame, timeout })
            }
            Err(e) => return Err(Error::Write { frame, source: e }),
        }
    }
    Ok(written)
}

/// Drain the output buffer so the bytes are physically on the wire.
fn flush<W: Write>(writer: &mut W, frame: &'static str, timeout: Duration) -> Result<(), Error> {
    match writer.flush() {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::TimedOut => {
            Err(Error::WriteTimeout { frame, timeout })
        }
        Err(e) => Err(Error::Write { frame, source: e }),
    }
}
