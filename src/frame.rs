// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Frame layout for the boot protocol.
//!
//! The bootloader expects a fixed 12-byte header in front of the kernel
//! image: three little-endian `u32` fields (magic, payload length, checksum),
//! followed immediately by the raw payload bytes. No escaping, no trailer.

use crate::error::Error;

/// Header magic, reads as ASCII "BOOT" on the wire (little-endian).
pub const BOOT_MAGIC: u32 = 0x544F_4F42;

/// Serialized header size in bytes.
pub const HEADER_LEN: usize = 12;

/// Additive checksum over the payload: sum of all bytes mod 256.
///
/// Empty input yields 0.
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// The boot frame header describing the payload that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Payload byte count. Must match the payload transmitted after the header.
    pub length: u32,
    /// Additive checksum of the payload. Widened to 32 bits on the wire.
    pub checksum: u8,
}

impl Header {
    /// Build a header from an already-computed length and checksum.
    ///
    /// Fails with [`Error::OversizedPayload`] if `length` does not fit the
    /// 32-bit wire field; truncating it would corrupt the frame.
    pub fn new(length: usize, checksum: u8) -> Result<Self, Error> {
        let length =
            u32::try_from(length).map_err(|_| Error::OversizedPayload { len: length })?;
        Ok(Self { length, checksum })
    }

    /// Build the header for a payload.
    pub fn for_payload(payload: &[u8]) -> Result<Self, Error> {
        Self::new(payload.len(), checksum(payload))
    }

    /// Serialize as `(magic, length, checksum)`, three little-endian `u32`s.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(&BOOT_MAGIC.to_le_bytes());
        buf[4..8].copy_from_slice(&self.length.to_le_bytes());
        buf[8..12].copy_from_slice(&u32::from(self.checksum).to_le_bytes());
        buf
    }
}
