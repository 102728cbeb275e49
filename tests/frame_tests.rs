// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the checksum and header layout.

use send_kernel::frame::{checksum, Header, BOOT_MAGIC, HEADER_LEN};
use send_kernel::Error;

/// Deterministic pseudo-random bytes for property-style tests.
fn xorshift_bytes(mut state: u32, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push(state as u8);
    }
    out
}

fn decode_header(bytes: &[u8]) -> (u32, u32, u32) {
    assert_eq!(bytes.len(), HEADER_LEN);
    let field = |i: usize| u32::from_le_bytes(bytes[i..i + 4].try_into().unwrap());
    (field(0), field(4), field(8))
}

// --- checksum ---

#[test]
fn test_checksum_empty_is_zero() {
    assert_eq!(checksum(&[]), 0);
}

#[test]
fn test_checksum_single_byte() {
    assert_eq!(checksum(&[0x42]), 0x42);
    assert_eq!(checksum(&[0xFF]), 0xFF);
}

#[test]
fn test_checksum_wraps_mod_256() {
    assert_eq!(checksum(&[0xFF, 0x01]), 0);
    assert_eq!(checksum(&[0x80, 0x80, 0x01]), 1);
}

#[test]
fn test_checksum_is_additive_over_concatenation() {
    for seed in [1u32, 0xDEADBEEF, 0x12345678, 7, 999] {
        let a = xorshift_bytes(seed, 257);
        let b = xorshift_bytes(seed.wrapping_mul(31), 1023);
        let mut joined = a.clone();
        joined.extend_from_slice(&b);
        assert_eq!(
            checksum(&joined),
            checksum(&a).wrapping_add(checksum(&b)),
            "homomorphism failed for seed {seed}"
        );
    }
}

#[test]
fn test_checksum_is_deterministic() {
    let data = xorshift_bytes(42, 4096);
    assert_eq!(checksum(&data), checksum(&data));
}

// --- header ---

#[test]
fn test_header_is_twelve_bytes() {
    let header = Header::for_payload(b"hello").unwrap();
    assert_eq!(header.to_bytes().len(), HEADER_LEN);
}

#[test]
fn test_header_round_trip() {
    let payload = xorshift_bytes(3, 5000);
    let header = Header::for_payload(&payload).unwrap();
    let (magic, length, cksum) = decode_header(&header.to_bytes());
    assert_eq!(magic, BOOT_MAGIC);
    assert_eq!(length, payload.len() as u32);
    assert_eq!(cksum, u32::from(checksum(&payload)));
}

#[test]
fn test_header_checksum_field_upper_bits_zero() {
    let header = Header::new(1, 0xFF).unwrap();
    let (_, _, cksum) = decode_header(&header.to_bytes());
    assert_eq!(cksum, 0xFF);
}

#[test]
fn test_header_known_vector_1024_ones() {
    // 1024 bytes of 0x01: checksum = 1024 mod 256 = 0.
    let payload = vec![0x01u8; 1024];
    let header = Header::for_payload(&payload).unwrap();
    assert_eq!(header.checksum, 0);
    assert_eq!(
        header.to_bytes(),
        [0x42, 0x4F, 0x4F, 0x54, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_header_magic_spells_boot_on_the_wire() {
    let header = Header::for_payload(&[]).unwrap();
    assert_eq!(&header.to_bytes()[0..4], b"BOOT");
}

#[test]
fn test_header_empty_payload() {
    let header = Header::for_payload(&[]).unwrap();
    assert_eq!(header.length, 0);
    assert_eq!(header.checksum, 0);
    let (magic, length, cksum) = decode_header(&header.to_bytes());
    assert_eq!((magic, length, cksum), (BOOT_MAGIC, 0, 0));
}

#[test]
fn test_header_length_at_u32_max_is_accepted() {
    let header = Header::new(u32::MAX as usize, 7).unwrap();
    assert_eq!(header.length, u32::MAX);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_header_rejects_oversized_length() {
    let too_big = u32::MAX as usize + 1;
    match Header::new(too_big, 0) {
        Err(Error::OversizedPayload { len }) => assert_eq!(len, too_big),
        other => panic!("expected OversizedPayload, got {:?}", other),
    }
}
