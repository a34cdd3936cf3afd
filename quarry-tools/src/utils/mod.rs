// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these have any functionality specific to quarry projects; they are used by
//! [`quarry-tools`](crate) to operate on manifests and their associated artifacts.

use std::{fs, path::Path};

use alloy::primitives::Address;
use bytesize::ByteSize;
use color::{GREY, MINT, PINK, YELLOW};

pub mod color;

/// Pretty-prints a file size based on its limits.
pub fn format_file_size(len: ByteSize, mid: ByteSize, max: ByteSize) -> String {
    let color = if len <= mid {
        MINT
    } else if len <= max {
        YELLOW
    } else {
        PINK
    };

    format!("{color}{len}{GREY} ({} bytes)", len.as_u64())
}

/// Check if a directory exists, creating it if not.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir(path)?;
    }
    Ok(())
}

/// Decodes a hex string, tolerating an optional `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[derive(Debug, thiserror::Error)]
pub enum AddressParseError {
    #[error("invalid hex in address: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("address must be 20 bytes, got {0}")]
    BadLength(usize),
}

/// Parses a 20-byte account address, with or without a `0x` prefix.
pub fn parse_address(text: &str) -> Result<Address, AddressParseError> {
    let bytes = decode0x(text)?;
    if bytes.len() != Address::len_bytes() {
        return Err(AddressParseError::BadLength(bytes.len()));
    }
    Ok(Address::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_addresses() {
        let test_cases = [
            ("329482da2a2c7b2412589d85312765f32514dd59", true),
            ("0x329482da2a2c7b2412589d85312765f32514dd59", true),
            ("  0x329482da2a2c7b2412589d85312765f32514dd59\n", true),
            ("0x329482da2a2c7b2412589d85312765f32514dd", false),
            ("0xnot-an-address", false),
            ("", false),
        ];
        for (text, ok) in test_cases {
            assert_eq!(parse_address(text).is_ok(), ok, "{text:?}");
        }
        let with_prefix = parse_address("0x329482da2a2c7b2412589d85312765f32514dd59").unwrap();
        let without_prefix = parse_address("329482da2a2c7b2412589d85312765f32514dd59").unwrap();
        assert_eq!(with_prefix, without_prefix);
    }
}
