//! Textual frequency header.
//!
//! The header lists `byte frequency` pairs for every byte that occurs,
//! ascending by byte value, separated by single spaces:
//!
//! ```text
//! 97 3 98 4 99 2
//! ```
//!
//! Zero counts are omitted and there is no trailing space. In an encoded
//! stream the header is followed by a single `\n`.

use crate::frequency::FrequencyTable;
use oxihuff_core::error::{OxiHuffError, Result};

/// Serialize a frequency table as a header line (without the newline).
pub fn create_header(frequencies: &FrequencyTable) -> String {
    frequencies
        .iter_nonzero()
        .map(|(byte, count)| format!("{byte} {count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a header line back into a frequency table.
///
/// Tokens are split on any ASCII whitespace and consumed in pairs. An empty
/// header yields an all-zero table. A pair with a zero count is accepted and
/// leaves that slot at zero.
///
/// # Errors
///
/// [`OxiHuffError::MalformedHeader`] on an odd number of tokens, a token that
/// is not a non-negative integer, a byte value above 255, a byte value listed
/// twice, or counts whose sum overflows `u64`.
pub fn parse_header(header: &str) -> Result<FrequencyTable> {
    let tokens: Vec<&str> = header.split_ascii_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(OxiHuffError::malformed_header(format!(
            "odd token count ({})",
            tokens.len()
        )));
    }

    let mut table = FrequencyTable::new();
    let mut seen = [false; 256];
    let mut total = 0u64;

    for pair in tokens.chunks_exact(2) {
        let value = parse_number(pair[0])?;
        let count = parse_number(pair[1])?;

        let byte = u8::try_from(value).map_err(|_| {
            OxiHuffError::malformed_header(format!("byte value {value} out of range"))
        })?;
        if std::mem::replace(&mut seen[byte as usize], true) {
            return Err(OxiHuffError::malformed_header(format!(
                "byte value {byte} listed twice"
            )));
        }
        total = total
            .checked_add(count)
            .ok_or_else(|| OxiHuffError::malformed_header("total frequency overflows"))?;

        table.set(byte, count);
    }

    Ok(table)
}

fn parse_number(token: &str) -> Result<u64> {
    token
        .parse::<u64>()
        .map_err(|_| OxiHuffError::malformed_header(format!("invalid token {token:?}")))
}
