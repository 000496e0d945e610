//! # OxiHuff
//!
//! Pure Rust Huffman compression with a deterministic tree and a human-readable
//! frequency header.
//!
//! ## Stream Format
//!
//! ```text
//! 97 2 98 3\n01101
//! └───┬───┘  └─┬─┘
//!   header    body
//! ```
//!
//! - **Header**: `byte count` pairs for every byte that occurs, ascending by
//!   byte value, single spaces, then `\n`
//! - **Body**: each input byte's code in order, one ASCII `'0'`/`'1'` per bit
//!   ([`BodyFormat::Text`]) or packed MSB-first ([`BodyFormat::Packed`])
//! - Inputs with zero or one distinct byte have no body
//!
//! The tree is never stored. The decoder rebuilds it from the header, so the
//! tree builder's tie-break rule (lower weight first, then lower byte value)
//! is part of the format.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff::{decode, encode};
//!
//! let original = b"abracadabra";
//! let encoded = encode(original).unwrap();
//! assert!(encoded.starts_with(b"97 5 98 2 99 1 100 1 114 2\n"));
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, original);
//! ```
//!
//! ## Building Blocks
//!
//! ```rust
//! use oxihuff::{build_tree, count_frequencies, create_codes, create_header};
//!
//! let frequencies = count_frequencies(b"aaaccbbbb");
//! assert_eq!(create_header(&frequencies), "97 3 98 4 99 2");
//!
//! let tree = build_tree(&frequencies);
//! let codes = create_codes(tree.as_ref());
//! assert_eq!(codes.get(b'b'), "0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod config;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod header;
pub mod node;
pub mod tree;

pub use codes::{CodeIter, CodeTable, create_codes};
pub use config::{BodyFormat, CodecConfig};
pub use decode::{HuffmanDecoder, decode_header};
pub use encode::{EncodeStats, HuffmanEncoder};
pub use frequency::{FrequencyTable, count_frequencies};
pub use header::{create_header, parse_header};
pub use node::HuffmanNode;
pub use tree::build_tree;

pub use oxihuff_core::error::{OxiHuffError, Result};

/// Encode data with the text body format.
///
/// This is equivalent to `encode_with(data, CodecConfig::TEXT)`.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    encode_with(data, CodecConfig::TEXT)
}

/// Encode data with the given configuration.
///
/// # Example
///
/// ```rust
/// use oxihuff::{CodecConfig, decode_with, encode_with};
///
/// let original = b"packed bodies are eight times smaller";
/// let encoded = encode_with(original, CodecConfig::PACKED).unwrap();
/// let decoded = decode_with(&encoded, CodecConfig::PACKED).unwrap();
/// assert_eq!(decoded, original);
/// ```
pub fn encode_with(data: &[u8], config: CodecConfig) -> Result<Vec<u8>> {
    HuffmanEncoder::new(config).encode(data)
}

/// Decode a text-body stream.
///
/// This is equivalent to `decode_with(data, CodecConfig::TEXT)`.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    decode_with(data, CodecConfig::TEXT)
}

/// Decode a stream with the given configuration.
pub fn decode_with(data: &[u8], config: CodecConfig) -> Result<Vec<u8>> {
    HuffmanDecoder::new(config).decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"The quick brown fox jumps over the lazy dog.\n";
        let encoded = encode(original).unwrap();
        assert_eq!(decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_packed() {
        let original = b"The quick brown fox jumps over the lazy dog.\n".repeat(20);
        let encoded = encode_with(&original, CodecConfig::PACKED).unwrap();
        assert!(encoded.len() < original.len());
        assert_eq!(decode_with(&encoded, CodecConfig::PACKED).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let encoded = encode(b"").unwrap();
        assert_eq!(encoded, b"\n");
        assert!(decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol_input() {
        let original = vec![113u8; 23];
        let encoded = encode(&original).unwrap();
        assert_eq!(encoded, b"113 23\n");
        assert_eq!(decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        for config in [CodecConfig::TEXT, CodecConfig::PACKED] {
            let encoded = encode_with(&original, config).unwrap();
            assert_eq!(decode_with(&encoded, config).unwrap(), original);
        }
    }
}
