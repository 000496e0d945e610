//! Huffman decoder.
//!
//! The decoder never sees the tree; it reparses the header, rebuilds the tree
//! with the same builder the encoder used, and walks it one body bit at a
//! time, emitting a byte and restarting at the root whenever a leaf is hit.

use crate::config::{BodyFormat, CodecConfig};
use crate::frequency::FrequencyTable;
use crate::header::parse_header;
use crate::node::HuffmanNode;
use crate::tree::build_tree;
use oxihuff_core::bitstream::BitReader;
use oxihuff_core::error::{OxiHuffError, Result};
use tracing::debug;

/// Split an encoded stream into its frequency table and body.
///
/// The header is everything before the first `\n`; a stream without a
/// newline is treated as a header with an empty body.
pub fn decode_header(encoded: &[u8]) -> Result<(FrequencyTable, &[u8])> {
    let (header, body) = match encoded.iter().position(|&b| b == b'\n') {
        Some(newline) => (&encoded[..newline], &encoded[newline + 1..]),
        None => (encoded, &encoded[encoded.len()..]),
    };
    let header = std::str::from_utf8(header)
        .map_err(|_| OxiHuffError::malformed_header("header is not valid UTF-8"))?;
    Ok((parse_header(header)?, body))
}

/// Huffman decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecoder {
    config: CodecConfig,
}

impl HuffmanDecoder {
    /// Create a decoder with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Decode a complete encoded stream.
    ///
    /// # Errors
    ///
    /// - [`OxiHuffError::MalformedHeader`] if the header line cannot be parsed.
    /// - [`OxiHuffError::MalformedBody`] if the body stops in the middle of a
    ///   code, holds a symbol other than `'0'`/`'1'` (text body), or decodes to
    ///   a different number of bytes than the header declares.
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        let (frequencies, body) = decode_header(encoded)?;
        let expected = frequencies.total();

        if let Some((byte, count)) = frequencies.single_symbol() {
            debug!(byte, count, "decoding single-symbol stream");
            return repeat_byte(byte, count);
        }

        let Some(root) = build_tree(&frequencies) else {
            debug!("decoding empty stream");
            return Ok(Vec::new());
        };

        let output = match self.config.body {
            BodyFormat::Text => {
                let bits = body.iter().enumerate().map(|(i, &symbol)| match symbol {
                    b'0' => Ok(false),
                    b'1' => Ok(true),
                    other => Err(OxiHuffError::malformed_body(
                        i as u64,
                        format!("unexpected symbol 0x{other:02x}"),
                    )),
                });
                descend(&root, bits, expected, body.len() as u64, false)?
            }
            BodyFormat::Packed => {
                let mut reader = BitReader::new(body);
                let capacity = reader.bit_len();
                let bits = std::iter::from_fn(move || reader.read_bit().map(Ok));
                descend(&root, bits, expected, capacity, true)?
            }
        };

        debug!(
            body_len = body.len(),
            output_len = output.len(),
            symbols = frequencies.distinct(),
            format = %self.config.body,
            "decoded"
        );
        Ok(output)
    }
}

/// Output for a one-symbol alphabet: the byte repeated `count` times.
fn repeat_byte(byte: u8, count: u64) -> Result<Vec<u8>> {
    let too_large =
        || OxiHuffError::malformed_header(format!("frequency {count} exceeds available memory"));
    let len = usize::try_from(count).map_err(|_| too_large())?;
    let mut output = Vec::new();
    output.try_reserve_exact(len).map_err(|_| too_large())?;
    output.resize(len, byte);
    Ok(output)
}

/// Walk the tree bit by bit.
///
/// `max_symbols` bounds the preallocation, since each symbol costs at least
/// one bit. With `stop_at_expected`, trailing bits after the last symbol are
/// padding and are not read.
fn descend<I>(
    root: &HuffmanNode,
    bits: I,
    expected: u64,
    max_symbols: u64,
    stop_at_expected: bool,
) -> Result<Vec<u8>>
where
    I: Iterator<Item = Result<bool>>,
{
    let mut output = Vec::with_capacity(expected.min(max_symbols) as usize);
    let mut node = root;
    let mut depth = 0usize;
    let mut position = 0u64;

    for bit in bits {
        if stop_at_expected && output.len() as u64 == expected {
            break;
        }
        let child = if bit? { node.right() } else { node.left() };
        node = child
            .ok_or_else(|| OxiHuffError::malformed_body(position, "code descends past a leaf"))?;
        position += 1;
        depth += 1;

        if node.is_leaf() {
            output.push(node.value());
            node = root;
            depth = 0;
        }
    }

    if depth != 0 {
        return Err(OxiHuffError::malformed_body(
            position,
            format!("body ends {depth} bits into a code"),
        ));
    }
    if output.len() as u64 != expected {
        return Err(OxiHuffError::malformed_body(
            position,
            format!(
                "decoded {} bytes but header declares {expected}",
                output.len()
            ),
        ));
    }
    Ok(output)
}
