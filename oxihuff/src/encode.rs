//! Huffman encoder.
//!
//! Output layout:
//!
//! ```text
//! <header line>\n<body>
//! ```
//!
//! The body is omitted when the input holds fewer than two distinct bytes: an
//! empty alphabet has nothing to encode, and a single-symbol alphabet is fully
//! described by its count in the header.

use crate::codes::CodeTable;
use crate::config::{BodyFormat, CodecConfig};
use crate::decode::HuffmanDecoder;
use crate::frequency::FrequencyTable;
use crate::header::create_header;
use crate::tree::build_tree;
use oxihuff_core::bitstream::BitWriter;
use oxihuff_core::error::{OxiHuffError, Result};
use serde::Serialize;
use tracing::debug;

/// Summary of a single encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    /// Input size in bytes.
    pub input_len: u64,
    /// Encoded size in bytes, header and newline included.
    pub output_len: u64,
    /// Header line length in bytes, newline excluded.
    pub header_len: u64,
    /// Number of distinct input bytes.
    pub distinct_symbols: usize,
    /// Number of code bits in the body.
    pub body_bits: u64,
    /// Body representation used.
    pub body: BodyFormat,
}

impl EncodeStats {
    /// Space savings as a percentage; negative when the output grew.
    pub fn space_savings(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        (1.0 - self.output_len as f64 / self.input_len as f64) * 100.0
    }

    /// Average code bits per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.body_bits as f64 / self.input_len as f64
    }
}

/// Huffman encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder {
    config: CodecConfig,
}

impl HuffmanEncoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Encode `input`.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode_with_stats(input).map(|(output, _)| output)
    }

    /// Encode `input` and report what was produced.
    ///
    /// # Algorithm
    ///
    /// 1. Count the frequency of every byte
    /// 2. Build the tree and the header line
    /// 3. Emit the header and a newline
    /// 4. With two or more distinct bytes, emit each input byte's code in order
    ///
    /// With `verify` enabled the output is decoded again and compared with
    /// the input before it is returned.
    pub fn encode_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, EncodeStats)> {
        let frequencies = FrequencyTable::count(input);
        let tree = build_tree(&frequencies);
        let header = create_header(&frequencies);

        let mut output = Vec::with_capacity(header.len() + 1);
        output.extend_from_slice(header.as_bytes());
        output.push(b'\n');

        let body_bits = match &tree {
            Some(root) if !root.is_leaf() => {
                let codes = CodeTable::from_tree(Some(root));
                self.write_body(input, &codes, &frequencies, &mut output)
            }
            _ => 0,
        };

        if self.config.verify {
            self.verify(input, &output)?;
        }

        let stats = EncodeStats {
            input_len: input.len() as u64,
            output_len: output.len() as u64,
            header_len: header.len() as u64,
            distinct_symbols: frequencies.distinct(),
            body_bits,
            body: self.config.body,
        };
        debug!(
            input_len = stats.input_len,
            output_len = stats.output_len,
            symbols = stats.distinct_symbols,
            body_bits,
            format = %self.config.body,
            "encoded"
        );

        Ok((output, stats))
    }

    /// Append the body; returns the number of code bits written.
    fn write_body(
        &self,
        input: &[u8],
        codes: &CodeTable,
        frequencies: &FrequencyTable,
        output: &mut Vec<u8>,
    ) -> u64 {
        let bits = codes.encoded_bits(frequencies);
        match self.config.body {
            BodyFormat::Text => {
                output.reserve(bits as usize);
                for &byte in input {
                    output.extend_from_slice(codes.get(byte).as_bytes());
                }
            }
            BodyFormat::Packed => {
                let mut writer = BitWriter::with_capacity(bits);
                for &byte in input {
                    writer.write_code(codes.get(byte).as_bytes());
                }
                output.extend_from_slice(&writer.finish());
            }
        }
        bits
    }

    fn verify(&self, input: &[u8], encoded: &[u8]) -> Result<()> {
        let decoded = HuffmanDecoder::new(self.config).decode(encoded)?;
        if decoded == input {
            return Ok(());
        }
        let offset = decoded
            .iter()
            .zip(input)
            .position(|(a, b)| a != b)
            .unwrap_or(decoded.len().min(input.len()));
        Err(OxiHuffError::verification_failed(offset as u64))
    }
}
