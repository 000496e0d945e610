//! MSB-first bit stream operations for the packed body format.
//!
//! Huffman code bits are written in tree-descent order, most significant bit
//! of each byte first. The final byte is padded with zero bits; readers rely
//! on an external symbol count to know where the real data ends.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_code(b"101");
//! writer.write_code(b"1100");
//! let data = writer.finish();
//! assert_eq!(data, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(false));
//! ```

/// MSB-first bit writer backed by a growable buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, left-aligned as they arrive.
    buffer: u8,
    /// Number of pending bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits: u64,
}

impl BitWriter {
    /// Create a new bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new bit writer with room for `bits` bits.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8) as usize),
            ..Self::default()
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.bits_in_buffer += 1;
        self.total_bits += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Write a code given as ASCII `'0'`/`'1'` symbols.
    ///
    /// Any byte other than `'1'` is written as a zero bit; code tables only
    /// ever produce the two valid symbols.
    pub fn write_code(&mut self, code: &[u8]) {
        for &symbol in code {
            self.write_bit(symbol == b'1');
        }
    }

    /// Total bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Flush the pending bits, padding with zeros, and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.output.push(self.buffer << pad);
        }
        self.output
    }
}

/// MSB-first bit reader over a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Total bits read.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read the next bit, or `None` once every byte has been consumed.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get((self.position / 8) as usize)?;
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;
        Some((byte >> shift) & 1 == 1)
    }

    /// Total bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Total bits available in the underlying slice.
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }
}
