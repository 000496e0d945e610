//! Byte frequency tables.

use std::ops::Index;

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for every byte value.
///
/// Always 256 slots; bytes that never occur have a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable([u64; ALPHABET_SIZE]);

impl FrequencyTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self([0; ALPHABET_SIZE])
    }

    /// Count every byte of `data`. Bytes are opaque; no newline translation.
    pub fn count(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self(counts)
    }

    /// Wrap an existing array of counts.
    pub fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self(counts)
    }

    /// Count for `byte`.
    #[inline]
    pub fn get(&self, byte: u8) -> u64 {
        self.0[byte as usize]
    }

    /// Set the count for `byte`.
    #[inline]
    pub fn set(&mut self, byte: u8, count: u64) {
        self.0[byte as usize] = count;
    }

    /// Sum of all counts (saturating).
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    /// Number of bytes with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&n| n != 0).count()
    }

    /// Check whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// `(byte, count)` for every non-zero count, ascending by byte.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .map(|byte| (byte, self.get(byte)))
            .filter(|&(_, count)| count != 0)
    }

    /// The only byte present, when exactly one byte has a non-zero count.
    pub fn single_symbol(&self) -> Option<(u8, u64)> {
        let mut present = self.iter_nonzero();
        let first = present.next()?;
        match present.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u64;

    fn index(&self, byte: u8) -> &u64 {
        &self.0[byte as usize]
    }
}

/// Count the frequency of every byte in `data`.
pub fn count_frequencies(data: &[u8]) -> FrequencyTable {
    FrequencyTable::count(data)
}
