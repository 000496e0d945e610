//! Codec configuration.

use serde::{Deserialize, Serialize};

/// How code bits are stored after the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// One ASCII `'0'` or `'1'` per code bit.
    ///
    /// This is the interchange format. It costs eight bits of output per code
    /// bit, so encoded files are usually larger than their input.
    #[default]
    Text,
    /// Code bits packed MSB-first into bytes, last byte zero-padded.
    ///
    /// Nothing in the stream records the choice; the decoder must be given the
    /// same format.
    Packed,
}

impl BodyFormat {
    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            BodyFormat::Text => "text",
            BodyFormat::Packed => "packed",
        }
    }
}

impl std::fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoder/decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Body representation.
    pub body: BodyFormat,
    /// Decode every encoded stream before returning it and compare with the
    /// input. Ignored by the decoder.
    pub verify: bool,
}

impl CodecConfig {
    /// Text body, no verification.
    pub const TEXT: Self = Self {
        body: BodyFormat::Text,
        verify: false,
    };

    /// Packed body, no verification.
    pub const PACKED: Self = Self {
        body: BodyFormat::Packed,
        verify: false,
    };

    /// Create the default configuration (same as [`CodecConfig::TEXT`]).
    pub fn new() -> Self {
        Self::TEXT
    }

    /// Set the body format.
    pub fn with_body(mut self, body: BodyFormat) -> Self {
        self.body = body;
        self
    }

    /// Enable or disable round-trip verification on encode.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
