//! # OxiHuff Core
//!
//! Core components for the OxiHuff compressor.
//!
//! This crate provides the building blocks the codec is assembled from:
//!
//! - [`ordered`]: Stable ascending sequence, the priority queue for tree building
//! - [`bitstream`]: MSB-first bit I/O for the packed body format
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     encode / decode / info / test                       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Tree builder, code table, header, encoder, decoder  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     OrderedList, BitReader/BitWriter, errors            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::ordered::OrderedList;
//!
//! let mut queue: OrderedList<u32> = [40, 10, 30].into_iter().collect();
//! let lowest = queue.remove_at(0).unwrap();
//! assert_eq!(lowest, 10);
//! assert_eq!(queue.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod ordered;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiHuffError, Result};
pub use ordered::OrderedList;
