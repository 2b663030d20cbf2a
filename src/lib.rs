//! Aztec Code Encoder
//!
//! A from-scratch Aztec Code (ISO/IEC 24778) symbol encoder: shortest-path
//! high-level text encoding, GF(2^k) Reed-Solomon error correction, and the
//! concentric-ring symbol layout, exposed behind a single [`encode::encode`]
//! entry point.
//!
//! # Pipeline
//!
//! ```text
//! payload bytes -> sequencer -> bit packer -> codeword assembly -> layout -> matrix
//! ```
//!
//! # Modules
//!
//! - [`gf`] - GF(2^k) field arithmetic
//! - [`reed_solomon`] - systematic Reed-Solomon parity generation
//! - [`tables`] - the five high-level-encoding mode tables
//! - [`sequencer`] - shortest-path token sequencing
//! - [`bitpack`] - token stream to bit string
//! - [`bitstuff`] - bit string to reserved-codeword-free codewords
//! - [`codeword`] - symbol sizing and codeword assembly
//! - [`layout`] - bullseye, mode message, and data spiral placement
//! - [`eci`] - Extended Channel Interpretation registry
//! - [`encode`] - the encoding facade
//! - [`error`] - error types

pub mod bitpack;
pub mod bitstuff;
pub mod codeword;
pub mod eci;
pub mod encode;
pub mod error;
pub mod gf;
pub mod layout;
pub mod reed_solomon;
pub mod sequencer;
pub mod tables;

pub use encode::{encode as encode_symbol, EncodeResult};
pub use error::{Error, Result};
