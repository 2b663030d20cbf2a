//! Error types for the Aztec Code encoder

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding an Aztec Code symbol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The payload requires more data bits than the largest supported symbol can hold
    #[error(
        "payload too large: {required_bits} data bits required, largest symbol holds {max_bits}"
    )]
    PayloadTooLarge {
        required_bits: usize,
        max_bits: usize,
    },

    /// The caller named an encoding that is not in the ECI registry
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// `ec_percent` was outside the valid `[0, 100]` range
    #[error("invalid ec_percent: {0} (must be in 0..=100)")]
    InvalidEcParameter(u8),

    /// I/O error, surfaced only by the demo binary's `--output` path
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
