//! Encoding Facade
//!
//! The single entry point this crate exposes: turn a byte payload into a
//! finished Aztec Code symbol. Wires together the ECI prefix, the
//! shortest-path sequencer, the bit packer, symbol sizing with
//! Reed-Solomon, and the layout engine.

use tracing::{debug, instrument};

use crate::bitpack::{self, BitString};
use crate::codeword;
use crate::eci;
use crate::error::{Error, Result};
use crate::layout::{self, Symbol};
use crate::sequencer;

/// A finished Aztec Code symbol: its module matrix and the parameters that
/// produced it.
#[derive(Debug, Clone)]
pub struct EncodeResult {
    /// `matrix[y][x]`, `true` meaning a dark module.
    pub matrix: Vec<Vec<bool>>,
    pub side: usize,
    pub compact: bool,
    pub layers: u32,
}

/// Encode `payload` into the smallest Aztec Code symbol that fits it at
/// `ec_percent` redundancy, optionally prefixed with an ECI designator for
/// `encoding` (pass `None` for the default, encoding-unspecified case).
///
/// `ec_percent` must be in `0..=100`; `0` explicitly opts out of
/// Reed-Solomon redundancy.
#[instrument(skip(payload), fields(payload_len = payload.len(), ec_percent, encoding))]
pub fn encode(payload: &[u8], ec_percent: u8, encoding: Option<&str>) -> Result<EncodeResult> {
    if ec_percent > 100 {
        return Err(Error::InvalidEcParameter(ec_percent));
    }

    let mut tokens = Vec::new();
    if let Some(name) = encoding {
        let designator = eci::lookup(name)?;
        tokens.extend(sequencer::eci_escape_tokens(designator));
        debug!(designator, "prefixing ECI escape");
    }
    tokens.extend(sequencer::find_optimal_sequence(payload));

    let message_bits: BitString = bitpack::pack(&tokens);
    let (plan, codewords) = codeword::assemble(&message_bits, ec_percent)?;
    debug!(
        compact = plan.compact,
        layers = plan.layers,
        data_codewords = plan.nd,
        parity_codewords = plan.nc,
        "chose symbol size"
    );

    let Symbol { matrix, side } = layout::build(plan.compact, plan.layers, &codewords, plan.word_size);

    Ok(EncodeResult {
        matrix,
        side,
        compact: plan.compact,
        layers: plan.layers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_short_ascii_payload() {
        let result = encode(b"Hello, Aztec!", 23, None).unwrap();
        assert_eq!(result.matrix.len(), result.side);
        assert!(result.matrix.iter().all(|row| row.len() == result.side));
    }

    #[test]
    fn rejects_invalid_ec_percent() {
        let err = encode(b"hi", 101, None).unwrap_err();
        assert_eq!(err, Error::InvalidEcParameter(101));
    }

    #[test]
    fn ec_percent_of_100_is_a_valid_boundary_not_a_universal_failure() {
        let result = encode(b"", 100, None).unwrap();
        assert_eq!(result.matrix.len(), result.side);

        let result = encode(b"A", 100, None).unwrap();
        assert_eq!(result.matrix.len(), result.side);
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = encode(b"hi", 23, Some("not-a-real-encoding")).unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(_)));
    }

    #[test]
    fn eci_prefixed_payload_still_encodes() {
        let result = encode("café".as_bytes(), 23, Some("utf-8")).unwrap();
        assert_eq!(result.matrix.len(), result.side);
    }

    #[test]
    fn empty_payload_still_produces_a_valid_symbol() {
        let result = encode(b"", 23, None).unwrap();
        assert_eq!(result.matrix.len(), result.side);
    }
}
