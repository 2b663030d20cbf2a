//! Symbol Sizing and Codeword Assembly
//!
//! Picks the smallest Aztec symbol (preferring Compact over Full-Range)
//! that can hold a packed message bit string at a given error-correction
//! percentage, then produces the final codeword sequence: data codewords
//! (via [`crate::bitstuff::get_data_codewords`]) followed by Reed-Solomon
//! parity (via [`crate::reed_solomon`]).
//!
//! Compact symbols support layers 1-4, full-range symbols layers 1-32, and
//! the codeword width step (6 -> 8 -> 10 -> 12 bits) happens at fixed layer
//! boundaries within each family. Per-layer bit capacity is not transcribed
//! from a table; it is derived from [`crate::layout`]'s actual ring geometry
//! (see [`total_bits`]) so the two modules can never disagree about how much
//! a given layer holds.

use crate::bitpack::BitString;
use crate::bitstuff;
use crate::error::{Error, Result};
use crate::gf::GaloisField;
use crate::layout;
use crate::reed_solomon;

/// The chosen symbol family, layer count, and codeword layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPlan {
    pub compact: bool,
    pub layers: u32,
    pub word_size: u32,
    pub nd: usize,
    pub nc: usize,
}

impl SymbolPlan {
    pub fn total_codewords(&self) -> usize {
        self.nd + self.nc
    }
}

fn word_size(compact: bool, layers: u32) -> u32 {
    if compact {
        if layers <= 2 {
            6
        } else {
            8
        }
    } else {
        match layers {
            1..=2 => 6,
            3..=8 => 8,
            9..=22 => 10,
            _ => 12,
        }
    }
}

/// Total usable data-region bits for `(compact, layers)`, derived from the
/// same spiral-ring geometry [`crate::layout`] fills, so capacity and
/// layout can never drift out of sync with each other.
fn total_bits(compact: bool, layers: u32) -> u32 {
    layout::data_capacity_bits(compact, layers)
}

/// Required parity codeword count for `total` codewords at `ec_percent`.
/// `ec_percent == 0` is an explicit opt-out of redundancy; any positive
/// percentage is rounded up to at least 3 parity codewords, since fewer
/// offers no meaningful error correction. Capped at `total - 1` so at least
/// one data codeword always remains: at `ec_percent == 100` the integer
/// rounding above lands exactly on `total`, which would otherwise demand
/// the impossible (zero data codewords available to any caller, since
/// `try_layer` requires `nc < total`) rather than degrading to the
/// maximum parity a symbol of this size can actually carry.
fn required_parity(total: usize, ec_percent: u8) -> usize {
    if ec_percent == 0 {
        return 0;
    }
    let raw = (total * ec_percent as usize + 99) / 100;
    raw.max(3).min(total - 1)
}

fn try_layer(compact: bool, layers: u32, ec_percent: u8, message: &BitString) -> Option<(SymbolPlan, Vec<u32>)> {
    let k = word_size(compact, layers);
    let total = (total_bits(compact, layers) / k) as usize;
    if total < 4 {
        return None;
    }
    let nc = required_parity(total, ec_percent);
    if nc >= total {
        return None;
    }
    let nd = total - nc;
    let max_data_bits = nd as u32 * k;
    if message.len() as u32 > max_data_bits {
        return None;
    }

    let mut padded = message.clone();
    while padded.len() < max_data_bits as usize {
        padded.push_bits(1, 1);
    }

    let mut codewords = bitstuff::get_data_codewords(&padded, k);
    if codewords.len() > nd {
        return None;
    }
    debug_assert_eq!(codewords.len(), nd);

    reed_solomon::encode(&mut codewords, nd, nc, GaloisField::for_codeword_bits(k));

    Some((
        SymbolPlan {
            compact,
            layers,
            word_size: k,
            nd,
            nc,
        },
        codewords,
    ))
}

/// Choose the smallest symbol that fits `message` at `ec_percent`, and
/// return its plan alongside the finished (data + parity) codewords.
pub fn assemble(message: &BitString, ec_percent: u8) -> Result<(SymbolPlan, Vec<u32>)> {
    for layers in 1..=4 {
        if let Some(result) = try_layer(true, layers, ec_percent, message) {
            return Ok(result);
        }
    }
    for layers in 1..=32 {
        if let Some(result) = try_layer(false, layers, ec_percent, message) {
            return Ok(result);
        }
    }

    let max_bits = total_bits(false, 32) as usize
        - required_parity((total_bits(false, 32) / word_size(false, 32)) as usize, ec_percent)
            * word_size(false, 32) as usize;
    Err(Error::PayloadTooLarge {
        required_bits: message.len(),
        max_bits,
    })
}
