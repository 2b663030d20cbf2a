//! Symbol Layout Engine
//!
//! Lays the finished codeword sequence into the square matrix of modules
//! that is the Aztec symbol: a central bullseye locator, a mode-message
//! ring immediately around it (itself a small Reed-Solomon-protected
//! codeword group over GF(16)), a reference grid for Full-Range symbols,
//! and the data region filled ring-by-ring outward in a clockwise spiral.
//!
//! Geometry is memoized per `(compact, layers)` behind a [`DashMap`], the
//! same concurrent-memoization pattern this codebase's teacher uses for its
//! layout/geometry caches.

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::bitpack::BitString;
use crate::gf::GaloisField;
use crate::reed_solomon;

/// A single module position and its ring-traversal order, cached per symbol
/// size so repeated encodes at the same `(compact, layers)` don't redo the
/// spiral walk.
#[derive(Debug, Clone)]
struct Geometry {
    side: usize,
    bullseye_size: usize,
    data_positions: Vec<(usize, usize)>,
    mode_ring_positions: Vec<(usize, usize)>,
    orientation_mark_positions: [(usize, usize); 2],
}

static GEOMETRY_CACHE: Lazy<DashMap<(bool, u32), std::sync::Arc<Geometry>>> =
    Lazy::new(DashMap::new);

fn bullseye_size(compact: bool) -> usize {
    if compact {
        9
    } else {
        11
    }
}

/// Compact symbols grow by exactly 4 modules per layer (15x15..27x27).
/// Full-Range symbols start from a wider base (19x19 at layer 1) and, past
/// every 15 modules of radius, gain 2 extra modules to carry the reference
/// grid's own alignment correction, reaching 151x151 at layer 32.
fn side_length(compact: bool, layers: u32) -> usize {
    if compact {
        return 11 + 4 * layers as usize;
    }
    let base = 14 + 4 * layers as usize;
    base + 1 + 2 * ((base / 2 - 1) / 15)
}

fn is_reference_grid_line(compact: bool, x: usize, y: usize, center: usize) -> bool {
    if compact {
        return false;
    }
    let dx = x as isize - center as isize;
    let dy = y as isize - center as isize;
    (dx % 16 == 0) || (dy % 16 == 0)
}

/// Walk every ring from just outside the mode-message ring to the symbol's
/// edge, in clockwise perimeter order starting at each ring's top-left
/// corner. Reference-grid cells (Full-Range only) are pre-drawn and are
/// excluded from the returned positions.
fn walk_rings(side: usize, inner_half: usize, compact: bool, center: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let outer_half = (side - 1) / 2;
    for half in (inner_half + 1)..=outer_half {
        let lo = center - half;
        let hi = center + half;
        // top edge, left to right
        for x in lo..=hi {
            out.push((x, lo));
        }
        // right edge, top+1 to bottom
        for y in (lo + 1)..=hi {
            out.push((hi, y));
        }
        // bottom edge, right-1 to left
        for x in (lo..hi).rev() {
            out.push((x, hi));
        }
        // left edge, bottom-1 to top+1
        for y in ((lo + 1)..hi).rev() {
            out.push((lo, y));
        }
    }
    out.retain(|&(x, y)| !is_reference_grid_line(compact, x, y, center));
    out
}

fn ring_perimeter(half: usize) -> Vec<(usize, usize)> {
    // perimeter of the single square ring at `half` distance from center,
    // used for the mode-message ring (never crosses a reference-grid line).
    let side = 2 * half + 1;
    let lo = 0;
    let hi = side - 1;
    let mut out = Vec::new();
    for x in lo..=hi {
        out.push((x, lo));
    }
    for y in (lo + 1)..=hi {
        out.push((hi, y));
    }
    for x in (lo..hi).rev() {
        out.push((x, hi));
    }
    for y in ((lo + 1)..hi).rev() {
        out.push((lo, y));
    }
    out
}

fn build_geometry(compact: bool, layers: u32) -> Geometry {
    let bullseye = bullseye_size(compact);
    let side = side_length(compact, layers);
    let center = side / 2;
    let bullseye_half = (bullseye - 1) / 2;

    let mode_ring_local = ring_perimeter(bullseye_half + 1);
    let mode_ring_all: Vec<(usize, usize)> = mode_ring_local
        .into_iter()
        .map(|(x, y)| (center - (bullseye_half + 1) + x, center - (bullseye_half + 1) + y))
        .collect();

    // The ring's first two cells (its top-left corner) are reserved for the
    // orientation mark rather than handed to the mode message: the ring is
    // always wider than the mode message needs (28 or 40 bits into a
    // 40- or 48-cell perimeter), so carving out two cells still leaves
    // plenty of room.
    let orientation_mark_positions = [mode_ring_all[0], mode_ring_all[1]];
    let mode_ring_positions = mode_ring_all[2..].to_vec();

    let data_positions = walk_rings(side, bullseye_half + 1, compact, center);

    Geometry {
        side,
        bullseye_size: bullseye,
        data_positions,
        mode_ring_positions,
        orientation_mark_positions,
    }
}

fn geometry(compact: bool, layers: u32) -> std::sync::Arc<Geometry> {
    GEOMETRY_CACHE
        .entry((compact, layers))
        .or_insert_with(|| std::sync::Arc::new(build_geometry(compact, layers)))
        .clone()
}

/// Total number of data-bearing modules available at `(compact, layers)`,
/// after reserving the bullseye, mode-message ring, and (Full-Range only)
/// reference grid. This is the authoritative capacity figure; symbol sizing
/// in [`crate::codeword`] calls this rather than a separately-maintained
/// table, so the two can never disagree.
pub fn data_capacity_bits(compact: bool, layers: u32) -> u32 {
    geometry(compact, layers).data_positions.len() as u32
}

fn mode_message_shape(compact: bool) -> (usize, usize, u32) {
    // (data codewords, parity codewords, layers-field bit width); the
    // count field is sized to exactly fill out the remaining 4-bit
    // codeword(s) of the data portion.
    if compact {
        (2, 5, 2) // 2 + 6 bits = 8 bits = two 4-bit codewords, 5 parity
    } else {
        (4, 6, 5) // 5 + 11 bits = 16 bits = four 4-bit codewords, 6 parity
    }
}

fn generate_mode_message(compact: bool, layers: u32, total_codewords: usize) -> BitString {
    let (nd, nc, layer_bits) = mode_message_shape(compact);
    let count_bits = (nd as u32 * 4) - layer_bits;

    let mut bits = BitString::new();
    bits.push_bits(layers - 1, layer_bits);
    bits.push_bits((total_codewords as u32).saturating_sub(1), count_bits);

    let mut codewords = Vec::with_capacity(nd);
    for chunk_start in (0..nd * 4).step_by(4) {
        let mut word = 0u32;
        for i in 0..4 {
            word = (word << 1) | (bits.get(chunk_start + i) as u32);
        }
        codewords.push(word);
    }

    reed_solomon::encode(&mut codewords, nd, nc, GaloisField::MODE_MESSAGE);

    let mut out = BitString::new();
    for w in codewords {
        out.push_bits(w, 4);
    }
    out
}

/// The finished module matrix: `matrix[y][x]`, `true` meaning a dark module.
pub struct Symbol {
    pub matrix: Vec<Vec<bool>>,
    pub side: usize,
}

/// Render `codewords` (already data + Reed-Solomon parity) into the full
/// symbol matrix for `(compact, layers)`.
pub fn build(compact: bool, layers: u32, codewords: &[u32], word_size: u32) -> Symbol {
    let geo = geometry(compact, layers);
    let side = geo.side;
    let center = side / 2;
    let mut matrix = vec![vec![false; side]; side];

    draw_bullseye(&mut matrix, center, geo.bullseye_size);
    if !compact {
        draw_reference_grid(&mut matrix, side, center);
    }

    let mode_bits = generate_mode_message(compact, layers, codewords.len());
    for (i, &(x, y)) in geo.mode_ring_positions.iter().enumerate() {
        if i < mode_bits.len() {
            matrix[y][x] = mode_bits.get(i);
        }
    }
    draw_orientation_marks(&mut matrix, geo.orientation_mark_positions);

    let mut data_bits = BitString::new();
    for &w in codewords {
        data_bits.push_bits(w, word_size);
    }
    for (i, &(x, y)) in geo.data_positions.iter().enumerate() {
        if i < data_bits.len() {
            matrix[y][x] = data_bits.get(i);
        }
    }

    Symbol { matrix, side }
}

fn draw_bullseye(matrix: &mut [Vec<bool>], center: usize, bullseye_size: usize) {
    let max_half = (bullseye_size - 1) / 2;
    for half in 0..=max_half {
        let dark = half % 2 == 0;
        for (x, y) in ring_perimeter(half).into_iter().map(|(lx, ly)| {
            (center - half + lx, center - half + ly)
        }) {
            matrix[y][x] = dark;
        }
    }
}

fn draw_orientation_marks(matrix: &mut [Vec<bool>], positions: [(usize, usize); 2]) {
    // Break the bullseye's four-fold symmetry with a small asymmetric mark
    // just outside it, so a decoder can recover the symbol's rotation. These
    // cells are carved out of the mode-message ring in `build_geometry` and
    // never handed to the mode message, so this never clobbers real data.
    for (x, y) in positions {
        matrix[y][x] = true;
    }
}

fn draw_reference_grid(matrix: &mut [Vec<bool>], side: usize, center: usize) {
    for y in 0..side {
        for x in 0..side {
            if is_reference_grid_line(false, x, y, center) {
                matrix[y][x] = (x + y) % 2 == 0;
            }
        }
    }
}
