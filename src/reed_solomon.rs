//! Reed-Solomon Generator
//!
//! Systematic Reed-Solomon encoding over a configurable GF(2^k) field: given
//! `nd` data codewords, appends `nc` parity codewords so that the resulting
//! polynomial (data codewords as coefficients, highest degree first) is
//! divisible by `g(x) = Π_{i=1..nc} (x - α^i)`, with `α = 2` the primitive
//! element of the field. This is the same scheme the mode message (§4.G)
//! reuses independently over a fixed GF(16).

use crate::gf::GaloisField;

/// Extend `data` (interpreted as the first `nd` codewords) in place with `nc`
/// parity codewords computed via systematic polynomial division modulo the
/// generator polynomial of `field`.
///
/// `data` must have exactly `nd` elements on entry; on return it has
/// `nd + nc` elements. A no-op when `nc == 0`.
pub fn encode(data: &mut Vec<u32>, nd: usize, nc: usize, field: GaloisField) {
    debug_assert_eq!(data.len(), nd);
    if nc == 0 {
        return;
    }
    if nd == 0 {
        data.extend(std::iter::repeat(0).take(nc));
        return;
    }

    let generator = generator_polynomial(nc, field);

    // Synthetic division of data*x^nc by the generator, keeping only the
    // remainder (the parity codewords) in the trailing `nc` slots.
    let mut message = data.clone();
    message.extend(std::iter::repeat(0).take(nc));

    for i in 0..nd {
        let coef = message[i];
        if coef == 0 {
            continue;
        }
        for (j, &g) in generator.iter().enumerate() {
            message[i + j] ^= field.mul(g, coef);
        }
    }

    data.extend_from_slice(&message[nd..nd + nc]);
}

/// Build `g(x) = Π_{i=1}^{nc} (x - α^i)`, returned as coefficients from
/// highest degree (`g[0]`, always 1) to the constant term.
fn generator_polynomial(nc: usize, field: GaloisField) -> Vec<u32> {
    let alpha = 2u32;
    let mut g = vec![1u32];
    let mut power = 1u32;
    for _ in 0..nc {
        power = field.mul(power, alpha);
        let mut next = vec![0u32; g.len() + 1];
        for (idx, &c) in g.iter().enumerate() {
            next[idx] ^= c;
            next[idx + 1] ^= field.mul(c, power);
        }
        g = next;
    }
    g
}

/// Evaluate the full codeword polynomial (data followed by parity,
/// coefficients highest-degree-first) at `alpha^i` for `i` in `1..=nc`.
/// A correct Reed-Solomon codeword evaluates to zero at every root.
pub fn evaluate_at_roots(codewords: &[u32], nc: usize, field: GaloisField) -> Vec<u32> {
    let alpha = 2u32;
    let mut power = 1u32;
    let mut results = Vec::with_capacity(nc);
    for _ in 0..nc {
        power = field.mul(power, alpha);
        results.push(field.eval(codewords, power));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_when_nc_zero() {
        let mut cw = vec![1, 2, 3];
        encode(&mut cw, 3, 0, GaloisField::new(16, 19));
        assert_eq!(cw, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut cw: Vec<u32> = vec![];
        encode(&mut cw, 0, 0, GaloisField::new(16, 19));
        assert!(cw.is_empty());
    }

    #[test]
    fn zero_data_with_parity_yields_zeros() {
        let mut cw = vec![0, 0];
        encode(&mut cw, 2, 2, GaloisField::new(16, 19));
        assert_eq!(cw, vec![0, 0, 0, 0]);
    }

    #[test]
    fn nd_zero_nc_positive_yields_zeros() {
        let mut cw: Vec<u32> = vec![];
        encode(&mut cw, 0, 3, GaloisField::new(16, 19));
        assert_eq!(cw, vec![0, 0, 0]);
    }

    #[test]
    fn gf16_known_vector() {
        let mut cw = vec![0, 9];
        encode(&mut cw, 2, 5, GaloisField::new(16, 19));
        assert_eq!(cw, vec![0, 9, 12, 2, 3, 1, 9]);
    }

    #[test]
    fn gf64_known_vector() {
        let mut cw = vec![9, 50, 1, 41, 47, 2, 39, 37, 1, 27];
        encode(&mut cw, 10, 7, GaloisField::new(64, 67));
        assert_eq!(
            cw,
            vec![9, 50, 1, 41, 47, 2, 39, 37, 1, 27, 38, 50, 8, 16, 10, 20, 40]
        );
    }

    #[test]
    fn codeword_vanishes_at_every_root() {
        let field = GaloisField::new(64, 67);
        let nc = 7;
        let mut cw = vec![9, 50, 1, 41, 47, 2, 39, 37, 1, 27];
        encode(&mut cw, 10, nc, field);
        let evals = evaluate_at_roots(&cw, nc, field);
        assert!(evals.iter().all(|&v| v == 0));
    }
}
