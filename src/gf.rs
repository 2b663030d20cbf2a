//! GF(2^k) Arithmetic
//!
//! Polynomial arithmetic over the Galois fields used by the Reed-Solomon
//! codeword engine. Aztec Code uses four data field sizes depending on the
//! chosen codeword width `k`, plus a fixed GF(16) field for the mode message,
//! each with its own primitive polynomial:
//!
//! | k  | field size | primitive polynomial |
//! |----|-----------|------------------------|
//! | 4  | 16        | 19                     |
//! | 6  | 64        | 67                     |
//! | 8  | 256       | 301                    |
//! | 10 | 1024      | 1033                   |
//! | 12 | 4096      | 4201                   |
//!
//! Multiplication is a direct carryless multiply followed by modular
//! reduction against the primitive polynomial; no log/exp tables are used
//! since the generator polynomials this crate builds are small (`nc` is at
//! most a few dozen codewords) and a lookup table would only pay for itself
//! at far larger field sizes.

/// A Galois field GF(2^k), parameterized by its size and primitive polynomial.
///
/// `size` is `2^k` and `poly` is the primitive polynomial represented as an
/// integer with its degree-`k` bit set (e.g. `19` = `0b10011` for GF(16)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaloisField {
    pub size: u32,
    pub poly: u32,
}

impl GaloisField {
    /// GF(16), used by the mode message regardless of the data codeword size.
    pub const MODE_MESSAGE: GaloisField = GaloisField::new(16, 19);

    pub const fn new(size: u32, poly: u32) -> Self {
        GaloisField { size, poly }
    }

    /// Resolve the field used for `k`-bit data codewords.
    pub fn for_codeword_bits(k: u32) -> GaloisField {
        match k {
            4 => GaloisField::new(16, 19),
            6 => GaloisField::new(64, 67),
            8 => GaloisField::new(256, 301),
            10 => GaloisField::new(1024, 1033),
            12 => GaloisField::new(4096, 4201),
            _ => panic!("unsupported codeword width: {k}"),
        }
    }

    /// Addition in GF(2^k) is XOR.
    #[inline]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        a ^ b
    }

    /// Multiply two field elements modulo the primitive polynomial.
    ///
    /// Direct carryless (XOR-shift) multiply: accumulate `a` shifted for each
    /// set bit of `b`, reducing by `poly` whenever the running product would
    /// overflow the field's bit width.
    pub fn mul(&self, mut a: u32, mut b: u32) -> u32 {
        let mut result = 0u32;
        while b != 0 {
            if b & 1 != 0 {
                result ^= a;
            }
            let carry = a & (self.size >> 1) != 0;
            a <<= 1;
            if carry {
                a ^= self.poly;
            }
            a &= self.size - 1;
            b >>= 1;
        }
        result
    }

    /// Evaluate a polynomial (coefficients highest-degree first) at `x`, via
    /// Horner's rule using field arithmetic throughout.
    pub fn eval(&self, coeffs: &[u32], x: u32) -> u32 {
        coeffs
            .iter()
            .fold(0u32, |acc, &c| self.add(self.mul(acc, x), c))
    }
}
