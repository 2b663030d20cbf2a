//! Bit Stuffing
//!
//! Groups a flat bit string into `word_size`-bit codewords, forbidding
//! all-zero and all-one codewords (both are reserved by the Reed-Solomon
//! layer). Codewords are built `word_size - 1` bits at a time: once those
//! leading bits are all equal, the final bit of the codeword is forced to
//! their complement without consuming an input bit, and that unconsumed
//! bit becomes the start of the next codeword. Exhausted input is padded
//! with `1` bits, and the same forced-complement rule still applies to
//! padding, so a maximally-padded tail can never emit a reserved codeword.

use crate::bitpack::BitString;

/// Pack `bits` into `word_size`-bit codewords with bit stuffing applied.
/// Input shorter than a whole number of codewords is padded with `1` bits;
/// stuffing can emit more codewords than `bits.len() / word_size` would
/// naively suggest, never fewer.
pub fn get_data_codewords(bits: &BitString, word_size: u32) -> Vec<u32> {
    let n = bits.len();
    let mut pos = 0usize;
    let mut out = Vec::new();

    while pos < n {
        let mut msb = Vec::with_capacity(word_size as usize - 1);
        for _ in 0..word_size - 1 {
            if pos < n {
                msb.push(bits.get(pos));
                pos += 1;
            } else {
                msb.push(true);
            }
        }
        let all_same = msb.iter().all(|&b| b == msb[0]);
        let last_bit = if all_same {
            !msb[0]
        } else if pos < n {
            let b = bits.get(pos);
            pos += 1;
            b
        } else {
            true
        };

        let mut word = 0u32;
        for b in &msb {
            word = (word << 1) | (*b as u32);
        }
        word = (word << 1) | (last_bit as u32);
        out.push(word);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(s: &str) -> BitString {
        let mut b = BitString::new();
        for c in s.chars() {
            b.push_bits(if c == '1' { 1 } else { 0 }, 1);
        }
        b
    }

    #[test]
    fn no_stuffing_needed() {
        assert_eq!(get_data_codewords(&bits_of("000010"), 6), vec![0b000010]);
        assert_eq!(get_data_codewords(&bits_of("111100"), 6), vec![0b111100]);
    }

    #[test]
    fn all_ones_prefix_stuffs_a_zero_and_spills_a_codeword() {
        assert_eq!(
            get_data_codewords(&bits_of("111110"), 6),
            vec![0b111110, 0b011111]
        );
    }

    #[test]
    fn all_zero_prefix_stuffs_a_one_and_spills_a_codeword() {
        assert_eq!(
            get_data_codewords(&bits_of("000000"), 6),
            vec![0b000001, 0b011111]
        );
    }

    #[test]
    fn repeated_stuffing_on_padded_tail() {
        assert_eq!(
            get_data_codewords(&bits_of("111111"), 6),
            vec![0b111110, 0b111110]
        );
    }

    #[test]
    fn exact_multiple_of_word_size_needs_no_padding() {
        assert_eq!(
            get_data_codewords(&bits_of("111101111101"), 6),
            vec![0b111101, 0b111101]
        );
    }

    #[test]
    fn never_emits_a_reserved_all_same_codeword() {
        // A long run of the same bit, well past one codeword's width.
        let bits = bits_of(&"0".repeat(40));
        let words = get_data_codewords(&bits, 6);
        assert!(words.iter().all(|&w| w != 0 && w != 0b111111));
    }
}
