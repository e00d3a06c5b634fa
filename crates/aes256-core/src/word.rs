//! Four-byte word operations used by the key schedule.

use crate::sbox::SBOX_XOR;

/// One key-schedule word, kept as bytes so the schedule is endian-agnostic.
pub type Word = [u8; 4];

/// Size of a word in bytes.
pub const WORD_BYTES: usize = 4;

/// Rotates the word left by one byte: `[a, b, c, d] -> [b, c, d, a]`.
#[inline]
pub fn rot_word(word: &mut Word) {
    word.rotate_left(1);
}

/// Applies the S-box to each byte of the word.
#[inline]
pub fn sub_word(word: &mut Word) {
    for byte in word.iter_mut() {
        *byte ^= SBOX_XOR[usize::from(*byte)];
    }
}

/// XORs the round constant for schedule word `index` into the first byte.
///
/// `index` must be a multiple of 8 in `8..=56`. Within that range the
/// constant is `1 << (index / 8 - 1)` and never needs the `0x1b` reduction,
/// which is why this is not a general `Rcon` implementation.
#[inline]
pub fn xor_rcon(index: usize, word: &mut Word) {
    debug_assert!(index % 8 == 0 && (8..=56).contains(&index));
    word[0] ^= 1u8 << (index / 8 - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot_word_rotates_one_byte() {
        let mut word = [0x09, 0xcf, 0x4f, 0x3c];
        rot_word(&mut word);
        assert_eq!(word, [0xcf, 0x4f, 0x3c, 0x09]);
    }

    #[test]
    fn sub_word_matches_fips_197_examples() {
        let mut word = [0xcf, 0x4f, 0x3c, 0x09];
        sub_word(&mut word);
        assert_eq!(word, [0x8a, 0x84, 0xeb, 0x01]);

        let mut word = [0x20, 0x67, 0xfc, 0xde];
        sub_word(&mut word);
        assert_eq!(word, [0xb7, 0x85, 0xb0, 0x1d]);
    }

    #[test]
    fn rcon_sequence_for_aes256() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];
        for (step, rcon) in expected.iter().enumerate() {
            let mut word = [0u8; 4];
            xor_rcon((step + 1) * 8, &mut word);
            assert_eq!(word, [*rcon, 0, 0, 0]);
        }
    }

    #[test]
    fn rcon_only_touches_first_byte() {
        let mut word = [0xfa, 0x9e, 0xbf, 0x01];
        xor_rcon(8, &mut word);
        assert_eq!(word, [0xfb, 0x9e, 0xbf, 0x01]);
    }
}
