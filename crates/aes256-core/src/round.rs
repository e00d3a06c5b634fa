//! AES round transformations over a column-major 4x4 state.

use crate::block::{xor_in_place, Block};
use crate::sbox::SBOX_XOR;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte ^= SBOX_XOR[usize::from(*byte)];
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    // Row 1: bytes 1, 5, 9, 13.
    let tmp = state[1];
    state[1] = state[5];
    state[5] = state[9];
    state[9] = state[13];
    state[13] = tmp;

    // Row 2: rotating by two is two swaps.
    state.swap(2, 10);
    state.swap(6, 14);

    // Row 3: left by three is right by one.
    let tmp = state[3];
    state[3] = state[15];
    state[15] = state[11];
    state[11] = state[7];
    state[7] = tmp;
}

/// Multiplies by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7).wrapping_neg() & 0x1b)
}

fn mix_single_column(col: &mut [u8]) {
    let [c0, c1, c2, c3] = [col[0], col[1], col[2], col[3]];
    let all = c0 ^ c1 ^ c2 ^ c3;
    col[0] = c0 ^ xtime(c0 ^ c1) ^ all;
    col[1] = c1 ^ xtime(c1 ^ c2) ^ all;
    col[2] = c2 ^ xtime(c2 ^ c3) ^ all;
    col[3] = c3 ^ xtime(c3 ^ c0) ^ all;
}

/// MixColumns over all four columns.
///
/// Uses `c'[j] = c[j] ^ xtime(c[j] ^ c[j+1]) ^ (c0 ^ c1 ^ c2 ^ c3)`, which is
/// the standard `{02, 03, 01, 01}` circulant multiply rearranged into XORs.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        mix_single_column(col);
    }
}

/// Adds (XORs) a 16-byte round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &[u8]) {
    xor_in_place(state, round_key);
}
