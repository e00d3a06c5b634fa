//! Block representation helpers.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Size of an AES block in bytes.
pub const BLOCK_BYTES: usize = 16;

/// XORs `rhs` into `dst`. Extra bytes on either side are ignored.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &[u8]) {
    debug_assert_eq!(rhs.len(), BLOCK_BYTES);
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
