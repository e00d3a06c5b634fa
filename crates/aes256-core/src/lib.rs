//! Encrypt-only AES-256 for memory-constrained targets.
//!
//! This crate implements the FIPS-197 forward cipher for a single 16-byte
//! block under a 256-bit key and nothing else:
//! - A rolling key schedule that fits in the 32-byte key buffer.
//! - [`encrypt_in_place`], which uses the caller's key buffer as schedule
//!   storage and leaves it consumed.
//! - [`encrypt_block`], which works on a wiped scratch copy instead.
//!
//! There is no decryption. Build a counter-mode stream on top and decrypt by
//! re-encrypting the counter; every block needs a fresh copy of the key when
//! using [`encrypt_in_place`], and counter values must never repeat under
//! one key.
//!
//! All branches depend only on the public round counter, but the S-box is a
//! plain table lookup, so this is not hardened against cache-timing attacks.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;
mod schedule;
mod word;

pub use crate::block::{Block, BLOCK_BYTES};
pub use crate::cipher::{encrypt_block, encrypt_in_place, ROUNDS};
pub use crate::key::{Aes256Key, KEY_BYTES};
pub use crate::sbox::sbox;
pub use crate::schedule::{expand_key, KeySchedule, SCHEDULE_WORDS};
pub use crate::word::Word;
