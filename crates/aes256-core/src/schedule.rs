//! Rolling AES-256 key schedule.
//!
//! The full schedule has 60 words, but word `i` only depends on words `i - 1`
//! and `i - 8`. [`KeyWindow`] therefore keeps the most recent eight words in a
//! 32-byte buffer and overwrites word `i - 8` in place when deriving word `i`.
//! The two 16-byte halves of the buffer take turns holding the active round
//! key while the other half is being rebuilt.

use core::fmt;
use core::ops::Range;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::{Block, BLOCK_BYTES};
use crate::key::{Aes256Key, KEY_BYTES};
use crate::word::{rot_word, sub_word, xor_rcon, Word, WORD_BYTES};

/// Words in an AES-256 key (`Nk`), and therefore in the rolling window.
pub const KEY_WORDS: usize = KEY_BYTES / WORD_BYTES;

/// Words in the complete AES-256 schedule: four per round key, 15 round keys.
pub const SCHEDULE_WORDS: usize = 60;

const ROUND_KEY_WORDS: usize = BLOCK_BYTES / WORD_BYTES;

/// One of the two 16-byte halves of a key buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// Bytes `0..16`, words 0-3 of the window.
    First,
    /// Bytes `16..32`, words 4-7 of the window.
    Second,
}

impl Half {
    /// The opposite half.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Half::First => Half::Second,
            Half::Second => Half::First,
        }
    }

    fn bytes(self) -> Range<usize> {
        match self {
            Half::First => 0..BLOCK_BYTES,
            Half::Second => BLOCK_BYTES..KEY_BYTES,
        }
    }
}

/// Circular buffer of eight schedule words over a borrowed 32-byte key.
///
/// Schedule word `i` lives in slot `i % 8`. Words 0-7 are the key itself;
/// every later word must be derived with [`KeyWindow::expand`] in strictly
/// increasing order, and each call destroys the word eight positions back.
pub struct KeyWindow<'a> {
    buf: &'a mut [u8; KEY_BYTES],
}

impl<'a> KeyWindow<'a> {
    /// Wraps a key buffer. The buffer initially holds schedule words 0-7.
    pub fn new(buf: &'a mut [u8; KEY_BYTES]) -> Self {
        Self { buf }
    }

    fn slot(index: usize) -> Range<usize> {
        let start = (index % KEY_WORDS) * WORD_BYTES;
        start..start + WORD_BYTES
    }

    /// Returns the word currently stored in the slot for `index`.
    ///
    /// This is schedule word `index` only if it is among the eight most
    /// recently derived words.
    pub fn word(&self, index: usize) -> Word {
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.buf[Self::slot(index)]);
        word
    }

    /// Derives schedule word `index` from words `index - 1` and `index - 8`.
    ///
    /// Indices below 8 name the original key and are left untouched. Any
    /// round key still needed from the overwritten slot must have been used
    /// before this call.
    pub fn expand(&mut self, index: usize) {
        if index < KEY_WORDS {
            return;
        }

        let mut temp = self.word(index - 1);
        match index % KEY_WORDS {
            0 => {
                rot_word(&mut temp);
                sub_word(&mut temp);
                xor_rcon(index, &mut temp);
            }
            // AES-256 only: extra substitution halfway through each period.
            4 => sub_word(&mut temp),
            _ => {}
        }

        for (dst, src) in self.buf[Self::slot(index)].iter_mut().zip(temp.iter()) {
            *dst ^= *src;
        }
        temp.zeroize();
    }

    /// Bytes of the requested half, for use as a round key.
    #[inline]
    pub fn round_key(&self, half: Half) -> &[u8] {
        &self.buf[half.bytes()]
    }
}

/// The complete 60-word AES-256 key schedule. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule([Word; SCHEDULE_WORDS]);

impl KeySchedule {
    /// Returns schedule word `index` (0..60).
    #[inline]
    pub fn word(&self, index: usize) -> Word {
        self.0[index]
    }

    /// Returns all schedule words.
    #[inline]
    pub fn words(&self) -> &[Word; SCHEDULE_WORDS] {
        &self.0
    }

    /// Returns the round key for `round` (0..=14).
    pub fn round_key(&self, round: usize) -> Block {
        let first = round * ROUND_KEY_WORDS;
        let mut round_key = [0u8; BLOCK_BYTES];
        for (chunk, word) in round_key
            .chunks_exact_mut(WORD_BYTES)
            .zip(&self.0[first..first + ROUND_KEY_WORDS])
        {
            chunk.copy_from_slice(word);
        }
        round_key
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySchedule(..)")
    }
}

/// Expands `key` into the full schedule without touching the caller's key.
///
/// Runs the same rolling generator the cipher uses, over a scratch copy that
/// is wiped afterwards.
pub fn expand_key(key: &Aes256Key) -> KeySchedule {
    let mut scratch = Zeroizing::new(*key.as_bytes());
    let mut window = KeyWindow::new(&mut scratch);
    let mut words = [[0u8; WORD_BYTES]; SCHEDULE_WORDS];
    for (index, word) in words.iter_mut().enumerate() {
        window.expand(index);
        *word = window.word(index);
    }
    KeySchedule(words)
}
