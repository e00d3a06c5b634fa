//! AES-256 single-block encryption driven by the rolling key schedule.
//!
//! The driver walks 59 steps. Each step derives one schedule word, four
//! words ahead of the step number, and every fourth step also runs a full
//! round with whichever half of the key buffer has just been completed.
//! This keeps the whole schedule inside 32 bytes.

use zeroize::Zeroizing;

use crate::block::Block;
use crate::key::{Aes256Key, KEY_BYTES};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::{Half, KeyWindow};

/// Number of AES-256 rounds.
pub const ROUNDS: u8 = 14;

const STEPS: usize = 59;
const LOOKAHEAD: usize = 4;
const WORDS_PER_ROUND: u8 = 4;

/// What a driver step does after deriving its schedule word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    ExpandOnly,
    ExpandAndTransformFirstHalf { round: u8 },
    ExpandAndTransformSecondHalf { round: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) word: usize,
    pub(crate) phase: Phase,
}

/// The fixed step sequence of one encryption.
///
/// Round 1 runs off the untouched second half of the key, after which the
/// halves alternate every four words.
pub(crate) struct Steps {
    step: usize,
    countdown: u8,
    round: u8,
    half: Half,
}

impl Steps {
    pub(crate) fn new() -> Self {
        Self {
            step: 1,
            countdown: WORDS_PER_ROUND,
            round: 1,
            half: Half::Second,
        }
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.step > STEPS {
            return None;
        }
        let word = self.step + LOOKAHEAD;
        self.step += 1;

        self.countdown -= 1;
        let phase = if self.countdown == 0 {
            self.countdown = WORDS_PER_ROUND;
            let round = self.round;
            let half = self.half;
            self.round += 1;
            self.half = half.other();
            match half {
                Half::First => Phase::ExpandAndTransformFirstHalf { round },
                Half::Second => Phase::ExpandAndTransformSecondHalf { round },
            }
        } else {
            Phase::ExpandOnly
        };

        Some(Step { word, phase })
    }
}

fn apply_round(state: &mut Block, round_key: &[u8], round: u8) {
    sub_bytes(state);
    shift_rows(state);
    if round != ROUNDS {
        mix_columns(state);
    }
    add_round_key(state, round_key);
}

/// Encrypts `state` in place, consuming `key` as schedule storage.
///
/// On return `state` holds the ciphertext and `key` holds leftover schedule
/// words. The key buffer must not be used as a key again; callers that need
/// the key afterwards should copy it first or use [`encrypt_block`].
pub fn encrypt_in_place(key: &mut [u8; KEY_BYTES], state: &mut Block) {
    let mut window = KeyWindow::new(key);
    add_round_key(state, window.round_key(Half::First));

    for Step { word, phase } in Steps::new() {
        window.expand(word);
        match phase {
            Phase::ExpandOnly => {}
            Phase::ExpandAndTransformFirstHalf { round } => {
                apply_round(state, window.round_key(Half::First), round);
            }
            Phase::ExpandAndTransformSecondHalf { round } => {
                apply_round(state, window.round_key(Half::Second), round);
            }
        }
    }
}

/// Encrypts a single block, leaving `key` intact.
///
/// The key is copied into a 32-byte scratch buffer that is wiped on return.
pub fn encrypt_block(key: &Aes256Key, block: &Block) -> Block {
    let mut scratch = Zeroizing::new(*key.as_bytes());
    let mut state = *block;
    encrypt_in_place(&mut scratch, &mut state);
    state
}
