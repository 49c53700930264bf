//! AES-128 key schedule (FIPS-197 key expansion, Nk=4, Nr=10).

use crate::error::KeyScheduleError;
use crate::key::{Aes128Key, RoundKeys};
use crate::sbox::sbox;
use crate::{KEY_WORDS, NUM_ROUNDS, SCHEDULE_WORDS};

/// Round constants for expansion rounds 1..=10; `RCON[0]` belongs to word
/// index 4, the first derived word.
const RCON: [u8; NUM_ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// RotWord: cyclic left rotation of the word by one byte.
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// SubWord: S-box substitution of each of the four bytes independently.
fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key 0 equals the input key; every later word is
/// `w[i - 4] ^ f(w[i - 1])`, where `f` is RotWord, SubWord, and the round
/// constant when `i` is a multiple of four and the identity otherwise.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().expect("chunk length is four"));
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            // The round constant lands on the leading byte only.
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, chunk) in round_key.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&w[round * KEY_WORDS + word_idx].to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Expands a key supplied as a raw byte slice.
///
/// Rejects any slice whose length is not exactly 16 bytes with
/// [`KeyScheduleError::InvalidKeyLength`], producing no partial schedule.
pub fn expand_key_bytes(key: &[u8]) -> Result<RoundKeys, KeyScheduleError> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand_key(&key))
}
