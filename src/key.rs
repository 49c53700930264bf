//! Key and schedule types for AES-128.

use crate::error::KeyScheduleError;
use crate::{KEY_SCHEDULE_SIZE, NUM_ROUNDS};

/// AES block of 16 bytes; one round key occupies one block.
pub type Block = [u8; 16];

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = KeyScheduleError;

    /// Accepts exactly 16 bytes; any other slice length is rejected.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| KeyScheduleError::InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128.
///
/// Round key 0 is the cipher key itself; round key `r` is consumed by AES
/// round `r` of a downstream block transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; NUM_ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Returns the flat 176-byte schedule; round key `r` starts at byte `16 * r`.
    pub fn to_bytes(&self) -> [u8; KEY_SCHEDULE_SIZE] {
        let mut out = [0u8; KEY_SCHEDULE_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(16).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_sixteen_bytes() {
        let bytes = [0xabu8; 16];
        let key = Aes128Key::try_from(&bytes[..]).unwrap();
        assert_eq!(key, Aes128Key::from(bytes));
    }

    #[test]
    fn try_from_rejects_other_lengths() {
        for len in [0usize, 15, 17, 32] {
            let bytes = vec![0u8; len];
            let err = Aes128Key::try_from(&bytes[..]).unwrap_err();
            assert_eq!(err, KeyScheduleError::InvalidKeyLength { len });
        }
    }

    #[test]
    fn to_bytes_places_round_keys_in_order() {
        let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
        for (round, key) in round_keys.iter_mut().enumerate() {
            key.fill(round as u8);
        }
        let flat = RoundKeys(round_keys).to_bytes();
        assert_eq!(flat.len(), KEY_SCHEDULE_SIZE);
        for round in 0..=NUM_ROUNDS {
            assert_eq!(&flat[16 * round..16 * (round + 1)], &[round as u8; 16]);
        }
    }
}
