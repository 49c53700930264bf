//! AES-128 key expansion per FIPS-197.
//!
//! This crate provides exactly one piece of machinery: the key schedule that
//! turns a 16-byte cipher key into eleven 16-byte round keys (44 words,
//! 176 bytes). Block encryption, decryption, and chaining modes are left to
//! downstream consumers of the schedule.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; the S-box lookup is a plain table access and
//! should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod key;
mod schedule;
mod sbox;

pub use crate::error::KeyScheduleError;
pub use crate::key::{Aes128Key, Block, RoundKeys};
pub use crate::schedule::{expand_key, expand_key_bytes};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of AES-128 rounds (Nr).
pub const NUM_ROUNDS: usize = 10;

/// Flat size of the expanded key schedule in bytes (11 round keys).
pub const KEY_SCHEDULE_SIZE: usize = BLOCK_SIZE * (NUM_ROUNDS + 1);

/// Key length in 32-bit words (Nk).
pub const KEY_WORDS: usize = 4;

/// Total number of 32-bit words in the expanded schedule.
pub const SCHEDULE_WORDS: usize = KEY_WORDS * (NUM_ROUNDS + 1);
