//! IDEA symmetric block cipher engine.
//!
//! IDEA (International Data Encryption Algorithm) is a symmetric cipher
//! operating on 64-bit blocks with a 128-bit key. Each block passes through
//! eight mixing rounds built from three mutually incompatible group
//! operations on 16-bit words (XOR, addition mod 2^16, multiplication mod
//! 2^16 + 1), followed by an output transformation.
//!
//! This crate provides the core cipher engine: key-schedule expansion, the
//! round transform, inverse-schedule derivation for decryption, and the
//! block-chunking/padding layer that extends the 8-byte cipher to
//! arbitrary-length buffers. Blocks are processed independently (no
//! chaining mode, no IV).
//!
//! # Architecture
//!
//! ```text
//! arithmetic    (atomic unit — the three group operations and inverses)
//!     ↑ consumed by
//! key_schedule  (128-bit key → 52 subkey words; forward and inverted)
//! round         (8 mixing rounds + output transformation on one block)
//!     ↑ driven once per 8-byte block by
//! block         (chunking + length-byte padding over whole buffers)
//!     ↑ orchestrated by
//! Idea          (owns both schedules — encrypt/decrypt API)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a buffer:
//!
//! ```
//! use idea::Idea;
//!
//! let key = [0x2Bu8; 16];
//! let cipher = Idea::new(&key).unwrap();
//!
//! let ciphertext = cipher.encrypt(b"attack at dawn");
//! assert_ne!(&ciphertext[..], b"attack at dawn");
//!
//! let plaintext = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! Work with subkey schedules directly:
//!
//! ```
//! use idea::{block, key_schedule};
//!
//! let forward = key_schedule::forward(&[7u8; 16]).unwrap();
//! let inverse = key_schedule::inverted(&forward);
//!
//! let ciphertext = block::encrypt_buffer(&[1, 2, 3], &forward);
//! let plaintext = block::decrypt_buffer(&ciphertext, &inverse).unwrap();
//! assert_eq!(plaintext, [1, 2, 3]);
//! ```

#![deny(clippy::all)]

pub mod block;
pub mod error;
pub mod key_schedule;

pub(crate) mod arithmetic;
pub(crate) mod round;
pub(crate) mod utils;

mod idea;

pub use idea::Idea;
pub use key_schedule::SubkeySchedule;
