//! Block chunking and padding: extends the 8-byte round transform to
//! arbitrary-length buffers.
//!
//! Buffers split into independent 8-byte blocks; there is no chaining, so
//! each output block depends only on the schedule and its own input bytes.
//! Encryption always appends one final padded block: the leftover bytes,
//! zero fill, and a trailing marker byte counting the padding bytes
//! (marker included). Decryption reads the marker back and strips that
//! many bytes; a marker outside 1..=8 means the key was wrong or the data
//! is corrupted.

use crate::error::IdeaError;
use crate::key_schedule::SubkeySchedule;
use crate::round;
use crate::utils::converter::{bytes_to_words, words_to_bytes};

/// Block size in bytes.
pub(crate) const BLOCK_LEN: usize = 8;

/// Applies the round transform to one raw 8-byte block.
pub(crate) fn crypt_block(block: &[u8; BLOCK_LEN], keys: &SubkeySchedule) -> [u8; BLOCK_LEN] {
    words_to_bytes(round::crypt(bytes_to_words(block), keys))
}

/// Encrypts a buffer of any length, including empty.
///
/// Every whole 8-byte chunk of `plaintext` encrypts independently; one
/// final block carrying the leftover bytes and the padding marker always
/// follows, so the output is `8 * (plaintext.len() / 8 + 1)` bytes long.
///
/// # Parameters
/// - `plaintext`: The bytes to encrypt.
/// - `keys`: A forward subkey schedule from [`crate::key_schedule::forward`].
///
/// # Returns
/// The ciphertext.
///
/// # Examples
///
/// ```
/// use idea::{block, key_schedule};
///
/// let keys = key_schedule::forward(&[9u8; 16]).unwrap();
/// assert_eq!(block::encrypt_buffer(&[], &keys).len(), 8);
/// assert_eq!(block::encrypt_buffer(&[0u8; 8], &keys).len(), 16);
/// assert_eq!(block::encrypt_buffer(&[0u8; 9], &keys).len(), 16);
/// ```
pub fn encrypt_buffer(plaintext: &[u8], keys: &SubkeySchedule) -> Vec<u8> {
    let mut out = Vec::with_capacity(plaintext.len() + BLOCK_LEN);
    let mut block = [0u8; BLOCK_LEN];

    let mut chunks = plaintext.chunks_exact(BLOCK_LEN);
    for chunk in &mut chunks {
        block.copy_from_slice(chunk);
        out.extend_from_slice(&crypt_block(&block, keys));
    }

    // Final block: leftover bytes, zero fill, then the marker counting
    // every padding byte including itself.
    let leftover = chunks.remainder();
    block = [0u8; BLOCK_LEN];
    block[..leftover.len()].copy_from_slice(leftover);
    block[BLOCK_LEN - 1] = (BLOCK_LEN - leftover.len()) as u8;
    out.extend_from_slice(&crypt_block(&block, keys));

    out
}

/// Decrypts a buffer produced by [`encrypt_buffer`].
///
/// # Parameters
/// - `ciphertext`: The bytes to decrypt; length must be a positive
///   multiple of 8.
/// - `keys`: An inverse subkey schedule from
///   [`crate::key_schedule::inverted`].
///
/// # Returns
/// The recovered plaintext with all padding removed.
///
/// # Errors
/// - [`IdeaError::InvalidCiphertextLength`] if `ciphertext` is empty or
///   not block-aligned.
/// - [`IdeaError::CorruptPadding`] if the recovered marker byte is 0 or
///   greater than 8; the plaintext is never silently truncated by an
///   out-of-range marker.
///
/// # Examples
///
/// ```
/// use idea::{block, key_schedule};
/// use idea::error::IdeaError;
///
/// let forward = key_schedule::forward(&[9u8; 16]).unwrap();
/// let inverse = key_schedule::inverted(&forward);
///
/// let ciphertext = block::encrypt_buffer(b"ossifrage", &forward);
/// let plaintext = block::decrypt_buffer(&ciphertext, &inverse).unwrap();
/// assert_eq!(plaintext, b"ossifrage");
///
/// assert_eq!(
///     block::decrypt_buffer(&[0u8; 5], &inverse),
///     Err(IdeaError::InvalidCiphertextLength)
/// );
/// ```
pub fn decrypt_buffer(ciphertext: &[u8], keys: &SubkeySchedule) -> Result<Vec<u8>, IdeaError> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_LEN) {
        return Err(IdeaError::InvalidCiphertextLength);
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    let mut block = [0u8; BLOCK_LEN];
    for chunk in ciphertext.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);
        out.extend_from_slice(&crypt_block(&block, keys));
    }

    let marker = out[out.len() - 1];
    if marker == 0 || marker as usize > BLOCK_LEN {
        return Err(IdeaError::CorruptPadding);
    }
    out.truncate(out.len() - marker as usize);
    Ok(out)
}
