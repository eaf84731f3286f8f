//! IDEA cipher orchestrator: owns both derived schedules and exposes the
//! buffer- and block-level encrypt/decrypt API.

use crate::block;
use crate::error::IdeaError;
use crate::key_schedule::{self, SubkeySchedule};

/// IDEA cipher instance bound to one 128-bit primary key.
///
/// The forward (encryption) and inverse (decryption) subkey schedules are
/// derived exactly once at construction and reused for every block
/// afterwards. Instances are immutable: encrypting or decrypting never
/// changes internal state, so a shared `&Idea` can serve any number of
/// concurrent callers.
///
/// # Examples
///
/// ```
/// use idea::Idea;
///
/// let cipher = Idea::new(&[0x2A; 16]).unwrap();
/// let ciphertext = cipher.encrypt(b"squeamish ossifrage");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"squeamish ossifrage");
/// ```
pub struct Idea {
    encrypt_keys: SubkeySchedule,
    decrypt_keys: SubkeySchedule,
}

impl Idea {
    /// Creates a cipher instance from a 16-byte primary key.
    ///
    /// # Parameters
    /// - `key`: The primary key; must be exactly 16 bytes (128 bits).
    ///
    /// # Errors
    /// Returns [`IdeaError::InvalidKeyLength`] if the key is not exactly
    /// 16 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea::Idea;
    ///
    /// assert!(Idea::new(&[0u8; 16]).is_ok());
    /// assert!(Idea::new(&[0u8; 15]).is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, IdeaError> {
        let encrypt_keys = key_schedule::forward(key)?;
        let decrypt_keys = key_schedule::inverted(&encrypt_keys);
        Ok(Idea {
            encrypt_keys,
            decrypt_keys,
        })
    }

    /// Encrypts a buffer of any length, including empty.
    ///
    /// The ciphertext is always one 8-byte block longer than the
    /// plaintext rounded down to whole blocks; the final block carries
    /// the padding marker. See [`block::encrypt_buffer`].
    ///
    /// # Parameters
    /// - `plaintext`: The bytes to encrypt.
    ///
    /// # Returns
    /// The ciphertext, `8 * (plaintext.len() / 8 + 1)` bytes long.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        block::encrypt_buffer(plaintext, &self.encrypt_keys)
    }

    /// Decrypts a buffer produced by [`encrypt`](Self::encrypt) and
    /// strips the padding.
    ///
    /// # Parameters
    /// - `ciphertext`: The bytes to decrypt.
    ///
    /// # Returns
    /// The recovered plaintext.
    ///
    /// # Errors
    /// - [`IdeaError::InvalidCiphertextLength`] if the length is not a
    ///   positive multiple of 8.
    /// - [`IdeaError::CorruptPadding`] if the padding marker is invalid
    ///   (wrong key or corrupted ciphertext).
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, IdeaError> {
        block::decrypt_buffer(ciphertext, &self.decrypt_keys)
    }

    /// Encrypts a single raw 8-byte block. No padding is involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea::Idea;
    ///
    /// let cipher = Idea::new(&[1u8; 16]).unwrap();
    /// let block = *b"8 bytes!";
    /// let encrypted = cipher.encrypt_block(block);
    /// assert_eq!(cipher.decrypt_block(encrypted), block);
    /// ```
    pub fn encrypt_block(&self, block: [u8; 8]) -> [u8; 8] {
        block::crypt_block(&block, &self.encrypt_keys)
    }

    /// Decrypts a single raw 8-byte block. No padding is involved.
    pub fn decrypt_block(&self, block: [u8; 8]) -> [u8; 8] {
        block::crypt_block(&block, &self.decrypt_keys)
    }
}
