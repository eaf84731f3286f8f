//! Subkey schedule expansion and inversion.
//!
//! A 128-bit primary key expands into 52 ordered 16-bit subkeys: six per
//! mixing round plus four for the output transformation. Decryption uses
//! the same round transform with a derived schedule, built by inverting
//! and reordering the forward subkeys so that each decryption round undoes
//! the matching encryption round.

use std::fmt;
use std::ops::Index;

use crate::arithmetic::{add_inverse, mul_inverse};
use crate::error::IdeaError;

/// Number of subkey words in a schedule.
pub(crate) const NUM_SUBKEYS: usize = 52;

/// Number of mixing rounds.
pub(crate) const ROUNDS: usize = 8;

/// Subkey words consumed per mixing round.
pub(crate) const KEYS_PER_ROUND: usize = 6;

/// Primary key length in bytes.
const KEY_LEN: usize = 16;

/// Bit positions the working key rotates left between extraction passes.
const KEY_ROTATION: u32 = 25;

/// An ordered, immutable sequence of 52 subkey words.
///
/// Derived once per primary key and shared read-only by every block
/// operation afterwards. Subkey words are cleared when the schedule is
/// dropped.
///
/// # Examples
///
/// ```
/// use idea::key_schedule;
///
/// let schedule = key_schedule::forward(&[0x11u8; 16]).unwrap();
/// let first_word = schedule[0];
/// assert_eq!(first_word, 0x1111);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SubkeySchedule {
    words: [u16; NUM_SUBKEYS],
}

impl SubkeySchedule {
    /// Returns the full 52-word sequence.
    pub(crate) fn words(&self) -> &[u16; NUM_SUBKEYS] {
        &self.words
    }
}

impl fmt::Debug for SubkeySchedule {
    /// Never prints subkey material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubkeySchedule([..])")
    }
}

impl Index<usize> for SubkeySchedule {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.words[index]
    }
}

impl Drop for SubkeySchedule {
    /// Clears subkey material on drop.
    fn drop(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }
}

/// Expands a primary key into the 52-word forward (encryption) schedule.
///
/// The key is loaded as a big-endian 128-bit working value. Seven
/// extraction passes each pull consecutive 16-bit words left to right
/// (eight per pass, four on the last), and the working value rotates left
/// by 25 bit positions between passes.
///
/// # Parameters
/// - `key`: The primary key; must be exactly 16 bytes (128 bits).
///
/// # Returns
/// The forward [`SubkeySchedule`].
///
/// # Errors
/// Returns [`IdeaError::InvalidKeyLength`] if `key.len() != 16`. This is
/// the only place key length is validated.
///
/// # Examples
///
/// ```
/// use idea::key_schedule;
///
/// assert!(key_schedule::forward(&[0u8; 16]).is_ok());
/// assert!(key_schedule::forward(&[0u8; 15]).is_err());
/// ```
pub fn forward(key: &[u8]) -> Result<SubkeySchedule, IdeaError> {
    let key: [u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| IdeaError::InvalidKeyLength)?;
    let mut working = u128::from_be_bytes(key);

    let mut words = [0u16; NUM_SUBKEYS];
    let mut next = 0;
    while next < NUM_SUBKEYS {
        let take = (NUM_SUBKEYS - next).min(8);
        for i in 0..take {
            words[next + i] = (working >> (112 - 16 * i)) as u16;
        }
        next += take;
        working = working.rotate_left(KEY_ROTATION);
    }

    Ok(SubkeySchedule { words })
}

/// Derives the decryption schedule from a forward schedule.
///
/// Applying the round transform with the inverted schedule undoes the
/// transform performed with the forward one. The output transformation's
/// keys, inverted, open the decryption schedule; each forward mixing
/// round, walked from last to first, contributes its four outer keys
/// inverted (the two additive keys swap positions in the interior rounds,
/// following the wires they feed) and the multiplication-ladder keys of
/// the preceding round unchanged, since the network's XOR structure
/// undoes those without arithmetic inversion. Round one's keys, inverted,
/// close the schedule.
///
/// # Parameters
/// - `forward`: The forward schedule to invert.
///
/// # Returns
/// The inverse [`SubkeySchedule`]. Inverting twice returns the original
/// schedule.
///
/// # Examples
///
/// ```
/// use idea::key_schedule;
///
/// let forward = key_schedule::forward(&[3u8; 16]).unwrap();
/// let inverse = key_schedule::inverted(&forward);
/// assert_eq!(key_schedule::inverted(&inverse), forward);
/// ```
pub fn inverted(forward: &SubkeySchedule) -> SubkeySchedule {
    let k = forward.words();
    let mut inv = [0u16; NUM_SUBKEYS];

    // Output transformation keys open the decryption schedule, in wire
    // order, followed by the last round's ladder keys.
    inv[0] = mul_inverse(k[48]);
    inv[1] = add_inverse(k[49]);
    inv[2] = add_inverse(k[50]);
    inv[3] = mul_inverse(k[51]);
    inv[4] = k[46];
    inv[5] = k[47];

    let mut next = KEYS_PER_ROUND;
    for r in (1..ROUNDS).rev() {
        let base = r * KEYS_PER_ROUND;
        inv[next] = mul_inverse(k[base]);
        // Interior rounds: the two additive keys trade places.
        inv[next + 1] = add_inverse(k[base + 2]);
        inv[next + 2] = add_inverse(k[base + 1]);
        inv[next + 3] = mul_inverse(k[base + 3]);
        inv[next + 4] = k[base - 2];
        inv[next + 5] = k[base - 1];
        next += KEYS_PER_ROUND;
    }

    // Round one's keys close the schedule as the decryption output
    // transformation, with no positional swap.
    inv[48] = mul_inverse(k[0]);
    inv[49] = add_inverse(k[1]);
    inv[50] = add_inverse(k[2]);
    inv[51] = mul_inverse(k[3]);

    SubkeySchedule { words: inv }
}
