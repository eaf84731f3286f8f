//! Byte-to-word conversion utilities.
//!
//! The cipher packs each 8-byte block into four 16-bit words using
//! big-endian byte ordering: the first byte of the block is the most
//! significant byte of the first word.

/// Packs an 8-byte block into four words.
pub(crate) fn bytes_to_words(block: &[u8; 8]) -> [u16; 4] {
    [
        u16::from_be_bytes([block[0], block[1]]),
        u16::from_be_bytes([block[2], block[3]]),
        u16::from_be_bytes([block[4], block[5]]),
        u16::from_be_bytes([block[6], block[7]]),
    ]
}

/// Unpacks four words into an 8-byte block.
pub(crate) fn words_to_bytes(words: [u16; 4]) -> [u8; 8] {
    let mut block = [0u8; 8];
    for (chunk, word) in block.chunks_exact_mut(2).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}
