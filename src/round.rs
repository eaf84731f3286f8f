//! The IDEA round transform: eight mixing rounds plus the output
//! transformation, applied to one 64-bit block of four words.

use crate::arithmetic::{add, mul};
use crate::key_schedule::{SubkeySchedule, KEYS_PER_ROUND, ROUNDS};

/// Applies the full round transform to one block.
///
/// Pure function, identical for encryption and decryption; the supplied
/// schedule alone decides the direction.
pub(crate) fn crypt(block: [u16; 4], keys: &SubkeySchedule) -> [u16; 4] {
    let k = keys.words();
    let [mut x1, mut x2, mut x3, mut x4] = block;

    for round in 0..ROUNDS {
        let base = round * KEYS_PER_ROUND;

        let a = mul(x1, k[base]);
        let b = add(x2, k[base + 1]);
        let c = add(x3, k[base + 2]);
        let d = mul(x4, k[base + 3]);

        // Multiplication-addition ladder over the two XOR combinations.
        let e = mul(a ^ c, k[base + 4]);
        let f = mul(add(b ^ d, e), k[base + 5]);
        let g = add(e, f);

        x1 = a ^ f;
        x2 = c ^ f;
        x3 = b ^ g;
        x4 = d ^ g;
    }

    // The round assignments above swap the middle wires each pass; the
    // last round must not, so swap back before whitening.
    std::mem::swap(&mut x2, &mut x3);

    [
        mul(x1, k[48]),
        add(x2, k[49]),
        add(x3, k[50]),
        mul(x4, k[51]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_schedule;

    /// The classic IDEA test key: words 0001 0002 ... 0008.
    const TEST_KEY: [u8; 16] = [
        0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0x07, 0x00,
        0x08,
    ];

    /// Published known-answer vector for the classic test key.
    #[test]
    fn test_known_answer_vector() {
        let forward = key_schedule::forward(&TEST_KEY).unwrap();
        let ciphertext = crypt([0x0000, 0x0001, 0x0002, 0x0003], &forward);
        assert_eq!(ciphertext, [0x11fb, 0xed2b, 0x0198, 0x6de5]);
    }

    #[test]
    fn test_inverse_schedule_decrypts() {
        let forward = key_schedule::forward(&TEST_KEY).unwrap();
        let inverse = key_schedule::inverted(&forward);
        let plaintext = crypt([0x11fb, 0xed2b, 0x0198, 0x6de5], &inverse);
        assert_eq!(plaintext, [0x0000, 0x0001, 0x0002, 0x0003]);
    }

    #[test]
    fn test_block_roundtrip_many_blocks() {
        let forward = key_schedule::forward(&[0x5Cu8; 16]).unwrap();
        let inverse = key_schedule::inverted(&forward);

        let blocks: [[u16; 4]; 5] = [
            [0, 0, 0, 0],
            [u16::MAX, u16::MAX, u16::MAX, u16::MAX],
            [0x0001, 0x8000, 0x7FFF, 0xFFFE],
            [0xDEAD, 0xBEEF, 0xCAFE, 0xBABE],
            [1, 2, 3, 4],
        ];
        for block in blocks {
            let encrypted = crypt(block, &forward);
            assert_ne!(encrypted, block, "block {:04x?} unchanged by cipher", block);
            let decrypted = crypt(encrypted, &inverse);
            assert_eq!(decrypted, block, "block {:04x?} did not round-trip", block);
        }
    }

    #[test]
    fn test_deterministic() {
        let forward = key_schedule::forward(&TEST_KEY).unwrap();
        let block = [0x1234, 0x5678, 0x9ABC, 0xDEF0];
        assert_eq!(crypt(block, &forward), crypt(block, &forward));
    }
}
