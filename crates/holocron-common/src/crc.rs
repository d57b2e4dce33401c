//! String CRC used to key asset paths.
//!
//! The asset tables key object templates by a 32-bit CRC of their path:
//! polynomial `0x04C11DB7`, processed MSB-first, with the register seeded
//! and finally xored with `0xFFFFFFFF`. The empty string hashes to zero.

const POLYNOMIAL: u32 = 0x04C1_1DB7;
const INIT: u32 = 0xFFFF_FFFF;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC of a byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    let crc = data.iter().fold(INIT, |crc, &b| {
        TABLE[((crc >> 24) as u8 ^ b) as usize] ^ (crc << 8)
    });
    crc ^ INIT
}

/// Compute the CRC of a string.
///
/// The string is hashed as its UTF-8 bytes, case-sensitively.
#[inline]
pub fn hash_str(s: &str) -> u32 {
    hash_bytes(s.as_bytes())
}

/// Compute the CRC of an asset path as the tables store it.
///
/// Paths are lowercased and use forward slashes before hashing.
pub fn hash_path(path: &str) -> u32 {
    let normalized: Vec<u8> = path
        .bytes()
        .map(|b| match b {
            b'\\' => b'/',
            _ => b.to_ascii_lowercase(),
        })
        .collect();
    hash_bytes(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash() {
        assert_eq!(hash_bytes(&[]), 0);
    }

    #[test]
    fn test_check_value() {
        assert_eq!(hash_bytes(b"123456789"), 0xFC89_1918);
    }

    #[test]
    fn test_string_hash() {
        assert_eq!(hash_str("test"), hash_bytes(b"test"));
        assert_ne!(hash_str("test"), hash_str("Test"));
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(
            hash_path("Object\\Creature\\Player.iff"),
            hash_str("object/creature/player.iff")
        );
    }
}
