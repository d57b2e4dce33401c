//! String table decoding.

use std::fs;
use std::hash::BuildHasherDefault;
use std::io;
use std::path::Path;

use encoding_rs::UTF_16LE;
use hashbrown::HashMap as FastHashMap;
use holocron_common::BinaryReader;
use log::{debug, trace, warn};
use rustc_hash::FxHasher;

use crate::{Error, Result, StfHeader};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// A decoded localized string table.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct StringTable {
    #[cfg_attr(feature = "serde", serde(skip))]
    version: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    next_unique_id: u32,
    entries: FxHashMap<String, String>,
}

impl StringTable {
    /// Read and decode a string table from disk.
    ///
    /// A file that does not exist yields an empty table: string tables are
    /// optional and callers fall back to the raw key. Any other I/O failure,
    /// and any malformed content, is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        match fs::read(path) {
            Ok(data) => Self::parse(&data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("String table {} not found, using empty table", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Decode a string table from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let header: StfHeader = reader.read_struct()?;
        if header.magic() != StfHeader::MAGIC {
            warn!(
                "Unexpected string table magic {:#010x} (expected {:#010x})",
                header.magic(),
                StfHeader::MAGIC
            );
        }

        let count = reader.read_u32()? as usize;

        // Each value entry needs at least 12 bytes, so a larger count is
        // caught as truncation before it can size an allocation.
        let mut values = FxHashMap::with_capacity_and_hasher(
            count.min(reader.remaining() / 12),
            Default::default(),
        );
        for index in 0..count {
            let offset = reader.position();
            let (id, text) = read_value(&mut reader).map_err(|_| Error::Truncated {
                section: "value",
                index,
                offset,
            })?;
            values.insert(id, text);
        }

        let mut entries = FxHashMap::with_capacity_and_hasher(values.len(), Default::default());
        for index in 0..count {
            let offset = reader.position();
            let (id, key) = read_name(&mut reader).map_err(|_| Error::Truncated {
                section: "name",
                index,
                offset,
            })?;

            match values.get(&id) {
                Some(text) => {
                    entries.insert(key, text.clone());
                }
                None => trace!("String table name '{}' has no value for id {}", key, id),
            }
        }

        debug!(
            "Decoded string table: {} entries ({} declared)",
            entries.len(),
            count
        );

        Ok(Self {
            version: header.version,
            next_unique_id: header.next_unique_id(),
            entries,
        })
    }

    /// Look up the text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, text)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Header version byte (zero for an absent file).
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Header next-unique-id field (zero for an absent file).
    pub fn next_unique_id(&self) -> u32 {
        self.next_unique_id
    }
}

/// id, unused checksum, length in UTF-16 code units, text.
fn read_value(reader: &mut BinaryReader<'_>) -> holocron_common::Result<(u32, String)> {
    let id = reader.read_u32()?;
    reader.skip(4)?;
    let length = reader.read_u32()? as usize;
    let byte_len = length
        .checked_mul(2)
        .ok_or(holocron_common::Error::UnexpectedEof {
            needed: usize::MAX,
            available: reader.remaining(),
        })?;
    let bytes = reader.read_bytes(byte_len)?;

    let (text, had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
    if had_errors {
        trace!("String table value {} contains invalid UTF-16", id);
    }
    Ok((id, text.into_owned()))
}

/// id, length in bytes, ASCII key.
fn read_name(reader: &mut BinaryReader<'_>) -> holocron_common::Result<(u32, String)> {
    let id = reader.read_u32()?;
    let length = reader.read_u32()? as usize;
    let key = reader.read_bytes(length)?;
    Ok((id, String::from_utf8_lossy(key).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_value_utf16() {
        let mut data = Vec::new();
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0x48, 0x00, 0xE9, 0x00]); // "Hé"
        let mut reader = BinaryReader::new(&data);

        assert_eq!(read_value(&mut reader).unwrap(), (3, "Hé".to_string()));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_value_surrogate_pair() {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0x3D, 0xD8, 0x00, 0xDE]); // U+1F600

        let (_, text) = read_value(&mut BinaryReader::new(&data)).unwrap();
        assert_eq!(text, "\u{1F600}");
    }

    #[test]
    fn test_read_value_length_past_buffer() {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&[0x41, 0x00]);

        assert!(matches!(
            read_value(&mut BinaryReader::new(&data)),
            Err(holocron_common::Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_read_name_truncated() {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&10u32.to_le_bytes());
        data.extend_from_slice(b"short");

        assert!(read_name(&mut BinaryReader::new(&data)).is_err());
    }
}
