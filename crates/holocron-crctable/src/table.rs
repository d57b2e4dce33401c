//! CRC string table.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap as FastHashMap;
use holocron_common::{crc, BinaryReader};
use holocron_iff::Iff;
use log::debug;
use rustc_hash::FxHasher;

use crate::{Error, Result};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// A decoded CRC to path table.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct CrcTable {
    entries: FxHashMap<u32, String>,
}

impl CrcTable {
    /// Decode a `CSTB` table from bytes.
    ///
    /// Keys and paths are paired by position. A CRC that appears twice keeps
    /// the later path.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let iff = Iff::parse(data)?;
        let mut reader = iff.reader();

        reader.enter_form("CSTB")?;
        reader.enter_form("0000")?;

        reader.enter_chunk("DATA")?;
        let count = reader.chunk_reader()?.read_u32()? as usize;
        reader.exit_chunk();

        reader.enter_chunk("CRCT")?;
        let crcs = read_crcs(reader.chunk_reader()?, count)?;
        reader.exit_chunk();

        reader.enter_chunk("STNG")?;
        let mut strings = reader.chunk_reader()?;
        let mut entries = FxHashMap::with_capacity_and_hasher(count, Default::default());
        for (index, crc) in crcs.into_iter().enumerate() {
            let path = match strings.read_cstr_bytes() {
                Ok(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                Err(holocron_common::Error::MissingNullTerminator) => {
                    return Err(Error::CountMismatch {
                        chunk: "STNG",
                        expected: count,
                        found: index,
                    })
                }
                Err(e) => return Err(e.into()),
            };

            if let Some(previous) = entries.insert(crc, path) {
                debug!("Duplicate CRC {:#010x}, replacing '{}'", crc, previous);
            }
        }
        reader.exit_chunk();

        reader.exit_form();
        reader.exit_form();

        debug!("Decoded CRC table: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Look up the path for a CRC.
    pub fn get(&self, crc: u32) -> Option<&str> {
        self.entries.get(&crc).map(String::as_str)
    }

    /// Look up a path by hashing it, returning the stored spelling.
    pub fn find_path(&self, path: &str) -> Option<&str> {
        self.get(crc::hash_path(path))
    }

    /// Whether the table contains a CRC.
    pub fn contains(&self, crc: u32) -> bool {
        self.entries.contains_key(&crc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(crc, path)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(&crc, path)| (crc, path.as_str()))
    }
}

fn read_crcs(mut reader: BinaryReader<'_>, count: usize) -> Result<Vec<u32>> {
    let available = reader.remaining() / 4;
    if available < count {
        return Err(Error::CountMismatch {
            chunk: "CRCT",
            expected: count,
            found: available,
        });
    }

    (0..count)
        .map(|_| reader.read_u32().map_err(Error::from))
        .collect()
}
