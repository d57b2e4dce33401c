//! STF header structure.

use zerocopy::byteorder::{LittleEndian, U32};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// The nine bytes at the start of every string table.
///
/// Decoding does not depend on any of these fields.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct StfHeader {
    magic: U32<LittleEndian>,
    /// Format version.
    pub version: u8,
    next_unique_id: U32<LittleEndian>,
}

impl StfHeader {
    /// Expected magic value.
    pub const MAGIC: u32 = 0x0000_ABCD;

    /// Size of the header in bytes.
    pub const SIZE: usize = 9;

    #[inline]
    pub fn magic(&self) -> u32 {
        self.magic.get()
    }

    /// The id the authoring tool would assign to the next new entry.
    #[inline]
    pub fn next_unique_id(&self) -> u32 {
        self.next_unique_id.get()
    }
}
