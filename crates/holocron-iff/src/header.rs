//! IFF node header structure.

use holocron_common::Tag;
use zerocopy::byteorder::{BigEndian, U32};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// The eight bytes that open every form and chunk.
///
/// For a form the tag is always `FORM` and the subtype follows as the first
/// four bytes of the body.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct NodeHeader {
    /// Node tag (`FORM` for forms).
    pub tag: Tag,
    /// Body size in bytes, excluding this header.
    pub size: U32<BigEndian>,
}

impl NodeHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 8;

    /// Bytes a form spends on header plus subtype.
    pub const FORM_OVERHEAD: usize = Self::SIZE + Tag::LEN;

    /// Declared body size.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Whether this header opens a form.
    #[inline]
    pub fn is_form(&self) -> bool {
        self.tag == Tag::FORM
    }
}
