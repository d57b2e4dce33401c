//! Four-character tags.
//!
//! Every node in a container file is identified by four ASCII bytes: `FORM`
//! for forms, and an arbitrary tag such as `DATA` or `0001` for chunks and
//! form subtypes. Numerically a tag is always read big-endian, so `FORM` is
//! `0x464F524D` on every platform.

use std::fmt;
use std::str::FromStr;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::Error;

/// A four-byte node identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Tag {
    bytes: [u8; 4],
}

impl Tag {
    /// Tag length in bytes.
    pub const LEN: usize = 4;

    /// The tag that opens every form header.
    pub const FORM: Self = Self::new(*b"FORM");

    /// Create a tag from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self { bytes }
    }

    /// Create a tag from its big-endian numeric value.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self::new(value.to_be_bytes())
    }

    /// The big-endian numeric value of this tag.
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.bytes)
    }

    /// Get the raw bytes of the tag.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.bytes
    }

    /// Compare against a tag name given as text.
    ///
    /// Names that are not exactly four bytes never match.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        name.as_bytes() == self.bytes
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidTag(s.to_string()))?;

        if !bytes.is_ascii() {
            return Err(Error::InvalidTag(s.to_string()));
        }

        Ok(Self::new(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_is_big_endian() {
        assert_eq!(Tag::FORM.as_u32(), 0x464F_524D);
        assert_eq!(Tag::from_u32(0x464F_524D), Tag::FORM);
    }

    #[test]
    fn test_parse_and_display() {
        let tag: Tag = "DTII".parse().unwrap();
        assert_eq!(tag.to_string(), "DTII");
        assert!(tag.matches("DTII"));
        assert!(!tag.matches("DTI"));
    }

    #[test]
    fn test_invalid_length() {
        assert!("TOOLONG".parse::<Tag>().is_err());
        assert!("".parse::<Tag>().is_err());
    }

    #[test]
    fn test_display_escapes_binary() {
        let tag = Tag::new([b'A', 0, b'B', 0xFF]);
        assert_eq!(tag.to_string(), "A\\x00B\\xff");
    }
}
