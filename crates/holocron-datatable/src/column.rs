//! Column definitions and type codes.

use crate::{Error, Result};

/// How a column's cells are stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum ColumnKind {
    /// 4-byte little-endian integer, zero is false.
    Bool,
    /// 4-byte little-endian signed integer.
    Int,
    /// 4-byte little-endian IEEE-754 float.
    Float,
    /// Null-terminated byte string.
    String,
}

impl ColumnKind {
    /// Classify a type code by its leading character.
    ///
    /// Codes carry extra detail after the first character (enum members,
    /// defaults such as `i(0)`), none of which affects decoding.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.as_bytes().first() {
            Some(b'b') => Ok(ColumnKind::Bool),
            Some(b'i' | b'e' | b'h' | b'v' | b'z') => Ok(ColumnKind::Int),
            Some(b'f') => Ok(ColumnKind::Float),
            Some(b's' | b'p') => Ok(ColumnKind::String),
            _ => Err(Error::UnknownTypeCode(code.to_string())),
        }
    }
}

/// A column: its name, declared type code, and the kind derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Column {
    pub name: String,
    /// The full type code as stored in the file.
    pub code: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let kind = ColumnKind::from_code(&code)?;
        Ok(Self {
            name: name.into(),
            code,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_character_decides() {
        assert_eq!(ColumnKind::from_code("b").unwrap(), ColumnKind::Bool);
        assert_eq!(ColumnKind::from_code("i(0)").unwrap(), ColumnKind::Int);
        assert_eq!(
            ColumnKind::from_code("e(none=0,some=1)[none]").unwrap(),
            ColumnKind::Int
        );
        assert_eq!(ColumnKind::from_code("h").unwrap(), ColumnKind::Int);
        assert_eq!(ColumnKind::from_code("f[1.5]").unwrap(), ColumnKind::Float);
        assert_eq!(ColumnKind::from_code("p").unwrap(), ColumnKind::String);
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            ColumnKind::from_code("x"),
            Err(Error::UnknownTypeCode(code)) if code == "x"
        ));
        assert!(ColumnKind::from_code("").is_err());
    }
}
