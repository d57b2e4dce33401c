//! Common utilities for Holocron.
//!
//! This crate provides foundational types and utilities used across all Holocron crates:
//!
//! - [`BinaryReader`] - Zero-copy binary reading from byte slices
//! - [`Tag`] - Four-character chunk and form identifiers
//! - [`crc`] - The string CRC used to key asset paths
//! - [`ErrorKind`] - The decode failure taxonomy shared by every decoder crate

mod error;
mod reader;
mod tag;

pub mod crc;

pub use error::{Error, ErrorKind, Result};
pub use reader::BinaryReader;
pub use tag::Tag;
