//! CRC string table decoder.
//!
//! Object templates reference each other by a 32-bit CRC of the template
//! path. The CRC string table (`misc/object_template_crc_string_table.iff`)
//! maps those CRCs back to paths.
//!
//! # Layout
//!
//! ```text
//! FORM CSTB
//!   FORM 0000
//!     DATA  u32 entry count N
//!     CRCT  N x u32 CRC
//!     STNG  N x null-terminated path
//! ```
//!
//! All integers are little-endian.
//!
//! # Errors
//!
//! A missing `CSTB`/`0000` form or `DATA`/`CRCT`/`STNG` chunk is reported
//! as [`ErrorKind::NotFound`](holocron_common::ErrorKind::NotFound), the same
//! as every other decoder. A chunk holding fewer entries than `DATA`
//! declares is [`Error::CountMismatch`] with kind
//! [`ErrorKind::Format`](holocron_common::ErrorKind::Format).
//!
//! # Example
//!
//! ```no_run
//! use holocron_crctable::CrcTable;
//!
//! let data = std::fs::read("misc/object_template_crc_string_table.iff")?;
//! let table = CrcTable::parse(&data)?;
//!
//! if let Some(path) = table.find_path("object/creature/player/shared_human_male.iff") {
//!     println!("{}", path);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod table;

pub use error::{Error, Result};
pub use table::CrcTable;
