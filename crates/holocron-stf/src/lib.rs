//! Localized string table (STF) decoder.
//!
//! String tables (`string/<locale>/*.stf`) map ASCII keys to display text.
//! Unlike most assets they are not IFF containers but a flat layout.
//!
//! # File Format
//!
//! All integers are little-endian.
//!
//! - 9 bytes: header (u32 magic `0xABCD`, u8 version, u32 next unique id)
//! - 4 bytes: entry count N
//! - N values: u32 id, u32 unused checksum, u32 length L, L UTF-16LE code units
//! - N names: u32 id, u32 length M, M ASCII bytes
//!
//! Names and values are joined by id. A name whose id has no value is
//! skipped.
//!
//! # Example
//!
//! ```no_run
//! use holocron_stf::StringTable;
//!
//! // A missing file is not an error: it decodes to an empty table.
//! let table = StringTable::open("string/en/skl_n.stf")?;
//!
//! let label = table.get("combat_marksman_novice").unwrap_or("combat_marksman_novice");
//! println!("{}", label);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod table;

pub use error::{Error, Result};
pub use header::StfHeader;
pub use table::StringTable;
