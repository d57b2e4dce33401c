//! Holocron - decoders for legacy game asset files.
//!
//! This crate provides a unified interface to the Holocron decoder crates.
//! Every decoder takes a fully read byte buffer and returns a plain value;
//! none of them keep state between calls.
//!
//! # Crates
//!
//! - [`holocron_common`] - Common utilities (binary reading, tags, path CRCs)
//! - [`holocron_iff`] - IFF form/chunk container parsing and navigation
//! - [`holocron_crctable`] - CRC to template path tables (`CSTB`)
//! - [`holocron_datatable`] - Typed datatables (`DTII`)
//! - [`holocron_stf`] - Localized string tables (`.stf`)
//!
//! # Example
//!
//! ```no_run
//! use holocron::prelude::*;
//!
//! let data = std::fs::read("datatables/skill/skills.iff")?;
//! let skills = DataTable::parse(&data)?;
//!
//! let names = StringTable::open("string/en/skl_n.stf")?;
//!
//! for row in skills.rows() {
//!     let key = row.get("NAME").and_then(|v| v.as_str()).unwrap_or_default();
//!     println!("{}", names.get(key).unwrap_or(key));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use holocron_common as common;
pub use holocron_crctable as crctable;
pub use holocron_datatable as datatable;
pub use holocron_iff as iff;
pub use holocron_stf as stf;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use holocron_common::{crc, BinaryReader, ErrorKind, Tag};
    pub use holocron_crctable::CrcTable;
    pub use holocron_datatable::{ColumnCase, DataTable, DataTableOptions, Value};
    pub use holocron_iff::{Iff, IffReader, Node};
    pub use holocron_stf::StringTable;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
