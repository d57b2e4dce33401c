//! IFF container parser.
//!
//! Most asset files are stored in a chunked container: a tree of *forms*
//! (containers with a four-character subtype) and *chunks* (leaves with an
//! opaque payload). All header fields are big-endian.
//!
//! # Wire Format
//!
//! - Form: `"FORM"` + u32 size + 4-byte subtype, then children filling
//!   exactly `size - 4` bytes
//! - Chunk: 4-byte tag + u32 size, then exactly `size` payload bytes
//!
//! # Example
//!
//! ```no_run
//! use holocron_iff::Iff;
//!
//! let data = std::fs::read("datatables/skill/skills.iff")?;
//! let iff = Iff::parse(&data)?;
//!
//! let mut reader = iff.reader();
//! reader.enter_form("DTII")?;
//! reader.enter_form("0001")?;
//! reader.enter_chunk("COLS")?;
//! let mut cols = reader.chunk_reader()?;
//! println!("{} columns", cols.read_u32()?);
//! reader.exit_chunk();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod node;
mod parser;
mod reader;

pub use error::{Error, Result};
pub use header::NodeHeader;
pub use node::Node;
pub use parser::{Iff, MAX_DEPTH};
pub use reader::IffReader;
