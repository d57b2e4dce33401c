//! Datatable decoder.
//!
//! Datatables (`datatables/**/*.iff`) hold most of the game's tuning data:
//! skills, experience curves, ship components and so on. Each file carries
//! its own schema, so one decoder serves every table.
//!
//! # Quick Start
//!
//! ```no_run
//! use holocron_datatable::DataTable;
//!
//! let data = std::fs::read("datatables/skill/skills.iff")?;
//! let table = DataTable::parse(&data)?;
//!
//! for row in table.rows() {
//!     if let Some(name) = row.get("NAME").and_then(|v| v.as_str()) {
//!         println!("{}", name);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Column Types
//!
//! The first character of each column's type code selects the cell encoding:
//!
//! | code | value | wire |
//! |------|-------|------|
//! | `b` | [`Value::Bool`] | i32, nonzero is true |
//! | `i` `e` `h` `v` `z` | [`Value::Int`] | i32 |
//! | `f` | [`Value::Float`] | f32 |
//! | `s` `p` | [`Value::String`] | null-terminated string |
//!
//! # Options
//!
//! ```no_run
//! use holocron_datatable::{ColumnCase, DataTable, DataTableOptions};
//!
//! let data = std::fs::read("datatables/space/ship_components.iff")?;
//! let options = DataTableOptions::default().column_case(ColumnCase::Camel);
//! let table = DataTable::parse_with(&data, &options)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod column;
mod error;
mod options;
mod table;
mod value;

pub use column::{Column, ColumnKind};
pub use error::{Error, Result};
pub use options::{ColumnCase, DataTableOptions};
pub use table::{DataTable, Row, VERSION};
pub use value::Value;
