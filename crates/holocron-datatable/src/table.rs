//! Datatable decoding and row access.

use holocron_common::BinaryReader;
use holocron_iff::{Iff, IffReader};
use log::{debug, trace};

use crate::{Column, ColumnKind, DataTableOptions, Error, Result, Value};

/// The only `DTII` version this decoder handles.
pub const VERSION: &str = "0001";

/// A decoded datatable.
///
/// Rows store one value per column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Decode a datatable with default options.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with(data, &DataTableOptions::default())
    }

    /// Decode a datatable.
    ///
    /// # Layout
    ///
    /// ```text
    /// FORM DTII
    ///   FORM 0001
    ///     COLS  u32 column count C, C x null-terminated name
    ///     TYPE  C x null-terminated type code
    ///     ROWS  i32 row count R, R x C cells
    /// ```
    pub fn parse_with(data: &[u8], options: &DataTableOptions) -> Result<Self> {
        let iff = Iff::parse(data)?;
        let mut reader = iff.reader();

        reader.enter_form("DTII")?;

        let version = reader
            .children()
            .iter()
            .find(|node| node.is_form())
            .map(|node| node.tag());
        if let Some(version) = version.filter(|v| !v.matches(VERSION)) {
            return Err(Error::UnsupportedVersion(version));
        }
        reader.enter_form(VERSION)?;

        let names = read_names(&mut reader, options)?;
        let codes = read_codes(&mut reader, names.len(), options)?;

        let columns = options
            .column_case
            .apply_all(&names)
            .into_iter()
            .zip(codes)
            .map(|(name, code)| Column::new(name, code))
            .collect::<Result<Vec<_>>>()?;

        reader.enter_chunk("ROWS")?;
        let rows = read_rows(reader.chunk_reader()?, &columns)?;
        reader.exit_chunk();

        reader.exit_form();
        reader.exit_form();

        debug!(
            "Decoded datatable: {} columns, {} rows",
            columns.len(),
            rows.len()
        );
        Ok(Self { columns, rows })
    }

    /// Column definitions in declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A view of row `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// All rows in file order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Serialize as `{"columns": [...], "rows": [{name: value}, ...]}`.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'t> {
    columns: &'t [Column],
    values: &'t [Value],
}

impl<'t> Row<'t> {
    /// The value in the column called `name`.
    pub fn get(&self, name: &str) -> Option<&'t Value> {
        let values = self.values;
        self.columns
            .iter()
            .position(|c| c.name == name)
            .map(|i| &values[i])
    }

    /// Values in column order.
    pub fn values(&self) -> &'t [Value] {
        self.values
    }

    /// `(column name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'t str, &'t Value)> {
        let (columns, values) = (self.columns, self.values);
        columns.iter().map(|c| c.name.as_str()).zip(values.iter())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let rows: Vec<Row<'_>> = self.rows().collect();
        let mut state = serializer.serialize_struct("DataTable", 2)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

fn read_names(reader: &mut IffReader<'_, '_>, options: &DataTableOptions) -> Result<Vec<String>> {
    reader.enter_chunk("COLS")?;
    let mut cols = reader.chunk_reader()?;
    let count = cols.read_u32()? as usize;
    let names = read_strings(&mut cols, "COLS", count, options)?;
    reader.exit_chunk();
    Ok(names)
}

fn read_codes(
    reader: &mut IffReader<'_, '_>,
    count: usize,
    options: &DataTableOptions,
) -> Result<Vec<String>> {
    reader.enter_chunk("TYPE")?;
    let codes = read_strings(&mut reader.chunk_reader()?, "TYPE", count, options)?;
    reader.exit_chunk();
    Ok(codes)
}

/// Read exactly `count` null-terminated strings from a chunk.
fn read_strings(
    chunk_reader: &mut BinaryReader<'_>,
    chunk: &'static str,
    count: usize,
    options: &DataTableOptions,
) -> Result<Vec<String>> {
    // Every entry takes at least its terminator.
    if count > chunk_reader.remaining() {
        return Err(Error::CountMismatch {
            chunk,
            expected: count,
            found: chunk_reader.remaining(),
        });
    }

    let mut strings = Vec::with_capacity(count);
    for found in 0..count {
        match chunk_reader.read_cstring() {
            Ok(s) => strings.push(s.to_string()),
            Err(holocron_common::Error::MissingNullTerminator) => {
                return Err(Error::CountMismatch {
                    chunk,
                    expected: count,
                    found,
                })
            }
            Err(e) => return Err(e.into()),
        }
    }

    if !chunk_reader.is_empty() {
        if options.strict_chunks {
            return Err(Error::TrailingBytes {
                chunk,
                count,
                remaining: chunk_reader.remaining(),
            });
        }
        trace!(
            "{} chunk: ignoring {} trailing bytes",
            chunk,
            chunk_reader.remaining()
        );
    }

    Ok(strings)
}

fn read_rows(mut rows: BinaryReader<'_>, columns: &[Column]) -> Result<Vec<Vec<Value>>> {
    let count = rows.read_i32()?;
    if count < 0 {
        return Err(Error::NegativeRowCount(count));
    }
    let count = count as usize;
    // Column-less rows consume no bytes, so nothing else bounds the count.
    if columns.is_empty() && count > 0 {
        return Err(Error::RowsWithoutColumns(count));
    }

    let mut decoded = Vec::with_capacity(count.min(rows.remaining()));
    for row in 0..count {
        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            let value = read_value(&mut rows, column.kind).map_err(|e| match e {
                holocron_common::Error::UnexpectedEof { .. }
                | holocron_common::Error::MissingNullTerminator => Error::RowTruncated {
                    row,
                    column: column.name.clone(),
                },
                other => other.into(),
            })?;
            values.push(value);
        }
        decoded.push(values);
    }

    if !rows.is_empty() {
        trace!("ROWS chunk: {} bytes after last row", rows.remaining());
    }

    Ok(decoded)
}

fn read_value(reader: &mut BinaryReader<'_>, kind: ColumnKind) -> holocron_common::Result<Value> {
    Ok(match kind {
        ColumnKind::Bool => Value::Bool(reader.read_i32()? != 0),
        ColumnKind::Int => Value::Int(reader.read_i32()?),
        ColumnKind::Float => Value::Float(reader.read_f32()?),
        ColumnKind::String => {
            Value::String(String::from_utf8_lossy(reader.read_cstr_bytes()?).into_owned())
        }
    })
}
