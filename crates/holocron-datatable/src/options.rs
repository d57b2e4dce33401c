//! Decode options.

use log::trace;

/// Column-name presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnCase {
    /// Names exactly as stored in the file.
    #[default]
    Preserve,
    /// `snake_case` names rewritten to `camelCase`.
    Camel,
}

impl ColumnCase {
    /// Apply this convention to a column name.
    pub fn apply(self, name: &str) -> String {
        match self {
            ColumnCase::Preserve => name.to_string(),
            ColumnCase::Camel => to_camel_case(name),
        }
    }

    /// Apply this convention to every column name of a table.
    ///
    /// Names that would rewrite to the same text as another column's keep
    /// their stored form, so distinct columns stay addressable.
    pub fn apply_all(self, names: &[String]) -> Vec<String> {
        let rewritten: Vec<String> = names.iter().map(|n| self.apply(n)).collect();
        rewritten
            .iter()
            .zip(names)
            .map(|(new, old)| {
                if rewritten.iter().filter(|other| *other == new).count() > 1 {
                    trace!("column '{}' would collide as '{}', keeping it", old, new);
                    old.clone()
                } else {
                    new.clone()
                }
            })
            .collect()
    }
}

/// Options for [`DataTable::parse_with`](crate::DataTable::parse_with).
#[derive(Debug, Clone)]
pub struct DataTableOptions {
    /// Column-name rewrite. Never affects cell values.
    pub column_case: ColumnCase,
    /// Reject `COLS`/`TYPE` chunks with bytes left over after their entries.
    pub strict_chunks: bool,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            column_case: ColumnCase::Preserve,
            strict_chunks: true,
        }
    }
}

impl DataTableOptions {
    /// Set the column-name convention.
    pub fn column_case(mut self, case: ColumnCase) -> Self {
        self.column_case = case;
        self
    }

    /// Accept trailing bytes in `COLS`/`TYPE`, as older tools did.
    pub fn lenient(mut self) -> Self {
        self.strict_chunks = false;
        self
    }
}

/// Underscore-separated words become camelCase; the first character is
/// lowercased and the rest of each word is left alone.
fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("max_level"), "maxLevel");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("skill_mod_1"), "skillMod1");
        assert_eq!(to_camel_case("_leading__double_"), "leadingDouble");
        assert_eq!(to_camel_case("XpType"), "xpType");
    }

    #[test]
    fn test_preserve() {
        assert_eq!(ColumnCase::Preserve.apply("max_level"), "max_level");
    }

    #[test]
    fn test_camel_collision_keeps_stored_names() {
        let names: Vec<String> = ["max_level", "maxLevel", "min_level"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            ColumnCase::Camel.apply_all(&names),
            ["max_level", "maxLevel", "minLevel"]
        );
        assert_eq!(ColumnCase::Preserve.apply_all(&names), names);
    }

    #[test]
    fn test_builder() {
        let options = DataTableOptions::default()
            .column_case(ColumnCase::Camel)
            .lenient();
        assert_eq!(options.column_case, ColumnCase::Camel);
        assert!(!options.strict_chunks);
    }
}
