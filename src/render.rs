//! BibTeX rendering.
//!
//! Converts an entry back into BibTeX text:
//!
//! ```plain
//! @article{smith2020something,
//!   title={Something for Something},
//!   author={Smith, John},
//!   year={2020},
//! }
//! ```

use crate::{EntryType, Fields};
use itertools::Itertools;

/// Fields written first, in this order, when present.
pub const LEADING_FIELDS: [&str; 7] = ["title", "author", "journal", "volume", "number", "pages", "year"];

/// Field keys in output order: [`LEADING_FIELDS`] first, then the rest sorted.
pub fn field_order(fields: &Fields) -> Vec<&str> {
    let leading = LEADING_FIELDS
        .iter()
        .copied()
        .filter(|key| fields.contains_key(*key));
    let remaining = fields
        .keys()
        .map(String::as_str)
        .filter(|key| !LEADING_FIELDS.contains(key))
        .sorted();

    leading.chain(remaining).collect()
}

/// Renders an entry as BibTeX.
///
/// Every field line ends with a comma; the closing brace stands alone.
pub fn render_entry(entry_type: EntryType, citekey: &str, fields: &Fields) -> String {
    let mut lines = Vec::with_capacity(fields.len() + 2);
    lines.push(format!("@{entry_type}{{{citekey},"));
    for key in field_order(fields) {
        lines.push(format!("  {key}={{{}}},", fields[key]));
    }
    lines.push("}".to_string());
    lines.join("\n")
}
