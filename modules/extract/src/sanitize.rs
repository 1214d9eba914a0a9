//! Lossy ASCII cleanup for free-text columns.

use anyhow::Result;
use arrow::array::{Array, ArrayRef, StringArray};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use std::sync::Arc;

/// Null becomes `""`; otherwise every non-ASCII character is dropped.
pub fn clean_text(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(s) => s.chars().filter(char::is_ascii).collect(),
    }
}

/// Apply [`clean_text`] to every cell of a column, coercing non-string
/// values to their display text. The result is a non-null Utf8 column.
pub fn clean_column(column: &ArrayRef) -> Result<ArrayRef> {
    let options = FormatOptions::default();
    let formatter = ArrayFormatter::try_new(column.as_ref(), &options)?;

    let cleaned: Vec<String> = (0..column.len())
        .map(|i| {
            if column.is_null(i) {
                clean_text(None)
            } else {
                clean_text(Some(&formatter.value(i).to_string()))
            }
        })
        .collect();
    Ok(Arc::new(StringArray::from(cleaned)))
}
