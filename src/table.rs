//! Flat tabular representation of nested JSON responses.
//!
//! The Web API answers with lists of nested objects. For analysis they are
//! flattened into a [`TrackTable`]: one row per object, nested object paths
//! joined with `_` into column names (`album.album_type` becomes
//! `album_album_type`). The column set of a table is the union of all rows'
//! keys; a row simply lacks the entry for a path it never had, and such a
//! cell reads as null. Flattening is deterministic, so running it twice over
//! the same input produces identical tables.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::error::{Error, Result};

/// One flattened row: column name to cell value.
pub type Row = BTreeMap<String, Value>;

/// The ordered collection of flattened track rows for one playlist.
///
/// This is the sole artifact handed between pipeline stages. It is built by
/// [`flatten_pages`], joined by [`TrackTable::left_join`], rewritten in place
/// by the normalizer and finally read by the statistics computation. It never
/// outlives a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTable {
    rows: Vec<Row>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// The union of all rows' column names.
    pub fn columns(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect()
    }

    /// Whether any row carries the given column.
    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.contains_key(name))
    }

    /// The cell at `row`/`column`, `None` when the row lacks the column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Projects a column that must hold a string in every row.
    ///
    /// Used to pull the `track_id` column out of the flattened playlist
    /// items. A row lacking the column, or carrying a non-string value
    /// (e.g. null for a local file the API cannot resolve), fails with
    /// [`Error::UnexpectedResponseShape`] instead of producing a hole in
    /// the id sequence.
    pub fn string_column(&self, name: &str) -> Result<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        Error::UnexpectedResponseShape(format!(
                            "column {} is missing or not a string",
                            name
                        ))
                    })
            })
            .collect()
    }

    /// Rewrites a column in place through `f`.
    ///
    /// Rows lacking the column are left untouched; their cell keeps reading
    /// as null. The first row for which `f` fails aborts the rewrite and the
    /// error propagates to the caller.
    pub fn update_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        for row in &mut self.rows {
            if let Some(value) = row.get(name) {
                let updated = f(value)?;
                row.insert(name.to_string(), updated);
            }
        }
        Ok(())
    }

    /// Combines two tables with a left join on `key`.
    ///
    /// `self` is the driving side: every one of its rows appears exactly once
    /// in the output, in order. A right-side row is matched by string
    /// equality on the key column; rows without a match keep their right-side
    /// columns null. Columns already present on the left are never
    /// overwritten by the right side, so on a name collision the left value
    /// wins. Duplicate keys on the left produce duplicate output rows.
    pub fn left_join(mut self, right: TrackTable, key: &str) -> Result<TrackTable> {
        let mut right_by_key: BTreeMap<String, Row> = BTreeMap::new();
        for row in right.rows {
            if let Some(k) = row.get(key).and_then(Value::as_str) {
                // first occurrence wins for duplicate right-side keys
                right_by_key.entry(k.to_string()).or_insert(row);
            }
        }

        for row in &mut self.rows {
            let Some(k) = row.get(key).and_then(Value::as_str).map(str::to_string) else {
                return Err(Error::UnexpectedResponseShape(format!(
                    "join key {} is missing or not a string",
                    key
                )));
            };
            if let Some(right_row) = right_by_key.get(&k) {
                for (column, value) in right_row {
                    if !row.contains_key(column) {
                        row.insert(column.clone(), value.clone());
                    }
                }
            }
        }

        Ok(self)
    }
}

/// Flattens a sequence of JSON pages into one table.
///
/// Each page must be a JSON array; its object entries become one flattened
/// row each, concatenated in page order. Null entries are skipped (the
/// audio-features endpoint reports unknown ids as literal nulls). Any other
/// non-object entry fails with [`Error::UnexpectedResponseShape`].
///
/// Flattening an already-flat object list is a no-op, and repeated runs over
/// the same input are bit-identical.
pub fn flatten_pages(pages: &[Value]) -> Result<TrackTable> {
    let mut table = TrackTable::new();

    for page in pages {
        let entries = page.as_array().ok_or_else(|| {
            Error::UnexpectedResponseShape("page is not a JSON array".to_string())
        })?;
        for entry in entries {
            match entry {
                Value::Null => continue,
                Value::Object(_) => table.push_row(flatten_entry(entry)?),
                other => {
                    return Err(Error::UnexpectedResponseShape(format!(
                        "page entry is neither object nor null: {}",
                        other
                    )));
                }
            }
        }
    }

    Ok(table)
}

/// Flattens one JSON object into a row.
fn flatten_entry(entry: &Value) -> Result<Row> {
    let mut row = Row::new();
    flatten_into("", entry, &mut row);
    Ok(row)
}

/// Recursively folds nested objects into underscore-joined column names.
///
/// Arrays and scalars are stored as-is; only objects recurse.
fn flatten_into(prefix: &str, value: &Value, row: &mut Row) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let column = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}_{}", prefix, key)
                };
                flatten_into(&column, nested, row);
            }
        }
        other => {
            row.insert(prefix.to_string(), other.clone());
        }
    }
}
