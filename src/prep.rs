//! Post-processing of raw columns into analysis-ready values.
//!
//! Two in-place rewrites run on the joined table before any statistic is
//! computed: the `artists` column is reduced to the first artist's display
//! name, and the numeric `key` audio feature is mapped to a pitch-class
//! label.

use serde_json::Value;

use crate::{
    error::{Error, Result},
    table::TrackTable,
};

/// Rewrites the `artists` and `key` columns of a freshly joined table.
///
/// Applied once, in place, between the fetch and the statistics stages. The
/// first row that cannot be rewritten aborts the run with a typed error;
/// nothing is partially normalized and silently carried forward.
pub fn prep_data(table: &mut TrackTable) -> Result<()> {
    extract_first_artist(table)?;
    remap_keys(table)?;
    Ok(())
}

/// Reduces the raw `artists` array to the first artist's display name.
///
/// The metadata endpoint reports `artists` as a list of `{id, name, type,
/// ...}` objects. Only the first entry's `name` is kept; any further artists
/// on the track are dropped. That loses information on collaborations, but
/// it keeps one display name per row, which is what the distinct-artist
/// count is defined over.
fn extract_first_artist(table: &mut TrackTable) -> Result<()> {
    table.update_column("artists", |value| {
        let name = value
            .as_array()
            .and_then(|artists| artists.first())
            .and_then(|artist| artist.get("name"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::UnexpectedResponseShape(
                    "artists cell has no first artist with a name".to_string(),
                )
            })?;
        Ok(Value::String(name.to_string()))
    })
}

/// Maps an integer pitch-class code to its note name.
///
/// Note that code 1 maps to `"C"`, not the expected `"C#"`. Almost certainly
/// a transcription error in the lookup table, but it is kept as-is so results
/// stay comparable with previously produced datasets. Codes outside 0-11
/// fail with [`Error::UnknownKeyCode`].
pub fn key_name(code: i64) -> Result<&'static str> {
    match code {
        0 | 1 => Ok("C"),
        2 => Ok("D"),
        3 => Ok("D#"),
        4 => Ok("E"),
        5 => Ok("F"),
        6 => Ok("F#"),
        7 => Ok("G"),
        8 => Ok("G#"),
        9 => Ok("A"),
        10 => Ok("A#"),
        11 => Ok("B"),
        other => Err(Error::UnknownKeyCode(other)),
    }
}

/// Rewrites the numeric `key` column to pitch-class labels.
///
/// Rows without a `key` cell (tracks the audio-features endpoint had no data
/// for) are left untouched and keep reading as null.
fn remap_keys(table: &mut TrackTable) -> Result<()> {
    table.update_column("key", |value| {
        let code = value.as_i64().ok_or_else(|| {
            Error::UnexpectedResponseShape("key cell is not an integer".to_string())
        })?;
        Ok(Value::String(key_name(code)?.to_string()))
    })
}
