//! Summary statistics over a fetched track table.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::{
    error::{Error, Result},
    table::TrackTable,
    types::SummaryStatistics,
};

/// Derives the three summary aggregates from a normalized track table.
///
/// - track count: number of rows
/// - total duration hours: sum of `duration_ms` divided by 3,600,000 and
///   rounded to the nearest integer, ties away from zero
/// - distinct artist count: number of unique values in the normalized
///   `artists` column
///
/// # Errors
///
/// The table must carry the `artists` and `duration_ms` columns, every
/// `duration_ms` cell must be numeric and every `artists` cell must already
/// be a plain name string (i.e. [`crate::prep::prep_data`] has run).
/// Anything else fails with [`Error::MalformedInputTable`]; there is no
/// silent fallback to an empty result. An entirely empty table has no
/// columns at all and is rejected the same way.
pub fn compute_analysis(table: &TrackTable) -> Result<SummaryStatistics> {
    for required in ["artists", "duration_ms"] {
        if !table.has_column(required) {
            return Err(Error::MalformedInputTable(format!(
                "required column {} is missing",
                required
            )));
        }
    }

    let mut total_ms = 0.0;
    let mut artists: BTreeSet<String> = BTreeSet::new();

    for row in table.rows() {
        let duration = row
            .get("duration_ms")
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                Error::MalformedInputTable("duration_ms cell is missing or not numeric".to_string())
            })?;
        total_ms += duration;

        let artist = row.get("artists").and_then(Value::as_str).ok_or_else(|| {
            Error::MalformedInputTable("artists cell is missing or not normalized".to_string())
        })?;
        artists.insert(artist.to_string());
    }

    Ok(SummaryStatistics {
        track_count: table.len() as u64,
        total_duration_hours: (total_ms / 3_600_000.0).round() as i64,
        distinct_artist_count: artists.len() as u64,
    })
}
