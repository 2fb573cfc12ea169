use crate::error::{Error, Result};

/// Page size of the playlist-items endpoint.
pub const PAGE_SIZE: u64 = 100;

/// Maximum number of ids accepted by the batched track endpoints.
pub const BATCH_SIZE: usize = 50;

pub fn extract_playlist_id(playlist_url: &str) -> Result<String> {
    let path = playlist_url.split('?').next().unwrap_or_default();
    let mut segments = path.rsplit('/');
    let id = segments.next().unwrap_or_default();
    let parent = segments.next().unwrap_or_default();

    if parent != "playlist" || id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidReferenceFormat(playlist_url.to_string()));
    }

    Ok(id.to_string())
}

// The boundary offset equal to `total` is included on purpose: the items
// endpoint is paged until the cumulative offset exceeds the reported total,
// so totals that are exact multiples of the page size fetch one trailing
// empty page. total = 0 still yields exactly one offset.
pub fn page_offsets(total: u64) -> Vec<u64> {
    (0..=total).step_by(PAGE_SIZE as usize).collect()
}

pub fn id_batches(track_ids: &[String]) -> Vec<String> {
    track_ids
        .chunks(BATCH_SIZE)
        .map(|chunk| chunk.join(","))
        .collect()
}
