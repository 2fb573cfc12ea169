use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    table::{self, TrackTable},
    types::{AccessCredential, AudioFeaturesResponse, SeveralTracksResponse},
    utils,
};

/// Retrieves core metadata and audio features for a sequence of track ids.
///
/// Partitions the ids into batches of [`utils::BATCH_SIZE`] (50, the endpoint
/// maximum) and issues two requests per batch: one to the several-tracks
/// endpoint and one to the audio-features endpoint, each with the ids joined
/// as a comma-separated list. All batch responses accumulate into two
/// separate flattened tables which are then combined with a left join on the
/// `id` column, the metadata table being the driving side.
///
/// # Arguments
///
/// * `track_ids` - Ordered track ids, typically from
///   [`crate::spotify::playlist::get_track_ids`]
/// * `credential` - Bearer credential for the API calls
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TrackTable)` - One row per requested id, metadata columns plus
///   feature columns
/// - `Err(Error)` - Transport failure or a response without the expected shape
///
/// # Join Semantics
///
/// Every requested id appears exactly once in the output even when the
/// audio-features endpoint has no data for it; in that case the feature
/// columns of the row simply stay null. Duplicate ids in the input are not
/// deduplicated and produce duplicate rows. Feature columns whose name
/// collides with a metadata column (`id`, `duration_ms`, `uri`, ...) are
/// dropped; the metadata side wins.
///
/// # Request Pattern
///
/// For N ids this issues exactly `ceil(N/50)` metadata requests and
/// `ceil(N/50)` feature requests, strictly in sequence.
pub async fn get_track_data(
    track_ids: &[String],
    credential: &AccessCredential,
) -> Result<TrackTable> {
    let mut track_pages: Vec<Value> = Vec::new();
    let mut feature_pages: Vec<Value> = Vec::new();

    for id_chunk in utils::id_batches(track_ids) {
        let tracks = fetch_tracks_batch(&id_chunk, credential).await?;
        track_pages.push(Value::Array(tracks.tracks));

        let features = fetch_features_batch(&id_chunk, credential).await?;
        feature_pages.push(Value::Array(features.audio_features));
    }

    let track_table = table::flatten_pages(&track_pages)?;
    let feature_table = table::flatten_pages(&feature_pages)?;

    track_table.left_join(feature_table, "id")
}

/// Fetches core metadata for one comma-joined id batch.
async fn fetch_tracks_batch(
    id_chunk: &str,
    credential: &AccessCredential,
) -> Result<SeveralTracksResponse> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/tracks?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = id_chunk
    );

    let response = client
        .get(&api_url)
        .bearer_auth(credential.token())
        .send()
        .await?
        .error_for_status()?;

    response
        .json::<SeveralTracksResponse>()
        .await
        .map_err(|e| Error::UnexpectedResponseShape(format!("several-tracks batch: {}", e)))
}

/// Fetches audio features for one comma-joined id batch.
async fn fetch_features_batch(
    id_chunk: &str,
    credential: &AccessCredential,
) -> Result<AudioFeaturesResponse> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/audio-features?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = id_chunk
    );

    let response = client
        .get(&api_url)
        .bearer_auth(credential.token())
        .send()
        .await?
        .error_for_status()?;

    response
        .json::<AudioFeaturesResponse>()
        .await
        .map_err(|e| Error::UnexpectedResponseShape(format!("audio-features batch: {}", e)))
}
