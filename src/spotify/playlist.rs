use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    table,
    types::{AccessCredential, PlaylistItemsResponse},
    utils,
};

/// Retrieves the ids of every track in a playlist.
///
/// Pages through the playlist-items endpoint in steps of
/// [`utils::PAGE_SIZE`] (100, the endpoint maximum), collects all pages,
/// flattens them into a table and projects out the `track_id` column.
///
/// # Arguments
///
/// * `playlist_id` - Playlist id as returned by [`utils::extract_playlist_id`]
/// * `credential` - Bearer credential from [`crate::spotify::auth::authenticate`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - All track ids in playlist order
/// - `Err(Error)` - Transport failure or a response without the expected shape
///
/// # Pagination
///
/// The first page reports the playlist's `total` item count; the remaining
/// offsets are derived from it via [`utils::page_offsets`]. The offset
/// sequence deliberately includes the boundary offset equal to `total`, so a
/// playlist whose size is an exact multiple of the page size fetches one
/// trailing empty page. That matches the item counts observed from the
/// endpoint and keeps the request pattern reproducible.
///
/// An empty playlist (`total = 0`) issues exactly one request and yields an
/// empty id list.
///
/// # Error Handling
///
/// Every page must contain an `items` array and a `total` count, and every
/// item must carry a string `track.id`; anything else fails with
/// [`Error::UnexpectedResponseShape`]. Non-success HTTP statuses and network
/// failures surface as [`Error::Transport`].
///
/// # Example
///
/// ```
/// let ids = get_track_ids("4oYSWmdhUMwEu0yAFA47lZ", &credential).await?;
/// println!("playlist has {} tracks", ids.len());
/// ```
pub async fn get_track_ids(
    playlist_id: &str,
    credential: &AccessCredential,
) -> Result<Vec<String>> {
    let first = fetch_items_page(playlist_id, credential, 0).await?;
    let total = first.total;

    let mut pages: Vec<Value> = vec![Value::Array(first.items)];
    for offset in utils::page_offsets(total).into_iter().skip(1) {
        let page = fetch_items_page(playlist_id, credential, offset).await?;
        pages.push(Value::Array(page.items));
    }

    let items = table::flatten_pages(&pages)?;
    items.string_column("track_id")
}

/// Fetches one page of playlist items at the given offset.
async fn fetch_items_page(
    playlist_id: &str,
    credential: &AccessCredential,
    offset: u64,
) -> Result<PlaylistItemsResponse> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?offset={offset}&limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        offset = offset,
        limit = utils::PAGE_SIZE
    );

    let response = client
        .get(&api_url)
        .bearer_auth(credential.token())
        .send()
        .await?
        .error_for_status()?;

    response
        .json::<PlaylistItemsResponse>()
        .await
        .map_err(|e| Error::UnexpectedResponseShape(format!("playlist items page: {}", e)))
}
