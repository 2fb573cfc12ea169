use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    analysis, config, info, prep, spotify, success,
    types::SummaryTableRow,
    utils, warning,
    error::Result,
};

/// Runs the full playlist analysis pipeline and prints the summary.
///
/// Stages, strictly in order: extract the playlist id from the URL,
/// authenticate with the client-credentials grant, page through the playlist
/// items for the track ids, fetch metadata and audio features in batches,
/// normalize the artist and key columns, compute the summary statistics and
/// render them as a table.
///
/// # Arguments
///
/// * `playlist_url` - Optional URL override; falls back to the
///   `SPOTIFY_PLAYLIST_URL` configuration value
///
/// # Error Handling
///
/// The run stops at the first failing stage and the typed error propagates
/// to `main`; no partial summary is printed. An empty playlist is not an
/// error: the run ends early with a warning.
///
/// # Output Example
///
/// ```text
/// [o] Authenticating against the Spotify accounts service...
/// [✓] Authentication successful
/// [o] Playlist contains 250 tracks
/// [✓] Fetched metadata for 250 tracks
/// +--------+----------------+---------+
/// | tracks | duration_hours | artists |
/// +--------+----------------+---------+
/// | 250    | 16             | 87      |
/// +--------+----------------+---------+
/// ```
pub async fn analyze(playlist_url: Option<String>) -> Result<()> {
    let playlist_url = playlist_url.unwrap_or_else(config::playlist_url);
    let playlist_id = utils::extract_playlist_id(&playlist_url)?;

    info!("Authenticating against the Spotify accounts service...");
    let credential = spotify::auth::authenticate(
        &config::spotify_client_id(),
        &config::spotify_client_secret(),
    )
    .await?;
    success!("Authentication successful");

    let pb = spinner("Fetching playlist track ids...");
    let track_ids = match spotify::playlist::get_track_ids(&playlist_id, &credential).await {
        Ok(ids) => {
            pb.finish_and_clear();
            ids
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    info!("Playlist contains {} tracks", track_ids.len());

    if track_ids.is_empty() {
        warning!("Playlist is empty, nothing to analyze.");
        return Ok(());
    }

    let pb = spinner("Fetching track metadata and audio features...");
    let mut track_table = match spotify::tracks::get_track_data(&track_ids, &credential).await {
        Ok(table) => {
            pb.finish_and_clear();
            table
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    success!("Fetched metadata for {} tracks", track_table.len());

    prep::prep_data(&mut track_table)?;

    let stats = analysis::compute_analysis(&track_table)?;
    let summary = Table::new(vec![SummaryTableRow {
        tracks: stats.track_count,
        duration_hours: stats.total_duration_hours,
        artists: stats.distinct_artist_count,
    }]);
    println!("{}", summary);

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
