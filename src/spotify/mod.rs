//! Spotify Web API client implementation.
//!
//! Thin, strictly sequential wrappers around the three endpoints the analysis
//! needs: the token exchange, the paginated playlist-items listing, and the
//! batched track/audio-feature lookups. All calls share the same bounded
//! request timeout; none of them retries or caches.

pub mod auth;
pub mod playlist;
pub mod tracks;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

/// Upper bound for every single API request.
///
/// An unbounded hang on a stuck connection would stall the whole run, so each
/// request carries an explicit timeout. Hitting it surfaces as a
/// [`crate::Error::Transport`] value.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the HTTP client used for a single API call.
pub(crate) fn client() -> Result<Client> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(client)
}
