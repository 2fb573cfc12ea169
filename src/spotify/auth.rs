use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    types::AccessCredential,
};

/// Exchanges client credentials for a bearer access token.
///
/// Issues a single `POST` to the Spotify token endpoint using the OAuth 2.0
/// client-credentials grant. The resulting token authorizes read access to
/// public playlist data for roughly one hour, which comfortably covers one
/// analysis run.
///
/// # Arguments
///
/// * `client_id` - Client ID from the Spotify developer dashboard
/// * `client_secret` - Client secret belonging to the same application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AccessCredential)` - Credential wrapping the access token
/// - `Err(Error)` - Typed failure, see below
///
/// # Error Handling
///
/// This function never returns a partial or unbound credential. Failures
/// surface immediately as:
/// - [`Error::Transport`] - network failure, timeout, or unreadable body
/// - [`Error::AuthenticationFailed`] - non-success status from the token
///   endpoint (typically bad credentials), or a response body without an
///   `access_token` field
///
/// Callers are expected to stop the run on any of these; there is no point
/// in issuing API requests with a credential that was never granted.
///
/// # Example
///
/// ```
/// let credential = authenticate(&config::spotify_client_id(), &config::spotify_client_secret()).await?;
/// let ids = playlist::get_track_ids("4oYSWmdhUMwEu0yAFA47lZ", &credential).await?;
/// ```
pub async fn authenticate(client_id: &str, client_secret: &str) -> Result<AccessCredential> {
    let client = super::client()?;
    let response = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::AuthenticationFailed(format!(
            "token endpoint answered with status {}",
            status
        )));
    }

    let json: Value = response.json().await?;
    let access_token = json["access_token"].as_str().ok_or_else(|| {
        Error::AuthenticationFailed("token response carries no access_token".to_string())
    })?;

    Ok(AccessCredential::new(access_token.to_string()))
}
