use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Bearer credential obtained from the client-credentials grant.
///
/// Created once per run and borrowed by every subsequent API call. The token
/// is valid for roughly one hour and is neither persisted nor refreshed; a
/// run is expected to finish well within the validity window.
#[derive(Debug, Clone)]
pub struct AccessCredential {
    access_token: String,
}

impl AccessCredential {
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }

    /// The raw token, suitable for `bearer_auth`.
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// The token pre-formatted as an `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<Value>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    // entries can be JSON null for ids without feature data
    pub audio_features: Vec<Value>,
}

/// The three scalar aggregates derived from a track table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub track_count: u64,
    pub total_duration_hours: i64,
    pub distinct_artist_count: u64,
}

#[derive(Tabled)]
pub struct SummaryTableRow {
    pub tracks: u64,
    pub duration_hours: i64,
    pub artists: u64,
}
