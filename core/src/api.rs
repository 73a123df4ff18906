use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::ArtistMatch;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("api request failed: {0}")]
    Request(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("malformed api response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Artist search response: a top-level `artists` array ranked by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub artists: Vec<ArtistMatch>,
}

/// One page of the release browse endpoint. `release_count` is the total
/// across the whole browse, not the size of this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleasePage {
    #[serde(rename = "release-count")]
    pub release_count: u32,
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: Uuid,
    pub title: String,
    pub media: Vec<Medium>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medium {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub recording: TrackRecording,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecording {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "artist-credit")]
    pub artist_credit: Vec<ArtistCredit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCredit {
    pub artist: CreditedArtist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditedArtist {
    pub name: String,
}

/// The two calls the pipeline makes against a music metadata service. Kept as
/// a trait so the pagination walk can run against anything that returns pages.
pub trait MusicApi {
    fn search_artists(&self, name: &str) -> Result<SearchPage, FetchError>;

    fn release_page(
        &self,
        artist_id: Uuid,
        offset: u32,
        limit: u32,
    ) -> Result<ReleasePage, FetchError>;
}
