use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of an artist search, best match first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistMatch {
    pub id: Uuid,
    pub name: String,
}

/// One track occurrence on one release. The same recording shows up once per
/// release it was issued on, so a collection of these is not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub recording_id: Uuid,
    pub recording_title: String,
    pub release_id: Uuid,
    pub release_title: String,
    /// Credit order as reported by the API. The first entry is treated as the
    /// performing artist and the rest as featured; nothing in the source data
    /// guarantees that ordering, so attribution is best-effort.
    pub credited_artists: Vec<String>,
}

impl Recording {
    pub fn primary_artist(&self) -> Option<&str> {
        self.credited_artists.first().map(String::as_str)
    }
}

/// A primary artist paired with one other credited artist on one recording.
/// The title rides along because duplicates are keyed on the full triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollaborationEdge {
    pub recording_title: String,
    pub source: String,
    pub target: String,
}

/// Aggregated collaboration pair. `source != target` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub count: u32,
}
