pub mod api;
pub mod config;
pub mod edges;
pub mod flatten;
pub mod graph;
pub mod models;
pub mod resolve;

// Re-export commonly used items
pub use api::{FetchError, MusicApi, ReleasePage, SearchPage};
pub use config::PipelineConfig;
pub use edges::{aggregate_edges, build_edges, dedup_collaborations, expand_collaborations};
pub use flatten::{fetch_all_recordings, flatten_page};
pub use graph::{CollabGraph, GraphEdge, GraphNode};
pub use models::{ArtistMatch, CollaborationEdge, Recording, WeightedEdge};
pub use resolve::resolve_artist;
