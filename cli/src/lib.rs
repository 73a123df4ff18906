pub mod args;
pub mod colors;
pub mod display;
pub mod musicbrainz;
pub mod output;

// Re-export commonly used items
pub use args::Args;
pub use colors::ColorScheme;
pub use musicbrainz::{MusicBrainzClient, release_url, search_url};
pub use output::{render_graph_html, write_edges_csv, write_graph_html};
