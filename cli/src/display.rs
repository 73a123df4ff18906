use std::path::Path;

use featgraph_core::FetchError;
use featgraph_core::models::{ArtistMatch, Recording, WeightedEdge};

use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_run_header(artist_count: usize, args: &Args, colors: &ColorScheme) {
    if args.quiet {
        return;
    }

    println!(
        "🎵 Building collaboration network for {} artists",
        colors.number(&artist_count.to_string())
    );

    if args.min_count != 2 {
        println!(
            "⚙️  Keeping pairs with at least {} collaborations",
            colors.number(&args.min_count.to_string())
        );
    }
}

pub fn format_artist_line(
    name: &str,
    matched: &ArtistMatch,
    recording_count: usize,
    colors: &ColorScheme,
) -> String {
    format!(
        "🎤 {} resolved to {} ({}): {} recordings",
        colors.artist_name(&format!("\"{}\"", name)),
        colors.artist_name(&format!("\"{}\"", matched.name)),
        matched.id,
        colors.number(&recording_count.to_string())
    )
}

pub fn format_skip_line(name: &str, colors: &ColorScheme) -> String {
    format!(
        "{} {} - skipping",
        colors.warning("⚠️  No match for"),
        colors.artist_name(&format!("\"{}\"", name))
    )
}

pub fn format_fetch_error(name: &str, error: &FetchError, colors: &ColorScheme) -> String {
    format!(
        "{} {}: {}",
        colors.error("❌ Failed to fetch releases for"),
        colors.artist_name(&format!("\"{}\"", name)),
        error
    )
}

pub fn display_summary(
    recordings: &[Recording],
    edges: &[WeightedEdge],
    distinct_artists: usize,
    args: &Args,
    colors: &ColorScheme,
) {
    if args.quiet {
        return;
    }

    if edges.is_empty() {
        println!(
            "{}",
            colors.warning("⚠️  No collaboration pairs met the threshold")
        );
        return;
    }

    println!(
        "{} {} weighted edges between {} artists, from {} recordings",
        colors.stats("📊"),
        colors.number(&edges.len().to_string()),
        colors.number(&distinct_artists.to_string()),
        colors.number(&recordings.len().to_string())
    );
}

pub fn display_artifact(path: &Path, colors: &ColorScheme) {
    println!(
        "{} Wrote {}",
        colors.success("💾"),
        colors.path(&path.display().to_string())
    );
}
