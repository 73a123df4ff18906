use std::time::Duration;

use clap::Parser;
use featgraph::args::Args;
use featgraph::colors::ColorScheme;
use featgraph::musicbrainz::MusicBrainzClient;
use featgraph::{display, output};
use featgraph_core::{
    ArtistMatch, CollabGraph, FetchError, MusicApi, PipelineConfig, Recording, build_edges,
    fetch_all_recordings, resolve_artist,
};
use indicatif::{ProgressBar, ProgressStyle};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {error}")));
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn std::error::Error>> {
    let artist_names = args.artist_names()?;
    if artist_names.is_empty() {
        return Err("no artist names given".into());
    }

    let client = MusicBrainzClient::new(
        Duration::from_secs(args.timeout),
        args.retries,
        Duration::from_millis(args.retry_delay),
    )?;
    let config = PipelineConfig::new(args.page_size, args.min_count);

    display::display_run_header(artist_names.len(), args, colors);

    let recordings = collect_recordings(&client, &artist_names, &config, args, colors);
    let edges = build_edges(&recordings, &config);
    let graph = CollabGraph::from_edges(&edges);

    display::display_summary(&recordings, &edges, graph.nodes.len(), args, colors);

    output::write_edges_csv(&args.output, &edges)?;
    display::display_artifact(&args.output, colors);

    if let Some(html_path) = &args.html {
        output::write_graph_html(html_path, &graph)?;
        display::display_artifact(html_path, colors);
    }

    Ok(())
}

/// One artist at a time: resolve the name, walk every release page, keep the
/// per-artist batches separate and merge them once at the end. A miss or a
/// failed fetch drops that artist and the run continues.
fn collect_recordings(
    api: &impl MusicApi,
    artist_names: &[String],
    config: &PipelineConfig,
    args: &Args,
    colors: &ColorScheme,
) -> Vec<Recording> {
    let progress = build_progress_bar(artist_names.len() as u64, args.quiet);
    let mut per_artist: Vec<Vec<Recording>> = Vec::with_capacity(artist_names.len());

    for name in artist_names {
        progress.set_message(name.clone());

        match fetch_artist_recordings(api, name, config) {
            Ok(Some((matched, recordings))) => {
                if args.verbose {
                    progress.println(display::format_artist_line(
                        name,
                        &matched,
                        recordings.len(),
                        colors,
                    ));
                }
                per_artist.push(recordings);
            }
            Ok(None) => progress.println(display::format_skip_line(name, colors)),
            Err(error) => {
                let line = display::format_fetch_error(name, &error, colors);
                // The hidden bar in quiet mode swallows println; errors still
                // have to reach the terminal.
                if args.quiet {
                    eprintln!("{line}");
                } else {
                    progress.println(line);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    per_artist.into_iter().flatten().collect()
}

fn fetch_artist_recordings(
    api: &impl MusicApi,
    name: &str,
    config: &PipelineConfig,
) -> Result<Option<(ArtistMatch, Vec<Recording>)>, FetchError> {
    let Some(matched) = resolve_artist(api, name)? else {
        return Ok(None);
    };

    let recordings = fetch_all_recordings(api, matched.id, config)?;
    Ok(Some((matched, recordings)))
}

fn build_progress_bar(length: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(length);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    progress.set_style(style);
    progress
}
