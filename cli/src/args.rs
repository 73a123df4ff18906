use std::io;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "featgraph")]
#[command(about = "Build a featuring-collaboration network from MusicBrainz data")]
pub struct Args {
    /// Artist names to seed the network with
    #[arg(required_unless_present = "from_file")]
    pub artists: Vec<String>,

    /// Read artist names from a file, one per line (# starts a comment)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Keep pairs with at least this many distinct collaborations
    #[arg(short = 'c', long, value_name = "COUNT", default_value = "2")]
    pub min_count: u32,

    /// Releases fetched per request
    #[arg(long, value_name = "SIZE", default_value = "100")]
    pub page_size: u32,

    /// Where to write the edge list CSV
    #[arg(short, long, value_name = "PATH", default_value = "collaborations.csv")]
    pub output: PathBuf,

    /// Also render an interactive HTML graph to this path
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value = "30")]
    pub timeout: u64,

    /// Retry attempts for failed requests
    #[arg(short = 'r', long, value_name = "COUNT", default_value = "3")]
    pub retries: u32,

    /// Initial delay between retries in milliseconds, doubling per attempt
    #[arg(long, value_name = "MS", default_value = "1000")]
    pub retry_delay: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show per-artist resolution and fetch details
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only errors and written artifact paths
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Positional names plus the contents of `--from-file`, in that order.
    pub fn artist_names(&self) -> io::Result<Vec<String>> {
        let mut names = self.artists.clone();

        if let Some(path) = &self.from_file {
            let listing = std::fs::read_to_string(path)?;
            names.extend(
                listing
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(str::to_string),
            );
        }

        Ok(names)
    }
}
