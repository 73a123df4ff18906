use std::io::Write;

use clap::Parser;
use featgraph::Args;
use tempfile::NamedTempFile;

#[test]
fn defaults_match_the_documented_values() {
    let args = Args::try_parse_from(["featgraph", "Jay-Z", "Nas"]).unwrap();

    assert_eq!(args.artists, vec!["Jay-Z", "Nas"]);
    assert_eq!(args.min_count, 2);
    assert_eq!(args.page_size, 100);
    assert_eq!(args.output.to_str(), Some("collaborations.csv"));
    assert_eq!(args.timeout, 30);
    assert_eq!(args.retries, 3);
    assert_eq!(args.retry_delay, 1000);
    assert!(args.html.is_none());
    assert!(!args.verbose);
    assert!(!args.quiet);
}

#[test]
fn artists_are_required_unless_a_file_is_given() {
    assert!(Args::try_parse_from(["featgraph"]).is_err());
    assert!(Args::try_parse_from(["featgraph", "--from-file", "list.txt"]).is_ok());
}

#[test]
fn flags_override_defaults() {
    let args = Args::try_parse_from([
        "featgraph",
        "Jay-Z",
        "--min-count",
        "1",
        "--page-size",
        "25",
        "--html",
        "graph.html",
        "--retries",
        "0",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(args.min_count, 1);
    assert_eq!(args.page_size, 25);
    assert_eq!(args.html.unwrap().to_str(), Some("graph.html"));
    assert_eq!(args.retries, 0);
    assert!(args.quiet);
}

#[test]
fn artist_file_lines_are_appended_to_positional_names() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# golden era").unwrap();
    writeln!(file, "Nas").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  Wu-Tang Clan  ").unwrap();

    let args = Args::try_parse_from([
        "featgraph",
        "Jay-Z",
        "--from-file",
        file.path().to_str().unwrap(),
    ])
    .unwrap();

    let names = args.artist_names().unwrap();
    assert_eq!(names, vec!["Jay-Z", "Nas", "Wu-Tang Clan"]);
}

#[test]
fn missing_artist_file_is_an_error() {
    let args =
        Args::try_parse_from(["featgraph", "--from-file", "/no/such/file.txt"]).unwrap();

    assert!(args.artist_names().is_err());
}
