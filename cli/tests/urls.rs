use featgraph::{release_url, search_url};
use uuid::Uuid;

const BASE: &str = "https://musicbrainz.org/ws/2";

#[test]
fn search_url_escapes_the_query() {
    let url = search_url(BASE, "Wu-Tang Clan");

    assert_eq!(
        url,
        "https://musicbrainz.org/ws/2/artist?query=Wu-Tang%20Clan&fmt=json"
    );
}

#[test]
fn release_url_asks_for_recordings_and_credits() {
    let artist_id = Uuid::parse_str("f82bcf78-5b69-4622-a5ef-73800768d9ac").unwrap();

    let url = release_url(BASE, artist_id, 200, 100);

    assert!(url.starts_with(
        "https://musicbrainz.org/ws/2/release?artist=f82bcf78-5b69-4622-a5ef-73800768d9ac"
    ));
    assert!(url.contains("inc=recordings+artist-credits"));
    assert!(url.contains("fmt=json"));
    assert!(url.contains("offset=200"));
    assert!(url.contains("limit=100"));
}
