use crate::api::{FetchError, MusicApi};
use crate::models::ArtistMatch;

/// Resolve an artist name to the service's best match.
///
/// The first search result is taken as canonical with no further
/// disambiguation, so a misspelled or ambiguous name resolves to whatever the
/// server ranks first. An empty result set is `Ok(None)`, not an error, and
/// callers skip that artist rather than aborting the run.
pub fn resolve_artist(
    api: &impl MusicApi,
    name: &str,
) -> Result<Option<ArtistMatch>, FetchError> {
    let page = api.search_artists(name)?;
    Ok(page.artists.into_iter().next())
}
