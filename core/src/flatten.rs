use uuid::Uuid;

use crate::api::{FetchError, MusicApi, ReleasePage};
use crate::config::PipelineConfig;
use crate::models::Recording;

/// Walk every page of an artist's release browse and flatten the nested
/// release -> medium -> track -> credit structure into recordings.
///
/// Pages are requested at offsets 0, page_size, 2*page_size, ... until the
/// offset reaches the total `release-count` reported by the latest page. The
/// offset advances on every pass whatever the page held, so a count at or
/// below the already-fetched offset terminates the walk even when the server
/// reports inconsistent totals.
///
/// An artist with no releases yields an empty vector from a single request.
/// Any failed or malformed page aborts the whole fetch for this artist;
/// partial data would skew the aggregated counts downstream.
pub fn fetch_all_recordings(
    api: &impl MusicApi,
    artist_id: Uuid,
    config: &PipelineConfig,
) -> Result<Vec<Recording>, FetchError> {
    let page_size = config.page_size.max(1);
    let mut recordings = Vec::new();
    let mut offset = 0;

    loop {
        let page = api.release_page(artist_id, offset, page_size)?;
        recordings.extend(flatten_page(&page));

        offset += page_size;
        if offset >= page.release_count {
            break;
        }
    }

    Ok(recordings)
}

/// One `Recording` per (release, track) occurrence, credit order preserved.
pub fn flatten_page(page: &ReleasePage) -> impl Iterator<Item = Recording> + '_ {
    page.releases.iter().flat_map(|release| {
        release.media.iter().flat_map(move |medium| {
            medium.tracks.iter().map(move |track| Recording {
                recording_id: track.recording.id,
                recording_title: track.recording.title.clone(),
                release_id: release.id,
                release_title: release.title.clone(),
                credited_artists: track
                    .recording
                    .artist_credit
                    .iter()
                    .map(|credit| credit.artist.name.clone())
                    .collect(),
            })
        })
    })
}
