use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::PipelineConfig;
use crate::models::{CollaborationEdge, Recording, WeightedEdge};

/// Pair each recording's primary artist with every other credited artist.
/// Recordings with fewer than two credits contribute nothing.
pub fn expand_collaborations(recordings: &[Recording]) -> Vec<CollaborationEdge> {
    recordings.iter().flat_map(collaboration_pairs).collect()
}

fn collaboration_pairs(recording: &Recording) -> Vec<CollaborationEdge> {
    let Some((primary, features)) = recording.credited_artists.split_first() else {
        return Vec::new();
    };

    features
        .iter()
        .map(|featured| CollaborationEdge {
            recording_title: recording.recording_title.clone(),
            source: primary.clone(),
            target: featured.clone(),
        })
        .collect()
}

/// Drop self-pairs and duplicate (title, source, target) triples, so a
/// collaboration on one song counts once however many releases carry it.
/// Running this on its own output changes nothing.
pub fn dedup_collaborations(edges: Vec<CollaborationEdge>) -> Vec<CollaborationEdge> {
    let mut seen = FxHashSet::default();

    edges
        .into_iter()
        .filter(|edge| edge.source != edge.target)
        .filter(|edge| {
            seen.insert((
                edge.recording_title.clone(),
                edge.source.clone(),
                edge.target.clone(),
            ))
        })
        .collect()
}

/// Group by (source, target), count, and keep pairs reaching `min_count`.
/// Row order is not significant.
pub fn aggregate_edges(edges: &[CollaborationEdge], min_count: u32) -> Vec<WeightedEdge> {
    let mut counts: FxHashMap<(&str, &str), u32> = FxHashMap::default();
    for edge in edges {
        *counts
            .entry((edge.source.as_str(), edge.target.as_str()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .map(|((source, target), count)| WeightedEdge {
            source: source.to_string(),
            target: target.to_string(),
            count,
        })
        .collect()
}

/// Full expand -> dedup -> aggregate pass over a run's merged recordings.
pub fn build_edges(recordings: &[Recording], config: &PipelineConfig) -> Vec<WeightedEdge> {
    let expanded = expand_collaborations(recordings);
    let deduped = dedup_collaborations(expanded);
    aggregate_edges(&deduped, config.min_count)
}
