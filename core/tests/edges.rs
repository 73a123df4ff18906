use featgraph_core::models::{CollaborationEdge, Recording, WeightedEdge};
use featgraph_core::{
    PipelineConfig, aggregate_edges, build_edges, dedup_collaborations, expand_collaborations,
};
use rustc_hash::FxHashSet;
use uuid::Uuid;

fn recording(title: &str, credits: &[&str]) -> Recording {
    Recording {
        recording_id: Uuid::new_v4(),
        recording_title: title.to_string(),
        release_id: Uuid::new_v4(),
        release_title: format!("{title} (release)"),
        credited_artists: credits.iter().map(|name| name.to_string()).collect(),
    }
}

fn edge_set(edges: &[CollaborationEdge]) -> FxHashSet<CollaborationEdge> {
    edges.iter().cloned().collect()
}

#[test]
fn single_credit_recording_produces_no_edges() {
    let recordings = vec![recording("Solo Cut", &["X"])];

    assert!(expand_collaborations(&recordings).is_empty());
}

#[test]
fn empty_credit_list_produces_no_edges() {
    let recordings = vec![recording("Ghost Track", &[])];

    assert!(expand_collaborations(&recordings).is_empty());
}

#[test]
fn primary_is_paired_with_every_other_credit() {
    let recordings = vec![recording("Posse Cut", &["X", "Y", "Z"])];

    let edges = expand_collaborations(&recordings);

    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|edge| edge.source == "X"));
    let targets: Vec<&str> = edges.iter().map(|edge| edge.target.as_str()).collect();
    assert_eq!(targets, vec!["Y", "Z"]);
}

#[test]
fn self_pairs_are_dropped() {
    let recordings = vec![recording("Duet With Myself", &["X", "X"])];

    let deduped = dedup_collaborations(expand_collaborations(&recordings));

    assert!(deduped.is_empty());
}

#[test]
fn same_song_on_multiple_releases_counts_once() {
    // Same title and pair from two releases, the reissue case.
    let recordings = vec![
        recording("Track A", &["X", "Y"]),
        recording("Track A", &["X", "Y"]),
    ];

    let deduped = dedup_collaborations(expand_collaborations(&recordings));

    assert_eq!(deduped.len(), 1);
}

#[test]
fn dedup_is_idempotent() {
    let recordings = vec![
        recording("Track A", &["X", "Y"]),
        recording("Track A", &["X", "Y"]),
        recording("Track B", &["X", "Y", "X"]),
        recording("Track C", &["Z", "X"]),
    ];

    let once = dedup_collaborations(expand_collaborations(&recordings));
    let twice = dedup_collaborations(once.clone());

    assert_eq!(once.len(), twice.len());
    assert_eq!(edge_set(&once), edge_set(&twice));
}

#[test]
fn repeated_collaborations_aggregate_and_survive_threshold() {
    // Two distinct recordings both titled "Track A" plus one "Track B", all
    // crediting [X, Y]: dedup leaves two distinct (title, X, Y) entries.
    let recordings = vec![
        recording("Track A", &["X", "Y"]),
        recording("Track A", &["X", "Y"]),
        recording("Track B", &["X", "Y"]),
    ];

    let edges = build_edges(&recordings, &PipelineConfig::new(100, 2));

    assert_eq!(
        edges,
        vec![WeightedEdge {
            source: "X".to_string(),
            target: "Y".to_string(),
            count: 2,
        }]
    );
}

#[test]
fn one_off_pair_is_excluded_at_default_threshold() {
    let recordings = vec![recording("Track A", &["X", "Y"])];

    let edges = build_edges(&recordings, &PipelineConfig::default());

    assert!(edges.is_empty());
}

#[test]
fn threshold_of_one_keeps_one_off_pairs() {
    let recordings = vec![recording("Track A", &["X", "Y"])];

    let edges = build_edges(&recordings, &PipelineConfig::new(100, 1));

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].count, 1);
}

#[test]
fn no_retained_edge_is_a_self_pair() {
    let recordings = vec![
        recording("Track A", &["X", "X"]),
        recording("Track B", &["X", "X"]),
        recording("Track C", &["X", "Y"]),
        recording("Track D", &["X", "Y"]),
    ];

    let edges = build_edges(&recordings, &PipelineConfig::new(100, 1));

    assert!(!edges.is_empty());
    assert!(edges.iter().all(|edge| edge.source != edge.target));
}

#[test]
fn aggregation_keys_on_direction() {
    // X featuring Y and Y featuring X stay separate pairs.
    let edges = vec![
        CollaborationEdge {
            recording_title: "Track A".to_string(),
            source: "X".to_string(),
            target: "Y".to_string(),
        },
        CollaborationEdge {
            recording_title: "Track B".to_string(),
            source: "Y".to_string(),
            target: "X".to_string(),
        },
    ];

    let weighted = aggregate_edges(&edges, 1);

    assert_eq!(weighted.len(), 2);
    assert!(weighted.iter().all(|edge| edge.count == 1));
}
