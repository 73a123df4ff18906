use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::WeightedEdge;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub name: String,
    /// Sum of incident edge counts, used by renderers for node sizing.
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub count: u32,
}

/// Co-occurrence network handed to a renderer: distinct artists as nodes in
/// first-seen order, edges referencing them by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollabGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CollabGraph {
    pub fn from_edges(edges: &[WeightedEdge]) -> Self {
        let mut node_ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut nodes: Vec<GraphNode> = Vec::new();
        let mut graph_edges = Vec::with_capacity(edges.len());

        for edge in edges {
            let source = intern_node(&mut node_ids, &mut nodes, &edge.source);
            let target = intern_node(&mut node_ids, &mut nodes, &edge.target);
            nodes[source].weight += edge.count;
            nodes[target].weight += edge.count;
            graph_edges.push(GraphEdge {
                source,
                target,
                count: edge.count,
            });
        }

        Self {
            nodes,
            edges: graph_edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn intern_node<'a>(
    node_ids: &mut FxHashMap<&'a str, usize>,
    nodes: &mut Vec<GraphNode>,
    name: &'a str,
) -> usize {
    *node_ids.entry(name).or_insert_with(|| {
        nodes.push(GraphNode {
            id: nodes.len(),
            name: name.to_string(),
            weight: 0,
        });
        nodes.len() - 1
    })
}
