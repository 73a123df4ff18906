use std::fs;
use std::path::Path;

use featgraph_core::{CollabGraph, WeightedEdge};

/// The pipeline's terminal artifact: (source, target, edge_count) rows.
/// Consumers must not rely on order, but the file is written sorted by
/// descending count then names so batch runs diff cleanly.
pub fn write_edges_csv(
    path: &Path,
    edges: &[WeightedEdge],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sorted: Vec<&WeightedEdge> = edges.iter().collect();
    sorted.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["source", "target", "edge_count"])?;
    for edge in sorted {
        let count = edge.count.to_string();
        writer.write_record([edge.source.as_str(), edge.target.as_str(), count.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_graph_html(
    path: &Path,
    graph: &CollabGraph,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, render_graph_html(graph)?)?;
    Ok(())
}

/// Self-contained page: the graph embedded as JSON, d3 owning the layout.
pub fn render_graph_html(graph: &CollabGraph) -> Result<String, serde_json::Error> {
    let nodes = serde_json::to_string(&graph.nodes)?;
    let edges = serde_json::to_string(&graph.edges)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>featgraph - collaboration network</title>
    <script src="https://d3js.org/d3.v7.min.js"></script>
    <style>
        body {{ margin: 0; background: #14141e; color: #e8e8f0; font-family: system-ui, sans-serif; }}
        #graph {{ width: 100vw; height: 100vh; }}
        .hint {{ position: fixed; top: 12px; left: 12px; opacity: 0.7; font-size: 13px; }}
        line {{ stroke: #4ecdc4; stroke-opacity: 0.45; }}
        circle {{ fill: #ffd166; stroke: #14141e; stroke-width: 1.5px; }}
        text {{ fill: #e8e8f0; font-size: 11px; pointer-events: none; }}
    </style>
</head>
<body>
    <div class="hint">drag nodes / scroll to zoom / edge width = shared songs</div>
    <div id="graph"></div>
    <script>
        const nodes = {nodes};
        const links = {edges};

        const width = window.innerWidth;
        const height = window.innerHeight;
        const radius = d => 5 + 2.5 * Math.sqrt(d.weight);

        const svg = d3.select('#graph').append('svg').attr('width', width).attr('height', height);
        const g = svg.append('g');
        svg.call(d3.zoom().scaleExtent([0.2, 5]).on('zoom', event => g.attr('transform', event.transform)));

        const link = g.selectAll('line').data(links).enter().append('line')
            .attr('stroke-width', d => 1 + Math.sqrt(d.count));
        const node = g.selectAll('g.node').data(nodes).enter().append('g')
            .call(d3.drag()
                .on('start', (event, d) => {{ if (!event.active) simulation.alphaTarget(0.3).restart(); d.fx = d.x; d.fy = d.y; }})
                .on('drag', (event, d) => {{ d.fx = event.x; d.fy = event.y; }})
                .on('end', (event, d) => {{ if (!event.active) simulation.alphaTarget(0); d.fx = null; d.fy = null; }}));
        node.append('circle').attr('r', radius);
        node.append('text').attr('dx', d => radius(d) + 3).attr('dy', 4).text(d => d.name);

        const simulation = d3.forceSimulation(nodes)
            .force('link', d3.forceLink(links).id(d => d.id).distance(90))
            .force('charge', d3.forceManyBody().strength(-250))
            .force('center', d3.forceCenter(width / 2, height / 2))
            .force('collision', d3.forceCollide().radius(d => radius(d) + 4))
            .on('tick', () => {{
                link.attr('x1', d => d.source.x).attr('y1', d => d.source.y)
                    .attr('x2', d => d.target.x).attr('y2', d => d.target.y);
                node.attr('transform', d => `translate(${{d.x}},${{d.y}})`);
            }});
    </script>
</body>
</html>
"#
    ))
}
