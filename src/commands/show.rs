//! `ravel show` - print the graph

use ravel_core::error::Result;
use ravel_core::format::OutputFormat;
use ravel_core::label::index_to_label;
use ravel_core::store::Document;

use super::dispatch::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let doc = Document::load(&ctx.graph_path)?;

    match ctx.format {
        OutputFormat::Human => print_human(&doc),
        OutputFormat::Json => print_json(&doc)?,
        OutputFormat::Records => print_records(&doc),
    }
    Ok(())
}

fn print_human(doc: &Document) {
    let graph = doc.graph();
    println!(
        "graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    for v in 0..graph.vertex_count() {
        let neighbors: Vec<String> = graph
            .neighbors(v)
            .into_iter()
            .flatten()
            .map(|(to, w)| format!("{}({})", index_to_label(to), w))
            .collect();
        println!("  {}: {}", index_to_label(v), neighbors.join(", "));
    }

    if graph.edge_count() > 0 {
        println!("edges:");
        for (u, v, w) in graph.edges() {
            let (a, b) = (u.min(v), u.max(v));
            println!("  {}-{}  {}", index_to_label(a), index_to_label(b), w);
        }
    }
}

fn print_json(doc: &Document) -> Result<()> {
    let graph = doc.graph();
    let edges: Vec<_> = graph
        .edges()
        .map(|(u, v, w)| serde_json::json!({ "u": u.min(v), "v": u.max(v), "w": w }))
        .collect();
    let positions: Vec<_> = doc
        .positions()
        .iter()
        .map(|p| serde_json::json!({ "x": p.x, "y": p.y }))
        .collect();
    let value = serde_json::json!({
        "vertices": graph.vertex_count(),
        "edges": edges,
        "positions": positions,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_records(doc: &Document) {
    let graph = doc.graph();
    println!(
        "graph vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    for (v, point) in doc.positions().iter().enumerate() {
        println!(
            "vertex index={} label={} x={} y={} degree={}",
            v,
            index_to_label(v),
            point.x,
            point.y,
            graph.degree(v).unwrap_or(0)
        );
    }
    for (u, v, w) in graph.edges() {
        println!("edge u={} v={} w={}", u.min(v), u.max(v), w);
    }
}
