//! Algorithm commands: dfs, bfs, path, mst

use ravel_core::error::Result;
use ravel_core::format::OutputFormat;
use ravel_core::graph::{
    bfs_spanning_tree, dfs_spanning_tree, kruskal, prim, shortest_path, Mst, MstResult,
    PathResult, SpanningTree,
};
use ravel_core::label::{index_to_label, parse_vertex};
use ravel_core::store::Document;

use super::dispatch::Context;

#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    Dfs,
    Bfs,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
        }
    }
}

pub fn spanning_tree(ctx: &Context, start: &str, strategy: Strategy) -> Result<()> {
    let doc = Document::load(&ctx.graph_path)?;
    let start = parse_vertex(start)?;
    let tree = match strategy {
        Strategy::Dfs => dfs_spanning_tree(doc.graph(), start)?,
        Strategy::Bfs => bfs_spanning_tree(doc.graph(), start)?,
    };

    match ctx.format {
        OutputFormat::Human => print_tree_human(strategy.name(), &tree),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&tree)?;
            value["algorithm"] = serde_json::json!(strategy.name());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => print_tree_records(strategy.name(), &tree),
    }
    Ok(())
}

fn print_tree_human(name: &str, tree: &SpanningTree) {
    println!(
        "{} spanning tree from {}: {} edges",
        name,
        index_to_label(tree.root),
        tree.edges.len()
    );
    for edge in &tree.edges {
        println!(
            "  {} -> {}  ({})",
            index_to_label(edge.from),
            index_to_label(edge.to),
            edge.weight
        );
    }
    if tree.unreached.is_empty() {
        println!("unreached: none");
    } else {
        let labels: Vec<String> = tree.unreached.iter().map(|&v| index_to_label(v)).collect();
        println!("unreached: {}", labels.join(", "));
    }
}

fn print_tree_records(name: &str, tree: &SpanningTree) {
    println!(
        "tree algorithm={} root={} edges={} unreached={}",
        name,
        tree.root,
        tree.edges.len(),
        tree.unreached.len()
    );
    for edge in &tree.edges {
        println!("tree-edge from={} to={} w={}", edge.from, edge.to, edge.weight);
    }
    for v in &tree.unreached {
        println!("unreached vertex={}", v);
    }
}

pub fn path(ctx: &Context, src: &str, dest: &str) -> Result<()> {
    let doc = Document::load(&ctx.graph_path)?;
    let src = parse_vertex(src)?;
    let dest = parse_vertex(dest)?;
    let result = shortest_path(doc.graph(), src, dest)?;

    match ctx.format {
        OutputFormat::Human => match &result {
            PathResult::Found(route) => {
                println!(
                    "shortest path {} -> {}: distance {}",
                    index_to_label(src),
                    index_to_label(dest),
                    route.distance
                );
                let labels: Vec<String> =
                    route.vertices.iter().map(|&v| index_to_label(v)).collect();
                println!("  {}", labels.join(" -> "));
            }
            PathResult::Unreachable => {
                println!(
                    "no path from {} to {}",
                    index_to_label(src),
                    index_to_label(dest)
                );
            }
        },
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&result)?;
            value["src"] = serde_json::json!(src);
            value["dest"] = serde_json::json!(dest);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => match &result {
            PathResult::Found(route) => {
                println!(
                    "path src={} dest={} outcome=found distance={}",
                    src, dest, route.distance
                );
                for v in &route.vertices {
                    println!("path-vertex vertex={}", v);
                }
            }
            PathResult::Unreachable => {
                println!("path src={} dest={} outcome=unreachable", src, dest);
            }
        },
    }
    Ok(())
}

pub fn mst_prim(ctx: &Context, start: &str) -> Result<()> {
    let doc = Document::load(&ctx.graph_path)?;
    let start = parse_vertex(start)?;
    let result = prim(doc.graph(), start)?;
    print_mst(ctx, "prim", &result)
}

pub fn mst_kruskal(ctx: &Context) -> Result<()> {
    let doc = Document::load(&ctx.graph_path)?;
    let result = kruskal(doc.graph());
    print_mst(ctx, "kruskal", &result)
}

fn print_mst(ctx: &Context, name: &str, result: &MstResult) -> Result<()> {
    match ctx.format {
        OutputFormat::Human => match result {
            MstResult::Tree(mst) => print_mst_human(name, mst),
            MstResult::Disconnected => {
                println!("no spanning tree ({}): graph is disconnected", name);
            }
        },
        OutputFormat::Json => {
            let mut value = serde_json::to_value(result)?;
            value["algorithm"] = serde_json::json!(name);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => match result {
            MstResult::Tree(mst) => {
                println!(
                    "mst algorithm={} outcome=tree edges={} total={}",
                    name,
                    mst.edges.len(),
                    mst.total_weight
                );
                for edge in &mst.edges {
                    println!("mst-edge from={} to={} w={}", edge.from, edge.to, edge.weight);
                }
            }
            MstResult::Disconnected => {
                println!("mst algorithm={} outcome=disconnected", name);
            }
        },
    }
    Ok(())
}

fn print_mst_human(name: &str, mst: &Mst) {
    println!(
        "minimum spanning tree ({}): {} edges, total weight {}",
        name,
        mst.edges.len(),
        mst.total_weight
    );
    for edge in &mst.edges {
        println!(
            "  {}-{}  {}",
            index_to_label(edge.from),
            index_to_label(edge.to),
            edge.weight
        );
    }
}
