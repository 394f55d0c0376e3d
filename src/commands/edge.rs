//! `ravel edge` - add and remove edges

use ravel_core::error::Result;
use ravel_core::format::OutputFormat;
use ravel_core::label::{index_to_label, parse_vertex};
use ravel_core::store::Document;

use super::dispatch::Context;

pub fn add(ctx: &Context, u: &str, v: &str, weight: f64) -> Result<()> {
    let mut doc = Document::load(&ctx.graph_path)?;
    let u = parse_vertex(u)?;
    let v = parse_vertex(v)?;
    doc.add_edge(u, v, weight)?;
    doc.save(&ctx.graph_path)?;

    match ctx.format {
        OutputFormat::Human => {
            if !ctx.quiet {
                println!(
                    "added edge {}-{} ({})",
                    index_to_label(u),
                    index_to_label(v),
                    weight
                );
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "u": u, "v": v, "w": weight, "added": true })
        ),
        OutputFormat::Records => println!("edge u={} v={} w={}", u, v, weight),
    }
    Ok(())
}

pub fn rm(ctx: &Context, u: &str, v: &str, weight: f64) -> Result<()> {
    let mut doc = Document::load(&ctx.graph_path)?;
    let u = parse_vertex(u)?;
    let v = parse_vertex(v)?;
    let removed = doc.remove_edge(u, v, weight)?;
    if removed {
        doc.save(&ctx.graph_path)?;
    }

    match ctx.format {
        OutputFormat::Human => {
            if !ctx.quiet {
                if removed {
                    println!(
                        "removed edge {}-{} ({})",
                        index_to_label(u),
                        index_to_label(v),
                        weight
                    );
                } else {
                    println!(
                        "no matching edge {}-{} ({})",
                        index_to_label(u),
                        index_to_label(v),
                        weight
                    );
                }
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "u": u, "v": v, "w": weight, "removed": removed })
        ),
        OutputFormat::Records => {
            println!("edge-removed u={} v={} w={} removed={}", u, v, weight, removed);
        }
    }
    Ok(())
}
