//! `ravel vertex` - add and remove vertices

use ravel_core::error::Result;
use ravel_core::format::OutputFormat;
use ravel_core::label::{index_to_label, parse_vertex};
use ravel_core::store::{Document, Point};

use super::dispatch::Context;

pub fn add(ctx: &Context, x: f64, y: f64) -> Result<()> {
    let mut doc = Document::load(&ctx.graph_path)?;
    let index = doc.add_vertex(Point { x, y });
    doc.save(&ctx.graph_path)?;

    match ctx.format {
        OutputFormat::Human => {
            if !ctx.quiet {
                println!("added vertex {} ({})", index, index_to_label(index));
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "index": index, "label": index_to_label(index) })
        ),
        OutputFormat::Records => {
            println!("vertex index={} label={}", index, index_to_label(index));
        }
    }
    Ok(())
}

pub fn rm(ctx: &Context, vertex: &str) -> Result<()> {
    let mut doc = Document::load(&ctx.graph_path)?;
    let index = parse_vertex(vertex)?;
    doc.remove_vertex(index)?;
    doc.save(&ctx.graph_path)?;

    let remaining = doc.graph().vertex_count();
    match ctx.format {
        OutputFormat::Human => {
            if !ctx.quiet {
                println!(
                    "removed vertex {} ({}); {} vertices remain, renumbered 0..{}",
                    index,
                    index_to_label(index),
                    remaining,
                    remaining
                );
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "removed": index, "remaining": remaining })
        ),
        OutputFormat::Records => {
            println!("vertex-removed index={} remaining={}", index, remaining);
        }
    }
    Ok(())
}
