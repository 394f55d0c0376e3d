//! `ravel init` - create an empty graph file

use ravel_core::error::{RavelError, Result};
use ravel_core::format::OutputFormat;
use ravel_core::store::Document;

use super::dispatch::Context;

pub fn run(ctx: &Context, force: bool) -> Result<()> {
    if ctx.graph_path.exists() && !force {
        return Err(RavelError::UsageError(format!(
            "graph file already exists: {} (use --force to overwrite)",
            ctx.graph_path.display()
        )));
    }

    Document::new().save(&ctx.graph_path)?;
    tracing::info!(path = %ctx.graph_path.display(), "initialized graph file");

    match ctx.format {
        OutputFormat::Human => {
            if !ctx.quiet {
                println!("initialized empty graph at {}", ctx.graph_path.display());
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "initialized": ctx.graph_path.display().to_string() })
        ),
        OutputFormat::Records => {
            println!("init path={}", ctx.graph_path.display());
        }
    }
    Ok(())
}
