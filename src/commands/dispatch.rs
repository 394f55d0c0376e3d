//! Command dispatch logic for ravel

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use ravel_core::config::Config;
use ravel_core::error::Result;
use ravel_core::format::OutputFormat;

use crate::cli::{Cli, Commands, EdgeCommands, MstCommands, VertexCommands};
use crate::commands;
use crate::commands::algo::Strategy;

/// Resolved global options shared by all command handlers
pub struct Context {
    pub graph_path: PathBuf,
    pub format: OutputFormat,
    pub quiet: bool,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = Config::load(&cwd)?;

    // Precedence: flag, then ravel.toml, then built-in default.
    let ctx = Context {
        graph_path: cli
            .graph
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.graph.path)),
        format: cli.format.unwrap_or(config.output.format),
        quiet: cli.quiet,
    };

    tracing::debug!(
        elapsed = ?start.elapsed(),
        graph = %ctx.graph_path.display(),
        format = %ctx.format,
        "resolved context"
    );

    match &cli.command {
        Commands::Init { force } => commands::init::run(&ctx, *force),

        Commands::Vertex { command } => match command {
            VertexCommands::Add { x, y } => commands::vertex::add(&ctx, *x, *y),
            VertexCommands::Rm { vertex } => commands::vertex::rm(&ctx, vertex),
        },

        Commands::Edge { command } => match command {
            EdgeCommands::Add { u, v, weight } => commands::edge::add(&ctx, u, v, *weight),
            EdgeCommands::Rm { u, v, weight } => commands::edge::rm(&ctx, u, v, *weight),
        },

        Commands::Show => commands::show::run(&ctx),

        Commands::Dfs { start } => commands::algo::spanning_tree(&ctx, start, Strategy::Dfs),
        Commands::Bfs { start } => commands::algo::spanning_tree(&ctx, start, Strategy::Bfs),

        Commands::Path { src, dest } => commands::algo::path(&ctx, src, dest),

        Commands::Mst { command } => match command {
            MstCommands::Prim { start } => commands::algo::mst_prim(&ctx, start),
            MstCommands::Kruskal => commands::algo::mst_kruskal(&ctx),
        },
    }
}
