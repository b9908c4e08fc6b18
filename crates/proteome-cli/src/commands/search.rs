//! Search command

use clap::Args;

use crate::output::{protein_row, to_json, OutputFormat};
use crate::{AppContext, Cli};
use proteome_core::{ProteinDatabase, SearchQuery};

#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against ids, aliases and names (case-insensitive)
    pub query: String,

    /// Limit results (defaults to the configured search_limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &SearchArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    if args.query.trim().is_empty() {
        tracing::warn!("Empty search query matches every protein");
    }

    let query =
        SearchQuery::new(&args.query).with_limit(args.limit.unwrap_or(ctx.config.search_limit));
    let results = ctx.engine.run_search(&query);

    tracing::info!("Search returned {} results", results.len());

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(&results)?),
        OutputFormat::Table => {
            if results.is_empty() {
                if !cli.quiet {
                    println!("No proteins match '{}'", args.query);
                }
            } else {
                for protein in &results {
                    println!("{}", protein_row(protein));
                }
            }
        }
    }

    Ok(())
}
