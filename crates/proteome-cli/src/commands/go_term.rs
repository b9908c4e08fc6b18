//! GO-term membership command

use clap::Args;

use crate::output::{go_term_hit_row, to_json, OutputFormat};
use crate::{AppContext, Cli};
use proteome_core::{GoTermQuery, ProteinDatabase, DEFAULT_MIN_SCORE};

#[derive(Args)]
pub struct GoTermArgs {
    /// Primary or external GO-term id
    pub go_term: String,

    /// Minimum relevance score
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f64,

    /// Limit results (defaults to the configured go_term_limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &GoTermArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    if args.min_score.is_nan() {
        anyhow::bail!("--min-score must be a number");
    }

    let query = GoTermQuery::new(&args.go_term)
        .with_min_score(args.min_score)
        .with_limit(args.limit.unwrap_or(ctx.config.go_term_limit));
    let hits = ctx.engine.run_go_term(&query);

    tracing::info!("{} proteins annotated with {}", hits.len(), args.go_term);

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(&hits)?),
        OutputFormat::Table => {
            if hits.is_empty() {
                if !cli.quiet {
                    println!(
                        "No proteins annotated with '{}' at score >= {}",
                        args.go_term, args.min_score
                    );
                }
            } else {
                for hit in &hits {
                    println!("{}", go_term_hit_row(hit));
                }
            }
        }
    }
    Ok(())
}
