//! Per-protein commands

use clap::Args;

use crate::output::{annotation_row, interaction_row, protein_details, to_json, OutputFormat};
use crate::{AppContext, Cli};
use proteome_core::ProteinDatabase;

#[derive(Args)]
pub struct ProteinArgs {
    /// Primary, external, secondary or ambiguous secondary id
    pub identifier: String,
}

#[derive(Args)]
pub struct GetArgs {
    /// Primary, external, secondary or ambiguous secondary id
    pub identifier: String,

    /// List every protein an ambiguous id could refer to
    #[arg(long)]
    pub all_candidates: bool,
}

pub fn run_get(args: &GetArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    if args.all_candidates {
        let candidates = ctx.engine.ambiguous_candidates(&args.identifier);
        if !candidates.is_empty() {
            match cli.format {
                OutputFormat::Json => println!("{}", to_json(&candidates)?),
                OutputFormat::Table => {
                    let details: Vec<_> = candidates.iter().map(|p| protein_details(p)).collect();
                    println!("{}", details.join("\n\n"));
                }
            }
            return Ok(());
        }
    }

    let Some(protein) = ctx.engine.get_protein(&args.identifier) else {
        eprintln!("Protein not found: {}", args.identifier);
        std::process::exit(1);
    };

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(protein)?),
        OutputFormat::Table => println!("{}", protein_details(protein)),
    }
    Ok(())
}

pub fn run_annotations(args: &ProteinArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let annotations = ctx.engine.get_functional_annotations(&args.identifier);
    tracing::info!(
        "{} functional annotations for {}",
        annotations.len(),
        args.identifier
    );

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(annotations)?),
        OutputFormat::Table => {
            if annotations.is_empty() {
                if !cli.quiet {
                    println!("No functional annotations for '{}'", args.identifier);
                }
            } else {
                for annotation in annotations {
                    println!("{}", annotation_row(annotation));
                }
            }
        }
    }
    Ok(())
}

pub fn run_interactions(args: &ProteinArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let interactions = ctx.engine.get_protein_interactions(&args.identifier);
    tracing::info!("{} interactions for {}", interactions.len(), args.identifier);

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(interactions)?),
        OutputFormat::Table => {
            if interactions.is_empty() {
                if !cli.quiet {
                    println!("No interactions for '{}'", args.identifier);
                }
            } else {
                for interaction in interactions {
                    println!("{}", interaction_row(interaction));
                }
            }
        }
    }
    Ok(())
}
