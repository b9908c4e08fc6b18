//! Proteome CLI - Command line interface for protein snapshots

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, config as config_cmd, go_term, protein, search, stats};
use config::{default_config_path, Config};
use output::OutputFormat;
use proteome_core::QueryEngine;
use proteome_storage::{JsonSource, RecordSource};

#[derive(Parser)]
#[command(name = "proteome")]
#[command(author, version, about = "Query protein identifiers, annotations and interactions")]
pub struct Cli {
    /// Snapshot directory holding the four batch files
    #[arg(short, long, global = true, env = "PROTEOME_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, env = "PROTEOME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search proteins by identifier or name
    Search(search::SearchArgs),
    /// Show a protein
    Get(protein::GetArgs),
    /// List functional annotations of a protein
    Annotations(protein::ProteinArgs),
    /// List interactions of a protein
    Interactions(protein::ProteinArgs),
    /// List proteins annotated with a GO term
    GoTerm(go_term::GoTermArgs),
    /// Show index statistics
    Stats,
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the built index
pub struct AppContext {
    pub engine: QueryEngine,
    pub config: Config,
}

impl AppContext {
    pub async fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load(&cli.config_path())?;
        let source = JsonSource::new(config.batch_paths(cli.data_dir.as_deref()));
        tracing::debug!("Loading snapshot: {}", source.describe());

        let index = source
            .load_index()
            .await
            .with_context(|| format!("Failed to load {}", source.describe()))?;

        Ok(Self {
            engine: QueryEngine::from(index),
            config,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting proteome CLI");

    match &cli.command {
        Commands::Config(args) => return config_cmd::run(args, &cli),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli).await?;

    match &cli.command {
        Commands::Search(args) => search::run(args, &cli, &ctx)?,
        Commands::Get(args) => protein::run_get(args, &cli, &ctx)?,
        Commands::Annotations(args) => protein::run_annotations(args, &cli, &ctx)?,
        Commands::Interactions(args) => protein::run_interactions(args, &cli, &ctx)?,
        Commands::GoTerm(args) => go_term::run(args, &cli, &ctx)?,
        Commands::Stats => stats::run(&cli, &ctx)?,
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
