use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cloudrecon")]
#[command(about = "Verify networking resources migrated correctly between two clouds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Reconcile two snapshots and report per-scenario verdicts.
    Verify(VerifyArgs),
    /// Show a summary of one snapshot.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Source cloud snapshot (JSON).
    pub src: PathBuf,
    /// Destination cloud snapshot (JSON).
    pub dst: PathBuf,
    /// Run configuration TOML.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// External-network mapping document; overrides the config path.
    #[arg(long)]
    pub resource_map: Option<PathBuf>,
    /// Run a single scenario by name.
    #[arg(long)]
    pub scenario: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Show data source metadata.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Snapshot file to summarize.
    pub file: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
