use anyhow::{Context, Result};
use clap::Parser;
use cloudrecon::inspect::render_snapshot_summary;
use recon_core::parse_file;

mod cli;
mod verify_cmd;

use cli::{Cli, Command, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify(args) => verify_cmd::run_verify(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let snapshot = parse_file(&args.file)
        .with_context(|| format!("failed to load snapshot {}", args.file.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_snapshot_summary(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}
