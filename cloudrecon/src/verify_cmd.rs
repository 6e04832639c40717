use anyhow::{bail, Context, Result};
use cloudrecon::config::{load_run_config, RunConfig};
use cloudrecon::report::render_recon_text;
use cloudrecon::resource_map::load_resource_map;
use cloudrecon::scenario::{error_report, run_scenarios, RunContext};
use recon_core::parse_file;

use crate::cli::{OutputFormat, VerifyArgs};

pub fn run_verify(args: VerifyArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_run_config(path)
            .with_context(|| format!("failed to load run config {}", path.display()))?,
        None => RunConfig::default(),
    };

    let map_path = args.resource_map.clone().or_else(|| config.resource_map.clone());
    let resource_map = match &map_path {
        Some(path) => Some(
            load_resource_map(path)
                .with_context(|| format!("failed to load resource map {}", path.display()))?,
        ),
        None => None,
    };

    if args.verbose {
        let source = map_path
            .as_ref()
            .map(|path| format!("file:{}", path.display()))
            .unwrap_or_else(|| "none".to_string());
        println!("Using resource map: {source}");
    }

    // A snapshot that cannot be read fails the whole fixture; the report
    // is still produced with every selected scenario marked as an error.
    let report = match (parse_file(&args.src), parse_file(&args.dst)) {
        (Ok(src), Ok(dst)) => run_scenarios(
            &RunContext {
                src: &src,
                dst: &dst,
                config: &config,
                resource_map: resource_map.as_ref(),
            },
            args.scenario.as_deref(),
        )?,
        (src_result, dst_result) => {
            let mut details = Vec::new();
            if let Err(err) = src_result {
                details.push(err.to_string());
            }
            if let Err(err) = dst_result {
                details.push(err.to_string());
            }
            error_report("src", "dst", &details.join("; "), args.scenario.as_deref())?
        }
    };

    match args.format {
        OutputFormat::Text => println!("{}", render_recon_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.errors > 0 {
        bail!(
            "recon could not be fully evaluated: {} scenario errors",
            report.errors
        );
    }
    if report.failed > 0 {
        bail!("recon failed: {} scenario failures", report.failed);
    }
    Ok(())
}
