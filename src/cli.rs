use crate::model::{Report, RunConfig, Scenario};
use crate::orchestrator;
use crate::render::PngRenderer;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "evalvid-report",
    version,
    about = "Summarise LTE/SDN EvalVid simulation results into QoS, PSNR and per-UE bar charts"
)]
pub struct Cli {
    /// Results root holding one `scenario_<id>` directory per scenario
    #[arg(long, default_value = "results")]
    pub results_dir: std::path::PathBuf,

    /// Scenarios to process, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["0", "1"])]
    pub scenarios: Vec<Scenario>,

    /// Print the aggregated report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a text summary of the aggregated report
    #[arg(long)]
    pub text: bool,

    /// Aggregate only, do not write any chart
    #[arg(long)]
    pub no_charts: bool,

    /// Export the aggregated report as JSON
    #[arg(long)]
    pub export_json: Option<std::path::PathBuf>,

    /// Export the aggregated report as CSV
    #[arg(long)]
    pub export_csv: Option<std::path::PathBuf>,
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RunConfig {
    let mut scenarios: Vec<Scenario> = Vec::new();
    for s in &args.scenarios {
        if !s.as_str().is_empty() && !scenarios.contains(s) {
            scenarios.push(s.clone());
        }
    }
    RunConfig {
        results_dir: args.results_dir.clone(),
        scenarios,
        render_charts: !args.no_charts,
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    if cfg.scenarios.is_empty() {
        return Err(anyhow::anyhow!("no scenarios given; pass e.g. --scenarios 0,1"));
    }

    let report = orchestrator::build_report(&cfg).context("aggregating results failed")?;

    if cfg.render_charts {
        let processed = orchestrator::render_report(&report, &mut PngRenderer)
            .context("writing charts failed")?;
        for notice in &processed.notices {
            eprintln!("{notice}");
        }
        info!("{} charts written", processed.charts_written.len());
    }

    handle_exports(&args, &report)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if args.text {
        for line in crate::text_summary::build_text_summary(&report).lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Handle export operations (JSON and CSV); errors propagate.
fn handle_exports(args: &Cli, report: &Report) -> Result<()> {
    if let Some(p) = args.export_json.as_deref() {
        crate::render::export::export_json(p, report)?;
        info!("exported JSON: {}", p.display());
    }
    if let Some(p) = args.export_csv.as_deref() {
        crate::render::export::export_csv(p, report)?;
        info!("exported CSV: {}", p.display());
    }
    Ok(())
}
