//! Collect → aggregate: produces the report handed to rendering and exports.

use super::collect::{collect_inputs, CollectedInputs};
use crate::aggregate;
use crate::model::{Report, RunConfig, Scenario};
use anyhow::Result;
use log::info;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Reduce collected inputs into a report. Pure apart from the timestamp.
pub(crate) fn aggregate_inputs(root: &Path, scenarios: &[Scenario], inputs: &CollectedInputs) -> Report {
    let psnr_files = aggregate::psnr_file_means(&inputs.psnr);
    let psnr_by_ue = aggregate::psnr_by_ue(&psnr_files);
    Report {
        timestamp_utc: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
        results_dir: root.to_path_buf(),
        scenarios: scenarios.to_vec(),
        qos: aggregate::aggregate_qos(scenarios, &inputs.qos),
        psnr_files,
        psnr_by_ue,
        ue_throughput: aggregate::ue_throughput_tables(&inputs.ue_throughput),
    }
}

/// Read every input under the results root and aggregate it.
pub(crate) fn build_report(cfg: &RunConfig) -> Result<Report> {
    let inputs = collect_inputs(&cfg.results_dir, &cfg.scenarios)?;
    info!(
        "read {} QoS samples, {} PSNR files, {} per-UE totals from {}",
        inputs.qos.len(),
        inputs.psnr.len(),
        inputs.ue_throughput.len(),
        cfg.results_dir.display()
    );
    Ok(aggregate_inputs(&cfg.results_dir, &cfg.scenarios, &inputs))
}
