use crate::model::Report;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// One flattened row of the CSV export; columns that do not apply stay empty.
#[derive(Debug, Serialize, PartialEq)]
struct CsvRow<'a> {
    view: &'static str,
    scenario: &'a str,
    metric: Option<&'static str>,
    video: Option<&'a str>,
    ue: Option<u32>,
    value: f64,
    samples: Option<usize>,
}

fn csv_rows(report: &Report) -> Vec<CsvRow<'_>> {
    let mut rows = Vec::new();
    for a in &report.qos {
        rows.push(CsvRow {
            view: "qos",
            scenario: a.scenario.as_str(),
            metric: Some(a.kind.label()),
            video: None,
            ue: None,
            value: a.mean,
            samples: Some(a.samples),
        });
    }
    for f in &report.psnr_files {
        rows.push(CsvRow {
            view: "psnr_file",
            scenario: f.scenario.as_str(),
            metric: Some("psnr"),
            video: Some(f.video.as_str()),
            ue: Some(f.ue),
            value: f.mean_psnr,
            samples: Some(f.samples),
        });
    }
    for u in &report.psnr_by_ue {
        rows.push(CsvRow {
            view: "psnr_ue",
            scenario: u.scenario.as_str(),
            metric: Some("psnr"),
            video: None,
            ue: Some(u.ue),
            value: u.mean_psnr,
            samples: Some(u.videos),
        });
    }
    for t in &report.ue_throughput {
        for e in &t.entries {
            rows.push(CsvRow {
                view: "ue_throughput",
                scenario: t.scenario.as_str(),
                metric: Some("throughput"),
                video: None,
                ue: Some(e.ue),
                value: e.mbps,
                samples: None,
            });
        }
    }
    rows
}

/// Write the report as pretty-printed JSON.
pub(crate) fn export_json(path: &Path, report: &Report) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create JSON export {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("write JSON export {}", path.display()))?;
    Ok(())
}

/// Write every aggregate of the report as one CSV table.
pub(crate) fn export_csv(path: &Path, report: &Report) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create CSV export {}", path.display()))?;
    for row in csv_rows(report) {
        writer
            .serialize(row)
            .with_context(|| format!("write CSV export {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush CSV export {}", path.display()))?;
    Ok(())
}
