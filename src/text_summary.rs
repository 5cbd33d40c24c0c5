//! Text summary builder for CLI output.
//!
//! Formats the aggregated report as human-readable lines for text mode.

use crate::model::Report;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from an aggregated report.
pub(crate) fn build_text_summary(report: &Report) -> TextSummary {
    let mut lines = Vec::new();

    lines.push(format!("Results: {}", report.results_dir.display()));
    if !report.timestamp_utc.is_empty() {
        lines.push(format!("Generated: {}", report.timestamp_utc));
    }

    for scenario in &report.scenarios {
        lines.push(format!("Scenario {scenario}:"));
        for agg in report.qos.iter().filter(|a| &a.scenario == scenario) {
            let p = agg.kind.precision();
            let mut line = format!(
                "  {:<10} avg {:.*} {} (n={})",
                format!("{}:", agg.kind),
                p,
                agg.mean,
                agg.kind.unit(),
                agg.samples
            );
            if let (Some(med), Some(p25), Some(p75)) = (agg.median, agg.p25, agg.p75) {
                line.push_str(&format!(" med {med:.p$} p25 {p25:.p$} p75 {p75:.p$}"));
            }
            lines.push(line);
        }

        let psnr: Vec<String> = report
            .psnr_by_ue
            .iter()
            .filter(|r| &r.scenario == scenario)
            .map(|r| format!("UE {} {:.2} dB ({} videos)", r.ue, r.mean_psnr, r.videos))
            .collect();
        if !psnr.is_empty() {
            lines.push(format!("  PSNR:      {}", psnr.join(", ")));
        }

        if let Some(table) = report.ue_throughput.iter().find(|t| &t.scenario == scenario) {
            let per_ue: Vec<String> = table
                .entries
                .iter()
                .map(|e| format!("UE {} {:.2} Mbps", e.ue, e.mbps))
                .collect();
            if !per_ue.is_empty() {
                lines.push(format!("  Per UE:    {}", per_ue.join(", ")));
            }
        }
    }

    // PSNR rows may name scenarios that were not requested (the tag comes
    // from the file name), keep them visible.
    for scenario in report.psnr_scenarios() {
        if report.scenarios.contains(&scenario) {
            continue;
        }
        for r in report.psnr_by_ue.iter().filter(|r| r.scenario == scenario) {
            lines.push(format!(
                "Scenario {scenario} PSNR: UE {} {:.2} dB ({} videos)",
                r.ue, r.mean_psnr, r.videos
            ));
        }
    }

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricKind, PsnrUeMean, QosAggregate, Scenario};
    use std::path::PathBuf;

    fn report() -> Report {
        Report {
            timestamp_utc: String::new(),
            results_dir: PathBuf::from("results"),
            scenarios: vec![Scenario::new("0")],
            qos: vec![
                QosAggregate {
                    scenario: Scenario::new("0"),
                    kind: MetricKind::Throughput,
                    mean: 20.0,
                    samples: 3,
                    median: Some(20.0),
                    p25: Some(10.0),
                    p75: Some(30.0),
                },
                QosAggregate {
                    scenario: Scenario::new("0"),
                    kind: MetricKind::Jitter,
                    mean: 0.0,
                    samples: 0,
                    median: None,
                    p25: None,
                    p75: None,
                },
            ],
            psnr_files: Vec::new(),
            psnr_by_ue: vec![
                PsnrUeMean {
                    scenario: Scenario::new("0"),
                    ue: 0,
                    mean_psnr: 35.5,
                    videos: 2,
                },
                PsnrUeMean {
                    scenario: Scenario::new("3"),
                    ue: 1,
                    mean_psnr: 28.0,
                    videos: 1,
                },
            ],
            ue_throughput: Vec::new(),
        }
    }

    #[test]
    fn summary_lists_each_metric_per_scenario() {
        let summary = build_text_summary(&report());
        assert_eq!(summary.lines[0], "Results: results");
        assert_eq!(summary.lines[1], "Scenario 0:");
        assert_eq!(
            summary.lines[2],
            "  throughput: avg 20.00 Mbps (n=3) med 20.00 p25 10.00 p75 30.00"
        );
        assert_eq!(summary.lines[3], "  jitter:    avg 0.000000 s (n=0)");
        assert_eq!(summary.lines[4], "  PSNR:      UE 0 35.50 dB (2 videos)");
    }

    #[test]
    fn psnr_of_unrequested_scenarios_is_still_shown() {
        let summary = build_text_summary(&report());
        assert_eq!(
            summary.lines.last().unwrap(),
            "Scenario 3 PSNR: UE 1 28.00 dB (1 videos)"
        );
    }
}
