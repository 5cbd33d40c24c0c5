//! Post-aggregation processing.
//!
//! Turns a report into charts and reports chart categories that had no input
//! at all.

use crate::model::Report;
use crate::render::{charts, BarChart, ChartRenderer};
use anyhow::Result;
use std::path::PathBuf;

pub(crate) const NO_PSNR_NOTICE: &str = "No psnr_*.txt files found.";
pub(crate) const NO_UE_THROUGHPUT_NOTICE: &str = "No *_drops_largura_ue*.txt files found.";

/// Result of post-processing, ready for presentation layers.
#[derive(Debug, Default)]
pub(crate) struct ProcessedReport {
    pub charts_written: Vec<PathBuf>,
    pub notices: Vec<String>,
}

/// Every chart the report supports, plus notices for skipped categories.
pub(crate) fn plan_charts(report: &Report) -> (Vec<BarChart>, Vec<String>) {
    let mut notices = Vec::new();
    let mut planned = charts::qos_charts(report);

    let psnr = charts::psnr_charts(report);
    if psnr.is_empty() {
        notices.push(NO_PSNR_NOTICE.to_string());
    }
    planned.extend(psnr);

    let per_ue = charts::ue_throughput_charts(report);
    if per_ue.is_empty() {
        notices.push(NO_UE_THROUGHPUT_NOTICE.to_string());
    }
    planned.extend(per_ue);

    (planned, notices)
}

/// Hand every planned chart to the renderer. The first write failure ends the run.
pub(crate) fn render_report(report: &Report, renderer: &mut dyn ChartRenderer) -> Result<ProcessedReport> {
    let (planned, notices) = plan_charts(report);
    let mut charts_written = Vec::with_capacity(planned.len());
    for chart in &planned {
        renderer.render(chart)?;
        charts_written.push(chart.path.clone());
    }
    Ok(ProcessedReport {
        charts_written,
        notices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PsnrUeMean, Scenario};
    use crate::render::RecordingRenderer;

    fn empty_report() -> Report {
        Report {
            timestamp_utc: String::new(),
            results_dir: PathBuf::from("results"),
            scenarios: vec![Scenario::new("0"), Scenario::new("1")],
            qos: Vec::new(),
            psnr_files: Vec::new(),
            psnr_by_ue: Vec::new(),
            ue_throughput: Vec::new(),
        }
    }

    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&mut self, chart: &BarChart) -> Result<()> {
            anyhow::bail!("cannot write {}", chart.path.display())
        }
    }

    #[test]
    fn empty_inputs_still_render_qos_charts_and_report_missing_categories() {
        let mut renderer = RecordingRenderer::default();
        let processed = render_report(&empty_report(), &mut renderer).unwrap();

        assert_eq!(renderer.charts.len(), 4);
        for chart in &renderer.charts {
            assert_eq!(chart.bars.len(), 2);
            assert!(chart.bars.iter().all(|b| b.value == 0.0));
        }
        assert_eq!(
            processed.notices,
            vec![NO_PSNR_NOTICE.to_string(), NO_UE_THROUGHPUT_NOTICE.to_string()]
        );
        assert_eq!(processed.charts_written.len(), 4);
    }

    #[test]
    fn psnr_chart_is_planned_when_rows_exist() {
        let mut report = empty_report();
        report.psnr_by_ue.push(PsnrUeMean {
            scenario: Scenario::new("0"),
            ue: 0,
            mean_psnr: 35.5,
            videos: 2,
        });
        let (planned, notices) = plan_charts(&report);
        assert_eq!(planned.len(), 5);
        assert_eq!(planned[4].path, PathBuf::from("results/psnr_s0.png"));
        assert_eq!(notices, vec![NO_UE_THROUGHPUT_NOTICE.to_string()]);
    }

    #[test]
    fn render_failure_propagates() {
        let err = render_report(&empty_report(), &mut FailingRenderer).unwrap_err();
        assert!(err.to_string().contains("qos_throughput.png"));
    }
}
