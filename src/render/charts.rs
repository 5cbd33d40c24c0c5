use super::{Bar, BarChart};
use crate::model::{MetricKind, Report};

/// One chart per QoS metric with a bar for every requested scenario.
pub(crate) fn qos_charts(report: &Report) -> Vec<BarChart> {
    MetricKind::ALL
        .iter()
        .map(|&kind| BarChart {
            title: kind.chart_title().to_string(),
            x_desc: "Scenario".to_string(),
            y_desc: kind.axis_label().to_string(),
            bars: report
                .scenarios
                .iter()
                .map(|s| Bar {
                    label: s.to_string(),
                    value: report.qos_mean(s, kind),
                })
                .collect(),
            precision: kind.precision(),
            path: report.results_dir.join(kind.chart_file()),
        })
        .collect()
}

/// `psnr_s<scenario>.png`: mean PSNR per UE, one chart per scenario with data.
pub(crate) fn psnr_charts(report: &Report) -> Vec<BarChart> {
    report
        .psnr_scenarios()
        .into_iter()
        .map(|scenario| BarChart {
            title: format!("Mean PSNR per UE - scenario {scenario}"),
            x_desc: "UE".to_string(),
            y_desc: "Mean PSNR (dB)".to_string(),
            bars: report
                .psnr_by_ue
                .iter()
                .filter(|r| r.scenario == scenario)
                .map(|r| Bar {
                    label: r.ue.to_string(),
                    value: r.mean_psnr,
                })
                .collect(),
            precision: 2,
            path: report.results_dir.join(format!("psnr_s{scenario}.png")),
        })
        .collect()
}

/// `scenario_<s>/largura_ue_s<s>.png`: total throughput per UE.
pub(crate) fn ue_throughput_charts(report: &Report) -> Vec<BarChart> {
    report
        .ue_throughput
        .iter()
        .filter(|t| !t.entries.is_empty())
        .map(|t| BarChart {
            title: format!("Total throughput per UE - scenario {}", t.scenario),
            x_desc: "UE".to_string(),
            y_desc: "Total throughput (Mbps)".to_string(),
            bars: t
                .entries
                .iter()
                .map(|e| Bar {
                    label: e.ue.to_string(),
                    value: e.mbps,
                })
                .collect(),
            precision: 2,
            path: t
                .scenario
                .dir(&report.results_dir)
                .join(format!("largura_ue_s{}.png", t.scenario)),
        })
        .collect()
}
