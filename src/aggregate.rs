//! Reduction of extracted samples into the report tables.

use crate::metrics;
use crate::model::{
    MetricKind, MetricSample, PsnrFileMean, PsnrSeries, PsnrUeMean, QosAggregate, Scenario,
    UeThroughput, UeThroughputObservation, UeThroughputTable,
};
use log::warn;
use std::collections::BTreeMap;

/// One aggregate per (requested scenario, metric), in scenario order.
///
/// Pairs without samples still get an entry with a 0.0 mean.
pub(crate) fn aggregate_qos(scenarios: &[Scenario], samples: &[MetricSample]) -> Vec<QosAggregate> {
    let mut grouped: BTreeMap<(&Scenario, MetricKind), Vec<f64>> = BTreeMap::new();
    for s in samples {
        grouped.entry((&s.scenario, s.kind)).or_default().push(s.value);
    }

    let mut out = Vec::with_capacity(scenarios.len() * MetricKind::ALL.len());
    for scenario in scenarios {
        for kind in MetricKind::ALL {
            let values = grouped
                .get(&(scenario, kind))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let spread = metrics::compute_metrics(values);
            out.push(QosAggregate {
                scenario: scenario.clone(),
                kind,
                mean: metrics::mean_or_zero(values),
                samples: values.len(),
                median: spread.map(|(_, med, _, _)| med),
                p25: spread.map(|(_, _, p25, _)| p25),
                p75: spread.map(|(_, _, _, p75)| p75),
            });
        }
    }
    out
}

/// First PSNR level: one mean per file. Files without samples produce no row.
pub(crate) fn psnr_file_means(series: &[PsnrSeries]) -> Vec<PsnrFileMean> {
    series
        .iter()
        .filter_map(|s| {
            let mean_psnr = metrics::mean(&s.samples)?;
            Some(PsnrFileMean {
                scenario: s.scenario.clone(),
                video: s.video.clone(),
                ue: s.ue,
                mean_psnr,
                samples: s.samples.len(),
            })
        })
        .collect()
}

/// Second PSNR level: per (scenario, UE), the mean of the per-file means.
///
/// Each video weighs the same regardless of how many frames its file held.
pub(crate) fn psnr_by_ue(rows: &[PsnrFileMean]) -> Vec<PsnrUeMean> {
    let mut grouped: BTreeMap<(&Scenario, u32), Vec<f64>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry((&row.scenario, row.ue))
            .or_default()
            .push(row.mean_psnr);
    }
    grouped
        .into_iter()
        .map(|((scenario, ue), means)| PsnrUeMean {
            scenario: scenario.clone(),
            ue,
            mean_psnr: metrics::mean_or_zero(&means),
            videos: means.len(),
        })
        .collect()
}

/// Per-scenario UE totals ordered by UE index. A repeated UE keeps the last value seen.
pub(crate) fn ue_throughput_tables(observations: &[UeThroughputObservation]) -> Vec<UeThroughputTable> {
    let mut grouped: BTreeMap<&Scenario, BTreeMap<u32, f64>> = BTreeMap::new();
    for obs in observations {
        let prev = grouped
            .entry(&obs.scenario)
            .or_default()
            .insert(obs.ue, obs.mbps);
        if let Some(prev) = prev {
            warn!(
                "scenario {}: UE {} reported twice ({prev} then {}), keeping the latter",
                obs.scenario, obs.ue, obs.mbps
            );
        }
    }
    grouped
        .into_iter()
        .map(|(scenario, per_ue)| UeThroughputTable {
            scenario: scenario.clone(),
            entries: per_ue
                .into_iter()
                .map(|(ue, mbps)| UeThroughput { ue, mbps })
                .collect(),
        })
        .collect()
}
