//! Input discovery and reading.
//!
//! Walks `<results>/scenario_<s>/` for every configured scenario and turns
//! each recognised file into tagged samples.

use crate::extract;
use crate::identity;
use crate::model::{MetricKind, MetricSample, PsnrSeries, Scenario, UeThroughputObservation};
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Everything read from disk for one run, before any reduction.
#[derive(Debug, Default)]
pub(crate) struct CollectedInputs {
    pub qos: Vec<MetricSample>,
    pub psnr: Vec<PsnrSeries>,
    pub ue_throughput: Vec<UeThroughputObservation>,
}

pub(crate) fn qos_file(root: &Path, scenario: &Scenario, kind: MetricKind) -> PathBuf {
    scenario.dir(root).join(format!("s{scenario}_QoS_{}.txt", kind.file_stem()))
}

/// Files in `dir` matching `file_pattern`, sorted by path. A missing `dir` yields nothing.
fn glob_sorted(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("non UTF-8 results path: {}", dir.display()))?;
    let pattern = format!("{}/{file_pattern}", glob::Pattern::escape(dir_str));
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("bad glob pattern {pattern}"))? {
        paths.push(entry.with_context(|| format!("listing {}", dir.display()))?);
    }
    paths.sort();
    Ok(paths)
}

/// QoS samples for one scenario, tagged with their position in the file.
pub(crate) fn collect_qos(root: &Path, scenario: &Scenario) -> Vec<MetricSample> {
    let mut out = Vec::new();
    for kind in MetricKind::ALL {
        let path = qos_file(root, scenario, kind);
        let Some(text) = extract::read_input(&path) else {
            continue;
        };
        let values = extract::qos_samples(kind, &text);
        debug!("{}: {} {kind} samples", path.display(), values.len());
        out.extend(values.into_iter().enumerate().map(|(flow, value)| MetricSample {
            scenario: scenario.clone(),
            kind,
            flow: Some(flow),
            value,
        }));
    }
    out
}

/// PSNR series from `psnr_*.txt` in one scenario directory.
///
/// The scenario tag comes from the file name, not from the directory.
pub(crate) fn collect_psnr(root: &Path, scenario: &Scenario) -> Result<Vec<PsnrSeries>> {
    let mut out = Vec::new();
    for path in glob_sorted(&scenario.dir(root), "psnr_*.txt")? {
        let Some(id) = identity::parse_psnr_name(&path) else {
            debug!("skipping unrecognised PSNR file {}", path.display());
            continue;
        };
        let Some(text) = extract::read_input(&path) else {
            continue;
        };
        out.push(PsnrSeries {
            scenario: id.scenario,
            video: id.video,
            ue: id.ue,
            samples: extract::psnr_samples(&text),
        });
    }
    Ok(out)
}

/// Per-UE totals from `s<scenario>_QoS_drops_largura_ue*.txt`.
pub(crate) fn collect_ue_throughput(
    root: &Path,
    scenario: &Scenario,
) -> Result<Vec<UeThroughputObservation>> {
    let prefix = glob::Pattern::escape(&format!("s{scenario}_QoS_drops_largura_ue"));
    let mut out = Vec::new();
    for path in glob_sorted(&scenario.dir(root), &format!("{prefix}*.txt"))? {
        let Some(ue) = identity::parse_largura_ue(&path) else {
            debug!("skipping unrecognised throughput file {}", path.display());
            continue;
        };
        let Some(mbps) = extract::read_ue_throughput(&path) else {
            debug!("no Mbps value in {}", path.display());
            continue;
        };
        out.push(UeThroughputObservation {
            scenario: scenario.clone(),
            ue,
            mbps,
        });
    }
    Ok(out)
}

/// Read every input for the configured scenarios.
pub(crate) fn collect_inputs(root: &Path, scenarios: &[Scenario]) -> Result<CollectedInputs> {
    let mut inputs = CollectedInputs::default();
    for scenario in scenarios {
        inputs.qos.extend(collect_qos(root, scenario));
        inputs.psnr.extend(collect_psnr(root, scenario)?);
        inputs.ue_throughput.extend(collect_ue_throughput(root, scenario)?);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn missing_scenario_directory_collects_nothing() {
        let root = tempfile::tempdir().unwrap();
        let inputs = collect_inputs(root.path(), &[Scenario::new("0")]).unwrap();
        assert!(inputs.qos.is_empty());
        assert!(inputs.psnr.is_empty());
        assert!(inputs.ue_throughput.is_empty());
    }

    #[test]
    fn qos_samples_carry_flow_positions() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("scenario_1");
        write(&dir, "s1_QoS_jitter.txt", "Flow 1: 0.01 s\nnoise\nFlow 2: 0.03 s\n");
        write(&dir, "s1_QoS_vazao.txt", "1 10.0\n2 20.0\n");

        let samples = collect_qos(root.path(), &Scenario::new("1"));
        let jitter: Vec<(Option<usize>, f64)> = samples
            .iter()
            .filter(|s| s.kind == MetricKind::Jitter)
            .map(|s| (s.flow, s.value))
            .collect();
        assert_eq!(jitter, vec![(Some(0), 0.01), (Some(1), 0.03)]);
        assert_eq!(
            samples.iter().filter(|s| s.kind == MetricKind::Throughput).count(),
            2
        );
    }

    #[test]
    fn psnr_files_are_discovered_and_bad_names_skipped() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("scenario_0");
        write(&dir, "psnr_harbour_ue0_s0.txt", "30\n32\n");
        write(&dir, "psnr_crew_ue0_s0.txt", "40\n");
        write(&dir, "psnr_broken.txt", "50\n");
        write(&dir, "other.txt", "1\n");

        let series = collect_psnr(root.path(), &Scenario::new("0")).unwrap();
        let videos: Vec<&str> = series.iter().map(|s| s.video.as_str()).collect();
        assert_eq!(videos, vec!["crew", "harbour"]);
        assert_eq!(series[1].samples, vec![30.0, 32.0]);
    }

    #[test]
    fn ue_throughput_files_are_read_from_their_first_line() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("scenario_0");
        write(&dir, "s0_QoS_drops_largura_ue2.txt", "UE 2 throughput total: 12.5 Mbps\n");
        write(&dir, "s0_QoS_drops_largura_ue1.txt", "garbage\n");
        write(&dir, "s1_QoS_drops_largura_ue3.txt", "UE 3 throughput total: 1 Mbps\n");

        let obs = collect_ue_throughput(root.path(), &Scenario::new("0")).unwrap();
        assert_eq!(
            obs,
            vec![UeThroughputObservation {
                scenario: Scenario::new("0"),
                ue: 2,
                mbps: 12.5,
            }]
        );
    }
}
