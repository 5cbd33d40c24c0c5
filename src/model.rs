use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub results_dir: PathBuf,
    pub scenarios: Vec<Scenario>,
    pub render_charts: bool,
}

/// Identifier of one simulation run, e.g. `0` for `results/scenario_0`.
///
/// Numeric identifiers order numerically (so `2` sorts before `10`), anything
/// else sorts after them lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Scenario(String);

impl Scenario {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<root>/scenario_<id>`, where the simulator leaves this run's files.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(format!("scenario_{}", self.0))
    }

    fn sort_key(&self) -> (bool, u64, &str) {
        match self.0.parse::<u64>() {
            Ok(n) => (false, n, self.0.as_str()),
            Err(_) => (true, 0, self.0.as_str()),
        }
    }
}

impl From<u32> for Scenario {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl std::str::FromStr for Scenario {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for Scenario {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Scenario {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How samples are pulled out of one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Whitespace-delimited numeric rows; the value lives in the given column.
    Tabular { column: usize },
    /// `label: <number> <unit>` lines.
    LabeledLine,
    /// First line only, `... <number> Mbps`.
    SummaryLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Throughput,
    Jitter,
    Loss,
    Delay,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Throughput,
        MetricKind::Jitter,
        MetricKind::Loss,
        MetricKind::Delay,
    ];

    /// Name used by the simulator in `s<scenario>_QoS_<stem>.txt`.
    pub fn file_stem(self) -> &'static str {
        match self {
            MetricKind::Throughput => "vazao",
            MetricKind::Jitter => "jitter",
            MetricKind::Loss => "perda",
            MetricKind::Delay => "delay",
        }
    }

    pub fn extraction(self) -> Extraction {
        match self {
            MetricKind::Throughput => Extraction::Tabular { column: 1 },
            MetricKind::Jitter | MetricKind::Loss | MetricKind::Delay => Extraction::LabeledLine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Throughput => "throughput",
            MetricKind::Jitter => "jitter",
            MetricKind::Loss => "loss",
            MetricKind::Delay => "delay",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Throughput => "Mbps",
            MetricKind::Jitter | MetricKind::Delay => "s",
            MetricKind::Loss => "%",
        }
    }

    /// Decimals shown in value labels and text output.
    pub fn precision(self) -> usize {
        match self {
            MetricKind::Throughput | MetricKind::Loss => 2,
            MetricKind::Jitter => 6,
            MetricKind::Delay => 4,
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            MetricKind::Throughput => "Mean throughput per scenario",
            MetricKind::Jitter => "Mean jitter per scenario",
            MetricKind::Loss => "Packet loss per scenario",
            MetricKind::Delay => "Mean delay per scenario",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            MetricKind::Throughput => "Mean throughput (Mbps)",
            MetricKind::Jitter => "Mean jitter (s)",
            MetricKind::Loss => "Loss (%)",
            MetricKind::Delay => "Mean delay (s)",
        }
    }

    /// Chart file name, relative to the results root.
    pub fn chart_file(self) -> &'static str {
        match self {
            MetricKind::Throughput => "qos_throughput.png",
            MetricKind::Jitter => "qos_jitter.png",
            MetricKind::Loss => "qos_loss.png",
            MetricKind::Delay => "qos_delay.png",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One QoS value read from a scenario's metric file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub scenario: Scenario,
    pub kind: MetricKind,
    /// Position of the value in its file, in line order.
    pub flow: Option<usize>,
    pub value: f64,
}

/// All PSNR observations read from one `psnr_<video>_ue<N>_s<M>.txt` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsnrSeries {
    pub scenario: Scenario,
    pub video: String,
    pub ue: u32,
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UeThroughputObservation {
    pub scenario: Scenario,
    pub ue: u32,
    pub mbps: f64,
}

/// Mean of one QoS metric for one scenario. `mean` is 0.0 when no samples exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QosAggregate {
    pub scenario: Scenario,
    pub kind: MetricKind,
    pub mean: f64,
    pub samples: usize,
    pub median: Option<f64>,
    pub p25: Option<f64>,
    pub p75: Option<f64>,
}

/// First level of the PSNR reduction: one row per input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsnrFileMean {
    pub scenario: Scenario,
    pub video: String,
    pub ue: u32,
    pub mean_psnr: f64,
    pub samples: usize,
}

/// Second level of the PSNR reduction: mean of the per-video means for one UE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsnrUeMean {
    pub scenario: Scenario,
    pub ue: u32,
    pub mean_psnr: f64,
    pub videos: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UeThroughput {
    pub ue: u32,
    pub mbps: f64,
}

/// Per-UE totals for one scenario, ordered by increasing UE index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UeThroughputTable {
    pub scenario: Scenario,
    pub entries: Vec<UeThroughput>,
}

/// Everything the renderer and the exporters need, computed fresh per run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp_utc: String,
    pub results_dir: PathBuf,
    pub scenarios: Vec<Scenario>,
    pub qos: Vec<QosAggregate>,
    pub psnr_files: Vec<PsnrFileMean>,
    pub psnr_by_ue: Vec<PsnrUeMean>,
    pub ue_throughput: Vec<UeThroughputTable>,
}

impl Report {
    /// Mean for a (scenario, metric) pair; 0.0 when the pair was never aggregated.
    pub fn qos_mean(&self, scenario: &Scenario, kind: MetricKind) -> f64 {
        self.qos
            .iter()
            .find(|a| &a.scenario == scenario && a.kind == kind)
            .map(|a| a.mean)
            .unwrap_or(0.0)
    }

    /// Scenarios that have at least one PSNR row, in order.
    pub fn psnr_scenarios(&self) -> Vec<Scenario> {
        let mut out: Vec<Scenario> = Vec::new();
        for row in &self.psnr_by_ue {
            if !out.contains(&row.scenario) {
                out.push(row.scenario.clone());
            }
        }
        out.sort();
        out
    }
}
