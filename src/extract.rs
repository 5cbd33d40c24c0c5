//! Sample extraction from the simulator's text outputs.
//!
//! Every function here degrades to "no samples" instead of failing: a missing
//! file, an empty file and a file full of unparseable lines all look the same
//! to the aggregator.

use crate::model::{Extraction, MetricKind};
use log::{debug, warn};
use regex::Regex;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

/// `: <number>` on a line. Accepts signed integers, decimals and scientific
/// notation.
fn labeled_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r":\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)").expect("static regex")
    })
}

/// Same as [`labeled_value_re`] but the colon must be followed by whitespace,
/// which tells a `label: value` separator apart from an `addr:port` pair.
fn spaced_labeled_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r":\s+([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)").expect("static regex")
    })
}

/// `<number> Mbps`, whitespace between the two optional.
fn mbps_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*Mbps").expect("static regex")
    })
}

/// Read an input file, treating absence as "nothing to read".
///
/// Files that exist but cannot be read are logged and skipped as well; only
/// output-side failures are allowed to end a run.
pub(crate) fn read_input(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("input not present: {}", path.display());
            None
        }
        Err(e) => {
            warn!("skipping unreadable input {}: {e}", path.display());
            None
        }
    }
}

/// A finite number. `nan`, `-nan` and `inf` are what the simulator prints
/// for undefined values and count as missing.
fn parse_finite(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Values of `column` from whitespace-delimited numeric rows.
///
/// Every token up to and including `column` must be a finite number; anything
/// after it (a unit, a comment) is ignored. Header-like or free-text lines are
/// skipped.
pub(crate) fn tabular_column(text: &str, column: usize) -> Vec<f64> {
    text.lines()
        .filter_map(|line| {
            let lead: Option<Vec<f64>> = line
                .split_whitespace()
                .take(column + 1)
                .map(parse_finite)
                .collect();
            lead?.get(column).copied()
        })
        .collect()
}

/// Values from `label: <number> <unit>` lines, in line order.
///
/// Delay lines carry `src:port -> dst:port` before the separator, so a
/// `": "` match wins over a bare `":"` one. Lines mixing a bare-colon value
/// with a later `": "` (`Flow 1:0.5 s (note: 3)`) are not a supported shape.
pub(crate) fn labeled_values(text: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|line| {
            let caps = spaced_labeled_value_re()
                .captures(line)
                .or_else(|| labeled_value_re().captures(line))?;
            caps[1].parse::<f64>().ok()
        })
        .collect()
}

/// The `<number> Mbps` value of a single summary line.
pub(crate) fn summary_mbps(line: &str) -> Option<f64> {
    let caps = mbps_value_re().captures(line)?;
    caps[1].parse::<f64>().ok()
}

/// Apply one extraction strategy to already-read file contents.
pub(crate) fn extract_samples(text: &str, extraction: Extraction) -> Vec<f64> {
    match extraction {
        Extraction::Tabular { column } => tabular_column(text, column),
        Extraction::LabeledLine => labeled_values(text),
        Extraction::SummaryLine => text
            .lines()
            .next()
            .and_then(summary_mbps)
            .into_iter()
            .collect(),
    }
}

/// Samples for one QoS metric file.
///
/// The simulator writes its throughput file as `Flow N (src -> dst): X Mbps`
/// lines rather than a numeric table; when the table read yields nothing the
/// labeled-line reading is used instead.
pub(crate) fn qos_samples(kind: MetricKind, text: &str) -> Vec<f64> {
    let values = extract_samples(text, kind.extraction());
    if values.is_empty() && kind == MetricKind::Throughput {
        return labeled_values(text);
    }
    values
}

/// PSNR samples: first column of a headerless numeric file.
pub(crate) fn psnr_samples(text: &str) -> Vec<f64> {
    extract_samples(text, Extraction::Tabular { column: 0 })
}

/// Per-UE total throughput from the first line of a `drops_largura` file.
pub(crate) fn read_ue_throughput(path: &Path) -> Option<f64> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("skipping unreadable input {}: {e}", path.display());
            return None;
        }
    };
    let mut first = String::new();
    if let Err(e) = BufReader::new(file).read_line(&mut first) {
        warn!("skipping unreadable input {}: {e}", path.display());
        return None;
    }
    extract_samples(first.trim(), Extraction::SummaryLine).into_iter().next()
}
