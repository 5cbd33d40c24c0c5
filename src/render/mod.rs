//! Presentation of an aggregated report.
//!
//! `charts` turns a report into chart descriptions, `png` draws them with
//! plotters and `export` writes the report itself as JSON or CSV. The pipeline
//! only ever talks to a [`ChartRenderer`].

pub(crate) mod charts;
pub(crate) mod export;
mod png;

use anyhow::Result;
use std::path::PathBuf;

pub(crate) use png::PngRenderer;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bar {
    pub label: String,
    pub value: f64,
}

/// One labeled bar chart and where it goes on disk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    /// Decimals of the value printed above each bar.
    pub precision: usize,
    pub path: PathBuf,
}

pub(crate) trait ChartRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<()>;
}

/// Keeps every chart it is given instead of drawing it.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub charts: Vec<BarChart>,
}

#[cfg(test)]
impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
