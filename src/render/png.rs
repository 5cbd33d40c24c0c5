use super::{BarChart, ChartRenderer};
use anyhow::{Context, Result};
use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const CHART_SIZE: (u32, u32) = (1600, 1000);
const FONT: &str = "sans-serif";
const TITLE_SIZE: f64 = 40.0;
const AXIS_DESC_SIZE: f64 = 28.0;
const LABEL_SIZE: f64 = 24.0;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Draws bar charts as PNG files through plotters' bitmap backend.
#[derive(Debug, Default)]
pub(crate) struct PngRenderer;

impl ChartRenderer for PngRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        if let Some(parent) = chart.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        draw_bar_chart(chart).with_context(|| format!("draw chart {}", chart.path.display()))?;
        info!("saved {}", chart.path.display());
        Ok(())
    }
}

/// Value range with headroom for the labels printed above the bars.
fn y_range(chart: &BarChart) -> (f64, f64) {
    let max = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let min = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::min);
    let top = if max > 0.0 { max * 1.15 } else { 1.0 };
    let bottom = if min < 0.0 { min * 1.15 } else { 0.0 };
    (bottom, top)
}

fn draw_bar_chart(chart: &BarChart) -> Result<()> {
    let root = BitMapBackend::new(&chart.path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Segmented coords over 0..=last put one category centred on each bar.
    let last = chart.bars.len().saturating_sub(1) as u32;
    let (y_min, y_max) = y_range(chart);
    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, TITLE_SIZE))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(120)
        .build_cartesian_2d((0u32..last).into_segmented(), y_min..y_max)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style((FONT, AXIS_DESC_SIZE))
        .label_style((FONT, LABEL_SIZE))
        .x_labels(labels.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(BAR_COLOR.filled())
            .margin(30)
            .data(chart.bars.iter().enumerate().map(|(i, b)| (i as u32, b.value))),
    )?;

    let value_style = TextStyle::from((FONT, LABEL_SIZE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, b)| {
        Text::new(
            format!("{:.*}", chart.precision, b.value),
            (SegmentValue::CenterOf(i as u32), b.value),
            value_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}
