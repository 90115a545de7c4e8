// src/plot_framework.rs

use log::info;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::ops::Range;
use std::path::Path;

use crate::constants::{DASH_SIZE_PX, DASH_SPACING_PX, PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::RenderError;
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MAIN_TITLE};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Y tick labels: k/M notation for large magnitudes, one decimal for small fractional values.
pub fn format_y_axis_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub line_style: LineStyle,
    /// Circle radius drawn at every point; 0 draws no markers.
    pub marker_size: u32,
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Draws a single chart from a PlotConfig.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), RenderError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_axis_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let style = s.color.stroke_width(s.stroke_width);
        match s.line_style {
            LineStyle::Solid => {
                chart.draw_series(LineSeries::new(s.data.iter().cloned(), style))?;
            }
            LineStyle::Dashed => {
                chart.draw_series(DashedLineSeries::new(
                    s.data.iter().cloned(),
                    DASH_SIZE_PX,
                    DASH_SPACING_PX,
                    style,
                ))?;
            }
        }
        if s.marker_size > 0 {
            let marker_style = s.color.filled();
            chart.draw_series(
                s.data
                    .iter()
                    .map(|&point| Circle::new(point, s.marker_size, marker_style)),
            )?;
        }
    }

    Ok(())
}

/// Creates a plot image with one row per `PlotConfig`, stacked top to bottom.
pub fn draw_stacked_plot(
    output_path: &Path,
    root_name: &str,
    panels: &[PlotConfig],
) -> Result<(), RenderError> {
    if panels.is_empty() {
        return Err(RenderError::Plot("no panels to draw".to_string()));
    }

    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panels.len(), 1));

    for (area, panel) in sub_plot_areas.iter().zip(panels) {
        draw_single_chart(area, panel)?;
    }

    root_area.present()?;
    info!("Stacked plot saved as '{}'.", output_path.display());
    Ok(())
}


// src/plot_framework.rs
