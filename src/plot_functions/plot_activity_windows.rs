// src/plot_functions/plot_activity_windows.rs

use log::debug;
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::path::Path;

use crate::constants::{
    COLOR_ZERO_REFERENCE, LINE_WIDTH_PLOT, LINE_WIDTH_REFERENCE, MARKER_SIZE_PX, SAMPLE_PERIOD_S,
    SAMPLE_RATE_HZ,
};
use crate::data_input::sample_matrix::SampleMatrix;
use crate::error::RenderError;
use crate::plot_framework::{calculate_range, draw_stacked_plot, LineStyle, PlotConfig, PlotSeries};
use crate::window_config::{SeriesRecipe, WindowSpec};

/// Seconds since the first record of a window: `t[i] = i / SAMPLE_RATE_HZ`.
pub fn time_axis(num_records: usize) -> Array1<f64> {
    Array1::from_shape_fn(num_records, |i| i as f64 / SAMPLE_RATE_HZ)
}

pub fn zero_reference(num_records: usize) -> Array1<f64> {
    Array1::zeros(num_records)
}

/// One recipe entry evaluated over a window.
#[derive(Debug, Clone)]
pub struct ChannelTrace {
    pub recipe: SeriesRecipe,
    pub values: Array1<f64>,
}

/// Everything drawn in a single panel, before it is handed to plotters.
#[derive(Debug, Clone)]
pub struct WindowPanel {
    pub spec: WindowSpec,
    pub time: Array1<f64>,
    pub zero: Array1<f64>,
    pub traces: Vec<ChannelTrace>,
}

impl WindowPanel {
    /// Padded y range covering the zero line and every trace.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .traces
            .iter()
            .fold((0.0_f64, 0.0_f64), |(min, max), trace| {
                (
                    min.min(*trace.values.min_skipnan()),
                    max.max(*trace.values.max_skipnan()),
                )
            });
        calculate_range(min, max)
    }

    pub fn to_plot_config(&self) -> PlotConfig {
        let t_last = self.time.last().copied().unwrap_or(0.0);
        // A single-record window still needs a non-empty x range.
        let x_max = if t_last > 0.0 { t_last } else { SAMPLE_PERIOD_S };
        let (y_min, y_max) = self.y_bounds();

        let mut series = Vec::with_capacity(self.traces.len() + 1);
        series.push(PlotSeries {
            data: pair_with_time(&self.time, &self.zero),
            color: *COLOR_ZERO_REFERENCE,
            stroke_width: LINE_WIDTH_REFERENCE,
            line_style: LineStyle::Solid,
            marker_size: 0,
        });
        for trace in &self.traces {
            series.push(PlotSeries {
                data: pair_with_time(&self.time, &trace.values),
                color: trace.recipe.color,
                stroke_width: LINE_WIDTH_PLOT,
                line_style: LineStyle::Dashed,
                marker_size: MARKER_SIZE_PX,
            });
        }

        PlotConfig {
            title: self.spec.title.to_string(),
            x_range: 0.0..x_max,
            y_range: y_min..y_max,
            series,
            x_label: String::new(),
            y_label: String::new(),
        }
    }
}

fn pair_with_time(time: &Array1<f64>, values: &Array1<f64>) -> Vec<(f64, f64)> {
    time.iter().copied().zip(values.iter().copied()).collect()
}

/// Evaluates one window against the loaded samples.
///
/// Windows are never truncated: a window reaching past the last record is
/// an error, as is one with `end <= start`.
pub fn build_window_panel(
    matrix: &SampleMatrix,
    spec: &WindowSpec,
) -> Result<WindowPanel, RenderError> {
    let num_records = spec.record_count().ok_or_else(|| RenderError::InvalidWindow {
        label: spec.label.to_string(),
        start: spec.start,
        end: spec.end,
    })?;

    let available = matrix.num_records();
    if spec.end > available {
        return Err(RenderError::WindowOutOfBounds {
            label: spec.label.to_string(),
            start: spec.start,
            end: spec.end,
            available,
        });
    }

    let traces = spec
        .recipe
        .iter()
        .map(|recipe| ChannelTrace {
            recipe: *recipe,
            values: matrix
                .window(recipe.channel, spec.start, spec.end)
                .mapv(|v| v * recipe.scale),
        })
        .collect();

    debug!(
        "Window '{}': records {}..{} ({} samples, {:.3} s)",
        spec.label,
        spec.start,
        spec.end,
        num_records,
        num_records as f64 * SAMPLE_PERIOD_S
    );

    Ok(WindowPanel {
        spec: *spec,
        time: time_axis(num_records),
        zero: zero_reference(num_records),
        traces,
    })
}

/// Builds every panel, failing on the first invalid window.
pub fn build_window_panels(
    matrix: &SampleMatrix,
    specs: &[WindowSpec],
) -> Result<Vec<WindowPanel>, RenderError> {
    specs
        .iter()
        .map(|spec| build_window_panel(matrix, spec))
        .collect()
}

/// Generates the stacked activity-window plot (zero line black, ax red, ay blue, 4.5*gz green).
pub fn plot_activity_windows(
    matrix: &SampleMatrix,
    specs: &[WindowSpec],
    output_path: &Path,
    root_name: &str,
) -> Result<(), RenderError> {
    let panels = build_window_panels(matrix, specs)?;
    let configs: Vec<PlotConfig> = panels.iter().map(WindowPanel::to_plot_config).collect();
    draw_stacked_plot(output_path, root_name, &configs)
}


// src/plot_functions/plot_activity_windows.rs
