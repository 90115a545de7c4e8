// src/window_config.rs

use plotters::style::RGBColor;

use crate::channel_names::{CHANNEL_AX, CHANNEL_AY, CHANNEL_GZ};
use crate::constants::{COLOR_AX, COLOR_AY, COLOR_GZ, GZ_SCALE};

/// One channel drawn in a window panel: `scale * channel`, in `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRecipe {
    pub channel: usize,
    pub scale: f64,
    pub color: RGBColor,
}

/// A labelled record range `start..end` and the series drawn over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub label: &'static str,
    pub title: &'static str,
    pub start: usize,
    pub end: usize,
    pub recipe: &'static [SeriesRecipe],
}

impl WindowSpec {
    /// Record count, or `None` when `end <= start`.
    pub fn record_count(&self) -> Option<usize> {
        self.end.checked_sub(self.start).filter(|&len| len > 0)
    }
}

pub const ACTIVITY_RECIPE: [SeriesRecipe; 3] = [
    SeriesRecipe {
        channel: CHANNEL_AX,
        scale: 1.0,
        color: *COLOR_AX,
    },
    SeriesRecipe {
        channel: CHANNEL_AY,
        scale: 1.0,
        color: *COLOR_AY,
    },
    SeriesRecipe {
        channel: CHANNEL_GZ,
        scale: GZ_SCALE,
        color: *COLOR_GZ,
    },
];

/// Panels in top-to-bottom order.
pub const ACTIVITY_WINDOWS: [WindowSpec; 3] = [
    WindowSpec {
        label: "hop",
        title: "ax, ay, gz, hop",
        start: 1000,
        end: 1300,
        recipe: &ACTIVITY_RECIPE,
    },
    WindowSpec {
        label: "run",
        title: "ax, ay, gz, run",
        start: 1800,
        end: 2100,
        recipe: &ACTIVITY_RECIPE,
    },
    WindowSpec {
        label: "walk",
        title: "ax, ay, gz, walk",
        start: 1400,
        end: 1700,
        recipe: &ACTIVITY_RECIPE,
    },
];


// src/window_config.rs
