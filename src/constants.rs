// src/constants.rs

use plotters::style::colors::{BLACK, BLUE, GREEN, RED};
use plotters::style::RGBColor;

// Sensor sampling rate.
pub const SAMPLE_RATE_HZ: f64 = 104.0;
pub const SAMPLE_PERIOD_S: f64 = 1.0 / SAMPLE_RATE_HZ;

// Gyro Z is scaled so it shares a y range with the accelerometer traces.
pub const GZ_SCALE: f64 = 4.5;

// --- Input Layout ---
pub const HEADER_LINES: usize = 2;
pub const FIRST_CHANNEL_COLUMN: usize = 4;
pub const CHANNEL_COUNT: usize = 6;
pub const MIN_COLUMNS: usize = FIRST_CHANNEL_COLUMN + CHANNEL_COUNT;

// Default input, relative to the directory holding the executable.
pub const DEFAULT_DATA_DIR: &str = "../data";
pub const DEFAULT_INPUT_FILE: &str = "Andrew_walk_hop_walk_run_stripped.csv";

pub const OUTPUT_SUFFIX: &str = "_activity_windows.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;

// --- Plot Color Assignments ---
pub const COLOR_ZERO_REFERENCE: &RGBColor = &BLACK;
pub const COLOR_AX: &RGBColor = &RED;
pub const COLOR_AY: &RGBColor = &BLUE;
pub const COLOR_GZ: &RGBColor = &GREEN;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_REFERENCE: u32 = 1;

// Dashed series: dash length and gap in pixels.
pub const DASH_SIZE_PX: u32 = 6;
pub const DASH_SPACING_PX: u32 = 4;

// Circle marker radius in pixels.
pub const MARKER_SIZE_PX: u32 = 2;

// src/constants.rs
