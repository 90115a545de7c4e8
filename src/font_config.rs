// src/font_config.rs

// Font styles for plot text, as (family, size) tuples accepted by
// plotters' IntoFont trait.

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_MAIN_TITLE};

/// Rendered with the system font that plotters resolves for "sans-serif".
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
