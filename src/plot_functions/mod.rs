// src/plot_functions/mod.rs

pub mod plot_activity_windows;
