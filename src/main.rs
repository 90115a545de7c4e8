// src/main.rs

use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

use imu_window_render::constants::{DEFAULT_DATA_DIR, DEFAULT_INPUT_FILE, OUTPUT_SUFFIX};
use imu_window_render::data_input::log_parser::parse_sensor_log;
use imu_window_render::error::RenderError;
use imu_window_render::plot_functions::plot_activity_windows::plot_activity_windows;
use imu_window_render::window_config::ACTIVITY_WINDOWS;

/// Plot the hop, run and walk windows of an accelerometer/gyroscope CSV log.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sensor log CSV. Defaults to ../data/Andrew_walk_hop_walk_run_stripped.csv
    /// next to the executable.
    input: Option<PathBuf>,

    /// Output PNG. Defaults to <input stem>_activity_windows.png in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn default_input_path() -> Result<PathBuf, RenderError> {
    let exe = std::env::current_exe().map_err(|source| RenderError::InputUnavailable {
        path: PathBuf::from(DEFAULT_INPUT_FILE),
        source,
    })?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(exe_dir.join(DEFAULT_DATA_DIR).join(DEFAULT_INPUT_FILE))
}

fn run(args: Args) -> Result<(), RenderError> {
    let input_path = match args.input {
        Some(path) => path,
        None => default_input_path()?,
    };
    let root_name = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{root_name}{OUTPUT_SUFFIX}")));

    info!("Reading '{}'", input_path.display());
    let matrix = parse_sensor_log(&input_path)?;

    info!(
        "Rendering {} windows to '{}'",
        ACTIVITY_WINDOWS.len(),
        output_path.display()
    );
    plot_activity_windows(&matrix, &ACTIVITY_WINDOWS, &output_path, &root_name)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        debug!("{e:?}");
        std::process::exit(1);
    }
}
