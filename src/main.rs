#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use hallofzero_core::StageConfig;
use tracing_subscriber::EnvFilter;

/// Stage configuration, set once from the command line
static STAGE_CONFIG: OnceLock<StageConfig> = OnceLock::new();

/// Get the stage configuration (loaded at startup or default)
pub fn get_stage_config() -> StageConfig {
    STAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// The Hall of Zero Limits - Out of the Box Systems
#[derive(Parser, Debug)]
#[command(name = "hallofzero-desktop")]
#[command(about = "The Hall of Zero Limits - an intro scene and a pinned horizontal gallery")]
struct Args {
    /// Stage timings file (JSON); defaults to <config dir>/hallofzero/stage.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Tracing filter, e.g. "hallofzero_core=debug" (falls back to RUST_LOG, then "info")
    #[arg(long)]
    log: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hallofzero").join("stage.json"))
}

fn load_config(path: &Path) -> anyhow::Result<StageConfig> {
    StageConfig::load(path).with_context(|| format!("loading stage config {}", path.display()))
}

fn main() {
    let args = Args::parse();

    let filter = args
        .log
        .as_deref()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // An explicit --config must load; the default location is optional
    let config = match args.config.as_deref() {
        Some(path) => load_config(path),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_config(&path),
            None => Ok(StageConfig::default()),
        },
    };
    let config = config.unwrap_or_else(|e| {
        tracing::error!("{:#}, using default timings", e);
        StageConfig::default()
    });
    let _ = STAGE_CONFIG.set(config);

    tracing::info!("Starting hall at {}x{}", args.width, args.height);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("The Hall of Zero Limits")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
