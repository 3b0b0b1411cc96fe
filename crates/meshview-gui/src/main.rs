mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::Path;

use anyhow::Context;
use meshview_core::config::ViewerConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = startup_config();
    let title = app::window_title(&config.world.name, config.world.sno_id);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "MeshView",
        options,
        Box::new(|cc| Ok(Box::new(app::MeshViewApp::new(&cc.egui_ctx, config)))),
    )
}

/// Config named by the first argument, or the defaults.
fn startup_config() -> ViewerConfig {
    let Some(path) = std::env::args_os().nth(1) else {
        return ViewerConfig::default();
    };
    match read_config(Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e:#}; using defaults");
            ViewerConfig::default()
        }
    }
}

pub(crate) fn read_config(path: &Path) -> anyhow::Result<ViewerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid viewer config {}", path.display()))
}
