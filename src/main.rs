use anyhow::{anyhow, Context, Result};
use log::info;

use compintel::ui::{AppContext, CompIntelApp};
use compintel::{AppConfig, Backend};

fn main() -> Result<()> {
    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting CompIntel dashboard...");

    let config = AppConfig::from_env().context("invalid configuration")?;

    // HTTP requests run here; the window owns the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let _guard = runtime.enter();

    let backend = Backend::connect(&config.backend);
    let context = AppContext::new(config, backend, runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CompIntel")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CompIntel",
        options,
        Box::new(move |cc| Box::new(CompIntelApp::new(cc, context))),
    )
    .map_err(|e| anyhow!("failed to run the window: {e}"))?;

    info!("CompIntel closed");
    Ok(())
}
