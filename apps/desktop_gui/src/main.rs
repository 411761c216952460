mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{CalculatorApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the calculation service; overrides CALCULATOR_API_URL and calculator.toml.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_api_url_override(args.api_url.as_deref())
        .context("invalid --api-url")?;
    tracing::info!(api_base_url = %settings.api_base_url, "starting probability calculator");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.clone());

    let startup = StartupConfig::from_settings(&settings);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Probability Calculator")
            .with_inner_size([620.0, 560.0])
            .with_min_inner_size([420.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Probability Calculator",
        options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(CalculatorApp::bootstrap(cmd_tx, ui_rx, startup)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run calculator window: {err}"))
}
