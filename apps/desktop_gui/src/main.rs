use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, normalize_api_url, ApiGateway, HttpApiGateway};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::FlashcardsApp;

#[derive(Parser, Debug)]
#[command(name = "flashcards-gui", about = "Desktop flashcard study app")]
struct Args {
    /// Overrides `api_url` from flashcards.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(api_url) = args.api_url.as_deref() {
        settings.api_url = normalize_api_url(api_url)?;
    }
    let http_gateway = HttpApiGateway::from_settings(&settings)?;
    tracing::info!(base_url = %http_gateway.base_url(), "starting flashcards gui");
    let gateway: Arc<dyn ApiGateway> = Arc::new(http_gateway);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(gateway, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashcards")
            .with_inner_size([640.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    let api_url = settings.api_url.clone();
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(move |_cc| Ok(Box::new(FlashcardsApp::new(cmd_tx, ui_rx, api_url)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run gui: {err}"))
}
