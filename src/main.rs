mod auth;
mod chat;
mod common;
mod config;
mod ui;

use auth::{AuthWorker, FixedDelay};
use chat::Tier;
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "chatflow_demo",
    version,
    about = "ChatFlow product demo with mock chat pages"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Chat page to open first; overrides `default_tier` from the config
    #[arg(long, value_enum)]
    tier: Option<Tier>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Logger, filtered by RUST_LOG
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let start = cli.tier.unwrap_or(app_config.default_tier);

    // 1. Channels between UI and the auth worker
    // UI -> auth worker
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    // auth worker -> UI
    let (event_tx, event_rx) = mpsc::channel(16);

    // 2. Auth worker runs in the background
    let timings = app_config.timings();
    tokio::spawn(AuthWorker::new(event_tx, cmd_rx, FixedDelay, timings).run());

    // 3. UI on the main thread
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "ChatFlow",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started on the {} page", start.title());

            Ok(Box::new(ChatApp::new(
                cc,
                app_config.clone(),
                cli.config.clone(),
                start,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
