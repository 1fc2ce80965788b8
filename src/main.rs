//! Gomoku GUI
//!
//! A graphical interface for two players sharing one screen, with a clickable
//! move history.

use clap::Parser;
use gomoku::cli::{render_text, Cli};
use gomoku::ui::GomokuApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let state = cli.initial_state();
    info!(moves = state.history_length() - 1, pointer = state.pointer(), "Starting game");

    if cli.headless {
        print!("{}", render_text(&state));
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
}
