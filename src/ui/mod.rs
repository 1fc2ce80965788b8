//! GUI module
//!
//! This module provides a native Rust GUI using egui/eframe. It renders a
//! [`GameState`](crate::GameState) and turns clicks into core operations.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
