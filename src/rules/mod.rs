//! Game rules
//!
//! Stateless checks over a single board snapshot: cell occupancy and the
//! five-in-a-row win condition.

pub mod win;

// Re-exports for convenient access
pub use win::{
    evaluate_winner, find_five_positions, is_occupied, run_length, Outcome, WinningLine,
    DIRECTIONS,
};
