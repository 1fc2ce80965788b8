//! Five-in-a-row on a 15x15 board, with time travel
//!
//! Two players alternately place marks; the first to line up five in a row,
//! column or diagonal wins. Every move is kept as an immutable board
//! snapshot, and play can jump back to any earlier snapshot and continue
//! from there, discarding the moves that followed it.
//!
//! # Architecture
//!
//! - [`board`]: cells, positions and the immutable [`Board`] snapshot
//! - [`rules`]: stateless occupancy and win checks
//! - [`game`]: the history of snapshots and the pointer into it
//! - [`ui`]: egui front end
//! - [`cli`]: launcher flags
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_move, current_winner, jump_to, new_game, Outcome, Player};
//!
//! let mut state = new_game();
//! // X fills row 0, O plays row 1
//! for index in [0, 15, 1, 16, 2, 17, 3, 18, 4] {
//!     state = apply_move(&state, index);
//! }
//! assert_eq!(current_winner(&state), Outcome::WonBy(Player::X));
//!
//! // Back to before X's last move
//! let earlier = jump_to(&state, 8);
//! assert_eq!(current_winner(&earlier), Outcome::None);
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
pub use game::{
    apply_move, current_player_to_move, current_snapshot, current_winner, history_length, jump_to,
    move_label, new_game, GameState, JumpError, MoveError,
};
pub use rules::{evaluate_winner, is_occupied, Outcome};
