//! Command-line interface for the gomoku launcher.

use std::str::FromStr;

use clap::Parser;
use derive_more::{Display, Error};
use tracing::instrument;

use crate::game::{move_label, GameState};

/// Fifteen-by-fifteen five-in-a-row with a jumpable move history
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Comma-separated cell indices (row * 15 + col) to play before starting
    #[arg(long)]
    pub moves: Option<MoveList>,

    /// History entry to show after replaying --moves
    #[arg(long)]
    pub jump: Option<usize>,

    /// Print the position instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Initial window width
    #[arg(long, default_value_t = 900.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 700.0)]
    pub height: f32,
}

impl Cli {
    /// Game state described by --moves and --jump.
    ///
    /// Moves go through the regular no-op rules, so an illegal entry is
    /// simply skipped.
    #[instrument(skip(self))]
    pub fn initial_state(&self) -> GameState {
        let mut state = GameState::new();
        if let Some(moves) = &self.moves {
            for &index in &moves.0 {
                state.apply_move(index);
            }
        }
        if let Some(target) = self.jump {
            state.jump_to(target);
        }
        state
    }
}

/// Cell indices given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveList(pub Vec<usize>);

/// Error parsing a move list
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {token:?}: expected a cell index")]
pub struct CliError {
    pub token: String,
}

impl FromStr for MoveList {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<usize>().map_err(|_| CliError {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(MoveList)
    }
}

/// Plain-text rendering of a state: board, status line, move list
pub fn render_text(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&state.current_snapshot().to_string());
    out.push('\n');
    out.push_str(&state.status_line());
    out.push('\n');
    for n in 0..state.history_length() {
        let marker = if n == state.pointer() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", n + 1, move_label(n)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_parse_move_list() {
        let moves: MoveList = "0, 15,1 ,16".parse().unwrap();
        assert_eq!(moves, MoveList(vec![0, 15, 1, 16]));
    }

    #[test]
    fn test_parse_empty_move_list() {
        let moves: MoveList = "".parse().unwrap();
        assert_eq!(moves, MoveList::default());
        let moves: MoveList = "3,,4,".parse().unwrap();
        assert_eq!(moves, MoveList(vec![3, 4]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "1,two,3".parse::<MoveList>().unwrap_err();
        assert_eq!(err.token, "two");
        assert!("-1".parse::<MoveList>().is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["gomoku", "--moves", "0,15,1,16,2,17,3,18,4", "--headless"]).unwrap();
        assert!(cli.headless);
        assert_eq!(cli.width, 900.0);

        let state = cli.initial_state();
        assert_eq!(state.current_winner(), Outcome::WonBy(Player::X));
        assert_eq!(state.history_length(), 10);
    }

    #[test]
    fn test_cli_jump_and_skipped_moves() {
        // Second "0" is occupied and skipped
        let cli = Cli::try_parse_from(["gomoku", "--moves", "0,0,1,2", "--jump", "1"]).unwrap();
        let state = cli.initial_state();
        assert_eq!(state.history_length(), 4);
        assert_eq!(state.pointer(), 1);
        assert_eq!(state.current_player_to_move(), Player::O);
    }

    #[test]
    fn test_cli_rejects_bad_moves() {
        assert!(Cli::try_parse_from(["gomoku", "--moves", "a,b"]).is_err());
    }

    #[test]
    fn test_render_text() {
        let mut state = GameState::new();
        state.apply_move(0);
        let text = render_text(&state);
        assert!(text.starts_with("X . ."));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("  1. Go to game start"));
        assert!(text.contains("> 2. Go to move #1"));
    }
}
