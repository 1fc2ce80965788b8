//! Game history management
//!
//! [`GameState`] keeps every snapshot produced so far plus a pointer to the
//! one currently shown. Moves extend history from the pointer, cutting off
//! any snapshots past it; jumps only move the pointer. Whose turn it is and
//! whether someone has won are recomputed from the pointed-at snapshot on
//! every query.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::{evaluate_winner, find_five_positions, is_occupied, Outcome, WinningLine};

/// Reason a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index is not a board cell.
    #[display("Cell index {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] usize),

    /// The shown snapshot already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(#[error(not(source))] Player),

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Pos),
}

/// Reason a jump was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    #[display("Cannot jump to {target}: history has {len} entries")]
    OutOfRange { target: usize, len: usize },
}

/// History of snapshots and the index of the one in play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Arc<Board>>,
    pointer: usize,
}

impl GameState {
    /// Fresh game: one empty snapshot, pointer at it
    pub fn new() -> Self {
        Self {
            history: vec![Arc::new(Board::new())],
            pointer: 0,
        }
    }

    /// Snapshot at the pointer
    #[inline]
    pub fn current_snapshot(&self) -> &Arc<Board> {
        &self.history[self.pointer]
    }

    /// X on even pointers, O on odd ones
    #[inline]
    pub fn current_player_to_move(&self) -> Player {
        Player::for_move_number(self.pointer)
    }

    #[inline]
    pub fn current_winner(&self) -> Outcome {
        evaluate_winner(self.current_snapshot())
    }

    /// Winning line on the shown snapshot, for highlighting
    pub fn winning_line(&self) -> Option<WinningLine> {
        find_five_positions(self.current_snapshot())
    }

    #[inline]
    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Every recorded snapshot, oldest first
    #[inline]
    pub fn history(&self) -> &[Arc<Board>] {
        &self.history
    }

    /// The mark that produced the shown snapshot. None at game start.
    pub fn last_move(&self) -> Option<(Pos, Player)> {
        let prev = self.pointer.checked_sub(1)?;
        self.history[prev].added_mark(&self.history[self.pointer])
    }

    /// "Winner: X" once the shown snapshot is won, else "Next player: O"
    pub fn status_line(&self) -> String {
        match self.current_winner() {
            Outcome::WonBy(player) => format!("Winner: {player}"),
            Outcome::None => format!("Next player: {}", self.current_player_to_move()),
        }
    }

    /// Place the side-to-move's mark at `index`.
    ///
    /// Any snapshots past the pointer are discarded before the new one is
    /// appended. Returns the player who moved.
    #[instrument(skip(self), fields(pointer = self.pointer, len = self.history.len()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Player, MoveError> {
        if index >= TOTAL_CELLS {
            return Err(MoveError::OutOfBounds(index));
        }

        let current = self.current_snapshot();
        if let Outcome::WonBy(winner) = evaluate_winner(current) {
            return Err(MoveError::GameOver(winner));
        }
        if is_occupied(current, index) {
            return Err(MoveError::Occupied(Pos::from_index(index)));
        }

        let player = self.current_player_to_move();
        let next = current.with_mark(Pos::from_index(index), player);

        self.history.truncate(self.pointer + 1);
        self.history.push(Arc::new(next));
        self.pointer = self.history.len() - 1;

        debug!(%player, index, pointer = self.pointer, "Move applied");
        Ok(player)
    }

    /// Like [`try_apply_move`](Self::try_apply_move) but an illegal move
    /// just leaves the state as it was.
    pub fn apply_move(&mut self, index: usize) {
        if let Err(err) = self.try_apply_move(index) {
            debug!(index, %err, "Move ignored");
        }
    }

    /// Show the snapshot at `target`; history itself is unchanged
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.history.len() {
            return Err(JumpError::OutOfRange {
                target,
                len: self.history.len(),
            });
        }
        self.pointer = target;
        debug!(pointer = self.pointer, "Jumped");
        Ok(())
    }

    /// Jump, ignoring targets outside history
    pub fn jump_to(&mut self, target: usize) {
        if let Err(err) = self.try_jump_to(target) {
            warn!(%err, "Jump ignored");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the history button at position `n`
pub fn move_label(n: usize) -> String {
    if n == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{n}")
    }
}

/// Start a new game
pub fn new_game() -> GameState {
    GameState::new()
}

/// State after playing at `index`; `state` itself is left alone.
/// Returns an equal state when the move is illegal.
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    let mut next = state.clone();
    next.apply_move(index);
    next
}

/// State with the pointer moved to `target`; `state` itself is left alone
pub fn jump_to(state: &GameState, target: usize) -> GameState {
    let mut next = state.clone();
    next.jump_to(target);
    next
}

pub fn current_snapshot(state: &GameState) -> Arc<Board> {
    Arc::clone(state.current_snapshot())
}

pub fn current_player_to_move(state: &GameState) -> Player {
    state.current_player_to_move()
}

pub fn current_winner(state: &GameState) -> Outcome {
    state.current_winner()
}

pub fn history_length(state: &GameState) -> usize {
    state.history_length()
}
