//! Win condition checking
//!
//! A side wins with five or more of its marks in a contiguous line along a
//! row, a column or either diagonal. The scan covers the whole board, so it
//! works on any snapshot without knowing which move came last.

use tracing::instrument;

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (row delta, col delta)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical (down the rows)
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Result of evaluating a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    None,
    WonBy(Player),
}

impl Outcome {
    /// The winner, if any
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            Outcome::None => None,
        }
    }

    #[inline]
    pub fn is_won(self) -> bool {
        matches!(self, Outcome::WonBy(_))
    }
}

/// A detected five (or longer) line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    /// Run positions, from the negative end to the positive end
    pub positions: Vec<Pos>,
}

/// Count contiguous `player` marks from `pos` along `dir`, not counting
/// `pos` itself. Stops after `limit` steps.
#[inline]
fn probe(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player, limit: usize) -> usize {
    let mut count = 0;
    for k in 1..=limit as i32 {
        match pos.offset(dr, dc, k) {
            Some(next) if board.get(next) == Cell::Occupied(player) => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the same-player run through `pos` along `dir`.
///
/// Zero for an empty cell. Each side is probed at most `WIN_LENGTH - 1`
/// cells, so the result never exceeds `2 * WIN_LENGTH - 1`.
pub fn run_length(board: &Board, pos: Pos, dir: (i32, i32)) -> usize {
    let Some(player) = board.get(pos).player() else {
        return 0;
    };
    let (dr, dc) = dir;
    let cap = WIN_LENGTH - 1;
    1 + probe(board, pos, (dr, dc), player, cap) + probe(board, pos, (-dr, -dc), player, cap)
}

/// Check for a winner
///
/// Scans occupied cells in row-major order and, for each, the four
/// directions in [`DIRECTIONS`] order. The first run of `WIN_LENGTH` or more
/// decides the result, so the answer is deterministic even on boards where
/// both sides hold a five.
#[instrument(level = "trace", skip_all)]
pub fn evaluate_winner(board: &Board) -> Outcome {
    for (pos, player) in board.marks() {
        for dir in DIRECTIONS {
            if run_length(board, pos, dir) >= WIN_LENGTH {
                return Outcome::WonBy(player);
            }
        }
    }
    Outcome::None
}

/// Check whether the cell at a flat index holds a mark.
///
/// Indices past the end of the board are reported as unoccupied.
#[inline]
pub fn is_occupied(board: &Board, index: usize) -> bool {
    board.cell(index).is_some_and(|cell| !cell.is_empty())
}

/// Find the positions of the first winning line in scan order
///
/// Uses the same visiting order as [`evaluate_winner`], so the player of the
/// returned line always matches its outcome. The positions cover the whole
/// run, overlines included.
pub fn find_five_positions(board: &Board) -> Option<WinningLine> {
    for (pos, player) in board.marks() {
        for (dr, dc) in DIRECTIONS {
            if run_length(board, pos, (dr, dc)) < WIN_LENGTH {
                continue;
            }

            let back = probe(board, pos, (-dr, -dc), player, BOARD_SIZE) as i32;
            let forward = probe(board, pos, (dr, dc), player, BOARD_SIZE) as i32;
            let positions = (-back..=forward)
                .filter_map(|k| pos.offset(dr, dc, k))
                .collect();

            return Some(WinningLine { player, positions });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(player: Player, cells: impl IntoIterator<Item = (u8, u8)>) -> Board {
        Board::from_marks(cells.into_iter().map(|(r, c)| (Pos::new(r, c), player)))
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = line(Player::X, (0..5).map(|i| (7, i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = line(Player::O, (0..5).map(|i| (i, 9)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::O));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = line(Player::O, (0..5).map(|i| (i, i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::O));
    }

    #[test]
    fn test_diagonal_sw_five() {
        // Diagonal from (4, 8) to (8, 4)
        let board = line(Player::X, (0..5).map(|i| (4 + i, 8 - i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = line(Player::X, (0..6).map(|i| (9, i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = line(Player::X, (0..4).map(|i| (9, i)));
        assert_eq!(evaluate_winner(&board), Outcome::None);
    }

    #[test]
    fn test_broken_line_not_win() {
        // X X X X . X
        let board = line(Player::X, [(3, 0), (3, 1), (3, 2), (3, 3), (3, 5)]);
        assert_eq!(evaluate_winner(&board), Outcome::None);
    }

    #[test]
    fn test_mixed_line_not_win() {
        let mut board = line(Player::X, (0..4).map(|i| (3, i)));
        board = board.with_mark(Pos::new(3, 4), Player::O);
        assert_eq!(evaluate_winner(&board), Outcome::None);
    }

    #[test]
    fn test_five_at_board_edge() {
        let board = line(Player::X, (10..15).map(|i| (14, i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_five_at_corner() {
        // Diagonal from (10, 10) to (14, 14)
        let board = line(Player::O, (0..5).map(|i| (10 + i, 10 + i)));
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::O));
    }

    #[test]
    fn test_line_does_not_wrap_rows() {
        // (0,12) (0,13) (0,14) (1,0) (1,1) are consecutive indices but not a line
        let board = line(Player::X, [(0, 12), (0, 13), (0, 14), (1, 0), (1, 1)]);
        assert_eq!(evaluate_winner(&board), Outcome::None);
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(evaluate_winner(&Board::new()), Outcome::None);
        assert!(find_five_positions(&Board::new()).is_none());
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // O owns row 2, X owns row 5: O's line is met first in row-major order
        let mut marks: Vec<_> = (0..5).map(|i| (Pos::new(2, i), Player::O)).collect();
        marks.extend((0..5).map(|i| (Pos::new(5, i), Player::X)));
        let board = Board::from_marks(marks);
        assert_eq!(evaluate_winner(&board), Outcome::WonBy(Player::O));
        assert_eq!(find_five_positions(&board).unwrap().player, Player::O);
    }

    #[test]
    fn test_is_occupied() {
        let board = line(Player::X, [(0, 1)]);
        assert!(is_occupied(&board, 1));
        assert!(!is_occupied(&board, 0));
        assert!(!is_occupied(&board, 225));
    }

    #[test]
    fn test_run_length() {
        let board = line(Player::X, (2..9).map(|i| (4, i)));
        assert_eq!(run_length(&board, Pos::new(4, 5), (0, 1)), 7);
        assert_eq!(run_length(&board, Pos::new(4, 5), (1, 0)), 1);
        assert_eq!(run_length(&board, Pos::new(0, 0), (0, 1)), 0);
    }

    #[test]
    fn test_find_five_positions() {
        let board = line(Player::X, (0..5).map(|i| (4 + i, 8 - i)));
        let found = find_five_positions(&board).unwrap();
        assert_eq!(found.player, Player::X);
        // First visited mark is (4, 8); the SW diagonal extends to (8, 4)
        let expected: Vec<_> = (0..5).map(|i| Pos::new(4 + i, 8 - i)).collect();
        assert_eq!(found.positions, expected);
    }

    #[test]
    fn test_find_five_positions_overline() {
        // Seven in a row seen from its left end: every cell is returned
        let board = line(Player::X, (3..10).map(|i| (6, i)));
        let found = find_five_positions(&board).unwrap();
        let expected: Vec<_> = (3..10).map(|i| Pos::new(6, i)).collect();
        assert_eq!(found.positions, expected);
    }

    #[test]
    fn test_find_five_positions_full_row() {
        let board = line(Player::O, (0..15).map(|i| (0, i)));
        let found = find_five_positions(&board).unwrap();
        assert_eq!(found.positions.len(), 15);
        assert_eq!(found.positions.first(), Some(&Pos::new(0, 0)));
        assert_eq!(found.positions.last(), Some(&Pos::new(0, 14)));
    }

    #[test]
    fn test_find_five_matches_outcome() {
        let board = line(Player::O, (0..5).map(|i| (i, 3)));
        let found = find_five_positions(&board).unwrap();
        assert_eq!(evaluate_winner(&board).winner(), Some(found.player));
        assert_eq!(found.positions.len(), 5);
        assert!(found.positions.iter().all(|&p| board.get(p) == Cell::Occupied(Player::O)));
    }
}
