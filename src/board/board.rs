//! Immutable board snapshot

use std::fmt;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// One complete board state, cells in row-major order.
///
/// A `Board` is never changed once built: placing a mark goes through
/// [`Board::with_mark`], which returns a fresh snapshot and leaves `self`
/// untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from marks, later entries overwriting earlier ones.
    /// Handy for setting up positions in tests.
    pub fn from_marks<I>(marks: I) -> Self
    where
        I: IntoIterator<Item = (Pos, Player)>,
    {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (pos, player) in marks {
            cells[pos.to_index()] = Cell::Occupied(player);
        }
        Self { cells }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Get cell by flat index; None outside the board
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with `pos` set to `player`
    #[must_use]
    pub fn with_mark(&self, pos: Pos, player: Player) -> Board {
        let mut next = self.clone();
        next.cells[pos.to_index()] = Cell::Occupied(player);
        next
    }

    /// Occupied cells in row-major order
    pub fn marks(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.player().map(|p| (Pos::from_index(idx), p)))
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// The single cell where `next` gained a mark relative to `self`.
    ///
    /// Returns None unless exactly one cell went from empty to occupied and
    /// nothing else changed.
    pub fn added_mark(&self, next: &Board) -> Option<(Pos, Player)> {
        let mut found = None;
        for (idx, (before, after)) in self.cells.iter().zip(next.cells.iter()).enumerate() {
            if before == after {
                continue;
            }
            match (before, after, found) {
                (Cell::Empty, Cell::Occupied(p), None) => found = Some((Pos::from_index(idx), *p)),
                _ => return None,
            }
        }
        found
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text grid, `.` for empty cells, one row per line
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("marks", &self.mark_count())
            .finish()
    }
}
