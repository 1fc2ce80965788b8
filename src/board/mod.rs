//! Board representation for the 15x15 game

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// The two sides. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    /// Side to move after `moves_played` marks: X on even counts, O on odd
    #[inline]
    pub fn for_move_number(moves_played: usize) -> Player {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The owning player, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Position on the board
///
/// Always inside the board: the only ways to build one are the checked
/// constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `BOARD_SIZE`.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "({row}, {col}) is outside the board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// # Panics
    ///
    /// Panics if `idx` is not below `TOTAL_CELLS`.
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "cell index {idx} is outside the board");
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `k` cells along `(dr, dc)`, or None when that leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> Option<Pos> {
        let r = self.row as i32 + dr * k;
        let c = self.col as i32 + dc * k;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
