//! Core board representation for the 7x7 contamination game.
//!
//! `Board` is a plain value type: a 7x7 grid of three-state cells with no
//! behavior beyond access, counting, and equality. Search never mutates a
//! board in place; every transition produces an independent copy.

/// Board edge length. The game is always played on a 7x7 grid.
pub const BOARD_SIZE: usize = 7;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Side to move.
///
/// Green is the fixed maximizing side inside the search; Blue the minimizing
/// side. The roles never depend on whose turn it is at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Green => 1,
        }
    }
}

/// Contents of a single cell.
///
/// Exactly one of the three states holds at any time; the tagged enum
/// makes the empty state explicit and equality a single tag comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Blue,
    Green,
}

impl Cell {
    /// The occupying color, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Blue => Some(Color::Blue),
            Cell::Green => Some(Color::Green),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Blue => Cell::Blue,
            Color::Green => Cell::Green,
        }
    }
}

/// The 7x7 game board.
///
/// Cells are addressed by `(x, y)` with `x` the column and `y` the row; the
/// dense cell index used by the move codec is `y * 7 + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An entirely empty board.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard opening setup: each player starts with a piece in two
    /// opposing corners. Blue moves first.
    pub fn start_position() -> Self {
        let mut board = Self::empty();
        board.set(0, 0, Cell::Blue);
        board.set(6, 6, Cell::Blue);
        board.set(6, 0, Cell::Green);
        board.set(0, 6, Cell::Green);
        board
    }

    #[inline]
    pub const fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// True when `(x, y)` lies on the board. Accepts signed coordinates so
    /// callers can probe raw offsets without pre-clamping.
    #[inline]
    pub const fn in_bounds(x: i32, y: i32) -> bool {
        0 <= x && x < BOARD_SIZE as i32 && 0 <= y && y < BOARD_SIZE as i32
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> u32 {
        let mut count = 0;
        for row in &self.cells {
            for &c in row {
                if c == cell {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.count(Cell::Empty)
    }

    /// True when no cell is empty (the game cannot continue).
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}
