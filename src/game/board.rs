use std::fmt;

use super::state::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Length of the line a player needs to win.
pub const WIN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Single-character symbol used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'O',
            Cell::Two => 'X',
        }
    }
}

/// A board position, or an offset between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Coord { row, col }
    }

    /// This position moved `scale` steps along `dir`
    pub fn advance(self, scale: isize, dir: Coord) -> Coord {
        Coord::new(self.row + scale * dir.row, self.col + scale * dir.col)
    }

    pub fn in_bounds(self) -> bool {
        (0..ROWS as isize).contains(&self.row) && (0..COLS as isize).contains(&self.col)
    }
}

/// One vector per line through a point; each also stands for its negation.
pub const DIRECTIONS: [Coord; 4] = [
    Coord::new(1, -1), // anti-diagonal
    Coord::new(1, 0),  // vertical
    Coord::new(0, 1),  // horizontal
    Coord::new(1, 1),  // diagonal
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell at `pos`, or `None` when it lies off the board
    pub fn get_at(&self, pos: Coord) -> Option<Cell> {
        pos.in_bounds()
            .then(|| self.cells[pos.row as usize][pos.col as usize])
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Number of occupied cells
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the disc at (row, col) completes a line of `WIN_LEN`.
    ///
    /// Each direction is scanned over the `2 * WIN_LEN - 1` cells centred on
    /// the disc. Off-board positions are skipped and leave the running count
    /// alone; a line leaves the board at most once per window, so a skipped
    /// stretch can never join two runs.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let start = Coord::new(row as isize, col as isize);
        let here = match self.get_at(start) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };
        let reach = WIN_LEN as isize;

        DIRECTIONS.iter().any(|&dir| {
            let mut sequence = 0;
            for delta in (1 - reach)..reach {
                let Some(cell) = self.get_at(start.advance(delta, dir)) else {
                    continue;
                };
                sequence = if cell == here { sequence + 1 } else { 0 };
                if sequence >= WIN_LEN {
                    return true;
                }
            }
            false
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {col} ")?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                write!(f, "[{}]", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
