use std::fmt;

use crate::{
    error::{BoardError, MoveError},
    scanner::{Window, WINDOW_LEN},
    win::has_won,
    HEIGHT, WIDTH,
};

/// One of the two players, also used as the tag of the pieces they drop
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
        }
    }

    /// 1 for the first player, 2 for the second
    pub fn number(self) -> usize {
        match self {
            Piece::PlayerOne => 1,
            Piece::PlayerTwo => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::PlayerOne),
            'O' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::PlayerOne => Cell::PlayerOne,
            Piece::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A Connect 4 grid
///
/// Row 0 is the top of the board, so pieces fall towards the highest row index.
/// Cloning a board is a full copy, which lets the search try hypothetical moves
/// without touching the caller's board.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates an empty board of the standard size
    pub fn new() -> Self {
        Self::with_dimensions(HEIGHT, WIDTH)
    }

    /// Creates an empty board of any size
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a standard board by playing a string of 1-indexed columns,
    /// alternating players and starting with `Piece::PlayerOne`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut piece = Piece::PlayerOne;

        for (idx, column_char) in moves.as_ref().chars().enumerate() {
            let column = match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => column - 1,
                _ => return Err(BoardError::InvalidMoveChar(column_char)),
            };
            // abort if the position is won at any point
            if has_won(&board, piece.other()) {
                return Err(BoardError::GameAlreadyOver(idx));
            }
            board.play(column, piece)?;
            piece = piece.other();
        }
        Ok(board)
    }

    /// Builds a board from rows drawn top to bottom with `.`, `X` and `O`
    ///
    /// ```
    /// use connect4_ai::board::{Board, Cell};
    ///
    /// let board = Board::from_rows(&["...", "X..", "XO."]).unwrap();
    /// assert_eq!(board.get(2, 1), Cell::PlayerTwo);
    /// ```
    pub fn from_rows(picture: &[&str]) -> Result<Self, BoardError> {
        let rows = picture.len();
        let cols = picture.first().map_or(0, |row| row.chars().count());
        let mut board = Self::with_dimensions(rows, cols);

        for (row, line) in picture.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardError::UnknownCell(symbol))?;
                board.cells[row * cols + col] = cell;
            }
        }

        // every piece has to rest on the floor or on another piece
        for row in 0..rows.saturating_sub(1) {
            for col in 0..cols {
                if !board.get(row, col).is_empty() && board.get(row + 1, col).is_empty() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The middle column, which takes part in the most alignments
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// The four cells covered by a window, in scanning order
    pub fn window_cells(&self, window: &Window) -> [Cell; WINDOW_LEN] {
        let mut cells = [Cell::Empty; WINDOW_LEN];
        for (cell, (row, col)) in cells.iter_mut().zip(window.positions().iter()) {
            *cell = self.get(*row, *col);
        }
        cells
    }

    /// The lowest empty row of a column, if the column exists and has space
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col).is_empty())
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(0, col).is_empty()
    }

    /// All playable columns in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Places a piece without any checks
    ///
    /// The caller must have obtained `row` from `next_open_row(col)`.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row * self.cols + col] = piece.into();
    }

    /// Drops a piece into a column, returning the row it landed on
    ///
    /// The board is left untouched if the move is rejected.
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.drop_piece(row, col, piece);
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of pieces of one player in a column
    pub fn column_count(&self, col: usize, piece: Piece) -> usize {
        let cell = Cell::from(piece);
        (0..self.rows).filter(|&row| self.get(row, col) == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "|{}|", line)?;
        }
        let numbers: String = (1..=self.cols).map(|col| (col % 10).to_string()).collect();
        write!(f, " {} ", numbers)
    }
}
