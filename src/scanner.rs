//! Enumeration of every run of four cells on a board
//!
//! Both the win detector and the evaluator walk the same sequence, so the
//! order here is fixed: horizontal, vertical, diagonal down-right, diagonal
//! up-right, each scanned in the loop order documented on [`Direction`].

use std::ops::Range;

/// Number of cells in a window, and the length of a winning alignment
pub const WINDOW_LEN: usize = 4;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Direction {
    /// rows outer, start columns inner
    Horizontal,
    /// columns outer, start rows inner
    Vertical,
    /// row and column increasing, rows outer
    DiagonalDown,
    /// row decreasing and column increasing, rows outer
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, column) offset between consecutive cells of a window
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Outer and inner loop ranges of window start positions
    fn ranges(self, rows: usize, cols: usize) -> (Range<usize>, Range<usize>) {
        let row_starts = 0..span(rows);
        let col_starts = 0..span(cols);
        match self {
            Direction::Horizontal => (0..rows, col_starts),
            Direction::Vertical => (0..cols, row_starts),
            Direction::DiagonalDown => (row_starts, col_starts),
            Direction::DiagonalUp => ((WINDOW_LEN - 1)..rows, col_starts),
        }
    }

    /// Maps an (outer, inner) loop position back to the window's first cell
    fn start(self, outer: usize, inner: usize) -> (usize, usize) {
        match self {
            Direction::Vertical => (inner, outer),
            _ => (outer, inner),
        }
    }
}

// number of start positions along an axis of the given length
fn span(len: usize) -> usize {
    (len + 1).saturating_sub(WINDOW_LEN)
}

/// A run of four cells, identified by its first cell and direction
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Window {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Window {
    /// Board coordinates covered by this window, starting from its first cell
    pub fn positions(&self) -> [(usize, usize); WINDOW_LEN] {
        let (d_row, d_col) = self.direction.step();
        let mut positions = [(0, 0); WINDOW_LEN];
        for (i, position) in positions.iter_mut().enumerate() {
            *position = (
                (self.row as isize + d_row * i as isize) as usize,
                (self.col as isize + d_col * i as isize) as usize,
            );
        }
        positions
    }
}

/// Lazy iterator over all windows of a `rows` x `cols` board
#[derive(Clone, Debug)]
pub struct Windows {
    rows: usize,
    cols: usize,
    direction: usize,
    outer: usize,
    inner: usize,
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = Direction::ALL.get(self.direction) {
            let (outer, inner) = direction.ranges(self.rows, self.cols);
            if self.inner >= inner.len() {
                self.inner = 0;
                self.outer += 1;
            }
            if self.outer >= outer.len() || inner.is_empty() {
                // move on to the next orientation
                self.direction += 1;
                self.outer = 0;
                self.inner = 0;
                continue;
            }

            let (row, col) = direction.start(outer.start + self.outer, inner.start + self.inner);
            self.inner += 1;
            return Some(Window {
                row,
                col,
                direction,
            });
        }
        None
    }
}

/// Starts a fresh scan over every window of a board of the given size
pub fn windows(rows: usize, cols: usize) -> Windows {
    Windows {
        rows,
        cols,
        direction: 0,
        outer: 0,
        inner: 0,
    }
}

/// Total number of windows on a board of the given size
pub fn window_count(rows: usize, cols: usize) -> usize {
    Direction::ALL
        .iter()
        .map(|direction| {
            let (outer, inner) = direction.ranges(rows, cols);
            outer.len() * inner.len()
        })
        .sum()
}
