//! Static scoring of positions that the search does not explore further

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Cell, Piece},
    scanner::{windows, WINDOW_LEN},
};

/// Scores a non-terminal board, higher is better for `piece`
pub trait Evaluator: Sync {
    fn evaluate(&self, board: &Board, piece: Piece, opponent: Piece) -> i64;
}

/// Per-window scores of the threat heuristic
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// four own pieces
    pub four: i64,
    /// three own pieces and an empty cell
    pub three: i64,
    /// two own pieces and two empty cells
    pub two: i64,
    /// three opponent pieces and an empty cell, usually negative
    pub opponent_three: i64,
    /// bonus for each own piece in the centre column
    pub center: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
            center: 3,
        }
    }
}

impl Weights {
    /// All weights zero, so the search only reacts to wins and losses
    pub fn terminal_only() -> Self {
        Self {
            four: 0,
            three: 0,
            two: 0,
            opponent_three: 0,
            center: 0,
        }
    }

    /// Score of a single window from `piece`'s point of view
    pub fn score_window(&self, window: &[Cell; WINDOW_LEN], piece: Piece, opponent: Piece) -> i64 {
        let (own, opp, empty) = count_cells(window, piece, opponent);

        let mut score = 0;
        if own == 4 {
            score += self.four;
        } else if own == 3 && empty == 1 {
            score += self.three;
        } else if own == 2 && empty == 2 {
            score += self.two;
        }

        if opp == 3 && empty == 1 {
            score += self.opponent_three;
        }
        score
    }
}

impl Evaluator for Weights {
    fn evaluate(&self, board: &Board, piece: Piece, opponent: Piece) -> i64 {
        let center = board.column_count(board.center_column(), piece) as i64 * self.center;

        windows(board.rows(), board.cols())
            .map(|window| self.score_window(&board.window_cells(&window), piece, opponent))
            .sum::<i64>()
            + center
    }
}

/// Weights of the simpler heuristic that rewards every piece in every window
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceCountWeights {
    pub own: i64,
    pub opponent: i64,
    pub center: i64,
}

impl Default for PieceCountWeights {
    fn default() -> Self {
        Self {
            own: 10,
            opponent: 8,
            center: 3,
        }
    }
}

impl Evaluator for PieceCountWeights {
    fn evaluate(&self, board: &Board, piece: Piece, opponent: Piece) -> i64 {
        let center = board.column_count(board.center_column(), piece) as i64 * self.center;

        windows(board.rows(), board.cols())
            .map(|window| {
                let (own, opp, _) = count_cells(&board.window_cells(&window), piece, opponent);
                own as i64 * self.own - opp as i64 * self.opponent
            })
            .sum::<i64>()
            + center
    }
}

/// The heuristic an engine is configured with
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Heuristic {
    Threats(Weights),
    PieceCount(PieceCountWeights),
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Threats(Weights::default())
    }
}

impl Evaluator for Heuristic {
    fn evaluate(&self, board: &Board, piece: Piece, opponent: Piece) -> i64 {
        match self {
            Heuristic::Threats(weights) => weights.evaluate(board, piece, opponent),
            Heuristic::PieceCount(weights) => weights.evaluate(board, piece, opponent),
        }
    }
}

/// Scores a board with the default threat weights
pub fn evaluate(board: &Board, piece: Piece, opponent: Piece) -> i64 {
    Weights::default().evaluate(board, piece, opponent)
}

// (own, opponent, empty) cell counts of a window
fn count_cells(window: &[Cell; WINDOW_LEN], piece: Piece, opponent: Piece) -> (usize, usize, usize) {
    let (own, opponent) = (Cell::from(piece), Cell::from(opponent));
    window.iter().fold((0, 0, 0), |(p, o, e), &cell| match cell {
        c if c == own => (p + 1, o, e),
        c if c == opponent => (p, o + 1, e),
        _ => (p, o, e + 1),
    })
}
