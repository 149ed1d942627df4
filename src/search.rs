//! Depth-limited minimax over Connect 4 positions

use log::trace;
use rayon::prelude::*;

use crate::{
    board::{Board, Piece},
    evaluation::Evaluator,
    win::has_won,
};

/// Score of a won position, far beyond anything the evaluator can reach
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// The column chosen by a search and the value backed up to the root
///
/// `column` is only `None` at leaves, or when the root had no legal move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

/// A minimax search on behalf of one player
///
/// # Scoring
/// Values are always from the point of view of `player`: `WIN_SCORE` plus the
/// remaining depth if it has an alignment, the negation of that if the opponent
/// has one, 0 for a full board and the evaluator's score when the depth runs out.
///
/// Every hypothetical move is played on its own clone of the board, so sibling
/// branches never see each other's pieces and the caller's board is never
/// modified.
pub struct Searcher<'a, E: Evaluator + ?Sized> {
    evaluator: &'a E,
    player: Piece,
    alpha_beta: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a, E: Evaluator + ?Sized> Searcher<'a, E> {
    /// Creates an alpha-beta `Searcher` maximising for `player`
    pub fn new(evaluator: &'a E, player: Piece) -> Self {
        Self {
            evaluator,
            player,
            alpha_beta: true,
            node_count: 0,
        }
    }

    /// Turns pruning on or off, without pruning every node is visited
    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    /// Searches the position with `player` to move and a full window
    pub fn search(&mut self, board: &Board, depth: u32) -> SearchResult {
        self.minimax(board, depth, i64::MIN, i64::MAX, self.player)
    }

    /// Performs game tree search with `to_move` about to play
    ///
    /// Columns are tried in ascending order and the best column is only
    /// replaced by a strictly better one, so ties go to the lowest column.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        to_move: Piece,
    ) -> SearchResult {
        self.node_count += 1;

        let valid_moves = board.valid_moves();
        if let Some(value) = self.leaf_value(board, depth, valid_moves.is_empty()) {
            return SearchResult {
                column: None,
                value,
            };
        }

        let maximizing = to_move == self.player;
        let mut best = SearchResult {
            column: None,
            value: if maximizing { i64::MIN } else { i64::MAX },
        };

        for column in valid_moves {
            let row = match board.next_open_row(column) {
                Some(row) => row,
                None => continue,
            };
            let mut next = board.clone();
            next.drop_piece(row, column, to_move);

            let value = self
                .minimax(&next, depth - 1, alpha, beta, to_move.other())
                .value;

            if maximizing {
                if value > best.value {
                    best = SearchResult {
                        column: Some(column),
                        value,
                    };
                }
                if self.alpha_beta {
                    alpha = alpha.max(best.value);
                }
            } else {
                if value < best.value {
                    best = SearchResult {
                        column: Some(column),
                        value,
                    };
                }
                if self.alpha_beta {
                    beta = beta.min(best.value);
                }
            }

            // the remaining siblings cannot change the value seen by the parent
            if self.alpha_beta && alpha >= beta {
                break;
            }
        }

        best
    }

    /// The exact value of every root move for `player`, in column order
    ///
    /// Each move is searched with a full window so equal values really are ties.
    /// Empty if the root is already decided or `depth` is 0.
    pub fn root_values(&mut self, board: &Board, depth: u32) -> Vec<(usize, i64)> {
        let valid_moves = board.valid_moves();
        if depth == 0 || self.leaf_value(board, depth, valid_moves.is_empty()).is_some() {
            return Vec::new();
        }
        self.node_count += 1;

        let mut values = Vec::with_capacity(valid_moves.len());
        for column in valid_moves {
            let row = match board.next_open_row(column) {
                Some(row) => row,
                None => continue,
            };
            let mut next = board.clone();
            next.drop_piece(row, column, self.player);

            let value = self
                .minimax(&next, depth - 1, i64::MIN, i64::MAX, self.player.other())
                .value;
            values.push((column, value));
        }
        values
    }

    /// Searches each root move on its own thread with a full window
    ///
    /// Returns the same column and value as `search`, only the node count differs.
    pub fn search_parallel(&mut self, board: &Board, depth: u32) -> SearchResult {
        let valid_moves = board.valid_moves();
        if depth == 0 || self.leaf_value(board, depth, valid_moves.is_empty()).is_some() {
            return self.search(board, depth);
        }

        let this = &*self;
        let children: Vec<Option<(usize, i64, usize)>> = valid_moves
            .into_par_iter()
            .map(|column| {
                let row = board.next_open_row(column)?;
                let mut next = board.clone();
                next.drop_piece(row, column, this.player);

                let mut searcher = Searcher::new(this.evaluator, this.player)
                    .with_alpha_beta(this.alpha_beta);
                let value = searcher
                    .minimax(&next, depth - 1, i64::MIN, i64::MAX, this.player.other())
                    .value;
                trace!(
                    "root column {} scored {} ({} nodes)",
                    column,
                    value,
                    searcher.node_count
                );
                Some((column, value, searcher.node_count))
            })
            .collect();

        self.node_count += 1;
        let mut best = SearchResult {
            column: None,
            value: i64::MIN,
        };
        for (column, value, nodes) in children.into_iter().flatten() {
            self.node_count += nodes;
            if value > best.value {
                best = SearchResult {
                    column: Some(column),
                    value,
                };
            }
        }
        best
    }

    // value of a node that is not expanded any further
    fn leaf_value(&self, board: &Board, depth: u32, no_moves: bool) -> Option<i64> {
        let opponent = self.player.other();
        // wins found with more depth left are nearer, so they score higher
        if has_won(board, self.player) {
            Some(WIN_SCORE + depth as i64)
        } else if has_won(board, opponent) {
            Some(-WIN_SCORE - depth as i64)
        } else if no_moves {
            // a genuine draw, nothing left to estimate
            Some(0)
        } else if depth == 0 {
            Some(self.evaluator.evaluate(board, self.player, opponent))
        } else {
            None
        }
    }
}
