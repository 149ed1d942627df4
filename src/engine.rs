//! Move selection for the computer player

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Piece},
    config::{EngineConfig, Strategy},
    evaluation::Weights,
    search::{SearchResult, Searcher, WIN_SCORE},
};

/// Picks a column for `mover` with a depth-limited alpha-beta search
///
/// `opponent` must be `mover.other()`; for the same piece twice there is no
/// game to search and `None` is returned. Otherwise `None` means the board has
/// no legal move. If the search comes back without a column a random legal one
/// is played instead.
pub fn select_move(board: &Board, depth: u32, mover: Piece, opponent: Piece) -> Option<usize> {
    if opponent != mover.other() {
        warn!("{:?} cannot search against itself", mover);
        return None;
    }
    let valid_moves = board.valid_moves();
    if valid_moves.is_empty() {
        return None;
    }

    let weights = Weights::default();
    let result = Searcher::new(&weights, mover).minimax(board, depth, i64::MIN, i64::MAX, mover);
    result
        .column
        .or_else(|| valid_moves.choose(&mut rand::thread_rng()).copied())
}

/// Outcome of the last search an `Engine` ran
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchStats {
    pub result: SearchResult,
    pub depth: u32,
    pub node_count: usize,
}

impl SearchStats {
    /// Plies until the forced end of the game the search found, if any
    ///
    /// A positive `result.value` means the searching player wins, a negative one
    /// that it loses.
    pub fn plies_to_forced_end(&self) -> Option<u32> {
        let excess = self.result.value.abs() - WIN_SCORE;
        if excess < 0 {
            None
        } else {
            Some(self.depth.saturating_sub(excess as u32))
        }
    }
}

/// A configured computer player
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
    last_search: Option<SearchStats>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            last_search: None,
        }
    }

    /// Statistics of the most recent search, `None` if the last move was not searched
    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }

    /// Chooses a legal column for `mover`, `None` if the board has no legal move
    pub fn select_move(&mut self, board: &Board, mover: Piece) -> Option<usize> {
        self.last_search = None;
        let valid_moves = board.valid_moves();
        if valid_moves.is_empty() {
            return None;
        }

        if self.config.strategy == Strategy::Random {
            return self.random_move(&valid_moves);
        }

        let mut searcher =
            Searcher::new(&self.config.heuristic, mover).with_alpha_beta(self.config.alpha_beta);
        let result = if self.config.random_ties {
            let values = searcher.root_values(board, self.config.depth);
            match values.iter().map(|&(_, value)| value).max() {
                Some(best) => {
                    let tied: Vec<usize> = values
                        .iter()
                        .filter(|&&(_, value)| value == best)
                        .map(|&(column, _)| column)
                        .collect();
                    SearchResult {
                        column: tied.choose(&mut self.rng).copied(),
                        value: best,
                    }
                }
                None => searcher.search(board, self.config.depth),
            }
        } else if self.config.parallel {
            searcher.search_parallel(board, self.config.depth)
        } else {
            searcher.search(board, self.config.depth)
        };
        debug!(
            "{:?} searched {} nodes at depth {}: column {:?}, value {}",
            mover, searcher.node_count, self.config.depth, result.column, result.value
        );
        self.last_search = Some(SearchStats {
            result,
            depth: self.config.depth,
            node_count: searcher.node_count,
        });

        match result.column {
            Some(column) => Some(column),
            None => {
                warn!("search returned no column, playing a random move");
                self.random_move(&valid_moves)
            }
        }
    }

    /// A uniformly random legal column
    pub fn random_move(&mut self, valid_moves: &[usize]) -> Option<usize> {
        valid_moves.choose(&mut self.rng).copied()
    }
}
