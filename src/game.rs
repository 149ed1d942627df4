use crate::{
    board::{Board, Piece},
    error::GameError,
    win::{game_state, has_won, GameState},
};

/// A game in progress: the authoritative board plus whose turn it is
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Piece,
    history: String,
    state: GameState,
}

impl Game {
    /// A fresh standard game, `Piece::PlayerOne` moves first
    pub fn new() -> Self {
        Self::from_board(Board::new(), Piece::PlayerOne)
    }

    /// Continues from an existing position with `to_move` about to play
    pub fn from_board(board: Board, to_move: Piece) -> Self {
        let state = game_state(&board);
        Self {
            board,
            to_move,
            history: String::new(),
            state,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves played through this game as 1-indexed columns
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        match self.state {
            GameState::Playing => self.board.valid_moves(),
            _ => Vec::new(),
        }
    }

    /// Plays a 0-indexed column for the player to move
    ///
    /// Nothing changes if the game is over or the move is illegal.
    pub fn play(&mut self, column: usize) -> Result<GameState, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        self.board.play(column, self.to_move)?;
        self.history.push_str(&(column + 1).to_string());

        self.state = if has_won(&self.board, self.to_move) {
            GameState::Won(self.to_move)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = self.to_move.other();
        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
