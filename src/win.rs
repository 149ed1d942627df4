use crate::{
    board::{Board, Cell, Piece},
    scanner::windows,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Piece),
    Draw,
}

/// Whether `piece` has four in a row anywhere on the board
pub fn has_won(board: &Board, piece: Piece) -> bool {
    let cell = Cell::from(piece);
    windows(board.rows(), board.cols())
        .any(|window| board.window_cells(&window).iter().all(|&c| c == cell))
}

/// The player with an alignment, if any
pub fn winner(board: &Board) -> Option<Piece> {
    [Piece::PlayerOne, Piece::PlayerTwo]
        .iter()
        .copied()
        .find(|&piece| has_won(board, piece))
}

/// Classifies a board, a win takes precedence over a full board
pub fn game_state(board: &Board) -> GameState {
    match winner(board) {
        Some(piece) => GameState::Won(piece),
        None if board.is_full() => GameState::Draw,
        None => GameState::Playing,
    }
}
