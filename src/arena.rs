//! Engine-versus-engine series, used to compare configurations

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::{
    board::Piece,
    config::{EngineConfig, Strategy},
    engine::Engine,
    error::GameError,
    game::Game,
    win::GameState,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    FirstWin,
    SecondWin,
    Draw,
}

/// Tally of a series, from the point of view of the first configuration
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesResult {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl SeriesResult {
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }
}

/// Plays `games` games between two configurations on the rayon thread pool
///
/// The configurations take turns moving first, and every game opens with
/// `opening_plies` random moves so deterministic engines still produce
/// different games. With a seed on `first` the whole series is reproducible.
pub fn play_series(
    first: &EngineConfig,
    second: &EngineConfig,
    games: usize,
    opening_plies: usize,
    show_progress: bool,
) -> Result<SeriesResult, GameError> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let base_seed = first.seed.unwrap_or_else(rand::random);
    let outcomes = (0..games)
        .into_par_iter()
        .map(|index| {
            let outcome = play_game(first, second, index, base_seed, opening_plies);
            progress.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;
    progress.finish();

    let mut result = SeriesResult::default();
    for outcome in outcomes {
        match outcome {
            Outcome::FirstWin => result.first_wins += 1,
            Outcome::SecondWin => result.second_wins += 1,
            Outcome::Draw => result.draws += 1,
        }
    }
    info!(
        "series of {} games: {} wins, {} losses, {} draws",
        result.games(),
        result.first_wins,
        result.second_wins,
        result.draws
    );
    Ok(result)
}

fn play_game(
    first: &EngineConfig,
    second: &EngineConfig,
    index: usize,
    base_seed: u64,
    opening_plies: usize,
) -> Result<Outcome, GameError> {
    let seed = base_seed.wrapping_add(3 * index as u64);
    let mut engines = [
        Engine::new(first.clone().with_seed(seed)),
        Engine::new(second.clone().with_seed(seed.wrapping_add(1))),
    ];
    let mut opening = Engine::new(
        EngineConfig {
            strategy: Strategy::Random,
            ..EngineConfig::default()
        }
        .with_seed(seed.wrapping_add(2)),
    );

    // the first configuration plays PlayerOne in even games
    let first_piece = if index % 2 == 0 {
        Piece::PlayerOne
    } else {
        Piece::PlayerTwo
    };

    let mut game = Game::new();
    while game.state() == GameState::Playing {
        let mover = game.to_move();
        let engine = if game.board().num_moves() < opening_plies {
            &mut opening
        } else if mover == first_piece {
            &mut engines[0]
        } else {
            &mut engines[1]
        };
        match engine.select_move(game.board(), mover) {
            Some(column) => game.play(column)?,
            None => break,
        };
    }
    debug!("game {} finished: {}", index, game.history());

    Ok(match game.state() {
        GameState::Won(piece) if piece == first_piece => Outcome::FirstWin,
        GameState::Won(_) => Outcome::SecondWin,
        _ => Outcome::Draw,
    })
}
