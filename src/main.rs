use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use connect4_ai::{
    arena::play_series,
    board::Piece,
    config::{Difficulty, EngineConfig, CONFIG_PATH},
    engine::Engine,
    error::MoveError,
    game::Game,
    win::GameState,
};

mod display;
use display::*;

fn main() -> Result<()> {
    env_logger::init();

    // an engine configured in the TOML file is offered as the custom difficulty
    let custom = EngineConfig::load_or_default(Path::new(CONFIG_PATH))?;

    println!("Welcome to Connect 4\n");
    println!("1. Human vs Computer");
    println!("2. Human vs Human");
    println!("3. Computer vs Computer");
    println!("4. Engine series");

    match ask_number("Choose game mode: ", 1..=4)? {
        1 => {
            let engine = Engine::new(choose_engine("computer", &custom)?);
            if ask_yes_no("Should the computer move first? y/n: ")? {
                play_game([Some(engine), None], false)
            } else {
                play_game([None, Some(engine)], false)
            }
        }
        2 => play_game([None, None], false),
        3 => {
            let first = Engine::new(choose_engine("player 1", &custom)?);
            let second = Engine::new(choose_engine("player 2", &custom)?);
            // slow down play if both players are AI
            play_game([Some(first), Some(second)], true)
        }
        _ => {
            let first = choose_engine("the first engine", &custom)?;
            let second = choose_engine("the second engine", &custom)?;
            let games = ask_number("Number of games: ", 1..=10_000)?;
            let result = play_series(&first, &second, games, 2, true)?;
            println!(
                "First engine: {} wins, {} losses, {} draws",
                result.first_wins, result.second_wins, result.draws
            );
            Ok(())
        }
    }
}

/// Runs one game, players without an engine are asked for their moves
fn play_game(mut computers: [Option<Engine>; 2], slow: bool) -> Result<()> {
    let mut game = Game::new();
    let stdin = stdin();

    // game loop
    loop {
        display(game.board())?;

        match game.state() {
            GameState::Playing => {
                let mover = game.to_move();
                let column = match &mut computers[mover.number() - 1] {
                    // AI player
                    Some(engine) => {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        if slow {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let column = engine
                            .select_move(game.board(), mover)
                            .ok_or(MoveError::NoLegalMoves)?;
                        if let Some(stats) = engine.last_search() {
                            report_search(mover, stats.result.value, stats.plies_to_forced_end());
                        }
                        println!("Best move: {}", column + 1);
                        column
                    }

                    // human player
                    None => {
                        print!("Player {} move input > ", mover.number());
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            return Err(anyhow!("input closed"));
                        }

                        match input_str.trim().parse::<usize>() {
                            Ok(column) if column >= 1 => column - 1,
                            _ => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                        }
                    }
                };

                if let Err(err) = game.play(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(piece) => {
                println!("Player {} wins!", piece.number());
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

fn report_search(mover: Piece, value: i64, plies: Option<u32>) {
    match plies {
        Some(plies) => {
            let moves = (plies + 1) / 2;
            let move_string = if moves == 1 { "move" } else { "moves" };
            let player = if value > 0 { mover } else { mover.other() };
            println!(
                "Player {} can force a win in at most {} {}.",
                player.number(),
                moves,
                move_string
            );
        }
        None => println!("Position score: {}", value),
    }
}

fn choose_engine(name: &str, custom: &EngineConfig) -> Result<EngineConfig> {
    println!("Difficulty of {}:", name);
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, difficulty.name());
    }
    println!("{}. custom ({})", Difficulty::ALL.len() + 1, CONFIG_PATH);

    let choice = ask_number("Enter choice: ", 1..=Difficulty::ALL.len() + 1)?;
    Ok(match Difficulty::ALL.get(choice - 1) {
        Some(difficulty) => difficulty.config(),
        None => custom.clone(),
    })
}

fn ask_number(prompt: &str, range: RangeInclusive<usize>) -> Result<usize> {
    loop {
        match read_answer(prompt)?.parse::<usize>() {
            Ok(number) if range.contains(&number) => return Ok(number),
            _ => println!(
                "Unknown answer given, expected {} to {}",
                range.start(),
                range.end()
            ),
        }
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        match read_answer(prompt)?.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn read_answer(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}
