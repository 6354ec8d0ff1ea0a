use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use merge_2048::{BestScoreStore, Direction, GameSession, GameSettings, MoveResult};

/// Play 2048 in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board side length (3..=8)
    #[arg(long, default_value_t = 4)]
    size: usize,
    /// Tiles placed at game start (1..=4)
    #[arg(long, default_value_t = 2)]
    tiles: usize,
    /// Probability of spawning a 2 instead of a 4
    #[arg(long, default_value_t = 0.9)]
    prob_two: f64,
    /// Tile value that wins the game
    #[arg(long, default_value_t = 2048)]
    target: u32,
    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// File for persisting the best score across runs
    #[arg(long)]
    best_score_file: Option<PathBuf>,
}

fn parse_direction(input: &str) -> Option<Direction> {
    match input {
        "w" | "up" => Some(Direction::Up),
        "s" | "down" => Some(Direction::Down),
        "a" | "left" => Some(Direction::Left),
        "d" | "right" => Some(Direction::Right),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = GameSettings {
        grid_size: args.size,
        initial_tile_count: args.tiles,
        probability_of_two: args.prob_two,
        win_target: args.target,
    };

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(settings, seed)?,
        None => GameSession::new(settings)?,
    };
    let mut best_store = args
        .best_score_file
        .as_ref()
        .map(BestScoreStore::open)
        .transpose()?;

    println!("Use w/a/s/d to move, n for a new game, q to quit.");
    let stdin = io::stdin();
    loop {
        println!("{}", session.grid());
        match &best_store {
            Some(store) => println!(
                "score: {}  moves: {}  best: {}",
                session.score(),
                session.moves(),
                store.best().max(session.score())
            ),
            None => println!("score: {}  moves: {}", session.score(), session.moves()),
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim().to_lowercase();

        match input.as_str() {
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_game();
                continue;
            }
            other => {
                let Some(direction) = parse_direction(other) else {
                    println!("unknown command: {other}");
                    continue;
                };
                match session.apply_move(direction) {
                    MoveResult::Rejected => println!("nothing moved"),
                    MoveResult::Moved {
                        points,
                        announce_win,
                        game_over,
                    } => {
                        if points > 0 {
                            println!("+{points}");
                        }
                        if announce_win {
                            println!("You made a {} tile. You win!", args.target);
                            session.acknowledge_win();
                        }
                        if game_over {
                            println!("{}", session.grid());
                            println!(
                                "Game over. score: {}  moves: {}",
                                session.score(),
                                session.moves()
                            );
                            // Persist before the reset wipes the score.
                            if let Some(store) = best_store.as_mut() {
                                store.update(session.score())?;
                            }
                            session.new_game();
                            println!("New game started.");
                        }
                    }
                }
            }
        }

        if let Some(store) = best_store.as_mut() {
            store.update(session.score())?;
        }
    }

    if let Some(store) = best_store.as_mut() {
        store.update(session.score())?;
    }
    Ok(())
}
