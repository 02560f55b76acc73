//! Play 2048 in the terminal.
//!
//! Controls: W=Up, D=Right, S=Down, A=Left, Q=Quit.

use clap::Parser;
use log::{info, warn};
use std::io::{self, BufRead, Write};

use rust_2048::{Direction, GameConfig, GameState};

#[derive(Parser, Debug)]
#[command(name = "play", version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Board edge length
    #[arg(short = 'n', long, default_value_t = 4)]
    size: usize,

    /// RNG seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability that a spawned tile is a 4
    #[arg(long, default_value_t = 0.1)]
    four_probability: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = GameConfig::new()
        .with_size(cli.size)
        .with_four_probability(cli.four_probability);
    config.seed = cli.seed;
    let mut game = GameState::new(&config)?;
    info!("started {}x{} game with seed {}", cli.size, cli.size, game.rng.seed());

    let rule = "=".repeat(40);
    println!("{}", rule);
    println!("Welcome to 2048!");
    println!("{}", rule);
    println!("\nGoal: Combine tiles to reach {}!", game.config().win_tile);
    println!("Tiles merge when they have the same value.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", game);

        if game.is_terminal() {
            println!("\n{}", rule);
            if game.has_won() {
                println!("Congratulations! You reached {}!", game.config().win_tile);
            } else {
                println!("Game Over!");
            }
            println!("Final Score: {}", game.score());
            println!("Max Tile: {}", game.max_tile());
            println!("{}", rule);
            break;
        }

        let legal = game.legal_moves();
        println!("\nValid moves: {}", legal);
        println!("\nControls: W=Up, D=Right, S=Down, A=Left, Q=Quit");

        let direction = loop {
            print!("Enter move: ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!("\nThanks for playing!");
                println!("Final Score: {}", game.score());
                return Ok(());
            };
            let key = line?;
            if key.trim().eq_ignore_ascii_case("q") {
                println!("\nThanks for playing!");
                println!("Final Score: {}", game.score());
                return Ok(());
            }
            match key.parse::<Direction>() {
                Ok(direction) => break direction,
                Err(_) => println!("Invalid input. Use W/A/S/D or Q."),
            }
        };

        if !legal.contains(direction) {
            warn!("rejected {} on move {}", direction, game.move_count() + 1);
            println!("That move is not valid!");
            continue;
        }

        let result = game.apply_move(direction)?;
        if result.score_delta > 0 {
            println!("Score gained: +{}", result.score_delta);
        }
    }

    Ok(())
}
