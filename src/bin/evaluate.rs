//! Evaluate a fixed policy over many seeded 2048 episodes.

use clap::{Parser, ValueEnum};
use log::info;

use rust_2048::eval::{run_episode, EvalSummary, GreedyPolicy, Policy, RandomPolicy};
use rust_2048::{GameConfig, GameState};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    Greedy,
}

#[derive(Parser, Debug)]
#[command(name = "evaluate", version, about = "Evaluate a 2048 policy headlessly")]
struct Cli {
    /// Number of episodes to run
    #[arg(short = 'e', long, default_value_t = 1)]
    episodes: u32,

    /// Base seed; episode i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board edge length
    #[arg(short = 'n', long, default_value_t = 4)]
    size: usize,

    /// Move-selection policy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,

    /// Stop an episode after this many decisions
    #[arg(long)]
    max_steps: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut policy: Box<dyn Policy> = match cli.policy {
        PolicyKind::Random => Box::new(RandomPolicy),
        PolicyKind::Greedy => Box::new(GreedyPolicy),
    };
    info!("evaluating {} policy over {} episodes", policy.name(), cli.episodes);

    let mut summary = EvalSummary::new();

    for episode in 0..cli.episodes {
        println!("\nEpisode {}/{}", episode + 1, cli.episodes);

        let mut config = GameConfig::new().with_size(cli.size);
        config.seed = cli.seed.map(|s| s.wrapping_add(u64::from(episode)));
        let mut game = GameState::new(&config)?;
        let mut rng = game.rng.fork();

        let stats = run_episode(&mut game, policy.as_mut(), &mut rng, cli.max_steps)?;
        println!(
            "Score: {}, Max Tile: {}, Steps: {}",
            stats.score, stats.max_tile, stats.steps
        );
        summary.record(&stats);
    }

    let rule = "=".repeat(50);
    println!("\n{}", rule);
    println!("Evaluation Summary");
    println!("{}", rule);
    println!("Policy: {}", policy.name());
    println!("Episodes: {}", summary.episodes());
    println!("Average Score: {:.2} ± {:.2}", summary.mean_score(), summary.std_score());
    println!(
        "Average Max Tile: {:.2} ± {:.2}",
        summary.mean_max_tile(),
        summary.std_max_tile()
    );
    println!("Best Score: {}", summary.best_score());
    println!("Best Max Tile: {}", summary.best_tile());
    println!("Win Rate: {:.1}%", summary.win_rate() * 100.0);
    println!("Max Tile Distribution:");
    for (tile, count) in summary.sorted_histogram() {
        println!("  {:>5}: {}", tile, count);
    }

    Ok(())
}
