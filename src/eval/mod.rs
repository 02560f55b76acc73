//! Headless evaluation: play episodes with a fixed policy and summarize.
//!
//! No learning happens here. Policies only read the state; the runner
//! drives the engine and collects `EpisodeStats`.

pub mod policy;
pub mod stats;

pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use stats::{EpisodeStats, EvalSummary};

use log::trace;

use crate::core::{EngineResult, GameRng, GameState};

/// Play `state` until it is terminal, the policy gives up, or `max_steps`
/// decisions have been made.
pub fn run_episode<P: Policy + ?Sized>(
    state: &mut GameState,
    policy: &mut P,
    rng: &mut GameRng,
    max_steps: Option<u32>,
) -> EngineResult<EpisodeStats> {
    let mut stats = EpisodeStats::default();

    while !state.is_terminal() && max_steps.map_or(true, |max| stats.steps < max) {
        let Some(direction) = policy.choose(state, rng) else {
            break;
        };
        let result = state.apply_move(direction)?;
        stats.steps += 1;
        if result.valid {
            stats.moves += 1;
        }
        trace!("step {}: {} -> {:?}", stats.steps, direction, result);
    }

    stats.score = state.score();
    stats.max_tile = state.max_tile();
    stats.won = state.has_won();
    stats.terminal = state.is_terminal();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_random_episode_runs_to_end() {
        let mut state = GameState::new(&GameConfig::new().with_seed(42)).unwrap();
        let mut rng = state.rng.fork();

        let stats = run_episode(&mut state, &mut RandomPolicy, &mut rng, None).unwrap();

        assert!(stats.terminal);
        assert_eq!(stats.steps, stats.moves);
        assert_eq!(stats.moves, state.move_count());
        assert_eq!(stats.score, state.score());
        assert!(stats.max_tile >= 4);
    }

    #[test]
    fn test_max_steps_limit() {
        let mut state = GameState::new(&GameConfig::new().with_seed(1)).unwrap();
        let mut rng = GameRng::new(1);

        let stats = run_episode(&mut state, &mut GreedyPolicy, &mut rng, Some(5)).unwrap();

        assert_eq!(stats.steps, 5);
        assert!(!stats.terminal);
    }

    #[test]
    fn test_episode_is_reproducible() {
        let play = |seed: u64| {
            let mut state = GameState::new(&GameConfig::new().with_seed(seed)).unwrap();
            let mut rng = state.rng.fork();
            run_episode(&mut state, &mut RandomPolicy, &mut rng, None).unwrap()
        };

        assert_eq!(play(9), play(9));
    }

    #[test]
    fn test_dyn_policy() {
        let mut state = GameState::new(&GameConfig::new().with_seed(3)).unwrap();
        let mut rng = GameRng::new(3);
        let mut policy: Box<dyn Policy> = Box::new(GreedyPolicy);

        let stats = run_episode(&mut state, policy.as_mut(), &mut rng, Some(10)).unwrap();
        assert!(stats.steps <= 10);
    }
}
