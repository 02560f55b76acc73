//! Fixed move-selection policies for evaluation runs.
//!
//! Policies are trait-based so callers can plug in their own agents:
//! - `RandomPolicy`: uniform over legal moves
//! - `GreedyPolicy`: best immediate score, one ply deep

use crate::core::{Direction, GameRng, GameState};

/// Chooses the next move for a game.
pub trait Policy: Send {
    /// Short name for reports.
    fn name(&self) -> &'static str;

    /// Pick a direction, or `None` if the policy has nothing to play.
    fn choose(&mut self, state: &GameState, rng: &mut GameRng) -> Option<Direction>;
}

/// Uniform random choice among legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, state: &GameState, rng: &mut GameRng) -> Option<Direction> {
        let legal = state.legal_moves().to_vec();
        rng.choose(&legal).copied()
    }
}

/// Plays the legal move with the highest immediate score.
///
/// Each candidate is tried on a clone of the state. Ties go to the first
/// direction in action-index order.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, state: &GameState, _rng: &mut GameRng) -> Option<Direction> {
        let mut best: Option<(Direction, u64)> = None;

        for direction in state.legal_moves().iter() {
            let mut probe = state.clone();
            let Ok(result) = probe.apply_move(direction) else {
                continue;
            };
            if best.map_or(true, |(_, score)| result.score_delta > score) {
                best = Some((direction, result.score_delta));
            }
        }

        best.map(|(direction, _)| direction)
    }
}
