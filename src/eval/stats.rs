//! Episode statistics for evaluation runs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Outcome of one played episode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Final score.
    pub score: u64,
    /// Highest tile reached.
    pub max_tile: u32,
    /// Policy decisions taken.
    pub steps: u32,
    /// Valid moves among those decisions.
    pub moves: u32,
    /// True if the winning tile was reached.
    pub won: bool,
    /// True if the episode ended because no move was left.
    pub terminal: bool,
}

/// Aggregate over many episodes.
#[derive(Clone, Debug, Default)]
pub struct EvalSummary {
    scores: Vec<u64>,
    max_tiles: Vec<u32>,
    wins: usize,
    /// Count of episodes per final max tile.
    pub tile_histogram: FxHashMap<u32, usize>,
}

impl EvalSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an episode.
    pub fn record(&mut self, episode: &EpisodeStats) {
        self.scores.push(episode.score);
        self.max_tiles.push(episode.max_tile);
        if episode.won {
            self.wins += 1;
        }
        *self.tile_histogram.entry(episode.max_tile).or_insert(0) += 1;
    }

    #[must_use]
    pub fn episodes(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        mean(self.scores.iter().map(|&s| s as f64))
    }

    /// Population standard deviation of scores.
    #[must_use]
    pub fn std_score(&self) -> f64 {
        std_dev(self.scores.iter().map(|&s| s as f64))
    }

    #[must_use]
    pub fn mean_max_tile(&self) -> f64 {
        mean(self.max_tiles.iter().map(|&t| f64::from(t)))
    }

    #[must_use]
    pub fn std_max_tile(&self) -> f64 {
        std_dev(self.max_tiles.iter().map(|&t| f64::from(t)))
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn best_tile(&self) -> u32 {
        self.max_tiles.iter().copied().max().unwrap_or(0)
    }

    /// Fraction of episodes that reached the winning tile.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.scores.is_empty() {
            0.0
        } else {
            self.wins as f64 / self.scores.len() as f64
        }
    }

    /// Histogram entries sorted by tile value.
    #[must_use]
    pub fn sorted_histogram(&self) -> Vec<(u32, usize)> {
        let mut entries: Vec<_> = self.tile_histogram.iter().map(|(&t, &n)| (t, n)).collect();
        entries.sort_unstable();
        entries
    }
}

fn mean(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let n = values.clone().count();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

fn std_dev(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let n = values.clone().count();
    if n == 0 {
        return 0.0;
    }
    let m = mean(values.clone());
    let var = values.map(|v| (v - m) * (v - m)).sum::<f64>() / n as f64;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(score: u64, max_tile: u32) -> EpisodeStats {
        EpisodeStats {
            score,
            max_tile,
            won: max_tile >= 2048,
            terminal: true,
            ..EpisodeStats::default()
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = EvalSummary::new();

        assert_eq!(summary.episodes(), 0);
        assert_eq!(summary.mean_score(), 0.0);
        assert_eq!(summary.std_score(), 0.0);
        assert_eq!(summary.best_score(), 0);
        assert_eq!(summary.win_rate(), 0.0);
    }

    #[test]
    fn test_summary_statistics() {
        let mut summary = EvalSummary::new();
        summary.record(&episode(100, 64));
        summary.record(&episode(300, 128));
        summary.record(&episode(200, 64));
        summary.record(&episode(400, 2048));

        assert_eq!(summary.episodes(), 4);
        assert_eq!(summary.mean_score(), 250.0);
        assert!((summary.std_score() - 125.0_f64.sqrt() * 10.0).abs() < 1e-9);
        assert_eq!(summary.best_score(), 400);
        assert_eq!(summary.best_tile(), 2048);
        assert_eq!(summary.mean_max_tile(), 576.0);
        assert_eq!(summary.win_rate(), 0.25);
        assert_eq!(summary.sorted_histogram(), vec![(64, 2), (128, 1), (2048, 1)]);
    }
}
