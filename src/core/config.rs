//! Game configuration.
//!
//! A `GameConfig` fixes everything about an episode that is not state:
//! board size, spawn odds, the winning tile and an optional seed.
//! Board size never changes once a game is created.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tile value that counts as a win.
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (boards are size × size).
    pub size: usize,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// Smallest tile that counts as a win.
    pub win_tile: u32,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            win_tile: DEFAULT_WIN_TILE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard 4×4 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the probability that a spawned tile is a 4.
    #[must_use]
    pub fn with_four_probability(mut self, p: f64) -> Self {
        self.four_probability = p;
        self
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, tile: u32) -> Self {
        self.win_tile = tile;
        self
    }

    /// Check the configuration, reporting the first problem found.
    pub fn validate(&self) -> EngineResult<()> {
        if self.size < 2 {
            return Err(EngineError::config(format!(
                "board size must be at least 2, got {}",
                self.size
            )));
        }
        self.validate_rules()
    }

    /// Check the spawn odds and win tile, ignoring the board size.
    pub fn validate_rules(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::config(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(EngineError::config(format!(
                "win_tile must be a power of two of at least 4, got {}",
                self.win_tile
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.size, 4);
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_size(5)
            .with_seed(42)
            .with_four_probability(0.25)
            .with_win_tile(512);

        assert_eq!(config.size, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.four_probability, 0.25);
        assert_eq!(config.win_tile, 512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_board() {
        for size in [0, 1] {
            let err = GameConfig::new().with_size(size).validate().unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
        }
        assert!(GameConfig::new().with_size(2).validate().is_ok());
        assert!(GameConfig::new().with_size(1).validate_rules().is_ok());
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(GameConfig::new().with_four_probability(-0.1).validate().is_err());
        assert!(GameConfig::new().with_four_probability(1.5).validate().is_err());
        assert!(GameConfig::new().with_four_probability(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_win_tile() {
        assert!(GameConfig::new().with_win_tile(2).validate().is_err());
        assert!(GameConfig::new().with_win_tile(1000).validate().is_err());
        assert!(GameConfig::new().with_win_tile(4096).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_size(3).with_seed(9);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
