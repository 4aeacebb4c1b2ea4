//! Configuration for rankset
//!
//! Centralized configuration with sensible defaults.

/// Hard cap on skip list height. A list of 2^32 entries saturates this.
pub const MAX_LEVEL_CAP: usize = 32;

/// Main configuration for a SortedSet instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Skip List Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of levels a node tower may have (1..=MAX_LEVEL_CAP)
    pub max_level: usize,

    /// Probability of promoting a node one level up during insertion.
    /// 0.25 balances expected O(log n) height against per-node pointer
    /// overhead (standard skip-list tuning).
    pub level_probability: f64,

    // -------------------------------------------------------------------------
    // Randomness Configuration
    // -------------------------------------------------------------------------
    /// Seed for the level generator. `Some(seed)` makes the level sequence
    /// (and therefore the exact tower shape) reproducible across runs;
    /// `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL_CAP,
            level_probability: 0.25,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration for values the skip list cannot operate with
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_level == 0 || self.max_level > MAX_LEVEL_CAP {
            return Err(crate::RankSetError::Config(format!(
                "max_level must be in 1..={}, got {}",
                MAX_LEVEL_CAP, self.max_level
            )));
        }
        if !(self.level_probability > 0.0 && self.level_probability < 1.0) {
            return Err(crate::RankSetError::Config(format!(
                "level_probability must be in (0, 1), got {}",
                self.level_probability
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum tower height
    pub fn max_level(mut self, max_level: usize) -> Self {
        self.config.max_level = max_level;
        self
    }

    /// Set the level promotion probability
    pub fn level_probability(mut self, p: f64) -> Self {
        self.config.level_probability = p;
        self
    }

    /// Seed the level generator for reproducible tower shapes
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
