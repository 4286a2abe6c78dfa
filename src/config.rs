use crate::errors::{ConfigError, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Round budget used when none is configured.
pub const DEFAULT_MAX_TURNS: u32 = 100;

/// Settings for a single simulation run.
///
/// Loadable from RON, for example:
/// ```ron
/// (max_turns: 50, seed: Some(42))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Rounds to play before the battle is decided on remaining hp.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    /// Seed for the random source. `None` draws a fresh seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_turns() -> u32 {
    DEFAULT_MAX_TURNS
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
        }
    }
}

impl BattleConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Load a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.max_turns == 0 {
            return Err(ValidationError::ZeroMaxTurns);
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, max_turns: Option<u32>, seed: Option<u64>) -> Self {
        if let Some(max_turns) = max_turns {
            self.max_turns = max_turns;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
