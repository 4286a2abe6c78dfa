use thiserror::Error;

/// Main error type for the Pokemon Duel battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// A combatant or battle parameter failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// A roster lookup or roster file problem
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Raw combatant JSON could not be decoded (including missing stat fields)
    #[error("Malformed combatant data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating combatants and battle parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("combatant name is empty")]
    EmptyName,
    #[error("{combatant} has no moves")]
    NoMoves { combatant: String },
    #[error("{combatant} has no types")]
    NoTypes { combatant: String },
    #[error("{combatant} has {count} types, at most 2 are allowed")]
    TooManyTypes { combatant: String, count: usize },
    #[error("{combatant} has a defense stat of zero")]
    NonPositiveDefense { combatant: String },
    #[error("{combatant} has an hp stat of zero")]
    ZeroHp { combatant: String },
    #[error("{combatant}'s move '{move_name}' has a power of zero")]
    ZeroPower {
        combatant: String,
        move_name: String,
    },
    #[error("move name is empty")]
    EmptyMoveName,
    #[error("max turns must be at least 1")]
    ZeroMaxTurns,
}

/// Errors related to the prefab roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("no roster entry matches '{0}'")]
    UnknownCombatant(String),
    #[error("roster data is malformed: {0}")]
    Malformed(String),
    #[error("could not read roster file {path}: {reason}")]
    Unreadable { path: String, reason: String },
    #[error("roster has no entries")]
    Empty,
}

/// Errors related to loading a battle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
