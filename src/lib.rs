//! Pokemon Duel Battle Engine
//!
//! Runs a complete one-on-one battle between two combatants: type matchups,
//! a fixed-level damage formula, paralysis/burn/poison and a seeded random
//! source, producing a winner and a human-readable event log.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod mcp_interface;
pub mod moves;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Raw data records and static enums.
pub use schema::{BaseStats, CombatantData, ElementType, MoveData, StatusCondition};

// --- From this crate's modules (`src/`) ---

// Simulation entry points and results.
pub use battle::engine::{simulate, simulate_data, simulate_with_config, simulate_with_rng};
pub use battle::state::{BattleEvent, BattleOutcome, BattleStatistics, EventBus, TurnRng, Winner};

// Validated battle participants.
pub use combatant::Combatant;
pub use moves::{infer_induced_status, Move};

// Configuration and prefab data.
pub use config::BattleConfig;
pub use roster::Roster;

// Error handling.
pub use errors::{BattleEngineError, BattleResult};
