// Pokemon Duel Schema - Shared type definitions
// This crate contains the plain data records that callers hand to the battle
// engine (combatants, moves, stats) together with the element type chart.
// Everything here is serde-ready so that the roster file, the CLI and the MCP
// server all share one wire shape.

// Re-export the main types
pub use combatant_data::*;
pub use element_types::*;
pub use status::*;

pub mod combatant_data;
pub mod element_types;
pub mod status;
