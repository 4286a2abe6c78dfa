use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Persistent status affliction. A combatant carries at most one, held as
/// `Option<StatusCondition>`, and keeps it for the rest of the battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusCondition {
    Paralysis,
    Burn,
    Poison,
}

impl StatusCondition {
    /// Whether the condition deals damage at the start of each action.
    pub fn deals_damage(&self) -> bool {
        matches!(self, StatusCondition::Burn | StatusCondition::Poison)
    }
}
