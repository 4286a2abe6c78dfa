use crate::ElementType;
use serde::{Deserialize, Serialize};

/// Base stats as handed over by the data source. All six fields are
/// required; special attack and special defense ride along but the damage
/// formula only reads attack and defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    #[serde(rename = "special-attack", alias = "sp_attack")]
    pub sp_attack: u16,
    #[serde(rename = "special-defense", alias = "sp_defense")]
    pub sp_defense: u16,
    pub speed: u16,
}

/// A move as described by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "type", alias = "element")]
    pub element: ElementType,
    #[serde(default)]
    pub power: Option<u16>,
}

impl MoveData {
    pub fn new(name: impl Into<String>, element: ElementType, power: Option<u16>) -> Self {
        Self {
            name: name.into(),
            element,
            power,
        }
    }
}

/// Raw combatant record: one side of a battle before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantData {
    pub name: String,
    pub types: Vec<ElementType>,
    pub stats: BaseStats,
    pub moves: Vec<MoveData>,
}
