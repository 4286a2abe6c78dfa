use crate::errors::{ValidationError, ValidationResult};
use schema::{ElementType, MoveData, StatusCondition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Power used for damage when a move does not specify one.
pub const DEFAULT_MOVE_POWER: u16 = 40;

// Keyword groups are checked in this order; the first group that matches wins.
const PARALYSIS_KEYWORDS: [&str; 3] = ["thunder", "bolt", "zap"];
const BURN_KEYWORDS: [&str; 4] = ["ember", "flame", "fire", "burn"];
const POISON_KEYWORDS: [&str; 2] = ["poison", "toxic"];

/// A validated move ready for battle.
///
/// The status the move can inflict is stored in `induces` and derived from
/// the move's name exactly once, when the move is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub element: ElementType,
    pub power: Option<u16>,
    pub induces: Option<StatusCondition>,
}

impl Move {
    /// Build a move, deriving its induced status from the name.
    pub fn new(
        name: impl Into<String>,
        element: ElementType,
        power: Option<u16>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyMoveName);
        }

        let induces = infer_induced_status(&name);
        Ok(Move {
            name,
            element,
            power,
            induces,
        })
    }

    pub fn from_data(data: &MoveData) -> ValidationResult<Self> {
        Self::new(data.name.clone(), data.element, data.power)
    }

    /// Power used by the damage formula, with the default substituted for a missing value.
    pub fn effective_power(&self) -> u16 {
        self.power.unwrap_or(DEFAULT_MOVE_POWER)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} ({}, power {})", self.name, self.element, self.effective_power())?;
            if let Some(status) = self.induces {
                write!(f, " - may cause {}", status)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Infer the status condition a move inflicts from its name.
///
/// Matching is a case-insensitive substring test against fixed keyword
/// groups: thunder/bolt/zap paralyze, ember/flame/fire/burn burn and
/// poison/toxic poison.
pub fn infer_induced_status(move_name: &str) -> Option<StatusCondition> {
    let name = move_name.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if matches_any(&PARALYSIS_KEYWORDS) {
        Some(StatusCondition::Paralysis)
    } else if matches_any(&BURN_KEYWORDS) {
        Some(StatusCondition::Burn)
    } else if matches_any(&POISON_KEYWORDS) {
        Some(StatusCondition::Poison)
    } else {
        None
    }
}
