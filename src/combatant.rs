use crate::errors::{ValidationError, ValidationResult};
use crate::moves::Move;
use schema::{BaseStats, CombatantData, ElementType, StatusCondition};
use std::fmt;
use std::num::NonZeroU16;

/// Most types a single combatant may carry.
pub const MAX_TYPES: usize = 2;

/// One side of a battle: fixed stats and move pool plus the mutable hp and
/// status that change while a simulation runs.
///
/// Built through [`Combatant::new`] or [`Combatant::from_data`], which reject
/// combatants the damage formula cannot handle (no moves, zero defense, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    name: String,
    types: Vec<ElementType>,
    stats: BaseStats,
    defense: NonZeroU16,
    current_hp: i32,
    status: Option<StatusCondition>,
    moves: Vec<Move>,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        types: Vec<ElementType>,
        stats: BaseStats,
        moves: Vec<Move>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if types.is_empty() {
            return Err(ValidationError::NoTypes { combatant: name });
        }
        if types.len() > MAX_TYPES {
            return Err(ValidationError::TooManyTypes {
                count: types.len(),
                combatant: name,
            });
        }
        if moves.is_empty() {
            return Err(ValidationError::NoMoves { combatant: name });
        }
        if let Some(zero_power) = moves.iter().find(|m| m.power == Some(0)) {
            return Err(ValidationError::ZeroPower {
                move_name: zero_power.name.clone(),
                combatant: name,
            });
        }
        if stats.hp == 0 {
            return Err(ValidationError::ZeroHp { combatant: name });
        }
        let Some(defense) = NonZeroU16::new(stats.defense) else {
            return Err(ValidationError::NonPositiveDefense { combatant: name });
        };

        Ok(Combatant {
            name,
            types,
            stats,
            defense,
            current_hp: i32::from(stats.hp),
            status: None,
            moves,
        })
    }

    /// Validate a raw combatant record and build its moves.
    pub fn from_data(data: &CombatantData) -> ValidationResult<Self> {
        let moves = data
            .moves
            .iter()
            .map(Move::from_data)
            .collect::<ValidationResult<Vec<_>>>()?;
        Self::new(data.name.clone(), data.types.clone(), data.stats, moves)
    }

    /// A copy with hp restored to base hp and no status, for a new battle.
    pub fn fresh_copy(&self) -> Self {
        Combatant {
            current_hp: i32::from(self.stats.hp),
            status: None,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    /// Current hp. Goes negative when a hit overshoots; anything at or below
    /// zero counts as fainted.
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn attack(&self) -> u16 {
        self.stats.attack
    }

    pub fn defense(&self) -> NonZeroU16 {
        self.defense
    }

    pub fn speed(&self) -> u16 {
        self.stats.speed
    }

    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.current_hp = hp;
    }

    pub fn set_status(&mut self, status: Option<StatusCondition>) {
        self.status = status;
    }

    /// Subtract damage from current hp. Returns true if this faints the combatant.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.current_hp -= i32::from(amount);
        self.is_fainted()
    }

    /// Set a status condition unless one is already active.
    /// Returns true if the status was applied.
    pub fn try_inflict_status(&mut self, status: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }
}

impl TryFrom<&CombatantData> for Combatant {
    type Error = ValidationError;

    fn try_from(data: &CombatantData) -> Result<Self, Self::Error> {
        Combatant::from_data(data)
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_names: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "{} [{}] HP: {}/{}",
            self.name,
            type_names.join("/"),
            self.current_hp.max(0),
            self.stats.hp
        )?;
        if let Some(status) = self.status {
            write!(f, " ({})", status)?;
        }

        if f.alternate() {
            const LABEL_WIDTH: usize = 8;
            writeln!(f)?;
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", "Attack", self.stats.attack)?;
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", "Defense", self.stats.defense)?;
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", "Sp. Atk", self.stats.sp_attack)?;
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", "Sp. Def", self.stats.sp_defense)?;
            writeln!(f, "  {:<LABEL_WIDTH$} : {}", "Speed", self.stats.speed)?;
            write!(f, "  Moves:")?;
            for move_ in &self.moves {
                write!(f, "\n    - {:#}", move_)?;
            }
        }
        Ok(())
    }
}
