use crate::battle::state::TurnRng;
use crate::combatant::Combatant;
use crate::errors::BattleResult;
use crate::moves::Move;
use schema::{BaseStats, ElementType, StatusCondition};

/// A builder for test combatants with flat, predictable defaults.
///
/// Defaults: Normal type, 100 hp, 50 in every other stat and a single
/// 40-power Normal `tackle`.
///
/// # Example
/// ```ignore
/// let pikachu = TestCombatantBuilder::new("pikachu")
///     .with_types(vec![ElementType::Electric])
///     .with_moves(vec![("thunderbolt", ElementType::Electric, Some(90))])
///     .with_status(StatusCondition::Burn)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    types: Vec<ElementType>,
    stats: BaseStats,
    moves: Vec<(String, ElementType, Option<u16>)>,
    status: Option<StatusCondition>,
    current_hp: Option<i32>,
}

impl TestCombatantBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![ElementType::Normal],
            stats: BaseStats {
                hp: 100,
                attack: 50,
                defense: 50,
                sp_attack: 50,
                sp_defense: 50,
                speed: 50,
            },
            moves: vec![("tackle".to_string(), ElementType::Normal, Some(40))],
            status: None,
            current_hp: None,
        }
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    /// Sets base hp. Current hp starts here unless overridden.
    pub fn with_hp_stat(mut self, hp: u16) -> Self {
        self.stats.hp = hp;
        self
    }

    pub fn with_attack(mut self, attack: u16) -> Self {
        self.stats.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u16) -> Self {
        self.stats.defense = defense;
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_moves(mut self, moves: Vec<(&str, ElementType, Option<u16>)>) -> Self {
        self.moves = moves
            .into_iter()
            .map(|(name, element, power)| (name.to_string(), element, power))
            .collect();
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current hp. If not set, hp will be max.
    pub fn with_current_hp(mut self, hp: i32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let moves = self
            .moves
            .into_iter()
            .map(|(name, element, power)| match Move::new(name, element, power) {
                Ok(move_) => move_,
                Err(err) => panic!("Invalid test move: {}", err),
            })
            .collect();

        let mut combatant = match Combatant::new(self.name, self.types, self.stats, moves) {
            Ok(combatant) => combatant,
            Err(err) => panic!("Invalid test combatant: {}", err),
        };

        combatant.set_status(self.status);
        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }

        combatant
    }
}

/// A scripted `TurnRng` with a long run of 50s.
/// Paralysis never skips and single-move combatants always pick their move.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 200])
}

/// Unwrap a battle result with a readable panic message.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
