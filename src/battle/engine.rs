use crate::battle::state::{BattleOutcome, EventBus, TurnRng, Winner};
use crate::battle::turn_orchestrator::execute_round;
use crate::combatant::Combatant;
use crate::config::{BattleConfig, DEFAULT_MAX_TURNS};
use crate::errors::{BattleResult, ValidationError};
use schema::CombatantData;
use std::cmp::Ordering;

/// Run a whole battle between `a` and `b`.
///
/// Both combatants are copied fresh (full hp, no status), so the caller's
/// values are never mutated. With a seed the result is fully reproducible;
/// without one the random source is seeded from the OS. `max_turns`
/// defaults to [`DEFAULT_MAX_TURNS`].
pub fn simulate(
    a: &Combatant,
    b: &Combatant,
    seed: Option<u64>,
    max_turns: Option<u32>,
) -> BattleResult<BattleOutcome> {
    let mut rng = TurnRng::from_optional_seed(seed);
    simulate_with_rng(a, b, max_turns.unwrap_or(DEFAULT_MAX_TURNS), &mut rng)
}

/// [`simulate`] with the seed and turn budget taken from a config.
pub fn simulate_with_config(
    a: &Combatant,
    b: &Combatant,
    config: &BattleConfig,
) -> BattleResult<BattleOutcome> {
    config.validate()?;
    simulate(a, b, config.seed, Some(config.max_turns))
}

/// Validate raw records and run a battle between them.
pub fn simulate_data(
    a: &CombatantData,
    b: &CombatantData,
    seed: Option<u64>,
    max_turns: Option<u32>,
) -> BattleResult<BattleOutcome> {
    let a = Combatant::from_data(a)?;
    let b = Combatant::from_data(b)?;
    simulate(&a, &b, seed, max_turns)
}

/// Run a battle drawing from a caller-owned random source.
pub fn simulate_with_rng(
    a: &Combatant,
    b: &Combatant,
    max_turns: u32,
    rng: &mut TurnRng,
) -> BattleResult<BattleOutcome> {
    if max_turns == 0 {
        return Err(ValidationError::ZeroMaxTurns.into());
    }

    let mut combatants = [a.fresh_copy(), b.fresh_copy()];
    let mut bus = EventBus::new();

    tracing::debug!(
        a = combatants[0].name(),
        b = combatants[1].name(),
        max_turns,
        "battle started"
    );

    let mut knockout = None;
    for round in 1..=max_turns {
        knockout = execute_round(&mut combatants, round, rng, &mut bus);
        if knockout.is_some() {
            break;
        }
    }

    let winner = match knockout {
        Some(index) => Winner::Combatant(combatants[index].name().to_string()),
        None => decide_by_remaining_hp(&combatants),
    };

    tracing::info!(
        winner = %winner,
        events = bus.len(),
        by_knockout = knockout.is_some(),
        "battle finished"
    );

    Ok(BattleOutcome::from_events(winner, bus.into_events()))
}

/// Turn budget ran out: more remaining hp wins, equal hp is a draw.
fn decide_by_remaining_hp(combatants: &[Combatant; 2]) -> Winner {
    let (a, b) = (&combatants[0], &combatants[1]);
    match a.current_hp().cmp(&b.current_hp()) {
        Ordering::Greater => Winner::Combatant(a.name().to_string()),
        Ordering::Less => Winner::Combatant(b.name().to_string()),
        Ordering::Equal => Winner::Draw,
    }
}
