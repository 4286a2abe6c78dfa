use crate::battle::calculators::{calculate_damage, is_immune, type_effectiveness};
use crate::battle::state::{BattleEvent, EventBus, TurnRng};
use crate::battle::status::{apply_pre_action_status, try_induce_status};
use crate::combatant::Combatant;

/// Acting order for one round: faster combatant first, index 0 on a speed tie.
pub fn determine_action_order(combatants: &[Combatant; 2]) -> [usize; 2] {
    if combatants[1].speed() > combatants[0].speed() {
        [1, 0]
    } else {
        [0, 1]
    }
}

/// Split the pair into (actor, opponent) mutable borrows.
fn actor_and_opponent(
    combatants: &mut [Combatant; 2],
    actor_index: usize,
) -> (&mut Combatant, &mut Combatant) {
    let (first, second) = combatants.split_at_mut(1);
    if actor_index == 0 {
        (&mut first[0], &mut second[0])
    } else {
        (&mut second[0], &mut first[0])
    }
}

/// Run one round: both living combatants act once in speed order.
///
/// Returns the index of the winner if a faint ended the battle this round.
pub fn execute_round(
    combatants: &mut [Combatant; 2],
    round: u32,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> Option<usize> {
    bus.push(BattleEvent::RoundStarted { round });

    let order = determine_action_order(combatants);
    tracing::debug!(round, first = combatants[order[0]].name(), "round started");

    for actor_index in order {
        if combatants.iter().any(Combatant::is_fainted) {
            break;
        }
        if let Some(winner) = execute_action(combatants, actor_index, rng, bus) {
            return Some(winner);
        }
    }

    None
}

/// One combatant's action: status check, random move, damage, induction.
fn execute_action(
    combatants: &mut [Combatant; 2],
    actor_index: usize,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> Option<usize> {
    let opponent_index = 1 - actor_index;
    let (actor, opponent) = actor_and_opponent(combatants, actor_index);

    if apply_pre_action_status(actor, rng, bus) {
        return None;
    }
    if actor.is_fainted() {
        tracing::debug!(combatant = actor.name(), "fainted from status damage");
        bus.push(BattleEvent::Fainted {
            target: actor.name().to_string(),
        });
        return Some(opponent_index);
    }

    let move_index = rng.choose_index(actor.moves().len(), "move selection");
    let chosen = &actor.moves()[move_index];
    if is_immune(chosen.element, opponent.types()) {
        tracing::debug!(
            attacker = actor.name(),
            defender = opponent.name(),
            move_name = %chosen.name,
            "move had no effect"
        );
        bus.push(BattleEvent::MoveHadNoEffect {
            attacker: actor.name().to_string(),
            defender: opponent.name().to_string(),
            move_name: chosen.name.clone(),
        });
        return None;
    }

    let effectiveness = type_effectiveness(chosen.element, opponent.types());
    let damage = calculate_damage(
        actor.attack(),
        opponent.defense(),
        chosen.effective_power(),
        effectiveness,
    );
    let fainted = opponent.take_damage(damage);
    tracing::debug!(
        attacker = actor.name(),
        defender = opponent.name(),
        move_name = %chosen.name,
        damage,
        effectiveness,
        remaining_hp = opponent.current_hp(),
        "move used"
    );
    bus.push(BattleEvent::MoveUsed {
        attacker: actor.name().to_string(),
        defender: opponent.name().to_string(),
        move_name: chosen.name.clone(),
        damage,
        effectiveness,
    });

    try_induce_status(opponent, chosen.induces, bus);

    if fainted {
        bus.push(BattleEvent::Fainted {
            target: opponent.name().to_string(),
        });
        return Some(actor_index);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::{predictable_rng, TestCombatantBuilder};
    use pretty_assertions::assert_eq;
    use schema::{ElementType, StatusCondition};

    #[test]
    fn test_faster_combatant_acts_first() {
        let slow = TestCombatantBuilder::new("snorlax").with_speed(30).build();
        let fast = TestCombatantBuilder::new("jolteon").with_speed(130).build();

        assert_eq!(determine_action_order(&[slow.clone(), fast.clone()]), [1, 0]);
        assert_eq!(determine_action_order(&[fast, slow]), [0, 1]);
    }

    #[test]
    fn test_speed_tie_keeps_argument_order() {
        let a = TestCombatantBuilder::new("a").with_speed(80).build();
        let b = TestCombatantBuilder::new("b").with_speed(80).build();

        assert_eq!(determine_action_order(&[a.clone(), b.clone()]), [0, 1]);
        assert_eq!(determine_action_order(&[b, a]), [0, 1]);
    }

    #[test]
    fn test_round_logs_both_actions() {
        let mut combatants = [
            TestCombatantBuilder::new("a").with_speed(90).build(),
            TestCombatantBuilder::new("b").with_speed(10).build(),
        ];
        let mut rng = predictable_rng();
        let mut bus = EventBus::new();

        let winner = execute_round(&mut combatants, 1, &mut rng, &mut bus);

        assert_eq!(winner, None);
        let lines = bus.log_lines();
        assert_eq!(lines[0], "--- Turn 1 ---");
        assert!(lines[1].starts_with("a used tackle → b lost"));
        assert!(lines[2].starts_with("b used tackle → a lost"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_knockout_ends_round_before_opponent_acts() {
        let mut combatants = [
            TestCombatantBuilder::new("a")
                .with_speed(90)
                .with_attack(200)
                .build(),
            TestCombatantBuilder::new("b")
                .with_speed(10)
                .with_current_hp(1)
                .build(),
        ];
        let mut rng = predictable_rng();
        let mut bus = EventBus::new();

        let winner = execute_round(&mut combatants, 3, &mut rng, &mut bus);

        assert_eq!(winner, Some(0));
        let lines = bus.log_lines();
        assert_eq!(lines.last().map(String::as_str), Some("b fainted!"));
        assert!(!lines.iter().any(|l| l.starts_with("b used")));
    }

    #[test]
    fn test_immune_defender_takes_no_damage_and_no_status() {
        let ghost = TestCombatantBuilder::new("gengar")
            .with_types(vec![ElementType::Ghost])
            .with_speed(10)
            .build();
        let normal = TestCombatantBuilder::new("eevee")
            .with_speed(90)
            .with_moves(vec![("fire-fang", ElementType::Normal, Some(65))])
            .build();
        let mut combatants = [normal, ghost];
        let mut rng = predictable_rng();
        let mut bus = EventBus::new();

        execute_round(&mut combatants, 1, &mut rng, &mut bus);

        assert_eq!(
            bus.log_lines()[1],
            "eevee used fire-fang → It had no effect on gengar!"
        );
        assert_eq!(combatants[1].current_hp(), combatants[1].max_hp() as i32);
        assert_eq!(combatants[1].status(), None);
    }

    #[test]
    fn test_hit_induces_status_from_move_name() {
        let mut combatants = [
            TestCombatantBuilder::new("pikachu")
                .with_speed(90)
                .with_moves(vec![("thunderbolt", ElementType::Electric, Some(90))])
                .build(),
            TestCombatantBuilder::new("eevee").with_speed(10).build(),
        ];
        // Move pick for pikachu, then eevee's paralysis roll passes, then its move pick.
        let mut rng = TurnRng::new_for_test(vec![0, 80, 0]);
        let mut bus = EventBus::new();

        execute_round(&mut combatants, 1, &mut rng, &mut bus);

        assert_eq!(combatants[1].status(), Some(StatusCondition::Paralysis));
        assert_eq!(bus.log_lines()[2], "eevee is now affected by paralysis!");
        assert!(bus.log_lines()[3].starts_with("eevee used tackle"));
    }

    #[test]
    fn test_status_self_faint_gives_win_to_opponent() {
        let mut combatants = [
            TestCombatantBuilder::new("arcanine")
                .with_speed(95)
                .with_hp_stat(90)
                .with_current_hp(5)
                .with_status(StatusCondition::Burn)
                .build(),
            TestCombatantBuilder::new("eevee").with_speed(55).build(),
        ];
        let mut rng = TurnRng::new_for_test(vec![]);
        let mut bus = EventBus::new();

        let winner = execute_round(&mut combatants, 1, &mut rng, &mut bus);

        assert_eq!(winner, Some(1));
        assert_eq!(
            bus.log_lines(),
            vec![
                "--- Turn 1 ---",
                "arcanine is hurt by its burn (9 HP)!",
                "arcanine fainted!",
            ]
        );
    }

    #[test]
    fn test_fainted_combatant_never_acts() {
        let mut combatants = [
            TestCombatantBuilder::new("a").with_current_hp(0).build(),
            TestCombatantBuilder::new("b").build(),
        ];
        let mut rng = TurnRng::new_for_test(vec![]);
        let mut bus = EventBus::new();

        let winner = execute_round(&mut combatants, 1, &mut rng, &mut bus);

        assert_eq!(winner, None);
        assert_eq!(bus.log_lines(), vec!["--- Turn 1 ---"]);
    }
}
