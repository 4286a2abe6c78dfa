use crate::battle::state::{BattleEvent, EventBus, TurnRng, PARALYSIS_SKIP_CHANCE};
use crate::combatant::Combatant;
use schema::StatusCondition;

/// Hp lost to a damaging status at the start of an action, from base hp.
///
/// Burn takes a tenth and poison twelve percent, truncated, minimum 1.
/// Paralysis deals no damage.
pub fn status_damage(status: StatusCondition, base_hp: u16) -> u16 {
    let fraction = match status {
        StatusCondition::Burn => 0.1,
        StatusCondition::Poison => 0.12,
        StatusCondition::Paralysis => return 0,
    };
    ((f64::from(base_hp) * fraction) as u16).max(1)
}

/// Run the start-of-action status check for the acting combatant.
///
/// Paralysis rolls to skip the action; burn and poison deal their damage and
/// let the action proceed. Returns true when the action is lost to paralysis.
pub fn apply_pre_action_status(
    combatant: &mut Combatant,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> bool {
    let Some(status) = combatant.status() else {
        return false;
    };

    if status == StatusCondition::Paralysis {
        let roll = rng.roll_percent("paralysis check");
        if roll <= PARALYSIS_SKIP_CHANCE {
            tracing::debug!(combatant = combatant.name(), roll, "fully paralyzed");
            bus.push(BattleEvent::FullyParalyzed {
                target: combatant.name().to_string(),
            });
            return true;
        }
    }

    if status.deals_damage() {
        let damage = status_damage(status, combatant.max_hp());
        combatant.take_damage(damage);
        tracing::debug!(
            combatant = combatant.name(),
            %status,
            damage,
            remaining_hp = combatant.current_hp(),
            "status damage"
        );
        bus.push(BattleEvent::StatusDamage {
            target: combatant.name().to_string(),
            status,
            damage,
        });
    }

    false
}

/// Attempt to inflict a move's status on the defender after a damaging hit.
///
/// Does nothing when the move induces no status or the defender already has
/// one. Returns true if a status was applied.
pub fn try_induce_status(
    defender: &mut Combatant,
    induced: Option<StatusCondition>,
    bus: &mut EventBus,
) -> bool {
    let Some(status) = induced else {
        return false;
    };

    if !defender.try_inflict_status(status) {
        return false;
    }

    bus.push(BattleEvent::StatusInflicted {
        target: defender.name().to_string(),
        status,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCombatantBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(StatusCondition::Burn, 80, 8)]
    #[case(StatusCondition::Burn, 79, 7)]
    #[case(StatusCondition::Burn, 9, 1)]
    #[case(StatusCondition::Poison, 90, 10)]
    #[case(StatusCondition::Poison, 79, 9)]
    #[case(StatusCondition::Poison, 5, 1)]
    #[case(StatusCondition::Paralysis, 100, 0)]
    fn test_status_damage(
        #[case] status: StatusCondition,
        #[case] base_hp: u16,
        #[case] expected: u16,
    ) {
        assert_eq!(status_damage(status, base_hp), expected);
    }

    #[test]
    fn test_no_status_does_nothing() {
        let mut combatant = TestCombatantBuilder::new("eevee").build();
        let mut rng = TurnRng::new_for_test(vec![]);
        let mut bus = EventBus::new();

        assert!(!apply_pre_action_status(&mut combatant, &mut rng, &mut bus));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_paralysis_skip_on_low_roll() {
        let mut combatant = TestCombatantBuilder::new("pikachu")
            .with_status(StatusCondition::Paralysis)
            .build();
        let mut rng = TurnRng::new_for_test(vec![25]);
        let mut bus = EventBus::new();

        assert!(apply_pre_action_status(&mut combatant, &mut rng, &mut bus));
        assert_eq!(
            bus.events(),
            &[BattleEvent::FullyParalyzed {
                target: "pikachu".to_string()
            }]
        );
    }

    #[test]
    fn test_paralysis_passes_on_high_roll() {
        let mut combatant = TestCombatantBuilder::new("pikachu")
            .with_status(StatusCondition::Paralysis)
            .build();
        let mut rng = TurnRng::new_for_test(vec![26]);
        let mut bus = EventBus::new();

        assert!(!apply_pre_action_status(&mut combatant, &mut rng, &mut bus));
        assert!(bus.is_empty());
        assert_eq!(combatant.current_hp(), combatant.max_hp() as i32);
    }

    #[test]
    fn test_burn_deals_damage_without_consuming_turn() {
        let mut combatant = TestCombatantBuilder::new("charizard")
            .with_hp_stat(78)
            .with_status(StatusCondition::Burn)
            .build();
        let mut rng = TurnRng::new_for_test(vec![]);
        let mut bus = EventBus::new();

        assert!(!apply_pre_action_status(&mut combatant, &mut rng, &mut bus));
        assert_eq!(combatant.current_hp(), 71);
        assert_eq!(bus.log_lines(), vec!["charizard is hurt by its burn (7 HP)!"]);
    }

    #[test]
    fn test_poison_damage_can_drop_below_zero() {
        let mut combatant = TestCombatantBuilder::new("gengar")
            .with_hp_stat(60)
            .with_current_hp(3)
            .with_status(StatusCondition::Poison)
            .build();
        let mut rng = TurnRng::new_for_test(vec![]);
        let mut bus = EventBus::new();

        assert!(!apply_pre_action_status(&mut combatant, &mut rng, &mut bus));
        assert_eq!(combatant.current_hp(), -4);
        assert!(combatant.is_fainted());
        assert_eq!(bus.log_lines(), vec!["gengar is hurt by poison (7 HP)!"]);
    }

    #[test]
    fn test_induction_applies_to_healthy_defender() {
        let mut defender = TestCombatantBuilder::new("blastoise").build();
        let mut bus = EventBus::new();

        assert!(try_induce_status(
            &mut defender,
            Some(StatusCondition::Paralysis),
            &mut bus
        ));
        assert_eq!(defender.status(), Some(StatusCondition::Paralysis));
        assert_eq!(
            bus.log_lines(),
            vec!["blastoise is now affected by paralysis!"]
        );
    }

    #[test]
    fn test_induction_skipped_when_status_already_set() {
        let mut defender = TestCombatantBuilder::new("blastoise")
            .with_status(StatusCondition::Poison)
            .build();
        let mut bus = EventBus::new();

        assert!(!try_induce_status(
            &mut defender,
            Some(StatusCondition::Burn),
            &mut bus
        ));
        assert_eq!(defender.status(), Some(StatusCondition::Poison));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_move_without_status_induces_nothing() {
        let mut defender = TestCombatantBuilder::new("blastoise").build();
        let mut bus = EventBus::new();

        assert!(!try_induce_status(&mut defender, None, &mut bus));
        assert_eq!(defender.status(), None);
        assert!(bus.is_empty());
    }
}
