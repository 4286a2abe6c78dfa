use schema::ElementType;
use std::num::NonZeroU16;

/// Fixed level used by the simplified damage formula.
pub const BATTLE_LEVEL: f64 = 50.0;

/// Combined effectiveness of an attacking type against all of a defender's types.
///
/// Each defending type contributes its own multiplier and the results are
/// multiplied together, so a single immunity zeroes the whole hit.
pub fn type_effectiveness(attacking: ElementType, defending: &[ElementType]) -> f32 {
    defending
        .iter()
        .map(|&defender| ElementType::type_effectiveness(attacking, defender))
        .product()
}

/// True when any of the defender's types is immune to the attacking type.
pub fn is_immune(attacking: ElementType, defending: &[ElementType]) -> bool {
    defending
        .iter()
        .any(|&defender| ElementType::is_immune(attacking, defender))
}

/// Calculate the damage a hit deals.
///
/// Uses the classic level-50 formula on physical attack and defense only:
/// `(((2*50/5 + 2) * power * attack / defense) / 50 + 2) * effectiveness`,
/// truncated toward zero and floored at 1. Special attack and special
/// defense are not consulted for any move.
///
/// An effectiveness of zero means the defender is immune and the hit deals
/// no damage at all; the floor of 1 only applies to hits that connect.
pub fn calculate_damage(attack: u16, defense: NonZeroU16, power: u16, effectiveness: f32) -> u16 {
    if effectiveness <= 0.0 {
        return 0;
    }

    let level_factor = 2.0 * BATTLE_LEVEL / 5.0 + 2.0;
    let base = level_factor * f64::from(power) * f64::from(attack) / f64::from(defense.get());
    let raw = (base / 50.0 + 2.0) * f64::from(effectiveness);

    // `as` truncates toward zero and saturates at u16::MAX.
    (raw as u16).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn defense(value: u16) -> NonZeroU16 {
        NonZeroU16::new(value).unwrap()
    }

    #[rstest]
    #[case(ElementType::Water, &[ElementType::Fire], 2.0)]
    #[case(ElementType::Grass, &[ElementType::Water], 2.0)]
    #[case(ElementType::Fire, &[ElementType::Water], 0.5)]
    #[case(ElementType::Normal, &[ElementType::Ghost], 0.0)]
    #[case(ElementType::Ice, &[ElementType::Dragon, ElementType::Ground], 4.0)]
    #[case(ElementType::Fire, &[ElementType::Grass, ElementType::Poison], 2.0)]
    #[case(ElementType::Electric, &[ElementType::Water, ElementType::Ground], 0.0)]
    #[case(ElementType::Grass, &[ElementType::Fire, ElementType::Flying], 0.25)]
    #[case(ElementType::Typeless, &[ElementType::Steel], 1.0)]
    #[case(ElementType::Water, &[ElementType::Typeless, ElementType::Fire], 2.0)]
    fn test_type_effectiveness(
        #[case] attacking: ElementType,
        #[case] defending: &[ElementType],
        #[case] expected: f32,
    ) {
        assert_eq!(type_effectiveness(attacking, defending), expected);
    }

    #[rstest]
    #[case(ElementType::Normal, &[ElementType::Ghost], true)]
    #[case(ElementType::Electric, &[ElementType::Water, ElementType::Ground], true)]
    #[case(ElementType::Ground, &[ElementType::Fire, ElementType::Flying], true)]
    #[case(ElementType::Ice, &[ElementType::Dragon, ElementType::Ground], false)]
    #[case(ElementType::Typeless, &[ElementType::Ghost], false)]
    fn test_immunity_agrees_with_zero_effectiveness(
        #[case] attacking: ElementType,
        #[case] defending: &[ElementType],
        #[case] expected: bool,
    ) {
        assert_eq!(is_immune(attacking, defending), expected);
        assert_eq!(type_effectiveness(attacking, defending) == 0.0, expected);
    }

    #[test]
    fn test_damage_matches_reference_values() {
        // Blastoise hydro-pump into Venusaur: ((22*110*83/83)/50 + 2) * 0.5 = 25.2
        assert_eq!(calculate_damage(83, defense(83), 110, 0.5), 25);
        // Venusaur razor-leaf into Blastoise: ((22*55*82/100)/50 + 2) * 2.0 = 43.688
        assert_eq!(calculate_damage(82, defense(100), 55, 2.0), 43);
        // Venusaur sludge-bomb into Blastoise: (22*90*82/100)/50 + 2 = 34.472
        assert_eq!(calculate_damage(82, defense(100), 90, 1.0), 34);
    }

    #[test]
    fn test_damage_floor_is_one() {
        // Weak hit on a huge defense with a 0.25 multiplier still deals 1.
        assert_eq!(calculate_damage(1, defense(u16::MAX), 1, 0.25), 1);
    }

    #[test]
    fn test_immune_hit_deals_no_damage() {
        assert_eq!(calculate_damage(200, defense(10), 150, 0.0), 0);
    }

    #[test]
    fn test_positive_effectiveness_always_deals_damage() {
        for attack in [1u16, 5, 50, 255, 1000] {
            for def in [1u16, 5, 50, 255, 1000] {
                for power in [1u16, 40, 150, 250] {
                    for effectiveness in [0.25f32, 0.5, 1.0, 2.0, 4.0] {
                        assert!(
                            calculate_damage(attack, defense(def), power, effectiveness) >= 1
                        );
                    }
                }
            }
        }
    }
}
