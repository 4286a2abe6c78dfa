use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::StatusCondition;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Chance (out of 100) that paralysis stops a combatant from acting.
pub const PARALYSIS_SKIP_CHANCE: u8 = 25;

/// A single entry of the battle log.
///
/// Renderers match on the formatted text ("Turn", "used", "→", "fainted",
/// "hurt by", "affected by"), so the wording produced by [`BattleEvent::format`]
/// must stay stable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },
    MoveUsed {
        attacker: String,
        defender: String,
        move_name: String,
        damage: u16,
        effectiveness: f32,
    },
    MoveHadNoEffect {
        attacker: String,
        defender: String,
        move_name: String,
    },
    StatusInflicted {
        target: String,
        status: StatusCondition,
    },
    StatusDamage {
        target: String,
        status: StatusCondition,
        damage: u16,
    },
    FullyParalyzed {
        target: String,
    },
    Fainted {
        target: String,
    },
}

impl BattleEvent {
    /// Formats the event into the human-readable log line.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::RoundStarted { round } => format!("--- Turn {} ---", round),
            BattleEvent::MoveUsed {
                attacker,
                defender,
                move_name,
                damage,
                ..
            } => format!(
                "{} used {} → {} lost {} HP!",
                attacker, move_name, defender, damage
            ),
            BattleEvent::MoveHadNoEffect {
                attacker,
                defender,
                move_name,
            } => format!(
                "{} used {} → It had no effect on {}!",
                attacker, move_name, defender
            ),
            BattleEvent::StatusInflicted { target, status } => {
                format!("{} is now affected by {}!", target, status)
            }
            BattleEvent::StatusDamage {
                target,
                status,
                damage,
            } => match status {
                StatusCondition::Burn => {
                    format!("{} is hurt by its burn ({} HP)!", target, damage)
                }
                _ => format!("{} is hurt by {} ({} HP)!", target, status, damage),
            },
            BattleEvent::FullyParalyzed { target } => {
                format!("{} is paralyzed! It can't move!", target)
            }
            BattleEvent::Fainted { target } => format!("{} fainted!", target),
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Event bus for collecting battle events in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::trace!(event = %event, "battle event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// The formatted log lines, in order.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// Random source owned by a single simulation.
///
/// `Random` draws from a `StdRng` (seeded or OS-seeded); `Scripted` replays a
/// fixed list of outcomes so tests can force paralysis rolls and move picks.
#[derive(Debug, Clone)]
pub enum TurnRng {
    Random(StdRng),
    Scripted {
        outcomes: VecDeque<u8>,
    },
}

impl TurnRng {
    pub fn from_seed(seed: u64) -> Self {
        TurnRng::Random(StdRng::seed_from_u64(seed))
    }

    pub fn new_random() -> Self {
        TurnRng::Random(StdRng::from_os_rng())
    }

    /// Seeded when a seed is given, otherwise seeded from the OS.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new_random(),
        }
    }

    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        TurnRng::Scripted {
            outcomes: outcomes.into(),
        }
    }

    fn next_scripted(outcomes: &mut VecDeque<u8>, reason: &str) -> u8 {
        match outcomes.pop_front() {
            Some(outcome) => outcome,
            None => panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            ),
        }
    }

    /// Roll a value in 1..=100.
    pub fn roll_percent(&mut self, reason: &str) -> u8 {
        let outcome = match self {
            TurnRng::Random(rng) => rng.random_range(1..=100),
            TurnRng::Scripted { outcomes } => Self::next_scripted(outcomes, reason),
        };
        tracing::trace!(outcome, reason, "rng roll");
        outcome
    }

    /// Pick an index in 0..len uniformly. Scripted outcomes are taken modulo `len`.
    pub fn choose_index(&mut self, len: usize, reason: &str) -> usize {
        debug_assert!(len > 0, "cannot choose from an empty list");
        let index = match self {
            TurnRng::Random(rng) => rng.random_range(0..len),
            TurnRng::Scripted { outcomes } => {
                usize::from(Self::next_scripted(outcomes, reason)) % len
            }
        };
        tracing::trace!(index, len, reason, "rng choice");
        index
    }
}

/// Who won a battle. Serializes as the winner's name or the literal "Draw".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Combatant(String),
    Draw,
}

impl Winner {
    pub fn name(&self) -> &str {
        match self {
            Winner::Combatant(name) => name,
            Winner::Draw => "Draw",
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Winner {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Summary counts over a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleStatistics {
    pub rounds: u32,
    pub moves_used: u32,
    pub statuses_inflicted: u32,
}

impl BattleStatistics {
    pub fn from_events(events: &[BattleEvent]) -> Self {
        events
            .iter()
            .fold(BattleStatistics::default(), |mut stats, event| {
                match event {
                    BattleEvent::RoundStarted { .. } => stats.rounds += 1,
                    BattleEvent::MoveUsed { .. } | BattleEvent::MoveHadNoEffect { .. } => {
                        stats.moves_used += 1
                    }
                    BattleEvent::StatusInflicted { .. } => stats.statuses_inflicted += 1,
                    _ => {}
                }
                stats
            })
    }
}

/// Final result of a simulation.
#[derive(Debug, Clone, Serialize)]
pub struct BattleOutcome {
    pub winner: Winner,
    pub log: Vec<String>,
    pub statistics: BattleStatistics,
    #[serde(skip)]
    pub events: Vec<BattleEvent>,
}

impl BattleOutcome {
    pub fn from_events(winner: Winner, events: Vec<BattleEvent>) -> Self {
        Self {
            winner,
            log: events.iter().map(BattleEvent::format).collect(),
            statistics: BattleStatistics::from_events(&events),
            events,
        }
    }
}
