use crate::combatant::Combatant;
use crate::errors::{BattleResult, RosterError};
use schema::CombatantData;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Combatant used when a lenient lookup finds nothing.
pub const DEFAULT_COMBATANT: &str = "pikachu";

const BUILTIN_ROSTER_RON: &str = include_str!("../data/roster.ron");

static BUILTIN_ROSTER: LazyLock<Result<Roster, RosterError>> =
    LazyLock::new(|| Roster::from_ron_str(BUILTIN_ROSTER_RON));

/// A named set of prefab combatants that battles can be started from.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    entries: Vec<CombatantData>,
}

impl Roster {
    /// The roster compiled into the crate.
    pub fn builtin() -> Result<&'static Roster, RosterError> {
        BUILTIN_ROSTER.as_ref().map_err(Clone::clone)
    }

    /// Parse a RON list of combatants. Every entry must pass validation.
    pub fn from_ron_str(content: &str) -> Result<Self, RosterError> {
        let entries: Vec<CombatantData> =
            ron::from_str(content).map_err(|e| RosterError::Malformed(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Load a roster from a RON file on disk.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path).map_err(|e| RosterError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_entries(entries: Vec<CombatantData>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }
        for entry in &entries {
            Combatant::from_data(entry).map_err(|e| RosterError::Malformed(e.to_string()))?;
        }
        Ok(Roster { entries })
    }

    pub fn entries(&self) -> &[CombatantData] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by name.
    ///
    /// Case-insensitive exact match first; otherwise the first entry whose
    /// name contains the query or is contained in it.
    pub fn find(&self, query: &str) -> Option<&CombatantData> {
        let query = query.trim().to_lowercase();
        let exact = self
            .entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == query);

        exact.or_else(|| {
            self.entries.iter().find(|entry| {
                let name = entry.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
        })
    }

    /// Strict lookup: fails with `UnknownCombatant` when nothing matches.
    pub fn lookup(&self, query: &str) -> BattleResult<Combatant> {
        let data = self
            .find(query)
            .ok_or_else(|| RosterError::UnknownCombatant(query.to_string()))?;
        if !data.name.eq_ignore_ascii_case(query.trim()) {
            tracing::debug!(query, matched = %data.name, "using similar roster entry");
        }
        Ok(Combatant::from_data(data)?)
    }

    /// Lenient lookup: falls back to the default combatant when nothing matches.
    pub fn lookup_or_default(&self, query: &str) -> BattleResult<Combatant> {
        if let Some(data) = self.find(query) {
            return Ok(Combatant::from_data(data)?);
        }

        let fallback = self
            .find(DEFAULT_COMBATANT)
            .unwrap_or(&self.entries[0]);
        tracing::warn!(
            query,
            fallback = %fallback.name,
            "no roster entry matches, using default"
        );
        Ok(Combatant::from_data(fallback)?)
    }
}
