//! Text and JSON helpers behind the MCP server tools and the CLI.
//!
//! Every function here takes plain inputs and returns a string, so the server
//! binary only has to wrap results in tool responses.

use crate::battle::engine::simulate;
use crate::battle::state::BattleOutcome;
use crate::combatant::Combatant;
use crate::errors::{BattleResult, RosterError};
use crate::roster::Roster;
use schema::CombatantData;
use serde_json::{json, Value};

/// Reply for the `ping` tool.
pub fn ping_response(text: Option<&str>) -> Value {
    json!({ "echo": text.unwrap_or("pong") })
}

/// Numbered listing of the roster with types and moves.
pub fn roster_display(roster: &Roster) -> String {
    let mut output = String::from("Available Combatants:\n");
    for (i, entry) in roster.entries().iter().enumerate() {
        let types: Vec<String> = entry.types.iter().map(|t| t.to_string()).collect();
        let moves: Vec<&str> = entry.moves.iter().map(|m| m.name.as_str()).collect();
        output.push_str(&format!(
            "  {:>2}. {} [{}] - {}\n",
            i + 1,
            entry.name,
            types.join("/"),
            moves.join(", ")
        ));
    }
    output
}

/// Full record of one roster entry as pretty JSON.
pub fn combatant_details(roster: &Roster, name: &str) -> BattleResult<String> {
    let entry = roster
        .find(name)
        .ok_or_else(|| RosterError::UnknownCombatant(name.to_string()))?;
    Ok(serde_json::to_string_pretty(entry)?)
}

/// Battle two roster entries and return the outcome as pretty JSON.
pub fn simulate_roster_battle(
    roster: &Roster,
    pokemon_a: &str,
    pokemon_b: &str,
    max_turns: Option<u32>,
    seed: Option<u64>,
) -> BattleResult<String> {
    let a = roster.lookup(pokemon_a)?;
    let b = roster.lookup(pokemon_b)?;
    run_to_json(&a, &b, max_turns, seed)
}

/// Battle two caller-supplied combatant records and return the outcome as pretty JSON.
///
/// Records use the same shape as roster entries: `name`, `types`, `stats`
/// (with `special-attack` / `special-defense`) and `moves` of
/// `{name, type, power}`.
pub fn simulate_custom_battle(
    combatant_a: &Value,
    combatant_b: &Value,
    max_turns: Option<u32>,
    seed: Option<u64>,
) -> BattleResult<String> {
    let a: CombatantData = serde_json::from_value(combatant_a.clone())?;
    let b: CombatantData = serde_json::from_value(combatant_b.clone())?;
    let a = Combatant::from_data(&a)?;
    let b = Combatant::from_data(&b)?;
    run_to_json(&a, &b, max_turns, seed)
}

fn run_to_json(
    a: &Combatant,
    b: &Combatant,
    max_turns: Option<u32>,
    seed: Option<u64>,
) -> BattleResult<String> {
    let outcome = simulate(a, b, seed, max_turns)?;
    Ok(serde_json::to_string_pretty(&outcome)?)
}

/// Human-readable report: the log, the winner and a statistics summary.
pub fn outcome_report(outcome: &BattleOutcome) -> String {
    let mut output = String::new();
    for line in &outcome.log {
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');
    if outcome.winner.is_draw() {
        output.push_str("Result: Draw\n");
    } else {
        output.push_str(&format!("Winner: {}\n", outcome.winner));
    }
    let stats = &outcome.statistics;
    output.push_str(&format!(
        "Rounds: {} | Moves used: {} | Status effects: {}\n",
        stats.rounds, stats.moves_used, stats.statuses_inflicted
    ));
    output
}
