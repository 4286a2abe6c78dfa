//! Command-line battle runner.
//!
//! Battles two roster combatants and prints the log, the winner and
//! statistics (or the whole outcome as JSON).

use clap::Parser;
use pokemon_duel::mcp_interface::{outcome_report, roster_display};
use pokemon_duel::{simulate_with_config, BattleConfig, Roster};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pokemon Duel - simulate a one-on-one battle
#[derive(Parser, Debug)]
#[command(name = "pokemon-duel")]
#[command(about = "Simulate a battle between two roster combatants")]
struct Args {
    /// First combatant (acts first on a speed tie)
    #[arg(required_unless_present = "list")]
    pokemon_a: Option<String>,

    /// Second combatant
    #[arg(required_unless_present = "list")]
    pokemon_b: Option<String>,

    /// Random seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds before the battle is decided on remaining hp
    #[arg(long)]
    max_turns: Option<u32>,

    /// RON battle config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// RON roster file to use instead of the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Use pikachu for names that match no roster entry instead of failing
    #[arg(long)]
    fallback: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// List the roster and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokemon_duel=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let loaded_roster;
    let roster = match &args.roster {
        Some(path) => {
            loaded_roster = Roster::load(path)?;
            &loaded_roster
        }
        None => Roster::builtin()?,
    };

    if args.list {
        print!("{}", roster_display(roster));
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::default(),
    }
    .with_overrides(args.max_turns, args.seed);

    let (Some(name_a), Some(name_b)) = (args.pokemon_a.as_deref(), args.pokemon_b.as_deref())
    else {
        return Err("two combatant names are required".into());
    };

    let (a, b) = if args.fallback {
        (roster.lookup_or_default(name_a)?, roster.lookup_or_default(name_b)?)
    } else {
        (roster.lookup(name_a)?, roster.lookup(name_b)?)
    };

    let outcome = simulate_with_config(&a, &b, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{:#}\n", a);
        println!("{:#}\n", b);
        print!("{}", outcome_report(&outcome));
    }

    Ok(())
}
