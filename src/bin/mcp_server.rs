//! Pokemon Duel MCP Server
//!
//! A Model Context Protocol server over stdio (rmcp) that exposes the battle
//! simulator and the built-in roster as tools.

use std::borrow::Cow;
use std::sync::Arc;

use pokemon_duel::mcp_interface::*;
use pokemon_duel::{BattleEngineError, Roster};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct PokemonDuelService {
    tool_router: ToolRouter<PokemonDuelService>,
    roster: Arc<Roster>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PingRequest {
    #[schemars(description = "Text to echo back (defaults to 'pong')")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCombatantRequest {
    #[schemars(description = "Roster name of the combatant (partial names match)")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimulateBattleRequest {
    #[schemars(description = "Roster name of the first combatant (wins speed ties)")]
    pub pokemon_a: String,
    #[schemars(description = "Roster name of the second combatant")]
    pub pokemon_b: String,
    #[schemars(description = "Rounds before the battle is decided on remaining hp (default 100)")]
    pub max_turns: Option<u32>,
    #[schemars(description = "Random seed for a reproducible battle")]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimulateCustomBattleRequest {
    #[schemars(
        description = "First combatant: {name, types, stats: {hp, attack, defense, special-attack, special-defense, speed}, moves: [{name, type, power}]}"
    )]
    pub combatant_a: serde_json::Value,
    #[schemars(description = "Second combatant, same shape as combatant_a")]
    pub combatant_b: serde_json::Value,
    #[schemars(description = "Rounds before the battle is decided on remaining hp (default 100)")]
    pub max_turns: Option<u32>,
    #[schemars(description = "Random seed for a reproducible battle")]
    pub seed: Option<u64>,
}

fn tool_error(context: &str, err: BattleEngineError) -> McpError {
    tracing::warn!(error = %err, "{}", context);
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(format!("{}: {}", context, err)),
        data: None,
    }
}

#[tool_router]
impl PokemonDuelService {
    pub fn new(roster: Roster) -> Self {
        Self {
            tool_router: Self::tool_router(),
            roster: Arc::new(roster),
        }
    }

    #[tool(description = "Simple connectivity check that echoes its input")]
    async fn ping(
        &self,
        Parameters(request): Parameters<PingRequest>,
    ) -> Result<CallToolResult, McpError> {
        let reply = ping_response(request.text.as_deref());
        Ok(CallToolResult::success(vec![Content::text(reply.to_string())]))
    }

    #[tool(description = "List the combatants available for simulate_battle")]
    async fn list_roster(&self) -> Result<CallToolResult, McpError> {
        let text = roster_display(&self.roster);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get the types, base stats and moves of a roster combatant")]
    async fn get_combatant(
        &self,
        Parameters(request): Parameters<GetCombatantRequest>,
    ) -> Result<CallToolResult, McpError> {
        let details = combatant_details(&self.roster, &request.name)
            .map_err(|e| tool_error("Error looking up combatant", e))?;
        Ok(CallToolResult::success(vec![Content::text(details)]))
    }

    #[tool(description = "Run a battle between two roster combatants and return the winner, log and statistics")]
    async fn simulate_battle(
        &self,
        Parameters(request): Parameters<SimulateBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = simulate_roster_battle(
            &self.roster,
            &request.pokemon_a,
            &request.pokemon_b,
            request.max_turns,
            request.seed,
        )
        .map_err(|e| tool_error("Error simulating battle", e))?;
        Ok(CallToolResult::success(vec![Content::text(outcome)]))
    }

    #[tool(description = "Run a battle between two caller-defined combatants and return the winner, log and statistics")]
    async fn simulate_custom_battle(
        &self,
        Parameters(request): Parameters<SimulateCustomBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = simulate_custom_battle(
            &request.combatant_a,
            &request.combatant_b,
            request.max_turns,
            request.seed,
        )
        .map_err(|e| tool_error("Error simulating custom battle", e))?;
        Ok(CallToolResult::success(vec![Content::text(outcome)]))
    }
}

#[tool_handler]
impl ServerHandler for PokemonDuelService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokemon_duel=info,pokemon_duel_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let roster = Roster::builtin()?.clone();
    tracing::info!(combatants = roster.len(), "Pokemon Duel MCP server starting");

    let service = PokemonDuelService::new(roster);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("server running, waiting for shutdown");

    let quit_reason = server.waiting().await?;
    tracing::info!(?quit_reason, "Pokemon Duel MCP server exiting");
    Ok(())
}
