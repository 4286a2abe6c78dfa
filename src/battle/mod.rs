pub mod calculators;
pub mod engine;
pub mod state;
pub mod status;
pub mod turn_orchestrator;

#[cfg(test)]
mod tests;
