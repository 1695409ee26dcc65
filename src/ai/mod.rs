//! Computer opponent.
//!
//! Policies are trait-based so the controller can run any of them:
//! - `HeuristicPolicy`: blocks the opponent's threats, otherwise plays randomly
//! - `RandomPolicy`: uniformly random legal ply, for baselines and fuzzing

mod heuristic;
mod policy;

pub use heuristic::HeuristicPolicy;
pub use policy::{MovePolicy, RandomPolicy};
