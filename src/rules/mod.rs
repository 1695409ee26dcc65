//! Game rules: phases, legal plies, mills and the rules engine.
//!
//! `MillRules` implements `RulesEngine` on top of the free functions in
//! `movegen` and `mills`. The turn controller calls into the engine but never
//! inspects the board to decide legality itself.

pub mod engine;
pub mod mills;
pub mod movegen;
pub mod phase;

pub use engine::{GameResult, LossReason, MillRules, RulesEngine};
pub use mills::{find_mills, find_threats, is_threat, ActiveMillSet, Mill, MillTracker};
pub use movegen::{
    can_step, check_destination, check_origin, has_legal_ply, legal_plies, resolve_ply,
    step_destinations, step_map, MoveMap,
};
pub use phase::Phase;
