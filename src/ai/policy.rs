//! Move policies for the computer player.
//!
//! A policy looks at the position and picks one legal ply for its side. All
//! randomness comes from the state's `GameRng`, so a policy's choices are
//! reproducible from the game seed.

use tracing::debug;

use crate::core::{GameConfig, GameState, Player, Ply};
use crate::rules::legal_plies;

/// Policy for choosing the computer's ply.
pub trait MovePolicy {
    /// Choose a ply for `player`, or `None` if there is nothing to play.
    ///
    /// The state is mutable only so the policy can draw from its RNG; the
    /// board must not be touched.
    fn choose(&self, state: &mut GameState, player: Player, config: &GameConfig) -> Option<Ply>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniformly random legal ply.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, state: &mut GameState, player: Player, config: &GameConfig) -> Option<Ply> {
        let plies = legal_plies(state, player, config);
        let ply = state.rng.choose(&plies).copied();
        debug!(%player, candidates = plies.len(), ?ply, "random ply");
        ply
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
