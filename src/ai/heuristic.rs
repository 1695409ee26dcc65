//! Threat-blocking heuristic.
//!
//! Before every ply the policy recomputes the opponent's threats, the empty
//! points where the opponent would complete a mill, and tries to occupy one:
//!
//! | Phase | With a threat | Without |
//! |---|---|---|
//! | Placement | place on the first threat | place on a random empty point |
//! | Moving | step onto the first threat any piece reaches | random legal step |
//! | Flying | fly a random piece to the first threat | fly a random piece to a random empty point |
//!
//! "First" is row-major scan order. Random choices sample uniformly from the
//! full candidate set.

use tracing::debug;

use crate::core::{Cell, GameConfig, GameState, Player, Ply};
use crate::rules::{find_threats, legal_plies, Phase};

use super::policy::MovePolicy;

/// The computer opponent's default policy.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    fn place(state: &mut GameState, threats: &[Cell]) -> Option<Ply> {
        let to = match threats.first() {
            Some(&cell) => cell,
            None => state.rng.choose_iter(state.board.empty_cells())?,
        };
        Some(Ply::Place { to })
    }

    /// Block the first threat, in scan order, that some piece can reach.
    fn step(
        state: &mut GameState,
        player: Player,
        config: &GameConfig,
        threats: &[Cell],
    ) -> Option<Ply> {
        let plies = legal_plies(state, player, config);
        threats
            .iter()
            .find_map(|&threat| plies.iter().find(|ply| ply.destination() == threat))
            .copied()
            .or_else(|| state.rng.choose(&plies).copied())
    }

    fn fly(state: &mut GameState, player: Player, threats: &[Cell]) -> Option<Ply> {
        let to = match threats.first() {
            Some(&cell) => cell,
            None => state.rng.choose_iter(state.board.empty_cells())?,
        };
        let from = state.rng.choose_iter(state.board.pieces(player))?;
        Some(Ply::Fly { from, to })
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose(&self, state: &mut GameState, player: Player, config: &GameConfig) -> Option<Ply> {
        let threats = find_threats(&state.board, player.opponent());
        let phase = state.phase(player, config);
        debug!(%player, %phase, threats = ?threats, "choosing ply");

        match phase {
            Phase::Placement => Self::place(state, &threats),
            Phase::Moving => Self::step(state, player, config, &threats),
            Phase::Flying => Self::fly(state, player, &threats),
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
