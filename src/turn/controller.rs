//! The turn controller.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, error, info, warn};

use crate::ai::{HeuristicPolicy, MovePolicy};
use crate::board::Board;
use crate::capture::{CaptureResolution, CaptureStatus, ImmediateCapture, SelectedCapture};
use crate::core::{
    Cell, ConfigError, GameConfig, GameState, MoveError, Player, PlayerMap, Ply, SnapshotError,
};
use crate::events::{EventLog, EventSink, GameEvent};
use crate::rules::{
    check_origin, find_threats, resolve_ply, GameResult, Mill, MillRules, Phase, RulesEngine,
};

use super::snapshot::GameSnapshot;
use super::TurnState;

/// Sequences human input, captures and computer plies over one game.
///
/// Single-threaded: every entry point runs to completion, and which side may
/// act is decided entirely by the current `TurnState`. The three human entry
/// points return the new state or a `MoveError`; a rejected call changes
/// nothing.
///
/// ## Example
///
/// ```
/// use rust_mill::core::{Cell, GameConfig};
/// use rust_mill::turn::{TurnController, TurnState};
///
/// let mut game = TurnController::new(GameConfig::default().with_ai_delay_ms(0)).unwrap();
/// assert_eq!(game.try_move_to(Cell::new(0, 0)), Ok(TurnState::AiDeliberating));
/// assert_eq!(game.run_ai_turn(), Ok(TurnState::AwaitingHumanAction));
/// ```
pub struct TurnController<P: MovePolicy = HeuristicPolicy, S: EventSink = EventLog> {
    rules: MillRules,
    state: GameState,
    turn: TurnState,
    human_capture: SelectedCapture,
    ai_capture: ImmediateCapture,
    policy: P,
    sink: S,
    /// Last phase announced per player.
    phases: PlayerMap<Phase>,
}

impl TurnController {
    /// Start a game against the heuristic opponent, buffering events.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, HeuristicPolicy, EventLog::new())
    }

    /// Resume a snapshot against the heuristic opponent.
    pub fn restore(config: GameConfig, snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        Self::restore_with(config, snapshot, HeuristicPolicy, EventLog::new())
    }
}

impl<P: MovePolicy, S: EventSink> TurnController<P, S> {
    /// Start a game with a custom policy and event sink.
    pub fn with_parts(config: GameConfig, policy: P, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(config.seed);
        let turn = opening_turn(&config);
        let mut controller = Self {
            phases: PlayerMap::new(|player| state.phase(player, &config)),
            rules: MillRules::new(config),
            state,
            turn,
            human_capture: SelectedCapture::new(),
            ai_capture: ImmediateCapture::new(),
            policy,
            sink,
        };
        controller.announce();
        info!(human = %controller.human(), seed = controller.config().seed, "game started");
        Ok(controller)
    }

    /// Resume a snapshot with a custom policy and event sink.
    pub fn restore_with(
        config: GameConfig,
        snapshot: GameSnapshot,
        policy: P,
        sink: S,
    ) -> Result<Self, SnapshotError> {
        config.validate()?;
        snapshot.validate(&config)?;
        let (state, turn) = snapshot.into_state();

        let human_capture = match turn {
            TurnState::AwaitingCaptureSelection { player, remaining } => {
                SelectedCapture::awaiting(player, remaining)
            }
            _ => SelectedCapture::new(),
        };
        let mut controller = Self {
            phases: PlayerMap::new(|player| state.phase(player, &config)),
            rules: MillRules::new(config),
            state,
            turn,
            human_capture,
            ai_capture: ImmediateCapture::new(),
            policy,
            sink,
        };
        controller.announce();
        info!(turn = ?controller.turn, plies = controller.state.history.len(), "game restored");
        Ok(controller)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn human(&self) -> Player {
        self.config().human
    }

    #[must_use]
    pub fn ai(&self) -> Player {
        self.config().ai()
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.state.score(player)
    }

    #[must_use]
    pub fn phase(&self, player: Player) -> Phase {
        self.state.phase(player, self.rules.config())
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.turn.result()
    }

    /// Pause the driver should take before calling `run_ai_turn`.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        self.config().ai_delay()
    }

    /// Legal plies for a player in the current position.
    #[must_use]
    pub fn legal_plies(&self, player: Player) -> Vec<Ply> {
        self.rules.legal_plies(&self.state, player)
    }

    /// Empty points where `attacker` is one piece from a mill.
    #[must_use]
    pub fn threats(&self, attacker: Player) -> Vec<Cell> {
        find_threats(&self.state.board, attacker)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Capture everything needed to resume this game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, self.turn)
    }

    // === Human Input ===

    /// Pick up one of the human's pieces for a move.
    ///
    /// Allowed again while a move is in flight, replacing the origin.
    pub fn try_select_origin(&mut self, cell: Cell) -> Result<TurnState, MoveError> {
        self.human_origin()?;
        let human = self.human();

        if self.phase(human) == Phase::Placement {
            return self.reject(MoveError::PlacementPending);
        }
        if let Err(err) = check_origin(&self.state.board, human, cell) {
            return self.reject(err);
        }

        debug!(%cell, "origin selected");
        self.turn = TurnState::HumanMoveInFlight { origin: cell };
        Ok(self.turn)
    }

    /// Place a piece on `cell`, or move the selected piece there.
    pub fn try_move_to(&mut self, cell: Cell) -> Result<TurnState, MoveError> {
        let origin = self.human_origin()?;
        let human = self.human();

        let ply = match resolve_ply(&self.state, human, origin, cell, self.rules.config()) {
            Ok(ply) => ply,
            Err(err) => return self.reject(err),
        };

        let formed = self.play(human, ply);
        if self.check_material() {
            return Ok(self.turn);
        }

        if !formed.is_empty() {
            self.human_capture.queue(human, formed.len() as u8);
            let report = self.human_capture.process(&self.rules, &mut self.state);
            if let CaptureStatus::AwaitingSelection { player, remaining } = report.status {
                self.await_selection(player, remaining);
                return Ok(self.turn);
            }
        }

        self.hand_to_ai();
        Ok(self.turn)
    }

    /// Remove the opponent piece at `cell` for an earned capture.
    pub fn confirm_capture_selection(&mut self, cell: Cell) -> Result<TurnState, MoveError> {
        match self.turn {
            TurnState::AwaitingCaptureSelection { .. } => {}
            TurnState::GameOver(_) => return Err(MoveError::GameOver),
            _ => return Err(MoveError::NoCapturePending),
        }

        let report = match self.human_capture.select(&self.rules, &mut self.state, cell) {
            Ok(report) => report,
            Err(err) => return self.reject(err),
        };
        let human = self.human();
        self.removed(human, &report.removed);
        if self.check_material() {
            return Ok(self.turn);
        }

        match report.status {
            CaptureStatus::AwaitingSelection { player, remaining } => {
                self.await_selection(player, remaining)
            }
            CaptureStatus::Complete => self.hand_to_ai(),
        }
        Ok(self.turn)
    }

    // === Computer ===

    /// Play the computer's ply, resolving its captures immediately.
    ///
    /// The driver is expected to wait `ai_delay()` first; the controller
    /// itself never sleeps.
    pub fn run_ai_turn(&mut self) -> Result<TurnState, MoveError> {
        match self.turn {
            TurnState::AiDeliberating => {}
            TurnState::AwaitingCaptureSelection { player, remaining } => {
                error!(
                    %player,
                    remaining, "computer ply requested while a capture selection is pending"
                );
                return Err(MoveError::CaptureSelectionPending);
            }
            TurnState::GameOver(_) => return Err(MoveError::GameOver),
            _ => return Err(MoveError::NotAiTurn),
        }

        let ai = self.ai();
        if let Some(result) = self.rules.is_terminal(&self.state, ai) {
            self.finish(result);
            return Ok(self.turn);
        }

        match self.policy.choose(&mut self.state, ai, self.rules.config()) {
            Some(ply) => {
                let formed = self.play(ai, ply);
                if !formed.is_empty() {
                    self.ai_capture.queue(ai, formed.len() as u8);
                    let report = self.ai_capture.process(&self.rules, &mut self.state);
                    self.removed(ai, &report.removed);
                }
                if self.check_material() {
                    return Ok(self.turn);
                }
            }
            None => {
                warn!(player = %ai, policy = self.policy.name(), "no ply available, forfeiting");
                self.sink.emit(GameEvent::AiForfeited { player: ai });
            }
        }

        self.hand_to_human();
        Ok(self.turn)
    }

    // === Lifecycle ===

    /// Start over with a fresh board, zero scores and the configured seed.
    pub fn restart(&mut self) {
        let config = self.rules.config();
        self.state = GameState::new(config.seed);
        self.turn = opening_turn(config);
        self.phases = PlayerMap::new(|player| self.state.phase(player, config));
        self.human_capture.clear();
        self.ai_capture.clear();
        info!("game restarted");
        self.announce();
    }

    // === Internals ===

    /// The selected origin if the human may act, else why not.
    fn human_origin(&self) -> Result<Option<Cell>, MoveError> {
        match self.turn {
            TurnState::AwaitingHumanAction => Ok(None),
            TurnState::HumanMoveInFlight { origin } => Ok(Some(origin)),
            TurnState::AwaitingCaptureSelection { .. } => Err(MoveError::CaptureSelectionPending),
            TurnState::AiDeliberating => Err(MoveError::NotHumanTurn),
            TurnState::GameOver(_) => Err(MoveError::GameOver),
        }
    }

    fn reject(&mut self, err: MoveError) -> Result<TurnState, MoveError> {
        debug!(%err, "input rejected");
        if let MoveError::InvalidTarget { cell, reason } = err {
            self.sink.emit(GameEvent::InvalidTarget { cell, reason });
        }
        Err(err)
    }

    fn play(&mut self, player: Player, ply: Ply) -> SmallVec<[Mill; 2]> {
        let formed = self.rules.apply_ply(&mut self.state, player, ply);

        self.sink.emit(GameEvent::PlyApplied { player, ply });
        self.sink.emit(GameEvent::BoardChanged(self.state.board.snapshot()));
        for &mill in &formed {
            self.sink.emit(GameEvent::MillFormed { player, mill });
        }
        if !formed.is_empty() {
            self.emit_scores();
        }
        self.sync_phases();
        formed
    }

    fn removed(&mut self, by: Player, cells: &[Cell]) {
        if cells.is_empty() {
            return;
        }
        for &cell in cells {
            self.sink.emit(GameEvent::PieceRemoved { by, cell });
        }
        self.sink.emit(GameEvent::BoardChanged(self.state.board.snapshot()));
        self.sync_phases();
    }

    fn await_selection(&mut self, player: Player, remaining: u8) {
        self.turn = TurnState::AwaitingCaptureSelection { player, remaining };
        self.sink.emit(GameEvent::CaptureRequested { player, remaining });
    }

    fn hand_to_ai(&mut self) {
        let ai = self.ai();
        match self.rules.is_terminal(&self.state, ai) {
            Some(result) => self.finish(result),
            None => {
                self.turn = TurnState::AiDeliberating;
                self.sink.emit(GameEvent::AiThinking);
            }
        }
    }

    fn hand_to_human(&mut self) {
        let human = self.human();
        match self.rules.is_terminal(&self.state, human) {
            Some(result) => self.finish(result),
            None => self.turn = TurnState::AwaitingHumanAction,
        }
    }

    /// End the game if either side is out of material.
    fn check_material(&mut self) -> bool {
        match self.rules.material_loss(&self.state) {
            Some(result) => {
                self.finish(result);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.human_capture.clear();
        self.ai_capture.clear();
        self.turn = TurnState::GameOver(result);
        info!(winner = %result.winner, reason = ?result.reason, "game over");
        self.sink.emit(GameEvent::GameOver(result));
    }

    fn sync_phases(&mut self) {
        for player in Player::ALL {
            let phase = self.state.phase(player, self.rules.config());
            if phase != self.phases[player] {
                self.phases[player] = phase;
                info!(%player, %phase, "phase changed");
                self.sink.emit(GameEvent::PhaseChanged { player, phase });
            }
        }
    }

    fn emit_scores(&mut self) {
        self.sink.emit(GameEvent::ScoreChanged {
            white: self.state.score(Player::White),
            black: self.state.score(Player::Black),
        });
    }

    /// Full refresh for a renderer: board, scores, and whose turn it is.
    fn announce(&mut self) {
        self.sink.emit(GameEvent::BoardChanged(self.state.board.snapshot()));
        self.emit_scores();
        match self.turn {
            TurnState::AiDeliberating => self.sink.emit(GameEvent::AiThinking),
            TurnState::AwaitingCaptureSelection { player, remaining } => {
                self.sink.emit(GameEvent::CaptureRequested { player, remaining });
            }
            TurnState::GameOver(result) => self.sink.emit(GameEvent::GameOver(result)),
            _ => {}
        }
    }
}

fn opening_turn(config: &GameConfig) -> TurnState {
    if config.human == Player::White {
        TurnState::AwaitingHumanAction
    } else {
        TurnState::AiDeliberating
    }
}
