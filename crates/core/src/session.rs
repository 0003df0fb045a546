//! Session - one game on top of the field engine
//!
//! Owns the [`PlayField`], the active [`Block`], the spawn bag and the game
//! flags. Everything is driven from the outside: `apply_action` for player
//! requests and `tick` for elapsed time.
//!
//! The per-placement pipeline is
//!
//! ```text
//! placed -> rows completed? -> score + input pause -> spawn next -> game over if blocked
//! ```

use tracing::{debug, info};

use crate::block::Block;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::events::Listener;
use crate::field::{MoveOutcome, PlayField};
use crate::gate::DelayGate;
use crate::grid::BlockId;
use crate::rng::PieceBag;
use crate::scoring::Score;
use crate::shapes::spawn_block;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{GameAction, PieceKind, RotationDirection};

#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    field: PlayField,
    active: Option<Block>,
    stash: Option<PieceKind>,
    /// Cleared by a stash swap, restored when a block is placed.
    can_stash: bool,
    bag: PieceBag,
    next_block_id: BlockId,
    score: Score,
    rows_cleared: u32,
    blocks_placed: u32,
    gravity_timer_ms: u32,
    game_time_ms: u64,
    row_clear_gate: DelayGate,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl Session {
    /// Create a session on a validated `config`; `listeners` see every field event.
    pub fn new(config: GameConfig, listeners: Vec<Listener>) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            field: PlayField::with_listeners(config.dimensions(), listeners),
            bag: PieceBag::new(config.seed),
            config,
            active: None,
            stash: None,
            can_stash: true,
            next_block_id: 1,
            score: Score::default(),
            rows_cleared: 0,
            blocks_placed: 0,
            gravity_timer_ms: 0,
            game_time_ms: 0,
            row_clear_gate: DelayGate::new(),
            started: false,
            paused: false,
            game_over: false,
        })
    }

    /// Spawn the first block. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let kind = self.bag.draw();
        self.spawn(kind);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    pub fn active(&self) -> Option<&Block> {
        self.active.as_ref()
    }

    pub fn stash(&self) -> Option<PieceKind> {
        self.stash
    }

    pub fn can_stash(&self) -> bool {
        self.can_stash
    }

    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn score(&self) -> f64 {
        self.score.points()
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn blocks_placed(&self) -> u32 {
        self.blocks_placed
    }

    pub fn game_time_ms(&self) -> u64 {
        self.game_time_ms
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Input is frozen after a row completion until this clears.
    pub fn is_row_clear_pending(&self) -> bool {
        self.row_clear_gate.is_active()
    }

    /// Apply a player request; returns whether anything changed.
    ///
    /// Requests are dropped (not queued) before `start`, after game over,
    /// while paused (except `Pause`) and while the row-completion pause runs.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        if action == GameAction::Pause {
            self.paused = !self.paused;
            debug!(paused = self.paused, "pause toggled");
            return true;
        }
        if self.paused || self.row_clear_gate.is_active() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.shift(-1, 0),
            GameAction::MoveRight => self.shift(1, 0),
            GameAction::MoveDown => self.shift(0, 1),
            GameAction::RotateCw => self.rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDirection::CounterClockwise),
            GameAction::Stash => self.swap_stash(),
            GameAction::InstantPlace => self.instant_place(),
            GameAction::Pause => unreachable!("pause handled above"),
        }
    }

    /// Advance game time by `elapsed_ms`; returns whether gravity moved the block.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }
        self.game_time_ms += u64::from(elapsed_ms);

        if self.row_clear_gate.is_active() {
            self.row_clear_gate.tick(elapsed_ms);
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.config.gravity_ms {
            return false;
        }
        // One step per tick; the leftover keeps the gravity phase.
        self.gravity_timer_ms %= self.config.gravity_ms;
        self.shift(0, 1)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            dimensions: self.field.dimensions(),
            cells: self.field.grid().to_codes(),
            active: self.active.as_ref().map(|block| ActiveSnapshot {
                kind: block.kind(),
                cells: block.coordinates().collect(),
            }),
            stash: self.stash,
            next: self.bag.peek(),
            score: self.score.points(),
            rows_cleared: self.rows_cleared,
            blocks_placed: self.blocks_placed,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(block) = self.active.as_mut() else {
            return false;
        };
        let outcome = self.field.try_move(block, dx, dy);
        self.settle(outcome)
    }

    fn rotate(&mut self, direction: RotationDirection) -> bool {
        let Some(block) = self.active.as_mut() else {
            return false;
        };
        let outcome = self.field.try_rotate(block, direction);
        self.settle(outcome)
    }

    fn instant_place(&mut self) -> bool {
        let Some(block) = self.active.as_mut() else {
            return false;
        };
        // A blocked downward move always places, so this terminates.
        loop {
            match self.field.try_move(block, 0, 1) {
                MoveOutcome::Moved => continue,
                outcome => return self.settle(outcome),
            }
        }
    }

    fn swap_stash(&mut self) -> bool {
        if !self.can_stash {
            return false;
        }
        let Some(block) = self.active.take() else {
            return false;
        };

        self.field.remove_block(&block);
        let kind = match self.stash.replace(block.kind()) {
            Some(stashed) => stashed,
            None => self.bag.draw(),
        };
        debug!(stashed = block.kind().as_str(), next = kind.as_str(), "stash swap");

        self.spawn(kind);
        self.can_stash = false;
        true
    }

    /// Follow up on a move outcome; returns whether anything changed.
    fn settle(&mut self, outcome: MoveOutcome) -> bool {
        match outcome {
            MoveOutcome::Moved => true,
            MoveOutcome::Rejected => false,
            MoveOutcome::Placed { rows_cleared } => {
                self.on_placed(rows_cleared);
                true
            }
        }
    }

    fn on_placed(&mut self, rows: u32) {
        self.active = None;
        self.blocks_placed += 1;
        self.gravity_timer_ms = 0;
        self.can_stash = true;

        if rows > 0 {
            let secs = self.game_time_ms as f64 / 1000.0;
            let gained = self.score.add_rows(rows, secs, self.config.difficulty);
            self.rows_cleared += rows;
            self.row_clear_gate.start(self.config.row_clear_pause_ms);
            debug!(rows, gained, total = self.score.points(), "score updated");
        }

        let kind = self.bag.draw();
        self.spawn(kind);
    }

    fn spawn(&mut self, kind: PieceKind) {
        let id = self.next_block_id;
        self.next_block_id = self.next_block_id.wrapping_add(1);

        let block = spawn_block(id, kind, self.field.dimensions());
        if !self.field.can_spawn(&block) {
            self.game_over = true;
            info!(
                kind = kind.as_str(),
                score = self.score.points(),
                rows = self.rows_cleared,
                "game over: spawn blocked"
            );
            return;
        }

        self.field.add_block(&block);
        self.active = Some(block);
    }
}
