use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::advance;
use crate::game::{GameState, GameStatus};
use crate::input::GameInput;
use crate::timer::TickTimer;

/// Owns the latest game state together with its random source and timer.
///
/// Input and timer firings both go through this single slot, so a tick
/// always sees the most recent direction request.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    rng: StdRng,
    timer: TickTimer,
    best_score: u32,
}

impl GameSession {
    /// Creates a session from a validated configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a session with an explicit random source.
    #[must_use]
    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let state = GameState::new(config.bounds, &mut rng);
        Self {
            state,
            rng,
            timer: TickTimer::new(config.tick_interval),
            best_score: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Highest score reached in this process; never written to disk.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Applies one input event. `Quit` is left to the caller.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        let next = match input {
            GameInput::Direction(direction) => self.state.steer(direction),
            GameInput::Start => self.state.start(&mut self.rng),
            GameInput::Pause => match self.state.status {
                GameStatus::Playing => self.state.pause(),
                GameStatus::Paused => self.state.start(&mut self.rng),
                _ => return,
            },
            GameInput::Reset => self.reset(),
            GameInput::Confirm if self.state.is_game_over() => self.reset(),
            GameInput::Confirm if self.state.is_start_screen() => self.state.start(&mut self.rng),
            GameInput::Confirm | GameInput::Quit => return,
        };

        self.replace_state(next, now);
    }

    /// Runs a tick if the timer is due. Returns true when a tick was applied.
    pub fn update(&mut self, now: Instant) -> bool {
        self.timer.sync(self.state.is_running(), now);
        if !self.timer.fire(now) {
            return false;
        }

        let next = advance(&self.state, &mut self.rng);
        if next.just_ate {
            debug!(score = next.score, length = next.snake.len(), "food eaten");
        }
        self.replace_state(next, now);
        true
    }

    fn reset(&mut self) -> GameState {
        let next = self.state.reset(&mut self.rng);
        debug!(food.x = next.food.x, food.y = next.food.y, "game reset");
        next
    }

    fn replace_state(&mut self, next: GameState, now: Instant) {
        let previous = self.state.status;
        self.state = next;
        self.best_score = self.best_score.max(self.state.score);

        if self.state.status != previous {
            self.log_transition();
        }

        self.timer.sync(self.state.is_running(), now);
    }

    fn log_transition(&self) {
        let state = &self.state;
        match state.status {
            GameStatus::Playing if state.tick_count == 0 => info!("game started"),
            GameStatus::Playing => info!(tick = state.tick_count, "game resumed"),
            GameStatus::Paused if state.tick_count > 0 => {
                info!(tick = state.tick_count, "game paused");
            }
            GameStatus::Paused => {}
            GameStatus::GameOver => info!(
                score = state.score,
                length = state.snake.len(),
                reason = ?state.death_reason,
                "game over"
            ),
            GameStatus::Victory => info!(score = state.score, "board filled"),
        }
    }
}
