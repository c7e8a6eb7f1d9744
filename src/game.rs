use rand::Rng;

use crate::config::{GridSize, INITIAL_DIRECTION, INITIAL_SNAKE};
use crate::food::spawn_position;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    /// The snake covers every cell; terminal like `GameOver`.
    Victory,
}

/// Reason the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete state of one game, replaced as a whole on every transition.
///
/// Transitions never mutate in place: `steer`, `start`, `pause`, `reset`
/// and [`crate::engine::advance`] each return the next value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction applied on the last tick.
    pub direction: Direction,
    /// Direction the next tick will apply.
    pub pending_direction: Direction,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    /// Set for the tick right after food was eaten.
    pub just_ate: bool,
    /// False until the first `start` after a reset.
    started: bool,
    bounds: GridSize,
}

impl GameState {
    /// Creates the initial paused state with freshly spawned food.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(bounds: GridSize, rng: &mut R) -> Self {
        let snake = Snake::from_segments(INITIAL_SNAKE);
        let food = spawn_position(rng, bounds, &snake.occupied_cells());

        Self::from_parts(bounds, snake, INITIAL_DIRECTION, food)
    }

    /// Assembles a paused state from explicit parts.
    #[must_use]
    pub fn from_parts(bounds: GridSize, snake: Snake, direction: Direction, food: Position) -> Self {
        Self {
            snake,
            direction,
            pending_direction: direction,
            food,
            score: 0,
            status: GameStatus::Paused,
            death_reason: None,
            tick_count: 0,
            just_ate: false,
            started: false,
            bounds,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// True while ticks should be applied.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// True once the game has ended, whether lost or won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Victory)
    }

    /// True while a fresh game has never been started.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && !self.started
    }

    /// Requests a new direction for the next tick.
    ///
    /// A reversal of the last applied direction keeps the previous pending
    /// direction. Terminal states are returned unchanged.
    #[must_use]
    pub fn steer(&self, requested: Direction) -> Self {
        let mut next = self.clone();
        if !self.is_game_over() && direction_change_is_valid(self.direction, requested) {
            next.pending_direction = requested;
        }
        next
    }

    /// Starts or resumes play, resetting first when the game has ended.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = if self.is_game_over() {
            self.reset(rng)
        } else {
            self.clone()
        };
        next.status = GameStatus::Playing;
        next.started = true;
        next
    }

    /// Stops ticking; a no-op unless currently playing.
    #[must_use]
    pub fn pause(&self) -> Self {
        let mut next = self.clone();
        if next.status == GameStatus::Playing {
            next.status = GameStatus::Paused;
        }
        next
    }

    /// Returns a fresh initial state on the same board.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.bounds, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{DeathReason, GameState, GameStatus};
    use crate::config::{GridSize, INITIAL_SNAKE};
    use crate::input::Direction;
    use crate::snake::Position;

    fn fresh() -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::new(GridSize::square(20), &mut rng);
        (state, rng)
    }

    #[test]
    fn new_state_uses_initial_layout() {
        let (state, _) = fresh();

        assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), INITIAL_SNAKE);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Paused);
        assert!(!state.snake.occupies(state.food));
        assert!(state.is_start_screen());
    }

    #[test]
    fn steer_rejects_reversal_of_applied_direction() {
        let (state, _) = fresh();

        let steered = state.steer(Direction::Left);

        assert_eq!(steered.pending_direction, Direction::Right);
    }

    #[test]
    fn steer_keeps_previous_pending_on_reversal() {
        let (state, _) = fresh();

        let steered = state.steer(Direction::Up).steer(Direction::Left);

        assert_eq!(steered.pending_direction, Direction::Up);
    }

    #[test]
    fn steer_is_checked_against_applied_not_pending_direction() {
        let (state, _) = fresh();

        // Down is the reverse of pending Up but not of applied Right.
        let steered = state.steer(Direction::Up).steer(Direction::Down);

        assert_eq!(steered.pending_direction, Direction::Down);
    }

    #[test]
    fn steer_after_game_over_is_ignored() {
        let (mut state, _) = fresh();
        state.status = GameStatus::GameOver;

        assert_eq!(state.steer(Direction::Up), state);
    }

    #[test]
    fn start_and_pause_toggle_running() {
        let (state, mut rng) = fresh();

        let running = state.start(&mut rng);
        assert!(running.is_running());
        assert_eq!(running.snake, state.snake);

        let paused = running.pause();
        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(paused.pause(), paused);
    }

    #[test]
    fn pause_before_first_tick_is_not_the_start_screen() {
        let (state, mut rng) = fresh();
        assert!(state.is_start_screen());

        let paused = state.start(&mut rng).pause();

        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(paused.tick_count, 0);
        assert!(!paused.is_start_screen());
        assert!(paused.reset(&mut rng).is_start_screen());
    }

    #[test]
    fn start_after_game_over_resets_first() {
        let (mut state, mut rng) = fresh();
        state.status = GameStatus::GameOver;
        state.death_reason = Some(DeathReason::WallCollision);
        state.score = 7;
        state.food = Position { x: 0, y: 0 };

        let restarted = state.start(&mut rng);

        assert_eq!(restarted.status, GameStatus::Playing);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.death_reason, None);
        assert_eq!(restarted.snake.len(), INITIAL_SNAKE.len());
    }

    #[test]
    fn reset_while_running_returns_paused_initial_state() {
        let (state, mut rng) = fresh();
        let running = state.start(&mut rng).steer(Direction::Up);

        let reset = running.reset(&mut rng);

        assert_eq!(reset.status, GameStatus::Paused);
        assert_eq!(reset.pending_direction, Direction::Right);
        assert_eq!(reset.tick_count, 0);
    }
}
