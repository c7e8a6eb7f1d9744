use std::time::Duration;

use thiserror::Error;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with `side` cells per axis.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(BOARD_SIZE)
    }
}

/// Cells per board side.
pub const BOARD_SIZE: u16 = 20;

/// Smallest board that still fits the initial snake.
pub const MIN_BOARD_SIZE: u16 = 11;

/// Largest board the renderer lays out sensibly.
pub const MAX_BOARD_SIZE: u16 = 60;

/// Tick period in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 110;

pub const MIN_TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICK_INTERVAL_MS: u64 = 2_000;

/// Body of a freshly reset snake, head first.
pub const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 8, y: 10 },
    Position { x: 7, y: 10 },
    Position { x: 6, y: 10 },
];

pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Food position used when no free cell remains.
pub const FALLBACK_FOOD: Position = Position { x: 1, y: 1 };

/// Rejected command-line configuration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error(
        "board size {0} is out of range ({min}..={max})",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    BoardSize(u16),
    #[error(
        "tick interval {0}ms is out of range ({min}..={max})",
        min = MIN_TICK_INTERVAL_MS,
        max = MAX_TICK_INTERVAL_MS
    )]
    TickInterval(u64),
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    pub tick_interval: Duration,
    /// Food placement seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: GridSize::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds a validated configuration from raw option values.
    pub fn validate(board_size: u16, tick_ms: u64, seed: Option<u64>) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSize(board_size));
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick_ms) {
            return Err(ConfigError::TickInterval(tick_ms));
        }

        Ok(Self {
            bounds: GridSize::square(board_size),
            tick_interval: Duration::from_millis(tick_ms),
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ConfigError, GameConfig, GridSize, INITIAL_SNAKE, MIN_BOARD_SIZE};

    #[test]
    fn defaults_match_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.bounds, GridSize::square(20));
        assert_eq!(config.tick_interval, Duration::from_millis(110));
        assert_eq!(config.bounds.total_cells(), 400);
    }

    #[test]
    fn error_messages_name_the_allowed_range() {
        assert_eq!(
            ConfigError::BoardSize(5).to_string(),
            "board size 5 is out of range (11..=60)"
        );
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert_eq!(
            GameConfig::validate(5, 110, None),
            Err(ConfigError::BoardSize(5))
        );
        assert_eq!(
            GameConfig::validate(20, 0, None),
            Err(ConfigError::TickInterval(0))
        );
    }

    #[test]
    fn validate_accepts_custom_values() {
        let config = GameConfig::validate(30, 80, Some(9)).expect("values are in range");

        assert_eq!(config.bounds, GridSize::square(30));
        assert_eq!(config.tick_interval, Duration::from_millis(80));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn initial_snake_fits_smallest_board() {
        let bounds = GridSize::square(MIN_BOARD_SIZE);

        assert!(INITIAL_SNAKE.iter().all(|cell| cell.is_within_bounds(bounds)));
    }
}
