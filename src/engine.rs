use rand::Rng;

use crate::food::spawn_position;
use crate::game::{DeathReason, GameState, GameStatus};

/// Advances a running game by one tick and returns the next state.
///
/// Paused and finished states come back unchanged. A wall or self hit ends
/// the game without moving the snake; eating grows it by one and respawns
/// food outside the grown body.
#[must_use]
pub fn advance<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    if !state.is_running() {
        return state.clone();
    }

    let bounds = state.bounds();
    let direction = state.pending_direction;
    let next_head = state.snake.head().step(direction);

    if !next_head.is_within_bounds(bounds) {
        return ended(state, DeathReason::WallCollision);
    }

    // The tail still counts here even though it would move away this tick.
    if state.snake.occupies(next_head) {
        return ended(state, DeathReason::SelfCollision);
    }

    let grow = next_head == state.food;
    let snake = state.snake.moved_to(next_head, grow);

    let mut next = state.clone();
    next.direction = direction;
    next.tick_count += 1;
    next.just_ate = grow;

    if grow {
        next.score += 1;
        if snake.len() == bounds.total_cells() {
            next.status = GameStatus::Victory;
        }
        next.food = spawn_position(rng, bounds, &snake.occupied_cells());
    }

    next.snake = snake;
    next
}

fn ended(state: &GameState, reason: DeathReason) -> GameState {
    let mut next = state.clone();
    next.status = GameStatus::GameOver;
    next.death_reason = Some(reason);
    next.just_ate = false;
    next
}
