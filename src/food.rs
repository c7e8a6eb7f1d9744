use std::collections::HashSet;

use rand::Rng;

use crate::config::{FALLBACK_FOOD, GridSize};
use crate::snake::Position;

/// Picks a uniformly random cell that is not in `occupied`.
///
/// Candidates are enumerated row by row. A full board has no candidate and
/// yields [`FALLBACK_FOOD`] instead of failing.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Position {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return FALLBACK_FOOD;
    }

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}
