//! Long seeded random walks checking the rules that must hold every tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use retro_snake::config::GridSize;
use retro_snake::engine::advance;
use retro_snake::game::GameState;
use retro_snake::input::Direction;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Plays `games` random games to completion, calling `check(before, after)`
/// on every tick.
fn random_walks(seed: u64, games: usize, mut check: impl FnMut(&GameState, &GameState)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut steering = StdRng::seed_from_u64(seed ^ 0x5eed);

    for _ in 0..games {
        let mut state = GameState::new(GridSize::square(12), &mut rng).start(&mut rng);

        for _ in 0..2_000 {
            if steering.gen_bool(0.3) {
                let direction = DIRECTIONS[steering.gen_range(0..DIRECTIONS.len())];
                state = state.steer(direction);
            }

            let next = advance(&state, &mut rng);
            check(&state, &next);
            state = next;

            if state.is_game_over() {
                break;
            }
        }
    }
}

#[test]
fn length_grows_by_one_exactly_when_food_is_eaten() {
    random_walks(1, 40, |before, after| {
        if after.is_game_over() {
            assert_eq!(after.snake, before.snake);
            return;
        }

        let ate = after.snake.head() == before.food;
        let expected = before.snake.len() + usize::from(ate);
        assert_eq!(after.snake.len(), expected);
        assert_eq!(after.score, before.score + u32::from(ate));
        assert_eq!(after.just_ate, ate);
    });
}

#[test]
fn live_snake_never_overlaps_itself() {
    random_walks(2, 40, |_, after| {
        assert!(!after.snake.overlaps_itself());
    });
}

#[test]
fn food_is_never_under_the_snake() {
    random_walks(3, 40, |_, after| {
        if !after.is_game_over() {
            assert!(!after.snake.occupies(after.food));
        }
    });
}

#[test]
fn applied_direction_is_never_a_reversal() {
    random_walks(4, 40, |before, after| {
        if !after.is_game_over() {
            assert_ne!(after.direction, before.direction.opposite());
        }
    });
}
