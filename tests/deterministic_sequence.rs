use rand::SeedableRng;
use rand::rngs::StdRng;
use retro_snake::config::{GridSize, INITIAL_SNAKE};
use retro_snake::engine::advance;
use retro_snake::game::{DeathReason, GameState, GameStatus};
use retro_snake::input::Direction;
use retro_snake::snake::{Position, Snake};

fn classic(rng: &mut StdRng) -> GameState {
    GameState::new(GridSize::square(20), rng)
}

#[test]
fn initial_snake_eats_food_in_front_of_it() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = classic(&mut rng).start(&mut rng);
    state.food = Position { x: 9, y: 10 };

    let state = advance(&state, &mut rng);

    assert_eq!(state.snake.head(), Position { x: 9, y: 10 });
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_ne!(state.food, Position { x: 9, y: 10 });
    assert!(!state.snake.occupies(state.food));
}

#[test]
fn heading_left_from_left_edge_hits_the_wall() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::from_parts(
        GridSize::square(20),
        Snake::from_segments([Position { x: 0, y: 10 }, Position { x: 1, y: 10 }]),
        Direction::Left,
        Position { x: 10, y: 10 },
    );
    state.status = GameStatus::Playing;

    let next = advance(&state, &mut rng);

    assert!(next.is_game_over());
    assert!(!next.is_running());
    assert_eq!(next.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(next.snake, state.snake);
    assert_eq!(next.score, state.score);
    assert_eq!(next.food, state.food);
}

#[test]
fn head_moving_onto_body_ends_the_game() {
    let mut rng = StdRng::seed_from_u64(42);
    // Head at (6,5) turning back onto (5,5), which the body still covers.
    let mut state = GameState::from_parts(
        GridSize::square(20),
        Snake::from_segments([
            Position { x: 6, y: 5 },
            Position { x: 6, y: 6 },
            Position { x: 5, y: 6 },
            Position { x: 5, y: 5 },
            Position { x: 5, y: 4 },
        ]),
        Direction::Up,
        Position { x: 15, y: 15 },
    )
    .steer(Direction::Left);
    state.status = GameStatus::Playing;

    let next = advance(&state, &mut rng);

    assert_eq!(next.status, GameStatus::GameOver);
    assert_eq!(next.death_reason, Some(DeathReason::SelfCollision));
}

#[test]
fn reset_after_game_over_restores_initial_state() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = classic(&mut rng)
        .start(&mut rng)
        .steer(Direction::Up);

    while !state.is_game_over() {
        state = advance(&state, &mut rng);
    }

    let reset = state.reset(&mut rng);

    assert_eq!(
        reset.snake.segments().copied().collect::<Vec<_>>(),
        INITIAL_SNAKE
    );
    assert_eq!(reset.direction, Direction::Right);
    assert_eq!(reset.pending_direction, Direction::Right);
    assert_eq!(reset.score, 0);
    assert!(!reset.is_game_over());
    assert!(!reset.is_running());
    assert!(!reset.snake.occupies(reset.food));
}

#[test]
fn reversal_request_never_changes_pending_direction() {
    let mut rng = StdRng::seed_from_u64(42);
    let state = advance(&classic(&mut rng).start(&mut rng), &mut rng);
    assert_eq!(state.direction, Direction::Right);

    let steered = state.steer(Direction::Left);

    assert_eq!(steered.pending_direction, Direction::Right);
}

#[test]
fn advancing_a_finished_game_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = classic(&mut rng).start(&mut rng);
    while !state.is_game_over() {
        state = advance(&state, &mut rng);
    }

    for _ in 0..5 {
        assert_eq!(advance(&state, &mut rng), state);
    }
}
