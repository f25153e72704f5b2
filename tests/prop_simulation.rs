//! Property-based tests for the simulation engine.
//!
//! Run with: cargo test --release prop_

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_snake::core::{spawn_food, tick_interval_ms, GameState, InputBuffer, Snake, StepOutcome};
use tui_snake::types::{Direction, INPUT_BUFFER_CAPACITY, TICK_FLOOR_MS};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// Per tick: zero, one or two submissions.
fn tick_inputs() -> impl Strategy<Value = Vec<Vec<Direction>>> {
    prop::collection::vec(prop::collection::vec(direction(), 0..3), 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Length changes by 0 or +1; the head moves exactly one unit on one axis;
    /// food is never under the snake at the start of a tick.
    #[test]
    fn prop_tick_invariants(seed in any::<u64>(), script in tick_inputs()) {
        let mut state = GameState::new(seed);
        state.start();

        for submissions in script {
            for dir in submissions {
                state.submit_direction(dir);
            }
            prop_assert!(!state.snake().contains(state.food()));

            let len_before = state.snake().len();
            let head_before = state.snake().head();

            match state.step(&mut ()) {
                StepOutcome::Collided => break,
                StepOutcome::Idle => prop_assert!(false, "engine idle while playing"),
                outcome => {
                    let len_after = state.snake().len();
                    let expected = if outcome == StepOutcome::Grew { len_before + 1 } else { len_before };
                    prop_assert_eq!(len_after, expected);

                    let head = state.snake().head();
                    let dx = (i16::from(head.x) - i16::from(head_before.x)).abs();
                    let dy = (i16::from(head.y) - i16::from(head_before.y)).abs();
                    prop_assert_eq!(dx + dy, 1);
                }
            }
        }
    }

    /// A lone reversal submitted before a tick never becomes the heading.
    #[test]
    fn prop_reversal_never_commits(seed in any::<u64>(), turns in prop::collection::vec(direction(), 1..60)) {
        let mut state = GameState::new(seed);
        state.start();

        for turn in turns {
            let heading = state.direction();
            state.submit_direction(heading.opposite());
            state.submit_direction(turn);

            if state.step(&mut ()) == StepOutcome::Collided {
                break;
            }
            prop_assert_ne!(state.direction(), heading.opposite());

            // Drain the second submission so each round starts clean.
            let heading = state.direction();
            if state.step(&mut ()) == StepOutcome::Collided {
                break;
            }
            prop_assert_ne!(state.direction(), heading.opposite());
        }
    }

    /// The buffer never holds more than its capacity.
    #[test]
    fn prop_buffer_bounded(pushes in prop::collection::vec(direction(), 0..100)) {
        let mut buffer = InputBuffer::new();
        for dir in pushes {
            buffer.push(dir);
            prop_assert!(buffer.len() <= INPUT_BUFFER_CAPACITY);
        }
    }

    /// Engine-side buffer stays bounded regardless of submission rate.
    #[test]
    fn prop_engine_buffer_bounded(seed in any::<u64>(), burst in prop::collection::vec(direction(), 0..50)) {
        let mut state = GameState::new(seed);
        state.start();
        for dir in burst {
            state.submit_direction(dir);
            prop_assert!(state.pending_inputs().len() <= INPUT_BUFFER_CAPACITY);
        }
    }

    /// Tick interval is non-increasing in score and never below the floor.
    #[test]
    fn prop_tick_interval_monotonic(score in 0u32..10_000) {
        let now = tick_interval_ms(score);
        let next = tick_interval_ms(score + 1);
        prop_assert!(next <= now);
        prop_assert!(now >= TICK_FLOOR_MS);
    }

    /// Spawned food is always a free cell.
    #[test]
    fn prop_food_spawns_on_free_cell(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let snake = Snake::centered();
        let food = spawn_food(&snake, &mut rng);
        prop_assert!(food.in_bounds());
        prop_assert!(!snake.contains(food));
    }
}
