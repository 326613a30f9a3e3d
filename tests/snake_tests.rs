use tui_snake::core::{Segment, SimpleRng, SnakeConfig, SnakeGame, StepOutcome};
use tui_snake::types::{Direction, Pos};

fn seg(x: i32, y: i32, direction: Direction) -> Segment {
    Segment::new(Pos::new(x, y), direction)
}

fn no_fruit(width: u16, height: u16) -> SnakeConfig {
    SnakeConfig {
        spawn_fruit: false,
        ..SnakeConfig::new(width, height)
    }
}

#[test]
fn test_turn_up_from_left() {
    let config = no_fruit(10, 10)
        .with_origin(Pos::new(5, 5))
        .with_start_direction(Direction::Left);
    let mut game = SnakeGame::new(config, 1);

    assert_eq!(game.step(Direction::Up), StepOutcome::Alive);
    assert_eq!(game.head().pos, Pos::new(5, 4));
    assert_eq!(game.len(), 1);
    assert!(!game.is_dead());
}

#[test]
fn test_leaving_board_is_fatal() {
    let config = no_fruit(3, 3)
        .with_origin(Pos::new(1, 1))
        .with_start_direction(Direction::Right);
    let mut game = SnakeGame::new(config, 1);

    assert_eq!(game.step(Direction::Right), StepOutcome::Alive);
    assert_eq!(game.head().pos, Pos::new(2, 1));
    assert_eq!(game.step(Direction::Right), StepOutcome::Dead);
    assert_eq!(game.head().pos, Pos::new(3, 1));
    assert!(game.is_dead());
}

#[test]
fn test_eating_fruit_grows_and_relocates_fruit() {
    let mut game = SnakeGame::from_segments(
        SnakeConfig::new(10, 10),
        vec![seg(2, 2, Direction::Right), seg(1, 2, Direction::Right)],
        7,
    );
    game.set_fruit(Some(Pos::new(3, 2)));

    assert_eq!(game.step(Direction::Right), StepOutcome::Alive);
    assert_eq!(
        game.segments(),
        &[
            seg(3, 2, Direction::Right),
            seg(2, 2, Direction::Right),
            seg(1, 2, Direction::Right),
        ]
    );

    let fruit = game.fruit().expect("fruit respawned");
    assert!(![Pos::new(3, 2), Pos::new(2, 2), Pos::new(1, 2)].contains(&fruit));
    assert!(game.config().contains(fruit));
    assert_eq!(game.score(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let config = SnakeConfig::new(12, 8);
    let a = SnakeGame::new(config, 99);
    let b = SnakeGame::new(config, 99);
    assert_eq!(a.fruit(), b.fruit());
}

/// Drive many games with random turns and check the step invariants.
#[test]
fn test_step_invariants_hold_over_random_play() {
    let mut rng = SimpleRng::new(2024);

    for seed in 0..40u32 {
        let config = SnakeConfig::new(8, 6);
        let mut game = SnakeGame::new(config, seed);

        for _ in 0..200 {
            let requested = Direction::ALL[rng.next_range(4) as usize];
            let before: Vec<Segment> = game.segments().to_vec();
            let heading = game.heading();
            let fruit = game.fruit();

            let outcome = game.step(requested);

            let expected_dir = if requested == heading.opposite() {
                heading
            } else {
                requested
            };
            assert_eq!(game.heading(), expected_dir);
            assert_eq!(game.head().pos, before[0].pos.step(expected_dir));

            let grew = fruit == Some(game.head().pos);
            if grew {
                assert_eq!(game.len(), before.len() + 1);
                for (old, new) in before.iter().zip(&game.segments()[1..]) {
                    assert_eq!(old.pos, new.pos);
                }
            } else {
                assert_eq!(game.len(), before.len());
            }

            if let Some(fruit) = game.fruit() {
                if grew {
                    assert!(!game.occupies(fruit));
                }
            }

            let head = game.head().pos;
            if !config.contains(head) {
                assert_eq!(outcome, StepOutcome::Dead);
            }
            if !grew && game.segments()[1..].iter().any(|s| s.pos == head) {
                assert_eq!(outcome, StepOutcome::Dead);
            }

            if outcome.is_dead() {
                break;
            }
        }
    }
}

#[test]
fn test_reverse_request_never_changes_heading() {
    for dir in Direction::ALL {
        let config = no_fruit(20, 20).with_start_direction(dir);
        let mut game = SnakeGame::new(config, 1);
        game.step(dir.opposite());
        assert_eq!(game.heading(), dir);
    }
}

#[test]
fn test_score_ignores_starting_body() {
    let mut game = SnakeGame::from_segments(
        SnakeConfig::new(10, 10),
        vec![
            seg(4, 2, Direction::Right),
            seg(3, 2, Direction::Right),
            seg(2, 2, Direction::Right),
        ],
        3,
    );
    assert_eq!(game.score(), 0);

    game.set_fruit(Some(Pos::new(5, 2)));
    game.step(Direction::Right);
    assert_eq!(game.len(), 4);
    assert_eq!(game.score(), 1);
}
