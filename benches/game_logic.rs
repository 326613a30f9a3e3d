use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{SnakeConfig, SnakeGame};
use tui_snake::term::{Screen, SnakeView};
use tui_snake::types::Direction;

/// A game that never ends: no bounds, no fruit, circling in a square.
fn circling_game() -> SnakeGame {
    let config = SnakeConfig {
        check_bounds: false,
        spawn_fruit: false,
        ..SnakeConfig::new(40, 40)
    };
    SnakeGame::new(config, 12345)
}

const LAP: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

fn bench_step(c: &mut Criterion) {
    let mut game = circling_game();
    let mut turn = 0;

    c.bench_function("snake_step", |b| {
        b.iter(|| {
            turn = (turn + 1) % LAP.len();
            game.step(black_box(LAP[turn]));
        })
    });
}

fn bench_eat_fruit(c: &mut Criterion) {
    c.bench_function("step_onto_fruit", |b| {
        b.iter(|| {
            let mut game = SnakeGame::new(SnakeConfig::new(40, 40), 12345);
            let head = game.head().pos;
            game.set_fruit(Some(head.step(Direction::Left)));
            game.step(black_box(Direction::Left));
        })
    });
}

fn bench_draw_frame(c: &mut Criterion) {
    let config = SnakeConfig {
        grow_every_frame: true,
        check_bounds: false,
        ..SnakeConfig::new(40, 40)
    };
    let mut game = SnakeGame::new(config, 12345);
    for i in 0..200 {
        game.step(LAP[(i / 10) % LAP.len()]);
    }

    let view = SnakeView::default();
    let mut screen = Screen::with_writer(std::io::sink(), 120, 50);

    c.bench_function("draw_and_flush_frame", |b| {
        b.iter(|| {
            view.draw(black_box(&game), &mut screen);
            screen.flush_frame().unwrap();
        })
    });
}

criterion_group!(benches, bench_step, bench_eat_fruit, bench_draw_frame);
criterion_main!(benches);
