use tui_snake::core::{Segment, SnakeConfig, SnakeGame};
use tui_snake::term::{Screen, SnakeView, FRUIT_GLYPH};
use tui_snake::types::{Direction, Pos};

fn render(game: &SnakeGame, view: SnakeView) -> Screen<Vec<u8>> {
    let mut screen = Screen::with_writer(Vec::new(), 40, 20);
    view.draw(game, &mut screen);
    screen.flush_frame().unwrap();
    screen
}

/// Builds a snake with directions [LEFT, LEFT, UP, UP] by steering a
/// straight snake up and then left. Its tail cell was entered moving right.
fn hooked_snake() -> SnakeGame {
    let config = SnakeConfig {
        spawn_fruit: false,
        ..SnakeConfig::new(10, 10)
    };
    let mut game = SnakeGame::from_segments(
        config,
        vec![
            Segment::new(Pos::new(4, 6), Direction::Right),
            Segment::new(Pos::new(3, 6), Direction::Right),
            Segment::new(Pos::new(2, 6), Direction::Right),
            Segment::new(Pos::new(1, 6), Direction::Right),
        ],
        1,
    );
    game.step(Direction::Up);
    game.step(Direction::Up);
    game.step(Direction::Left);
    game
}

#[test]
fn test_tail_glyph_uses_vacated_direction() {
    let game = hooked_snake();
    let dirs: Vec<Direction> = game.segments().iter().map(|s| s.direction).collect();
    assert_eq!(
        dirs,
        vec![Direction::Left, Direction::Left, Direction::Up, Direction::Up]
    );
    assert_eq!(game.tail_direction(), Direction::Right);

    let screen = render(&game, SnakeView::default());
    let fb = screen.shadow();

    // Tail at grid (4,6): entered moving right, left moving up.
    assert_eq!(fb.get(9, 7), Some('╝'));
    // Corner at grid (4,4): entered moving up, left moving left.
    assert_eq!(fb.get(9, 5), Some('╗'));
    // Straight vertical at grid (4,5).
    assert_eq!(fb.get(9, 6), Some('║'));
    // Head at grid (3,4) is two columns wide.
    assert_eq!(fb.get(7, 5), Some('═'));
    assert_eq!(fb.get(8, 5), Some('═'));
}

#[test]
fn test_border_corners() {
    let game = SnakeGame::new(SnakeConfig::new(10, 10), 1);
    let screen = render(&game, SnakeView::default());
    let fb = screen.shadow();

    // 10 cells * 2 columns + 2 border columns, 10 rows + 2 border rows.
    assert_eq!(fb.get(0, 0), Some('┌'));
    assert_eq!(fb.get(21, 0), Some('┐'));
    assert_eq!(fb.get(0, 11), Some('└'));
    assert_eq!(fb.get(21, 11), Some('┘'));
    assert_eq!(fb.get(1, 0), Some('─'));
    assert_eq!(fb.get(0, 1), Some('│'));
}

#[test]
fn test_border_is_optional() {
    let config = SnakeConfig {
        draw_border: false,
        ..SnakeConfig::new(10, 10)
    };
    let game = SnakeGame::new(config, 1);
    let screen = render(&game, SnakeView::default());
    assert_eq!(screen.shadow().get(0, 0), Some(' '));
}

#[test]
fn test_fruit_glyph_position() {
    let mut game = SnakeGame::new(SnakeConfig::new(10, 10), 1);
    game.set_fruit(Some(Pos::new(2, 3)));
    let screen = render(&game, SnakeView::default());
    assert_eq!(screen.shadow().get(5, 4), Some(FRUIT_GLYPH));
}

#[test]
fn test_score_line_below_board() {
    let mut game = SnakeGame::from_segments(
        SnakeConfig::new(10, 10),
        vec![Segment::new(Pos::new(2, 2), Direction::Right)],
        1,
    );
    game.set_fruit(Some(Pos::new(3, 2)));
    game.step(Direction::Right);

    let screen = render(&game, SnakeView::default());
    assert!(screen.shadow().row(12).starts_with("Score: 1"));
}

#[test]
fn test_frame_is_one_escape_stream() {
    let config = SnakeConfig {
        draw_border: false,
        spawn_fruit: false,
        ..SnakeConfig::new(4, 4)
    };
    let game = SnakeGame::from_segments(
        config,
        vec![Segment::new(Pos::new(0, 0), Direction::Up)],
        1,
    );
    let screen = render(&game, SnakeView::default().with_score(false));
    let out = String::from_utf8(screen.writer().clone()).unwrap();
    assert_eq!(out, "\x1b[2J\x1b[2;2H║");
}
