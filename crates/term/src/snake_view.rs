//! SnakeView: maps `core::SnakeGame` onto a [`Screen`].
//!
//! Every grid cell is two terminal columns wide and the board sits inside a
//! one-cell border, so grid `(x, y)` lands on screen `(2x + 1, y + 1)`
//! relative to the view origin.

use std::io::Write;

use crate::core::SnakeGame;
use crate::screen::Screen;
use crate::types::{Direction, Pos, CELL_COLUMNS};

/// Glyph for fruit.
pub const FRUIT_GLYPH: char = '⊙';

/// Body glyph for a segment, keyed by the direction it was left in (`cur`)
/// and the direction the snake arrived in (`prev`, the next segment toward
/// the tail).
///
/// Horizontal glyphs are two columns so neighbouring cells join up. A reverse
/// pair cannot occur in a live snake and falls back to the straight glyph.
pub fn segment_glyph(cur: Direction, prev: Direction) -> &'static str {
    use Direction::{Down, Left, Right, Up};

    match (cur, prev) {
        (Left, Left) | (Right, Right) => "══",
        (Up, Up) | (Down, Down) => "║",

        (Left, Up) => "╗",
        (Left, Down) => "╝",
        (Right, Up) => "╔═",
        (Right, Down) => "╚═",
        (Up, Left) => "╚═",
        (Up, Right) => "╝",
        (Down, Left) => "╔═",
        (Down, Right) => "╗",

        (Left, Right) | (Right, Left) => "══",
        (Up, Down) | (Down, Up) => "║",
    }
}

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone, Copy)]
pub struct SnakeView {
    /// Screen position of the border's top-left corner.
    origin: Pos,
    show_score: bool,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            origin: Pos::new(0, 0),
            show_score: true,
        }
    }
}

impl SnakeView {
    pub fn new(origin: Pos) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    pub fn with_score(mut self, show_score: bool) -> Self {
        self.show_score = show_score;
        self
    }

    /// Screen position of a grid cell's first column.
    pub fn to_screen(&self, cell: Pos) -> Pos {
        Pos::new(
            self.origin.x + cell.x * CELL_COLUMNS + 1,
            self.origin.y + cell.y + 1,
        )
    }

    /// Queue the whole game onto `screen`. Does not swap.
    pub fn draw<W: Write>(&self, game: &SnakeGame, screen: &mut Screen<W>) {
        let config = game.config();
        if config.clear_screen {
            screen.clear();
        }

        self.draw_snake(game, screen);

        if let Some(fruit) = game.fruit() {
            screen.put_char(FRUIT_GLYPH, self.to_screen(fruit));
        }

        if config.draw_border {
            self.draw_border(screen, config.width, config.height);
        }

        if self.show_score {
            let below = self.origin.offset(0, i32::from(config.height) + 2);
            screen.put_str(&format!("Score: {}", game.score()), below);
        }
    }

    /// Queue just the snake body.
    pub fn draw_snake<W: Write>(&self, game: &SnakeGame, screen: &mut Screen<W>) {
        let segments = game.segments();
        for (i, seg) in segments.iter().enumerate() {
            // The tail has nothing behind it; use the cell it just vacated.
            let prev = segments
                .get(i + 1)
                .map_or(game.tail_direction(), |next| next.direction);
            screen.put_str(segment_glyph(seg.direction, prev), self.to_screen(seg.pos));
        }
    }

    /// Centre `text` on the board's middle row.
    pub fn draw_overlay<W: Write>(&self, game: &SnakeGame, screen: &mut Screen<W>, text: &str) {
        let config = game.config();
        let frame_w = i32::from(config.width) * CELL_COLUMNS + 2;
        let frame_h = i32::from(config.height) + 2;
        let text_w = text.chars().count() as i32;

        let x = self.origin.x + (frame_w - text_w).max(0) / 2;
        let y = self.origin.y + frame_h / 2;
        screen.put_str(text, Pos::new(x, y));
    }

    fn draw_border<W: Write>(&self, screen: &mut Screen<W>, width: u16, height: u16) {
        let w = i32::from(width) * CELL_COLUMNS + 2;
        let h = i32::from(height) + 2;
        let Pos { x, y } = self.origin;

        screen.put_char('┌', Pos::new(x, y));
        screen.put_char('┐', Pos::new(x + w - 1, y));
        screen.put_char('└', Pos::new(x, y + h - 1));
        screen.put_char('┘', Pos::new(x + w - 1, y + h - 1));

        for dx in 1..w - 1 {
            screen.put_char('─', Pos::new(x + dx, y));
            screen.put_char('─', Pos::new(x + dx, y + h - 1));
        }
        for dy in 1..h - 1 {
            screen.put_char('│', Pos::new(x, y + dy));
            screen.put_char('│', Pos::new(x + w - 1, y + dy));
        }
    }
}
