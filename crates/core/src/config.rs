//! Board configuration - immutable per game.

use crate::types::{Direction, Pos, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Board size, start state and behavior flags for one game.
///
/// The flags exist so the same simulation can drive both the playable game
/// (everything on) and scripted decorative snakes (no bounds, no fruit,
/// growing every frame, drawn without clearing the screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Starting head position
    pub origin: Pos,
    /// Starting head direction
    pub start_direction: Direction,
    /// Leaving `[0,0]..=[W-1,H-1]` kills the snake
    pub check_bounds: bool,
    /// Draw a frame around the board
    pub draw_border: bool,
    /// Place fruit on the board
    pub spawn_fruit: bool,
    /// Grow on every step, fruit or not
    pub grow_every_frame: bool,
    /// Erase the whole terminal before every frame
    pub clear_screen: bool,
}

impl SnakeConfig {
    /// Standard playable configuration, starting in the middle of the board.
    ///
    /// Zero-sized edges are clamped to 1 so the board always has a cell.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            origin: Pos::new(i32::from(width / 2), i32::from(height / 2)),
            start_direction: Direction::Left,
            check_bounds: true,
            draw_border: true,
            spawn_fruit: true,
            grow_every_frame: false,
            clear_screen: true,
        }
    }

    pub fn with_start_direction(mut self, direction: Direction) -> Self {
        self.start_direction = direction;
        self
    }

    pub fn with_origin(mut self, origin: Pos) -> Self {
        self.origin = origin;
        self
    }

    /// Check if `pos` lies on the board.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.is_inside(
            Pos::new(0, 0),
            Pos::new(i32::from(self.width) - 1, i32::from(self.height) - 1),
        )
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
