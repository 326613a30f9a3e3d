//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, menus).
//!
//! # Grid Coordinates
//!
//! Grid positions are signed so that a snake running with bounds checking
//! disabled can leave the board without wrapping:
//!
//! - **x** grows to the right, **y** grows downwards
//! - A board of size `W x H` covers `[0, 0]..=[W-1, H-1]`
//!
//! # Frame Timing
//!
//! The game is paced by a fixed frame delay, chosen from four presets:
//!
//! | Speed | Frame delay |
//! |-------|-------------|
//! | `Slow` | 120ms |
//! | `Medium` | 95ms |
//! | `Fast` | 70ms |
//! | `Sonic` | 50ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Pos, Speed};
//!
//! let head = Pos::new(5, 5);
//! assert_eq!(head.step(Direction::Up), Pos::new(5, 4));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
//!
//! assert_eq!(Speed::Sonic.frame_ms(), 50);
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: u16 = 20;

/// Default board height in cells
pub const DEFAULT_HEIGHT: u16 = 15;

/// Smallest board edge accepted by the menu and the command line
pub const MIN_BOARD_EDGE: u16 = 4;

/// Largest board edge accepted by the menu and the command line
pub const MAX_BOARD_EDGE: u16 = 200;

/// Frame delay presets in milliseconds, indexed by [`Speed::index`]
pub const SPEED_FRAME_MS: [u64; 4] = [120, 95, 70, 50];

/// Terminal columns used by one grid cell (aspect-ratio correction)
pub const CELL_COLUMNS: i32 = 2;

/// A position on the grid (or on the terminal, for screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a raw offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Translate by the unit vector of `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Check if the point lies inside the rectangle spanned by `a` and `b`
    /// (inclusive, corners may be given in any order).
    ///
    /// ```
    /// use tui_snake_types::Pos;
    ///
    /// let p = Pos::new(2, 3);
    /// assert!(p.is_inside(Pos::new(0, 0), Pos::new(2, 3)));
    /// assert!(p.is_inside(Pos::new(2, 3), Pos::new(0, 0)));
    /// assert!(!p.is_inside(Pos::new(0, 0), Pos::new(1, 3)));
    /// ```
    pub fn is_inside(self, a: Pos, b: Pos) -> bool {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        self.x >= min_x && self.x <= max_x && self.y >= min_y && self.y <= max_y
    }
}

/// Movement direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector `(dx, dy)` in grid coordinates.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The exact reverse direction.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Frame delay preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
    Sonic,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Medium, Speed::Fast, Speed::Sonic];

    pub fn index(&self) -> usize {
        match self {
            Speed::Slow => 0,
            Speed::Medium => 1,
            Speed::Fast => 2,
            Speed::Sonic => 3,
        }
    }

    /// Frame delay for this preset, in milliseconds.
    pub fn frame_ms(&self) -> u64 {
        SPEED_FRAME_MS[self.index()]
    }

    /// Parse speed from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Speed;
    ///
    /// assert_eq!(Speed::from_str("fast"), Some(Speed::Fast));
    /// assert_eq!(Speed::from_str("SONIC"), Some(Speed::Sonic));
    /// assert_eq!(Speed::from_str("warp"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(Speed::Slow),
            "medium" => Some(Speed::Medium),
            "fast" => Some(Speed::Fast),
            "sonic" => Some(Speed::Sonic),
            _ => None,
        }
    }

    /// Upper-case label used by the menu.
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "SLOW",
            Speed::Medium => "MEDIUM",
            Speed::Fast => "FAST",
            Speed::Sonic => "SONIC",
        }
    }
}

/// Actions a key press can request from the game loop.
///
/// Quitting is not an action; it is detected separately so it works in every
/// screen (menu, game, game over).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Confirm the current menu entry or dismiss the game-over screen
    Confirm,
}
