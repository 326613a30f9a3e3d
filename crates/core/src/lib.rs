//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules and state machine. It has **no
//! dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit placement
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: The same simulation drives the game and scripted snakes
//!
//! # Module Structure
//!
//! - [`config`]: Immutable board size, start state and behavior flags
//! - [`snake`]: Segments, the step function, fruit placement and collisions
//! - [`rng`]: Seedable LCG used for fruit placement
//!
//! # Game Rules
//!
//! - The snake moves one cell per step in the requested direction
//! - Reversing onto itself is not possible; such requests are ignored
//! - Eating fruit grows the snake by one cell and respawns the fruit on a free cell
//! - Running into the body, or off the board when bounds are checked, ends the game
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{SnakeConfig, SnakeGame, StepOutcome};
//! use tui_snake_types::{Direction, Pos};
//!
//! let config = SnakeConfig::new(10, 10).with_origin(Pos::new(5, 5));
//! let mut game = SnakeGame::new(config, 12345);
//!
//! assert_eq!(game.step(Direction::Up), StepOutcome::Alive);
//! assert_eq!(game.head().pos, Pos::new(5, 4));
//! assert!(game.fruit().map_or(true, |f| !game.occupies(f)));
//! ```

pub mod config;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::SnakeConfig;
pub use rng::SimpleRng;
pub use snake::{Segment, SnakeGame, StepOutcome, FRUIT_SAMPLE_ATTEMPTS};
