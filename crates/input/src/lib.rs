//! Terminal input module (engine-facing).
//!
//! Reads raw bytes from the terminal on a background thread, decodes them
//! into [`Keycode`]s (arrow escape sequences and UTF-8 characters) and queues
//! them for the game loop. [`map`] turns keys into
//! [`GameAction`](crate::types::GameAction)s.

pub mod keycode;
pub mod map;
pub mod queue;
pub mod reader;

pub use tui_snake_types as types;

pub use keycode::{decode_keys, KeyDecoder, Keycode};
pub use map::{handle_key, resolve_direction, should_quit, CTRL_C};
pub use queue::InputQueue;
pub use reader::InputReader;
