//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries: callers queue glyphs on a
//! [`Screen`] and swap once per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One write per frame, paced to a fixed frame budget
//! - Precise control over aspect ratio (2 columns per grid cell)

pub mod fb;
pub mod menu;
pub mod pacing;
pub mod screen;
pub mod snake_view;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use fb::FrameBuffer;
pub use menu::{GameMenu, MenuEntry, MenuEvent, MenuSettings};
pub use pacing::frame_wait;
pub use screen::{encode_frame_into, DrawCmd, Screen, FALLBACK_SIZE};
pub use snake_view::{segment_glyph, SnakeView, FRUIT_GLYPH};
