//! Settings menu drawn on the game [`Screen`].
//!
//! `Up`/`Down` select an entry, `Left`/`Right` change its value and `Enter`
//! on the start button leaves the menu.

use std::io::Write;

use crate::input::{should_quit, Keycode};
use crate::screen::Screen;
use crate::types::{Direction, Pos, Speed, MAX_BOARD_EDGE, MIN_BOARD_EDGE};

/// One line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Button {
        text: String,
        pressed: bool,
    },
    /// Integer in `min..=max`, changed by `step`.
    Int {
        label: String,
        value: i32,
        min: i32,
        max: i32,
        step: i32,
    },
    /// One of a fixed list of options.
    Choice {
        label: String,
        options: Vec<String>,
        index: usize,
    },
}

impl MenuEntry {
    pub fn button(text: impl Into<String>) -> Self {
        MenuEntry::Button {
            text: text.into(),
            pressed: false,
        }
    }

    pub fn int(label: impl Into<String>, value: i32, min: i32, max: i32, step: i32) -> Self {
        MenuEntry::Int {
            label: label.into(),
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn choice(label: impl Into<String>, options: &[&str], index: usize) -> Self {
        MenuEntry::Choice {
            label: label.into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            index: index.min(options.len().saturating_sub(1)),
        }
    }

    pub fn text(&self) -> String {
        match self {
            MenuEntry::Button { text, .. } => text.clone(),
            MenuEntry::Int { label, value, .. } => format!("{label}: {value}"),
            MenuEntry::Choice {
                label,
                options,
                index,
            } => format!("{label}: {}", options.get(*index).map_or("", String::as_str)),
        }
    }

    /// Apply a key that was not used for navigation.
    pub fn on_key(&mut self, key: Keycode) {
        match self {
            MenuEntry::Button { pressed, .. } => {
                if matches!(key, Keycode::Char('\n') | Keycode::Char('\r')) {
                    *pressed = true;
                }
            }
            MenuEntry::Int {
                value,
                min,
                max,
                step,
                ..
            } => match key {
                Keycode::Right => *value = (*value + *step).min(*max),
                Keycode::Left => *value = (*value - *step).max(*min),
                _ => {}
            },
            MenuEntry::Choice { options, index, .. } => match key {
                Keycode::Right if *index + 1 < options.len() => *index += 1,
                Keycode::Left if *index > 0 => *index -= 1,
                _ => {}
            },
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, MenuEntry::Button { pressed: true, .. })
    }
}

/// Result of feeding one frame of input to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    None,
    Start,
    Quit,
}

/// Values the settings menu edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    pub width: u16,
    pub height: u16,
    pub speed: Speed,
    pub direction: Direction,
}

const WIDTH_ENTRY: usize = 0;
const HEIGHT_ENTRY: usize = 1;
const SPEED_ENTRY: usize = 2;
const DIRECTION_ENTRY: usize = 3;

#[derive(Debug, Clone)]
pub struct GameMenu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl GameMenu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    /// The standard menu: board size, speed, start direction and a start
    /// button, pre-filled from `defaults`.
    pub fn settings(defaults: MenuSettings) -> Self {
        let speeds: Vec<&str> = Speed::ALL.iter().map(Speed::as_str).collect();
        let directions: Vec<&str> = Direction::ALL.iter().map(Direction::as_str).collect();
        let direction_index = Direction::ALL
            .iter()
            .position(|d| *d == defaults.direction)
            .unwrap_or(0);

        Self::new(vec![
            MenuEntry::int(
                "Width",
                i32::from(defaults.width),
                i32::from(MIN_BOARD_EDGE),
                i32::from(MAX_BOARD_EDGE),
                1,
            ),
            MenuEntry::int(
                "Height",
                i32::from(defaults.height),
                i32::from(MIN_BOARD_EDGE),
                i32::from(MAX_BOARD_EDGE),
                1,
            ),
            MenuEntry::choice("Speed", &speeds, defaults.speed.index()),
            MenuEntry::choice("Direction", &directions, direction_index),
            MenuEntry::button("Start"),
        ])
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply one key.
    pub fn handle_key(&mut self, key: Keycode) -> MenuEvent {
        if should_quit(key) {
            return MenuEvent::Quit;
        }
        match key {
            Keycode::Up => self.selected = self.selected.saturating_sub(1),
            Keycode::Down if self.selected + 1 < self.entries.len() => self.selected += 1,
            _ => {
                if let Some(entry) = self.entries.get_mut(self.selected) {
                    entry.on_key(key);
                    if entry.is_pressed() {
                        return MenuEvent::Start;
                    }
                }
            }
        }
        MenuEvent::None
    }

    /// Drain the screen's input queue into the menu.
    ///
    /// Stops at the first `Start` or `Quit`; keys after it are discarded.
    pub fn update<W: Write>(&mut self, screen: &mut Screen<W>) -> MenuEvent {
        for key in screen.take_input() {
            match self.handle_key(key) {
                MenuEvent::None => {}
                event => return event,
            }
        }
        MenuEvent::None
    }

    /// Queue the menu, one centred line per entry starting at row 1.
    pub fn draw<W: Write>(&self, screen: &mut Screen<W>) {
        screen.clear();
        let cols = screen.size().x;
        for (i, entry) in self.entries.iter().enumerate() {
            let mut text = entry.text();
            if i == self.selected {
                text = format!("> {text} <");
            }
            let x = (cols - text.chars().count() as i32) / 2;
            screen.put_str(&text, Pos::new(x, i as i32 + 1));
        }
    }

    /// Current values of the standard settings entries.
    ///
    /// Entries missing from a custom menu keep the values from `fallback`.
    pub fn values(&self, fallback: MenuSettings) -> MenuSettings {
        let int_at = |i: usize| match self.entries.get(i) {
            Some(MenuEntry::Int { value, .. }) => u16::try_from(*value).ok(),
            _ => None,
        };
        let choice_at = |i: usize| match self.entries.get(i) {
            Some(MenuEntry::Choice { index, .. }) => Some(*index),
            _ => None,
        };

        MenuSettings {
            width: int_at(WIDTH_ENTRY).unwrap_or(fallback.width),
            height: int_at(HEIGHT_ENTRY).unwrap_or(fallback.height),
            speed: choice_at(SPEED_ENTRY)
                .and_then(|i| Speed::ALL.get(i).copied())
                .unwrap_or(fallback.speed),
            direction: choice_at(DIRECTION_ENTRY)
                .and_then(|i| Direction::ALL.get(i).copied())
                .unwrap_or(fallback.direction),
        }
    }
}
