//! Key mapping from decoded keys to game actions.

use crate::keycode::Keycode;
use crate::types::{Direction, GameAction};

/// Ctrl-C as delivered in raw mode (no SIGINT is generated).
pub const CTRL_C: char = '\u{3}';

/// Map keyboard input to game actions.
pub fn handle_key(key: Keycode) -> Option<GameAction> {
    match key {
        // Steering
        Keycode::Left | Keycode::Char('a') | Keycode::Char('A') | Keycode::Char('h') => {
            Some(GameAction::Turn(Direction::Left))
        }
        Keycode::Right | Keycode::Char('d') | Keycode::Char('D') | Keycode::Char('l') => {
            Some(GameAction::Turn(Direction::Right))
        }
        Keycode::Up | Keycode::Char('w') | Keycode::Char('W') | Keycode::Char('k') => {
            Some(GameAction::Turn(Direction::Up))
        }
        Keycode::Down | Keycode::Char('s') | Keycode::Char('S') | Keycode::Char('j') => {
            Some(GameAction::Turn(Direction::Down))
        }

        // Actions
        Keycode::Char('p') | Keycode::Char('P') => Some(GameAction::Pause),
        Keycode::Char('\n') | Keycode::Char('\r') | Keycode::Char(' ') => {
            Some(GameAction::Confirm)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: Keycode) -> bool {
    matches!(
        key,
        Keycode::Char('q') | Keycode::Char('Q') | Keycode::Char(CTRL_C)
    )
}

/// Fold one frame's worth of keys into the direction for the next step.
///
/// Every steering key is checked against `heading`, the direction at the
/// start of the frame: its exact reverse is ignored, otherwise the last
/// steering key wins.
pub fn resolve_direction(heading: Direction, keys: &[Keycode]) -> Direction {
    keys.iter()
        .filter_map(|&k| match handle_key(k) {
            Some(GameAction::Turn(dir)) if dir != heading.opposite() => Some(dir),
            _ => None,
        })
        .last()
        .unwrap_or(heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_keys() {
        assert_eq!(
            handle_key(Keycode::Left),
            Some(GameAction::Turn(Direction::Left))
        );
        assert_eq!(
            handle_key(Keycode::Char('W')),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(
            handle_key(Keycode::Char('j')),
            Some(GameAction::Turn(Direction::Down))
        );
        assert_eq!(
            handle_key(Keycode::Char('d')),
            Some(GameAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(handle_key(Keycode::Char('p')), Some(GameAction::Pause));
        assert_eq!(handle_key(Keycode::Char('\r')), Some(GameAction::Confirm));
        assert_eq!(handle_key(Keycode::Char('\n')), Some(GameAction::Confirm));
        assert_eq!(handle_key(Keycode::Unknown), None);
        assert_eq!(handle_key(Keycode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(Keycode::Char('q')));
        assert!(should_quit(Keycode::Char(CTRL_C)));
        assert!(!should_quit(Keycode::Char('x')));
        assert!(!should_quit(Keycode::Unknown));
    }

    #[test]
    fn test_resolve_last_valid_key_wins() {
        let keys = [Keycode::Up, Keycode::Char('x'), Keycode::Down];
        // Heading left: both Up and Down are allowed, Down came last.
        assert_eq!(resolve_direction(Direction::Left, &keys), Direction::Down);
    }

    #[test]
    fn test_resolve_ignores_reverse_of_frame_start_heading() {
        // Up then Right while heading Left: Right is the reverse of the
        // heading the frame started with, so Up stands.
        let keys = [Keycode::Up, Keycode::Right];
        assert_eq!(resolve_direction(Direction::Left, &keys), Direction::Up);
        assert_eq!(
            resolve_direction(Direction::Left, &[Keycode::Right]),
            Direction::Left
        );
        assert_eq!(resolve_direction(Direction::Up, &[]), Direction::Up);
    }
}
