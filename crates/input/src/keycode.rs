//! Raw byte sequences to logical keys.
//!
//! In raw mode the terminal hands us bytes, not key events. Arrow keys arrive
//! as escape sequences (`ESC [ A` or, in application cursor mode, `ESC O A`),
//! everything else as UTF-8. A single read can also carry several keys when
//! the user types faster than we poll, so [`decode_keys`] first splits the
//! buffer at event boundaries and then decodes each chunk.

const ESC: u8 = 0x1b;

/// A logical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keycode {
    Up,
    Down,
    Left,
    Right,
    /// Unrecognised escape sequence or malformed UTF-8
    Unknown,
    /// Any other single code point, including control characters
    Char(char),
}

impl Keycode {
    /// Decode one complete key sequence.
    ///
    /// Known arrow sequences map to arrow keys; a sequence that is exactly one
    /// valid code point maps to [`Keycode::Char`]; anything else is
    /// [`Keycode::Unknown`].
    ///
    /// ```
    /// use tui_snake_input::Keycode;
    ///
    /// assert_eq!(Keycode::from_bytes(b"\x1b[A"), Keycode::Up);
    /// assert_eq!(Keycode::from_bytes(b"q"), Keycode::Char('q'));
    /// assert_eq!(Keycode::from_bytes("⊙".as_bytes()), Keycode::Char('⊙'));
    /// assert_eq!(Keycode::from_bytes(&[0xe2, 0x8a]), Keycode::Unknown);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            b"\x1b[A" | b"\x1bOA" => return Keycode::Up,
            b"\x1b[B" | b"\x1bOB" => return Keycode::Down,
            b"\x1b[C" | b"\x1bOC" => return Keycode::Right,
            b"\x1b[D" | b"\x1bOD" => return Keycode::Left,
            _ => {}
        }

        let Ok(text) = std::str::from_utf8(bytes) else {
            return Keycode::Unknown;
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Keycode::Char(ch),
            _ => Keycode::Unknown,
        }
    }

    /// Check if this is one of the four arrow keys.
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Keycode::Up | Keycode::Down | Keycode::Left | Keycode::Right
        )
    }
}

/// Split a raw read buffer into keys, in arrival order.
pub fn decode_keys(mut bytes: &[u8]) -> Vec<Keycode> {
    let mut keys = Vec::new();
    while !bytes.is_empty() {
        let len = next_sequence_len(bytes);
        keys.push(Keycode::from_bytes(&bytes[..len]));
        bytes = &bytes[len..];
    }
    keys
}

/// Longest incomplete sequence kept for the next read. Anything longer is
/// decoded as-is.
const MAX_PENDING: usize = 16;

/// Streaming version of [`decode_keys`] for consecutive reads.
///
/// A key sequence can be split across two reads (`ESC` now, `[A` later).
/// The incomplete tail of each read is kept and completed by the next one.
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    pending: Vec<u8>,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every complete key in `pending ++ bytes`.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Keycode> {
        self.pending.extend_from_slice(bytes);

        let mut keys = Vec::new();
        let mut rest: &[u8] = &self.pending;
        loop {
            let len = match complete_sequence_len(rest) {
                Some(len) => len,
                None if rest.len() >= MAX_PENDING => next_sequence_len(rest),
                None => break,
            };
            keys.push(Keycode::from_bytes(&rest[..len]));
            rest = &rest[len..];
        }

        let consumed = self.pending.len() - rest.len();
        self.pending.drain(..consumed);
        keys
    }

    /// Bytes waiting for the rest of their sequence.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}

/// Length of the first key sequence, or `None` if `bytes` ends before the
/// sequence does.
fn complete_sequence_len(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [] | [ESC] | [ESC, b'[' | b'O'] => None,
        [ESC, b'O', _, ..] => Some(3),
        [ESC, b'[', rest @ ..] => rest
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 3),
        [lead, ..] => {
            let width = utf8_width(*lead);
            (bytes.len() >= width).then_some(width)
        }
    }
}

/// Length of the first key sequence in `bytes` (at least 1).
fn next_sequence_len(bytes: &[u8]) -> usize {
    match bytes {
        [ESC, b'O', _, ..] => 3,
        [ESC, b'[', rest @ ..] => {
            // CSI: parameter/intermediate bytes, then one final byte in 0x40..=0x7E.
            match rest.iter().position(|b| (0x40..=0x7e).contains(b)) {
                Some(i) => i + 3,
                None => bytes.len(),
            }
        }
        [lead, ..] => utf8_width(*lead).min(bytes.len()),
        [] => 0,
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 1,
    }
}
