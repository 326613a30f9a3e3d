//! Screen: a double-buffered, frame-paced terminal surface.
//!
//! Drawing never touches the terminal directly. `put_char`/`put_str` queue
//! draw commands, and [`Screen::swap`] encodes the whole frame into one
//! buffer, writes it in a single flush and then sleeps out the rest of the
//! frame budget. That swap is the only blocking point of the game loop.
//!
//! The wire format is deliberately minimal: an optional full erase
//! (`ESC[2J`) followed by one `ESC[row;colH` + glyph per command, in the
//! order the commands were queued.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use tracing::{debug, warn};

use crate::fb::FrameBuffer;
use crate::input::{InputQueue, InputReader, Keycode};
use crate::pacing::frame_wait;
use crate::types::Pos;

/// Terminal size used when the real size cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// One queued glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCmd {
    pub pos: Pos,
    pub ch: char,
}

/// Handle to the terminal, passed explicitly to everything that draws or
/// reads keys.
pub struct Screen<W: Write = io::Stdout> {
    out: W,
    width: u16,
    height: u16,
    draw_queue: Vec<DrawCmd>,
    clear_requested: bool,
    shadow: FrameBuffer,
    buf: Vec<u8>,
    input: InputReader,
    /// Alternate screen entered and not yet restored.
    active: bool,
}

impl Screen<io::Stdout> {
    /// Take over the real terminal.
    ///
    /// Captures the terminal size, then switches to the alternate screen and
    /// hides the cursor. Input stays in its original mode until
    /// [`start_input_reading`](Screen::start_input_reading).
    pub fn create() -> Result<Self> {
        let (width, height) = query_size().unwrap_or(FALLBACK_SIZE);
        let mut screen = Self::with_writer(io::stdout(), width, height);

        screen.buf.clear();
        screen.buf.queue(terminal::EnterAlternateScreen)?;
        screen.buf.queue(cursor::Hide)?;
        screen.flush_buf().context("entering alternate screen")?;
        screen.active = true;

        debug!(width, height, "screen created");
        Ok(screen)
    }
}

impl<W: Write> Screen<W> {
    /// A screen over any writer, with a fixed size.
    ///
    /// Nothing is written until the first swap; `restore` emits nothing.
    /// Used for tests and for rendering into memory.
    pub fn with_writer(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            draw_queue: Vec::new(),
            clear_requested: false,
            shadow: FrameBuffer::new(width, height),
            buf: Vec::with_capacity(16 * 1024),
            input: InputReader::new(InputQueue::new()),
            active: false,
        }
    }

    /// Terminal size as `(columns, rows)`.
    pub fn size(&self) -> Pos {
        Pos::new(i32::from(self.width), i32::from(self.height))
    }

    /// Re-query the terminal size; keeps the old size if the query fails.
    pub fn refresh_size(&mut self) {
        if let Some((width, height)) = query_size() {
            self.width = width;
            self.height = height;
            self.shadow.resize(width, height);
        }
    }

    /// Discard pending commands and erase the terminal on the next swap.
    pub fn clear(&mut self) {
        self.draw_queue.clear();
        self.clear_requested = true;
    }

    /// Queue one glyph. Positions outside the terminal are dropped.
    pub fn put_char(&mut self, ch: char, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        self.draw_queue.push(DrawCmd { pos, ch });
    }

    /// Queue a string left to right, one column per char.
    pub fn put_str(&mut self, text: &str, pos: Pos) {
        for (i, ch) in text.chars().enumerate() {
            self.put_char(ch, pos.offset(i as i32, 0));
        }
    }

    pub fn pending(&self) -> &[DrawCmd] {
        &self.draw_queue
    }

    /// Flush the frame, then block until `last_frame + frame_budget`.
    ///
    /// Returns the time the next frame starts at.
    pub fn swap(&mut self, frame_budget: Duration, last_frame: Instant) -> Result<Instant> {
        self.flush_frame()?;

        let wait = frame_wait(frame_budget, last_frame, Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        Ok(Instant::now())
    }

    /// Write the queued frame without pacing.
    pub fn flush_frame(&mut self) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.clear_requested, &self.draw_queue, &mut self.buf)?;
        self.flush_buf()?;

        if self.clear_requested {
            self.shadow.clear();
        }
        for cmd in &self.draw_queue {
            self.shadow.set(cmd.pos.x, cmd.pos.y, cmd.ch);
        }

        self.draw_queue.clear();
        self.clear_requested = false;
        Ok(())
    }

    /// What the terminal shows after the last swap.
    pub fn shadow(&self) -> &FrameBuffer {
        &self.shadow
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Switch input to raw mode and start the reader thread.
    /// Idempotent.
    pub fn start_input_reading(&mut self) {
        self.input.start();
    }

    /// Restore line-buffered echoing input. Idempotent.
    pub fn stop_input_reading(&mut self) {
        self.input.stop();
    }

    /// Hand every key queued since the last call to `f`, in arrival order.
    /// Never blocks.
    pub fn read_input(&mut self, f: impl FnMut(Keycode)) {
        self.input.queue().drain(f);
    }

    /// Same as [`read_input`](Self::read_input), collected into a Vec.
    pub fn take_input(&mut self) -> Vec<Keycode> {
        self.input.queue().take()
    }

    /// Queue shared with the reader thread.
    pub fn input_queue(&self) -> &InputQueue {
        self.input.queue()
    }

    /// Leave the alternate screen and restore the original input mode.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn restore(&mut self) -> Result<()> {
        self.input.stop();
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf().context("leaving alternate screen")?;
        debug!("screen restored");
        Ok(())
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < i32::from(self.width) && pos.y < i32::from(self.height)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn query_size() -> Option<(u16, u16)> {
    match terminal::size() {
        Ok(size) => Some(size),
        Err(e) => {
            warn!(error = %e, "failed to query terminal size");
            None
        }
    }
}

/// Encode one frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Commands must already be clipped to the terminal.
pub fn encode_frame_into(clear: bool, cmds: &[DrawCmd], out: &mut Vec<u8>) -> Result<()> {
    if clear {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }
    for cmd in cmds {
        out.queue(cursor::MoveTo(cmd.pos.x as u16, cmd.pos.y as u16))?;
        out.queue(Print(cmd.ch))?;
    }
    Ok(())
}
