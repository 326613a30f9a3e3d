//! Background keyboard reader.
//!
//! While running, the terminal is in raw, non-echoing mode and a dedicated
//! thread waits on stdin with a short timeout, decoding whatever arrives into
//! the shared [`InputQueue`]. The game loop drains the queue once per frame,
//! so a key pressed between two frames is queued rather than lost.
//!
//! Stdin itself stays blocking: in a terminal it shares its open file with
//! stdout, and `O_NONBLOCK` on one would make frame writes fail with
//! `WouldBlock`. The timeout lets the thread see the stop flag even when no
//! key is ever pressed.
//!
//! Mode changes that fail are logged and otherwise ignored: a terminal left
//! in the wrong mode is annoying but recoverable, an aborted game is not.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::terminal;
use tracing::{debug, warn};

use crate::keycode::KeyDecoder;
use crate::queue::InputQueue;

/// Longest wait for input before the stop flag is checked again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2);

const READ_BUF_LEN: usize = 32;

/// Owns the reader thread and the terminal input mode.
#[derive(Debug)]
pub struct InputReader {
    queue: InputQueue,
    running: Option<Running>,
}

#[derive(Debug)]
struct Running {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl InputReader {
    pub fn new(queue: InputQueue) -> Self {
        Self {
            queue,
            running: None,
        }
    }

    pub fn queue(&self) -> &InputQueue {
        &self.queue
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Switch to raw input and spawn the reader thread.
    ///
    /// No-op if already running.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }

        if let Err(e) = terminal::enable_raw_mode() {
            warn!(error = %e, "failed to enable raw mode");
        }

        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let queue = self.queue.clone();
        let spawned = thread::Builder::new()
            .name("snake-input".to_string())
            .spawn(move || read_loop(queue, thread_stop));

        match spawned {
            Ok(handle) => {
                debug!("input reader started");
                self.running = Some(Running { stop, handle });
            }
            Err(e) => {
                warn!(error = %e, "failed to spawn input reader");
                restore_mode();
            }
        }
    }

    /// Stop the reader thread and restore the original input mode.
    ///
    /// Joins the thread before returning, so no key is queued afterwards.
    /// No-op if not running.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        running.stop.store(true, Ordering::SeqCst);
        if running.handle.join().is_err() {
            warn!("input reader thread panicked");
        }
        restore_mode();
        debug!("input reader stopped");
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop();
    }
}

fn restore_mode() {
    if let Err(e) = terminal::disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
}

fn read_loop(queue: InputQueue, stop: Arc<AtomicBool>) {
    let mut buf = [0u8; READ_BUF_LEN];
    let mut decoder = KeyDecoder::new();
    while !stop.load(Ordering::SeqCst) {
        match sys::read_stdin(&mut buf, POLL_INTERVAL) {
            Ok(Some(0)) => {
                // End of input: nothing will ever arrive, just wait for stop.
                thread::sleep(POLL_INTERVAL);
            }
            Ok(Some(n)) => {
                let keys = decoder.feed(&buf[..n]);
                if !keys.is_empty() {
                    queue.extend(keys);
                }
            }
            Ok(None) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                warn!(error = %e, "stdin read failed, input reader exiting");
                return;
            }
        }
    }
}

#[cfg(unix)]
mod sys {
    use std::io;
    use std::os::unix::io::AsRawFd;
    use std::time::Duration;

    /// Wait up to `timeout` for stdin, then read what is there.
    ///
    /// `Ok(None)` on timeout. The read goes straight to fd 0; `io::Stdin`
    /// would put a `BufReader` between us and the terminal.
    pub fn read_stdin(buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>> {
        let fd = io::stdin().as_raw_fd();
        let mut pfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout_ms = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);

        // SAFETY: `pfd` is one valid pollfd for the duration of the call.
        let ready = unsafe { libc::poll(&mut pfd, 1, timeout_ms) };
        if ready < 0 {
            return Err(io::Error::last_os_error());
        }
        if ready == 0 {
            return Ok(None);
        }

        // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
        let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Some(n as usize))
    }
}

#[cfg(not(unix))]
mod sys {
    //! No raw byte access: re-encode crossterm key events as the byte
    //! sequences a Unix terminal would send.

    use std::io;
    use std::time::Duration;

    use crossterm::event::{self, Event, KeyCode, KeyEventKind};

    pub fn read_stdin(buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        let mut utf8 = [0u8; 4];
        let bytes: &[u8] = match key.code {
            KeyCode::Up => b"\x1b[A",
            KeyCode::Down => b"\x1b[B",
            KeyCode::Right => b"\x1b[C",
            KeyCode::Left => b"\x1b[D",
            KeyCode::Enter => b"\r",
            KeyCode::Esc => b"\x1b",
            KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => b"\x03",
            KeyCode::Char(ch) => ch.encode_utf8(&mut utf8).as_bytes(),
            _ => return Ok(None),
        };
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(Some(n))
    }
}
