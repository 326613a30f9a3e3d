//! Shared key queue between the reader thread and the game loop.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::keycode::Keycode;

/// Mutex-guarded FIFO of decoded keys.
///
/// Cloning yields another handle to the same queue. The lock is only held
/// for one push or one full drain, never across I/O.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    inner: Arc<Mutex<Vec<Keycode>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, key: Keycode) {
        self.lock().push(key);
    }

    pub fn extend(&self, keys: impl IntoIterator<Item = Keycode>) {
        self.lock().extend(keys);
    }

    /// Take every queued key, leaving the queue empty.
    pub fn take(&self) -> Vec<Keycode> {
        std::mem::take(&mut *self.lock())
    }

    /// Invoke `f` once per queued key in arrival order, then empty the queue.
    ///
    /// The keys are moved out before `f` runs, so `f` may push to the queue
    /// without deadlocking; such keys are delivered on the next drain.
    pub fn drain(&self, mut f: impl FnMut(Keycode)) {
        for key in self.take() {
            f(key);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Keycode>> {
        // A panic while holding the lock cannot leave a Vec half-updated.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
