use std::{cell::Cell, rc::Rc, time::Instant};

use crate::foundation::core::Millis;

/// Monotonic time source for the controller's timers.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Millis;
}

/// Wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

/// Virtual clock; clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Clock at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to `t`. Time never moves backwards; earlier values are ignored.
    pub fn set(&self, t: Millis) {
        if t.0 > self.now.get() {
            self.now.set(t.0);
        }
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}
