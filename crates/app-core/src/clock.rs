use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Monotonic elapsed-time source, started once and never reset.
pub trait Clock {
    fn elapsed_secs(&self) -> f32;
}

pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock advanced by hand; clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, secs: f32) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f32) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn elapsed_secs(&self) -> f32 {
        self.now.get()
    }
}
