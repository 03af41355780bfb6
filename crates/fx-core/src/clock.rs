use std::cell::Cell;
use std::rc::Rc;

/// Wall-clock source in milliseconds. Only differences between readings
/// matter; the origin is arbitrary.
pub trait Clock {
    fn now_ms(&self) -> f64;

    #[inline]
    fn now_secs(&self) -> f64 {
        self.now_ms() / 1000.0
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle and give another to the component under test.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now_ms.set(ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}
