/// Converts wall-clock time into whole particle spawns at a fixed cadence.
///
/// Each call adds `elapsed / interval` credit; whole units are paid out and
/// the fractional remainder carries over, so the average rate does not depend
/// on how often the accumulator is polled.
#[derive(Clone, Debug)]
pub struct SpawnAccumulator {
    interval_ms: f64,
    last_sample_ms: Option<f64>,
    credit: f64,
}

impl SpawnAccumulator {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_sample_ms: None,
            credit: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Fractional credit carried into the next call, in `[0, 1)`.
    pub fn credit(&self) -> f64 {
        self.credit
    }

    /// Number of particles owed at `now_ms`.
    ///
    /// `reset` moves the sample point to `now_ms` first, so time spent away
    /// (or before the first sample) never turns into a burst.
    pub fn take(&mut self, now_ms: f64, reset: bool) -> u32 {
        let last = match self.last_sample_ms {
            Some(last) if !reset => last,
            _ => now_ms,
        };
        self.last_sample_ms = Some(now_ms);
        let elapsed = (now_ms - last).max(0.0);
        self.credit += elapsed / self.interval_ms;
        if self.credit >= 1.0 {
            let whole = self.credit.floor();
            self.credit -= whole;
            whole as u32
        } else {
            0
        }
    }
}
