//! Fixed-cadence tick gating from a variable-rate frame source
//!
//! Frame notifications arrive whenever the browser delivers them; the
//! simulation wants a fixed 60 Hz. `FixedStep` admits at most one tick per
//! notification and carries the elapsed-time remainder forward, so a long
//! stall costs a single late tick instead of a burst of catch-up steps.

/// Drop-frames fixed-timestep gate, no interpolation
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval_ms: f64,
    last_time: f64,
    primed: bool,
}

impl FixedStep {
    pub fn new(rate_hz: f64) -> Self {
        Self {
            interval_ms: 1000.0 / rate_hz,
            last_time: 0.0,
            primed: false,
        }
    }

    /// Forget the reference time. The next notification only re-primes it,
    /// so ticking resumes cleanly after a phase change instead of paying a
    /// stale delta.
    pub fn reset(&mut self) {
        self.primed = false;
    }

    /// Report whether a simulation step is due at this frame notification.
    /// When one is, the reference time becomes `now - (delta % interval)`:
    /// the remainder stays on the books rather than resetting to zero, which
    /// avoids long-term drift without ever bursting multiple steps.
    pub fn tick_due(&mut self, now_ms: f64) -> bool {
        if !self.primed {
            self.last_time = now_ms;
            self.primed = true;
            return false;
        }
        let delta = now_ms - self.last_time;
        if delta >= self.interval_ms {
            self.last_time = now_ms - (delta % self.interval_ms);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn debt_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.last_time
    }
}
