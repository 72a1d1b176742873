/// Abstraction over time sources.
/// Implementations: SystemClock (production), ManualClock (testing/simulation).
///
/// Time is a `u32` millisecond counter from an arbitrary epoch and is allowed
/// to wrap at `u32::MAX`. Consumers must compare instants with `wrapping_sub`,
/// never with `-` or ordering operators.
pub trait Clock {
    /// Current time in milliseconds from an arbitrary epoch. Wraps.
    fn now_ms(&self) -> u32;
}

/// System clock backed by `std::time::Instant`.
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wraparound: one lap every ~49.7 days.
        self.start.elapsed().as_millis() as u32
    }
}

/// Manually advanced clock for deterministic tests and simulation runs.
pub struct ManualClock {
    current_ms: std::cell::Cell<u32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            current_ms: std::cell::Cell::new(0),
        }
    }

    pub fn set(&self, ms: u32) {
        self.current_ms.set(ms);
    }

    pub fn advance(&self, delta_ms: u32) {
        self.current_ms
            .set(self.current_ms.get().wrapping_add(delta_ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.current_ms.get()
    }
}
