use crate::traits::Level;

/// Debounce tuning shared by every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long a raw level must hold steady before a press counts, in ms.
    pub interval_ms: u32,
}

impl DebounceConfig {
    pub const fn new(interval_ms: u32) -> Self {
        Self { interval_ms }
    }
}

/// Debounced state of one input line.
///
/// `sample` must be fed every raw read for the channel, in every round
/// phase, so the stability window tracks the line continuously. Skipping
/// samples while a phase ignores the line would corrupt the history.
#[derive(Debug, Clone, Copy)]
pub struct InputChannel {
    raw: Level,
    stable: Level,
    changed_at_ms: u32,
    active: bool,
    just_pressed: bool,
}

impl InputChannel {
    /// Fresh channel, idle at the pulled-up level.
    pub fn new() -> Self {
        Self {
            raw: Level::High,
            stable: Level::High,
            changed_at_ms: 0,
            active: false,
            just_pressed: false,
        }
    }

    /// Feed one raw read taken at `now_ms` and return the debounced active
    /// state.
    ///
    /// A channel turns active only once the raw level has agreed with the
    /// pressed polarity (`Low`) for at least the debounce interval; any flip
    /// restarts the window. Release deactivates on the next sample without
    /// waiting out the interval. Timestamps wrap, so the elapsed check uses
    /// `wrapping_sub`.
    pub fn sample(&mut self, raw: Level, now_ms: u32, config: &DebounceConfig) -> bool {
        self.raw = raw;
        if raw != self.stable {
            self.stable = raw;
            self.changed_at_ms = now_ms;
        }
        let was_active = self.active;
        self.active = self.stable == Level::Low
            && now_ms.wrapping_sub(self.changed_at_ms) >= config.interval_ms;
        self.just_pressed = self.active && !was_active;
        self.active
    }

    /// Debounced pressed state as of the last sample.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True only on the sample where the channel turned active. Recomputed
    /// by every `sample` call, so read it before the next one.
    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    /// Raw level from the last sample, before filtering.
    pub fn raw_level(&self) -> Level {
        self.raw
    }

    /// Candidate level currently accumulating agreement.
    pub fn stable_level(&self) -> Level {
        self.stable
    }

    /// When the raw level last flipped, in clock ms.
    pub fn last_change_ms(&self) -> u32 {
        self.changed_at_ms
    }
}

impl Default for InputChannel {
    fn default() -> Self {
        Self::new()
    }
}
