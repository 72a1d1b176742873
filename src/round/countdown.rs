/// How long each countdown digit stays lit.
pub const HOLD_MS: u32 = 700;

/// Dark gap between digits.
pub const BLANK_MS: u32 = 200;

/// Full duration of one countdown digit slot.
pub const TICK_SLOT_MS: u32 = HOLD_MS + BLANK_MS;

/// What one poll of the sequencer produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Nothing due yet; poll again later.
    Pending,
    /// A digit became due. Show it and pulse.
    Tick(u8),
    /// The current digit's hold elapsed; blank the readout.
    Blank,
    /// The sequence finished; the answer window opens at `open_ms`.
    Open { open_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Started but not yet polled; first tick is due immediately.
    Arm,
    /// Digit lit, waiting out the hold.
    Hold,
    /// Readout dark, waiting out the gap.
    Blank,
    Done,
}

/// Countdown from `seconds` to 1, paced against the polled clock.
///
/// The sequencer never sleeps. Each `step` compares elapsed time against
/// the current phase with `wrapping_sub` and reports at most one boundary
/// crossing; between boundaries it answers `Pending` in constant time, so
/// the caller's loop stays free to sample inputs every iteration.
#[derive(Debug)]
pub struct Countdown {
    digit: u8,
    phase: Phase,
    phase_start_ms: u32,
}

impl Countdown {
    /// Begin a countdown of `seconds` ticks. Zero seconds is valid: the
    /// first `step` reports `Open` without ever ticking.
    pub fn start(seconds: u8, now_ms: u32) -> Self {
        Self {
            digit: seconds,
            phase: Phase::Arm,
            phase_start_ms: now_ms,
        }
    }

    /// Advance against the clock. Call once per poll until `Open` comes
    /// back; afterwards the sequencer is spent and keeps answering
    /// `Pending`.
    pub fn step(&mut self, now_ms: u32) -> CountdownStep {
        match self.phase {
            Phase::Arm => {
                if self.digit == 0 {
                    self.phase = Phase::Done;
                    return CountdownStep::Open { open_ms: now_ms };
                }
                self.phase = Phase::Hold;
                self.phase_start_ms = now_ms;
                CountdownStep::Tick(self.digit)
            }
            Phase::Hold => {
                if now_ms.wrapping_sub(self.phase_start_ms) >= HOLD_MS {
                    self.phase = Phase::Blank;
                    self.phase_start_ms = now_ms;
                    CountdownStep::Blank
                } else {
                    CountdownStep::Pending
                }
            }
            Phase::Blank => {
                if now_ms.wrapping_sub(self.phase_start_ms) >= BLANK_MS {
                    if self.digit > 1 {
                        self.digit -= 1;
                        self.phase = Phase::Hold;
                        self.phase_start_ms = now_ms;
                        CountdownStep::Tick(self.digit)
                    } else {
                        self.phase = Phase::Done;
                        CountdownStep::Open { open_ms: now_ms }
                    }
                } else {
                    CountdownStep::Pending
                }
            }
            Phase::Done => CountdownStep::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}
