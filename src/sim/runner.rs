use tracing::info;

use crate::round::{Io, RoundController};
use crate::sim::script::{InputScript, ScriptedLines};
use crate::traits::{Display, ManualClock, Sounder};

/// Poll cadence of the simulated loop.
const STEP_MS: u32 = 1;

/// Replays an input script against a controller on a manual clock.
///
/// Each step sets the clock, applies due script events, then polls the
/// controller once, the same shape the production loop has with real
/// lines and a real clock.
pub struct Simulation {
    clock: ManualClock,
    lines: ScriptedLines,
}

impl Simulation {
    pub fn new(script: InputScript) -> Self {
        Self {
            clock: ManualClock::new(),
            lines: ScriptedLines::new(script),
        }
    }

    /// Drive the controller from t=0 through `until_ms` inclusive.
    pub fn run(
        &mut self,
        controller: &mut RoundController,
        display: &mut dyn Display,
        sounder: &mut dyn Sounder,
        until_ms: u32,
    ) {
        {
            let mut io = Io {
                clock: &self.clock,
                lines: &mut self.lines,
                display: &mut *display,
                sounder: &mut *sounder,
            };
            controller.startup(&mut io);
        }

        let mut now = 0u32;
        loop {
            self.clock.set(now);
            self.lines.advance_to(now);
            let mut io = Io {
                clock: &self.clock,
                lines: &mut self.lines,
                display: &mut *display,
                sounder: &mut *sounder,
            };
            controller.poll(&mut io);
            if now >= until_ms {
                break;
            }
            now += STEP_MS;
        }

        info!(
            until_ms,
            phase = %controller.phase(),
            "Simulation: finished"
        );
    }
}
