use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::round::TICK_SLOT_MS;
use crate::traits::{Level, Line, LineReader};

/// A single raw level change for replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Timestamp in ms from simulation start.
    pub at_ms: u32,
    pub line: Line,
    pub level: Level,
}

/// Timed raw input edits, replayable through [`ScriptedLines`].
///
/// Event times count up from simulation start and are replayed in order;
/// `new` sorts, so authored scripts need not be. A press is two events,
/// the drop to `Low` and the later return to `High`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    pub events: Vec<ScriptEvent>,
}

impl InputScript {
    pub fn new(mut events: Vec<ScriptEvent>) -> Self {
        events.sort_by_key(|e| e.at_ms);
        Self { events }
    }

    /// Append a full press: down at `down_ms`, back up at `up_ms`.
    pub fn press(&mut self, line: Line, down_ms: u32, up_ms: u32) {
        self.events.push(ScriptEvent {
            at_ms: down_ms,
            line,
            level: Level::Low,
        });
        self.events.push(ScriptEvent {
            at_ms: up_ms,
            line,
            level: Level::High,
        });
        self.events.sort_by_key(|e| e.at_ms);
    }

    /// Timestamp of the last event, 0 for an empty script.
    pub fn end_ms(&self) -> u32 {
        self.events.last().map_or(0, |e| e.at_ms)
    }

    /// Read a script from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let script: InputScript = serde_json::from_str(&data)?;
        Ok(Self::new(script.events))
    }

    /// Write the script to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Line levels reconstructed from a script as simulated time advances.
///
/// `advance_to` applies every event due by `now_ms`; `level` then answers
/// from the current snapshot. Lines a script never touches idle `High`.
pub struct ScriptedLines {
    events: Vec<ScriptEvent>,
    cursor: usize,
    levels: HashMap<Line, Level>,
}

impl ScriptedLines {
    pub fn new(script: InputScript) -> Self {
        Self {
            events: script.events,
            cursor: 0,
            levels: HashMap::new(),
        }
    }

    /// Apply every event with `at_ms <= now_ms`. Call with non-decreasing
    /// times; the cursor never rewinds.
    pub fn advance_to(&mut self, now_ms: u32) {
        while let Some(event) = self.events.get(self.cursor) {
            if event.at_ms > now_ms {
                break;
            }
            self.levels.insert(event.line, event.level);
            self.cursor += 1;
        }
    }

    /// True once every scripted event has been applied.
    pub fn exhausted(&self) -> bool {
        self.cursor == self.events.len()
    }
}

impl LineReader for ScriptedLines {
    fn level(&mut self, line: Line) -> Level {
        self.levels.get(&line).copied().unwrap_or(Level::High)
    }
}

/// Built-in demonstration round: arm, count down, let one player win,
/// then clear. Timings derive from the settings so the demo stays valid
/// whatever the debounce or countdown length.
pub fn demo_script(settings: &Settings) -> InputScript {
    let debounce = settings.debounce_ms;
    // Reset press at 10 ms arms once debounced.
    let armed = 10 + debounce;
    let open = armed + u32::from(settings.countdown_secs) * TICK_SLOT_MS;

    let winner = Line::Player(if settings.players > 1 { 1 } else { 0 });
    let late = Line::Player(if settings.players > 2 { 2 } else { 0 });

    let mut script = InputScript::default();
    script.press(Line::Reset, 10, 10 + 60);
    // Winner presses 120 ms after the window opens; a second player is
    // 90 ms behind and loses.
    script.press(winner, open + 120, open + 300);
    script.press(late, open + 210, open + 380);
    // Operator clears the locked round.
    script.press(Line::Reset, open + 1_500, open + 1_560);
    script
}
