use serde::{Deserialize, Serialize};

/// Electrical level of an input line.
///
/// Lines idle `High` (pull-up wiring) and read `Low` while the switch is
/// closed. Everything above the raw read works in terms of this enum; no
/// pin numbers or board details leak past the `LineReader` seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// True when the switch is closed (active-low wiring).
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

/// Logical input line of the controller.
///
/// `Player` carries the zero-based player index; the wiring map from lines
/// to physical pins lives entirely inside `LineReader` implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    Reset,
    Player(usize),
}

/// Abstraction over raw line reads.
/// Implementations: ScriptedLines (simulation/testing), or a GPIO-backed
/// reader on real hardware.
pub trait LineReader {
    /// Instantaneous, unfiltered level of `line`. Debouncing happens above
    /// this seam, never inside it.
    fn level(&mut self, line: Line) -> Level;
}
