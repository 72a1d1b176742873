use crate::traits::{DISPLAY_DIGITS, Display, Sounder};

/// Recorded display call for testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Pattern([u8; DISPLAY_DIGITS]),
    Text(String),
    Number {
        value: u16,
        leading_zeros: bool,
        length: u8,
        position: u8,
    },
    Brightness(u8),
}

/// A mock Display that records every call for assertions. Needs no
/// hardware.
#[derive(Debug, Default)]
pub struct DisplayRecorder {
    calls: Vec<DisplayCall>,
}

impl DisplayRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Display for DisplayRecorder {
    fn show_pattern(&mut self, pattern: [u8; DISPLAY_DIGITS]) {
        self.calls.push(DisplayCall::Pattern(pattern));
    }

    fn show_text(&mut self, text: &str) {
        self.calls.push(DisplayCall::Text(text.to_string()));
    }

    fn show_number(&mut self, value: u16, leading_zeros: bool, length: u8, position: u8) {
        self.calls.push(DisplayCall::Number {
            value,
            leading_zeros,
            length,
            position,
        });
    }

    fn set_brightness(&mut self, level: u8) {
        self.calls.push(DisplayCall::Brightness(level));
    }
}

/// A mock Sounder that records pulse durations.
#[derive(Debug, Default)]
pub struct SounderRecorder {
    pulses: Vec<u32>,
}

impl SounderRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> &[u32] {
        &self.pulses
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
    }
}

impl Sounder for SounderRecorder {
    fn pulse(&mut self, duration_ms: u32) {
        self.pulses.push(duration_ms);
    }
}
