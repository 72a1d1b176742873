use tracing::{debug, info};

use crate::traits::{BLANK_PATTERN, DISPLAY_DIGITS, Display, IDLE_PATTERN, Sounder};

/// Display that narrates readout changes to the log. The simulator's
/// stand-in for the segment panel.
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn show_pattern(&mut self, pattern: [u8; DISPLAY_DIGITS]) {
        let label = if pattern == IDLE_PATTERN {
            "idle dashes"
        } else if pattern == BLANK_PATTERN {
            "blank"
        } else {
            "raw segments"
        };
        info!(?pattern, "Display: {label}");
    }

    fn show_text(&mut self, text: &str) {
        info!(text, "Display: text");
    }

    fn show_number(&mut self, value: u16, leading_zeros: bool, length: u8, position: u8) {
        info!(value, leading_zeros, length, position, "Display: number");
    }

    fn set_brightness(&mut self, level: u8) {
        debug!(level, "Display: brightness");
    }
}

/// Sounder that narrates pulses to the log.
pub struct ConsoleSounder;

impl Sounder for ConsoleSounder {
    fn pulse(&mut self, duration_ms: u32) {
        info!(duration_ms, "Sounder: pulse");
    }
}
