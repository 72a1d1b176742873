/// Number of digit cells on the readout.
pub const DISPLAY_DIGITS: usize = 4;

/// Brightness ceiling accepted by `Display::set_brightness`.
pub const MAX_BRIGHTNESS: u8 = 7;

/// Middle segment only; four of these make the idle dashes.
const SEG_MIDDLE: u8 = 0b0100_0000;

/// All cells dark.
pub const BLANK_PATTERN: [u8; DISPLAY_DIGITS] = [0; DISPLAY_DIGITS];

/// Four dashes, shown while a round waits to be armed.
pub const IDLE_PATTERN: [u8; DISPLAY_DIGITS] = [SEG_MIDDLE; DISPLAY_DIGITS];

/// Abstraction over the four-digit readout.
/// Implementations: ConsoleDisplay (log-backed), DisplayRecorder (testing),
/// or a segment-driver display on real hardware.
///
/// The controller calls this seam only at phase transitions, never from a
/// tight loop, so implementations are free to do slow I/O.
pub trait Display {
    /// Drive raw segment patterns, one byte per cell, leftmost first.
    fn show_pattern(&mut self, pattern: [u8; DISPLAY_DIGITS]);

    /// Show a short text label. Renderings are implementation-defined;
    /// text longer than the readout is truncated.
    fn show_text(&mut self, text: &str);

    /// Show `value` as decimal digits.
    ///
    /// `length` cells starting at cell `position` (0 = leftmost) are
    /// rewritten; the rest keep their contents. With `leading_zeros` the
    /// field is zero-padded, otherwise left-blanked.
    fn show_number(&mut self, value: u16, leading_zeros: bool, length: u8, position: u8);

    /// Set panel brightness, `0..=MAX_BRIGHTNESS`.
    fn set_brightness(&mut self, level: u8);
}
