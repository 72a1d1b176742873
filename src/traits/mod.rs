//! Collaborator seams between the controller core and the outside world.
//!
//! This module provides:
//! - [`Clock`]: Wrapping millisecond time source
//! - [`LineReader`]: Raw (undebounced) input line reads
//! - [`Display`]: Four-digit readout driver
//! - [`Sounder`]: Feedback pulse driver
//!
//! The core never touches hardware or wall time directly; every external
//! effect goes through one of these traits so tests and the simulator can
//! substitute deterministic implementations.

mod audio;
mod display;
mod lines;
mod time;

pub use audio::{NullSounder, Sounder};
pub use display::{BLANK_PATTERN, DISPLAY_DIGITS, Display, IDLE_PATTERN, MAX_BRIGHTNESS};
pub use lines::{Level, Line, LineReader};
pub use time::{Clock, ManualClock, SystemClock};
