//! Round lifecycle: arming, countdown, arbitration, lockout.
//!
//! This module provides:
//! - [`Round`]: The idle/countdown/open/locked state machine
//! - [`Countdown`]: Non-blocking tick sequencer polled against the clock
//! - [`arbitrate`]: First-press winner selection across player channels
//! - [`winner_readout`]: Display clamping for the locked readout
//! - [`RoundController`]: Ties the above to sampled inputs and collaborators

mod arbiter;
mod controller;
mod countdown;
mod present;
mod state;

pub use arbiter::{Buzz, arbitrate};
pub use controller::{Io, OPEN_PULSE_MS, RoundController, TICK_PULSE_MS, WINNER_PULSE_MS};
pub use countdown::{BLANK_MS, Countdown, CountdownStep, HOLD_MS, TICK_SLOT_MS};
pub use present::{MAX_SHOWN_REACTION_MS, WinnerReadout, winner_readout};
pub use state::{PlayerId, Round, RoundEffect, RoundEvent, RoundPhase};
