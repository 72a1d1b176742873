//! Debounced input sampling.
//!
//! This module provides:
//! - [`InputChannel`]: Per-line debounce state with edge detection
//! - [`DebounceConfig`]: Shared stability-window tuning
//!
//! Raw reads come in through the [`crate::traits::LineReader`] seam; this
//! layer turns them into stable press/release facts the round logic can
//! trust.

mod channel;

pub use channel::{DebounceConfig, InputChannel};
