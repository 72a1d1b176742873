//! Scripted simulation of the controller's inputs and outputs.
//!
//! This module provides:
//! - [`InputScript`] / [`ScriptedLines`]: Timed raw-level replay
//! - [`Simulation`]: The polled loop on a manual clock
//! - [`DisplayRecorder`] / [`SounderRecorder`]: Recording collaborators
//! - [`ConsoleDisplay`] / [`ConsoleSounder`]: Log-narrating collaborators
//! - [`demo_script`]: A canned full round for the binary's default run

mod console;
mod recorder;
mod runner;
mod script;

pub use console::{ConsoleDisplay, ConsoleSounder};
pub use recorder::{DisplayCall, DisplayRecorder, SounderRecorder};
pub use runner::Simulation;
pub use script::{InputScript, ScriptEvent, ScriptedLines, demo_script};
