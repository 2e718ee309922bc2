//! Backend side of the GUI: commands queued by the UI and the worker that
//! serves them against the card API.

pub mod commands;
pub mod runtime;
