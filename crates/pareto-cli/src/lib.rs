//! CLI library components for the model price synthesizer.

pub mod config;
pub mod logging;
