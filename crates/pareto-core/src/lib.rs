#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod pipeline;

pub use error::ConfigError;
pub use options::{DEFAULT_MIN_SCORE, SynthesisOptions};
pub use pipeline::{SkippedEntry, SynthesisOutput, SynthesisPipeline};
