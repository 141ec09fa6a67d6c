use std::path::PathBuf;

use pareto_core::SynthesisOutput;
use pareto_output::WrittenOutputs;

#[derive(Debug)]
pub struct SynthesisReport {
    pub output: SynthesisOutput,
    pub output_dir: PathBuf,
    /// `None` for a dry run.
    pub written: Option<WrittenOutputs>,
}
