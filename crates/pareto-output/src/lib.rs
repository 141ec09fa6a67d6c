//! Output writers for synthesized model price data.
//!
//! - **JSON**: the resolved list as `synthesized_data.json`
//! - **JavaScript**: the resolved list as an ES module, `synthesized_data.js`
//! - **Debug JSON**: every match decision as `price_matching_debug.json`

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use pareto_model::{DebugRecord, ResolvedRecord};

mod error;
mod js;
mod json;

pub use error::{OutputError, Result};
pub use js::{RESOLVED_JS_FILE, render_js_module, write_resolved_js};
pub use json::{DEBUG_JSON_FILE, RESOLVED_JSON_FILE, write_debug_json, write_resolved_json};

/// Format of the resolved list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Js,
}

/// Files produced by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub resolved: PathBuf,
    pub debug: PathBuf,
}

/// Writes the resolved list in `format` and the debug trail as JSON.
pub fn write_outputs(
    output_dir: &Path,
    format: OutputFormat,
    resolved: &[ResolvedRecord],
    debug: &[DebugRecord],
    generated_at: NaiveDateTime,
) -> Result<WrittenOutputs> {
    let resolved = match format {
        OutputFormat::Json => write_resolved_json(output_dir, resolved)?,
        OutputFormat::Js => write_resolved_js(output_dir, resolved, generated_at)?,
    };
    let debug = write_debug_json(output_dir, debug)?;
    Ok(WrittenOutputs { resolved, debug })
}
