use std::path::{Path, PathBuf};

use pareto_model::{DebugRecord, ResolvedRecord};
use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};

pub const RESOLVED_JSON_FILE: &str = "synthesized_data.json";
pub const DEBUG_JSON_FILE: &str = "price_matching_debug.json";

/// Writes the resolved list as pretty JSON.
pub fn write_resolved_json(output_dir: &Path, records: &[ResolvedRecord]) -> Result<PathBuf> {
    let path = write_pretty(output_dir, RESOLVED_JSON_FILE, records)?;
    info!(path = %path.display(), records = records.len(), "wrote resolved records");
    Ok(path)
}

/// Writes the match audit trail as pretty JSON.
pub fn write_debug_json(output_dir: &Path, records: &[DebugRecord]) -> Result<PathBuf> {
    let path = write_pretty(output_dir, DEBUG_JSON_FILE, records)?;
    info!(path = %path.display(), records = records.len(), "wrote match debug trail");
    Ok(path)
}

fn write_pretty<T: Serialize + ?Sized>(
    output_dir: &Path,
    file_name: &str,
    payload: &T,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::io(output_dir, e))?;
    let output_path = output_dir.join(file_name);
    let json = serde_json::to_string_pretty(payload).map_err(|e| OutputError::json(&output_path, e))?;
    std::fs::write(&output_path, format!("{json}\n")).map_err(|e| OutputError::io(&output_path, e))?;
    Ok(output_path)
}
