//! ES module rendering of the resolved list, for direct import by a web
//! front end.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use pareto_model::ResolvedRecord;
use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};

pub const RESOLVED_JS_FILE: &str = "synthesized_data.js";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the exported `data` array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRow<'a> {
    model: &'a str,
    elo: i64,
    price: f64,
    output_price: f64,
    provider: &'a str,
    votes: u64,
}

impl<'a> From<&'a ResolvedRecord> for JsRow<'a> {
    fn from(record: &'a ResolvedRecord) -> Self {
        Self {
            model: &record.display_name,
            elo: record.score,
            price: record.input_price,
            output_price: record.output_price,
            provider: &record.provider,
            votes: record.votes,
        }
    }
}

/// Renders `export const data = [...]` with one row per line, followed by
/// `export const dataLastUpdated`.
pub fn render_js_module(
    records: &[ResolvedRecord],
    generated_at: NaiveDateTime,
) -> serde_json::Result<String> {
    let mut module = String::from("export const data = [\n");
    for record in records {
        let row = serde_json::to_string(&JsRow::from(record))?;
        module.push_str(&format!("  {row},\n"));
    }
    module.push_str("];\n\n");
    module.push_str(&format!(
        "export const dataLastUpdated = \"{}\";\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    Ok(module)
}

/// Writes the resolved list as an ES module stamped with `generated_at`.
pub fn write_resolved_js(
    output_dir: &Path,
    records: &[ResolvedRecord],
    generated_at: NaiveDateTime,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::io(output_dir, e))?;
    let output_path = output_dir.join(RESOLVED_JS_FILE);
    let module =
        render_js_module(records, generated_at).map_err(|e| OutputError::json(&output_path, e))?;
    std::fs::write(&output_path, module).map_err(|e| OutputError::io(&output_path, e))?;
    info!(path = %output_path.display(), records = records.len(), "wrote resolved module");
    Ok(output_path)
}
