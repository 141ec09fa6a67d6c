//! Leaderboard loading.
//!
//! Records are read leniently: missing or oddly typed fields become `None`
//! or text and are judged later by validation, so one bad row never fails
//! the whole load.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use pareto_model::RankRecord;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::format::InputFormat;

/// Loads a rank catalog from a `.json` or `.csv` file.
pub fn load_rank_catalog(path: &Path) -> Result<Vec<RankRecord>> {
    let records = match InputFormat::from_path(path) {
        Some(InputFormat::Json) => read_rank_json(path)?,
        Some(InputFormat::Csv) => read_rank_csv(path)?,
        None => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                kind: "rank catalog",
                expected: ".json or .csv",
            });
        }
    };
    info!(path = %path.display(), records = records.len(), "loaded rank catalog");
    Ok(records)
}

/// Reads a JSON array of rank records.
pub fn read_rank_json(path: &Path) -> Result<Vec<RankRecord>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::json(path, e))
}

/// Reads a headed CSV file of rank records; blank rows are skipped.
pub fn read_rank_csv(path: &Path) -> Result<Vec<RankRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let mut records = Vec::new();
    for record in reader.deserialize::<RankRecord>() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        if record == RankRecord::default() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}
