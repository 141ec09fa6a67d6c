use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pareto_model::ProviderCatalog;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::format::InputFormat;

/// Loads a price catalog: a JSON array of `{ provider, models }` groups.
pub fn load_price_catalog(path: &Path) -> Result<Vec<ProviderCatalog>> {
    if InputFormat::from_path(path) != Some(InputFormat::Json) {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            kind: "price catalog",
            expected: ".json",
        });
    }
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let catalogs: Vec<ProviderCatalog> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::json(path, e))?;
    info!(
        path = %path.display(),
        providers = catalogs.len(),
        models = catalogs.iter().map(|c| c.models.len()).sum::<usize>(),
        "loaded price catalog"
    );
    Ok(catalogs)
}
