use std::path::Path;

/// Catalog file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Detects the format from a `.json` or `.csv` extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a/ranks.JSON")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("ranks.csv")), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path(Path::new("ranks.tsv")), None);
        assert_eq!(InputFormat::from_path(Path::new("ranks")), None);
    }
}
