use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two input catalogs an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSide {
    Rank,
    Price,
}

impl CatalogSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSide::Rank => "rank",
            CatalogSide::Price => "price",
        }
    }
}

impl fmt::Display for CatalogSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry that cannot enter matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{side} entry #{index}{context}: missing required field `{field}`")]
    MissingField {
        side: CatalogSide,
        index: usize,
        context: EntryContext,
        field: &'static str,
    },
    #[error("{side} entry #{index}{context}: invalid `{field}` value {value}")]
    InvalidValue {
        side: CatalogSide,
        index: usize,
        context: EntryContext,
        field: &'static str,
        value: String,
    },
}

impl InputError {
    pub fn side(&self) -> CatalogSide {
        match self {
            InputError::MissingField { side, .. } | InputError::InvalidValue { side, .. } => *side,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            InputError::MissingField { index, .. } | InputError::InvalidValue { index, .. } => {
                *index
            }
        }
    }
}

/// Optional provider/name context rendered into [`InputError`] messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryContext {
    pub provider: Option<String>,
    pub name: Option<String>,
}

impl fmt::Display for EntryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.provider, &self.name) {
            (Some(provider), Some(name)) => write!(f, " ({provider}: {name})"),
            (Some(provider), None) => write!(f, " ({provider})"),
            (None, Some(name)) => write!(f, " ({name})"),
            (None, None) => Ok(()),
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
