//! Input catalog records and their validated forms.
//!
//! Loaders hand over [`RankRecord`] and [`ProviderCatalog`] values exactly as
//! parsed, with every field optional. Validation into [`RankEntry`] and
//! [`PriceEntry`] happens per entry so that one malformed row can be skipped
//! without rejecting the whole catalog.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogSide, EntryContext, InputError, Result};

/// Organization label used when the rank source leaves it blank.
pub const UNKNOWN_ORGANIZATION: &str = "Unknown";

/// A number that may arrive as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Returns the value as `f64`, or `None` when the text is not a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(value) => Some(*value),
            Numeric::Text(text) => text.trim().replace(',', "").parse::<f64>().ok(),
        }
    }

    fn render(&self) -> String {
        match self {
            Numeric::Number(value) => value.to_string(),
            Numeric::Text(text) => format!("{text:?}"),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

/// One row of the ranking source, as parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    #[serde(default, alias = "Model", alias = "model")]
    pub name: Option<String>,
    #[serde(default, alias = "Score", alias = "arena_score")]
    pub score: Option<Numeric>,
    #[serde(default, alias = "Votes")]
    pub votes: Option<Numeric>,
    #[serde(default, alias = "Organization")]
    pub organization: Option<String>,
}

impl RankRecord {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(Numeric::Number(score)),
            ..Self::default()
        }
    }

    pub fn with_votes(mut self, votes: u64) -> Self {
        self.votes = Some(Numeric::Number(votes as f64));
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

/// One model row of a provider's price list, as parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "input_price")]
    pub input_price: Option<Numeric>,
    #[serde(default, alias = "output_price")]
    pub output_price: Option<Numeric>,
}

impl PriceRecord {
    pub fn new(name: impl Into<String>, input_price: f64) -> Self {
        Self {
            name: Some(name.into()),
            input_price: Some(Numeric::Number(input_price)),
            output_price: None,
        }
    }

    pub fn with_output_price(mut self, output_price: f64) -> Self {
        self.output_price = Some(Numeric::Number(output_price));
        self
    }
}

/// A provider group from the pricing source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderCatalog {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub models: Vec<PriceRecord>,
}

impl ProviderCatalog {
    pub fn new(provider: impl Into<String>, models: Vec<PriceRecord>) -> Self {
        Self {
            provider: provider.into(),
            models,
        }
    }
}

/// A validated ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: String,
    pub score: i64,
    /// Score as read, before rounding.
    pub raw_score: f64,
    pub votes: u64,
    pub organization: String,
}

impl RankEntry {
    /// Validates the record at `index` of the rank catalog.
    ///
    /// `name` and `score` are required. Fractional scores are rounded,
    /// missing votes count as zero and a blank organization becomes
    /// [`UNKNOWN_ORGANIZATION`].
    pub fn from_record(index: usize, record: &RankRecord) -> Result<Self> {
        let name = non_blank(record.name.as_deref());
        let context = EntryContext {
            provider: None,
            name: name.map(str::to_string),
        };
        let Some(name) = name else {
            return Err(missing(CatalogSide::Rank, index, context, "name"));
        };
        let Some(raw_score) = &record.score else {
            return Err(missing(CatalogSide::Rank, index, context, "score"));
        };
        let raw_score = match raw_score.as_f64() {
            Some(value) if value.is_finite() => value,
            _ => return Err(invalid(CatalogSide::Rank, index, context, "score", raw_score)),
        };
        let votes = match &record.votes {
            None => 0,
            Some(raw) => match raw.as_f64() {
                Some(value) if value.is_finite() && value >= 0.0 => value.round() as u64,
                _ => return Err(invalid(CatalogSide::Rank, index, context, "votes", raw)),
            },
        };
        let organization = non_blank(record.organization.as_deref())
            .unwrap_or(UNKNOWN_ORGANIZATION)
            .to_string();
        Ok(Self {
            name: name.to_string(),
            score: raw_score.round() as i64,
            raw_score,
            votes,
            organization,
        })
    }
}

/// A validated price list entry, tagged with its provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub name: String,
    pub input_price: f64,
    pub output_price: f64,
    pub provider: String,
}

impl PriceEntry {
    /// Validates the record at `index` of `provider`'s model list.
    ///
    /// `name` and `inputPrice` are required and prices must be finite and
    /// non-negative. A missing output price falls back to the input price.
    pub fn from_record(provider: &str, index: usize, record: &PriceRecord) -> Result<Self> {
        let name = non_blank(record.name.as_deref());
        let context = EntryContext {
            provider: Some(provider.to_string()),
            name: name.map(str::to_string),
        };
        let Some(name) = name else {
            return Err(missing(CatalogSide::Price, index, context, "name"));
        };
        let Some(raw_input) = &record.input_price else {
            return Err(missing(CatalogSide::Price, index, context, "inputPrice"));
        };
        let Some(input_price) = price_value(raw_input) else {
            return Err(invalid(CatalogSide::Price, index, context, "inputPrice", raw_input));
        };
        let output_price = match &record.output_price {
            None => input_price,
            Some(raw) => match price_value(raw) {
                Some(value) => value,
                None => {
                    return Err(invalid(CatalogSide::Price, index, context, "outputPrice", raw));
                }
            },
        };
        Ok(Self {
            name: name.to_string(),
            input_price,
            output_price,
            provider: if provider.trim().is_empty() {
                UNKNOWN_ORGANIZATION.to_string()
            } else {
                provider.trim().to_string()
            },
        })
    }
}

fn price_value(raw: &Numeric) -> Option<f64> {
    raw.as_f64().filter(|value| value.is_finite() && *value >= 0.0)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn missing(
    side: CatalogSide,
    index: usize,
    context: EntryContext,
    field: &'static str,
) -> InputError {
    InputError::MissingField {
        side,
        index,
        context,
        field,
    }
}

fn invalid(
    side: CatalogSide,
    index: usize,
    context: EntryContext,
    field: &'static str,
    value: &Numeric,
) -> InputError {
    InputError::InvalidValue {
        side,
        index,
        context,
        field,
        value: value.render(),
    }
}
