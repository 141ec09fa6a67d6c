pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{
    Numeric, PriceEntry, PriceRecord, ProviderCatalog, RankEntry, RankRecord,
    UNKNOWN_ORGANIZATION,
};
pub use error::{CatalogSide, EntryContext, InputError, Result};
pub use record::{DEFAULT_ESTIMATE_MARKER, DebugRecord, Exclusion, MatchStrategy, ResolvedRecord};
