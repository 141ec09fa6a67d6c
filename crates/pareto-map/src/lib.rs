//! Entity resolution between leaderboard names and price catalog names.
//!
//! [`normalize`] reduces a raw model name to a comparable identity,
//! [`PriceCatalogIndex`] deduplicates the flattened catalog, and
//! [`EntityMatcher`] walks the exact, normalized and fuzzy rungs. Unmatched
//! names fall through to [`DefaultPriceEstimator`].

#![deny(unsafe_code)]

pub mod display;
pub mod estimate;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod score;

pub use display::{find_disambiguator, resolve_collisions, strip_vendor_prefix};
pub use estimate::{
    DefaultPriceEstimator, FALLBACK_PRICE, PriceEstimate, PriceRule,
    ProviderFamily,
};
pub use index::{IndexedEntry, PriceCatalogIndex};
pub use matcher::{EntityMatcher, MatchResult};
pub use normalize::normalize;
pub use score::{
    DEFAULT_FAMILIES, MIN_TOKEN_OVERLAP, MatchConfig, NameForms, PairScore, ScoreComponent,
    score_pair,
};
