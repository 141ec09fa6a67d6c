#![deny(unsafe_code)]

pub mod error;
pub mod format;
pub mod price;
pub mod rank;

pub use error::{IngestError, Result};
pub use format::InputFormat;
pub use price::load_price_catalog;
pub use rank::{load_rank_catalog, read_rank_csv, read_rank_json};
