pub mod categories;
pub mod client;
pub mod discover;
pub mod error;

pub use categories::{MovieCategory, TimeWindow, TrendingKind, TvCategory};
pub use client::{TmdbClient, DEFAULT_BASE_URL};
pub use discover::DiscoverParams;
pub use error::GatewayError;
