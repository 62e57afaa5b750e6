pub mod pages;
pub mod session;
pub mod storage;
pub mod store;

pub use pages::{HomePage, MoviesPage, RecentPage, TitlePage, TvPage};
pub use session::{FetchCoordinator, FetchToken};
pub use storage::WatchlistStorage;
pub use store::{WatchlistChange, WatchlistStore};
