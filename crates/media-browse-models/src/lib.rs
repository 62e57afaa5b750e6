pub mod credits;
pub mod details;
pub mod genre;
pub mod media;
pub mod page;

pub use credits::{CastMember, Credits, CrewMember};
pub use details::{MediaDetails, ProductionCompany};
pub use genre::Genre;
pub use media::{MediaKind, MediaRecord};
pub use page::Page;
