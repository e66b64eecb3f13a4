pub mod backfill;
pub mod categories;
pub mod error;
pub mod products;
pub mod slug;
pub mod unique;

pub use error::CatalogError;
