use thiserror::Error;

/// Catalog failures callers are expected to tell apart. They travel inside
/// `anyhow::Error`; recover them with `downcast_ref::<CatalogError>()`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid slug '{0}': must be 1-200 characters, lowercase letters, numbers, and single hyphens only")]
    InvalidSlug(String),

    #[error("Slug '{0}' is already in use")]
    SlugTaken(String),

    #[error("No free slug for '{name}' after {attempts} attempts")]
    SlugExhausted { name: String, attempts: u32 },

    #[error("Price must not be negative (got {0})")]
    NegativePrice(i64),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),
}
