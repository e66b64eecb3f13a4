use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Minor currency units.
    pub price: i64,
    pub category_id: Option<i64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Explicit slug; derived from `name` when absent.
    pub slug: Option<String>,
    #[serde(default)]
    pub price: i64,
    pub category_id: Option<i64>,
}
