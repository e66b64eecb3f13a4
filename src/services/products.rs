use crate::config::SlugConfig;
use crate::models::{NewProduct, Product};
use crate::services::error::CatalogError;
use crate::services::unique::insert_slugged;
use crate::Database;
use anyhow::Result;
use rand::Rng;
use rusqlite::OptionalExtension;

const PRODUCT_COLUMNS: &str = "id, name, slug, price, category_id, created_at";

pub fn create_product(db: &Database, policy: SlugConfig, input: NewProduct) -> Result<i64> {
    create_product_with_rng(db, policy, input, &mut rand::thread_rng())
}

/// `create_product` drawing random suffixes from `rng`.
pub fn create_product_with_rng<R: Rng>(
    db: &Database,
    policy: SlugConfig,
    input: NewProduct,
    rng: &mut R,
) -> Result<i64> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName.into());
    }
    if input.price < 0 {
        return Err(CatalogError::NegativePrice(input.price).into());
    }

    let mut conn = db.get()?;

    if let Some(category_id) = input.category_id {
        let exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM categories WHERE id = ?",
                [category_id],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(CatalogError::CategoryNotFound(category_id.to_string()).into());
        }
    }

    let id = insert_slugged(
        &mut conn,
        "products",
        name,
        input.slug.as_deref(),
        policy,
        rng,
        |conn, slug| {
            conn.execute(
                "INSERT INTO products (name, slug, price, category_id) VALUES (?, ?, ?, ?)",
                (name, slug, input.price, input.category_id),
            )
        },
    )?;

    tracing::info!("Created product '{}' (id={})", name, id);
    Ok(id)
}

pub fn get_product_by_id(db: &Database, id: i64) -> Result<Option<Product>> {
    let conn = db.get()?;
    let product = conn
        .query_row(
            &format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS),
            [id],
            row_to_product,
        )
        .optional()?;
    Ok(product)
}

pub fn get_product_by_slug(db: &Database, slug: &str) -> Result<Option<Product>> {
    let conn = db.get()?;
    let product = conn
        .query_row(
            &format!("SELECT {} FROM products WHERE slug = ?", PRODUCT_COLUMNS),
            [slug],
            row_to_product,
        )
        .optional()?;
    Ok(product)
}

/// Lists products, newest first, optionally limited to one category.
pub fn list_products(db: &Database, category_id: Option<i64>) -> Result<Vec<Product>> {
    let conn = db.get()?;
    let products = match category_id {
        Some(category_id) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM products WHERE slug IS NOT NULL AND category_id = ? ORDER BY id DESC",
                PRODUCT_COLUMNS
            ))?;
            let rows = stmt
                .query_map([category_id], row_to_product)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM products WHERE slug IS NOT NULL ORDER BY id DESC",
                PRODUCT_COLUMNS
            ))?;
            let rows = stmt
                .query_map([], row_to_product)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
    };
    Ok(products)
}

/// Renames a product without touching its slug.
pub fn rename_product(db: &Database, id: i64, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName.into());
    }
    let conn = db.get()?;
    let updated = conn.execute("UPDATE products SET name = ? WHERE id = ?", (name, id))?;
    if updated == 0 {
        return Err(CatalogError::ProductNotFound(id.to_string()).into());
    }
    Ok(())
}

pub fn delete_product(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM products WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        price: row.get(3)?,
        category_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}
