use crate::config::SlugConfig;
use crate::models::Category;
use crate::services::error::CatalogError;
use crate::services::unique::insert_slugged;
use crate::Database;
use anyhow::Result;
use rand::Rng;
use rusqlite::OptionalExtension;

const CATEGORY_COLUMNS: &str = "id, name, slug, created_at";

/// Creates a category and returns its id. Without an explicit slug one is
/// derived from `name` according to `policy`.
pub fn create_category(
    db: &Database,
    policy: SlugConfig,
    name: &str,
    slug: Option<&str>,
) -> Result<i64> {
    create_category_with_rng(db, policy, name, slug, &mut rand::thread_rng())
}

/// `create_category` drawing random suffixes from `rng`.
pub fn create_category_with_rng<R: Rng>(
    db: &Database,
    policy: SlugConfig,
    name: &str,
    slug: Option<&str>,
    rng: &mut R,
) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName.into());
    }

    let mut conn = db.get()?;
    let id = insert_slugged(
        &mut conn,
        "categories",
        name,
        slug,
        policy,
        rng,
        |conn, slug| {
            conn.execute(
                "INSERT INTO categories (name, slug) VALUES (?, ?)",
                (name, slug),
            )
        },
    )?;

    tracing::info!("Created category '{}' (id={})", name, id);
    Ok(id)
}

pub fn get_category_by_id(db: &Database, id: i64) -> Result<Option<Category>> {
    let conn = db.get()?;
    let category = conn
        .query_row(
            &format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS),
            [id],
            row_to_category,
        )
        .optional()?;
    Ok(category)
}

pub fn get_category_by_slug(db: &Database, slug: &str) -> Result<Option<Category>> {
    let conn = db.get()?;
    let category = conn
        .query_row(
            &format!("SELECT {} FROM categories WHERE slug = ?", CATEGORY_COLUMNS),
            [slug],
            row_to_category,
        )
        .optional()?;
    Ok(category)
}

pub fn list_categories(db: &Database) -> Result<Vec<Category>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM categories WHERE slug IS NOT NULL ORDER BY name, id",
        CATEGORY_COLUMNS
    ))?;
    let categories = stmt
        .query_map([], row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

/// Renames a category. The slug is part of its public URL and stays put.
pub fn rename_category(db: &Database, id: i64, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName.into());
    }
    let conn = db.get()?;
    let updated = conn.execute("UPDATE categories SET name = ? WHERE id = ?", (name, id))?;
    if updated == 0 {
        return Err(CatalogError::CategoryNotFound(id.to_string()).into());
    }
    Ok(())
}

/// Deletes a category; its products are kept and become uncategorised.
pub fn delete_category(db: &Database, id: i64) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM categories WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        created_at: row.get(3)?,
    })
}
