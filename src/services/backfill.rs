use crate::config::SlugConfig;
use crate::services::unique::assign_id_slug;
use crate::Database;
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    pub categories: usize,
    pub products: usize,
}

impl BackfillReport {
    pub fn total(&self) -> usize {
        self.categories + self.products
    }
}

/// Gives every category and product without a slug one derived from its
/// name and id. Slugs that are already set are left alone.
///
/// Rows are slugged one at a time with the same fallback as record
/// creation, so a row whose `<base>-<id>` is already taken by an explicit
/// slug gets `<base>-<id>-2` instead of failing the whole run.
pub fn backfill_slugs(db: &Database, policy: SlugConfig) -> Result<BackfillReport> {
    let conn = db.get()?;
    let tx = conn.unchecked_transaction()?;

    let categories = backfill_table(&tx, "categories", policy.max_attempts)?;
    let products = backfill_table(&tx, "products", policy.max_attempts)?;

    tx.commit()?;

    let report = BackfillReport {
        categories,
        products,
    };
    tracing::info!(
        "Backfilled {} category and {} product slugs",
        report.categories,
        report.products
    );
    Ok(report)
}

fn backfill_table(conn: &Connection, table: &'static str, max_attempts: u32) -> Result<usize> {
    let rows: Vec<(i64, String)> = {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, name FROM {} WHERE slug IS NULL OR slug = '' ORDER BY id",
            table
        ))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        rows
    };

    for (id, name) in &rows {
        let slug = assign_id_slug(conn, table, name, *id, max_attempts)
            .with_context(|| format!("Backfilling {} id={} failed", table, id))?;
        tracing::debug!("Backfilled {} id={} with '{}'", table, id, slug);
    }

    Ok(rows.len())
}
