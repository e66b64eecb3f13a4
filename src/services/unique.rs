//! Storage-side half of slug uniqueness: the unique index is the source of
//! truth, and callers insert optimistically and react to its violations.

use crate::config::{SlugConfig, SlugStrategy};
use crate::services::error::CatalogError;
use crate::services::slug;
use anyhow::Result;
use rand::Rng;
use rusqlite::Connection;

pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Runs `insert` with fresh candidates from `next_candidate` until one is
/// accepted by the unique index, giving up after `max_attempts`.
///
/// Errors other than a uniqueness violation are returned immediately.
pub fn insert_with_unique_slug<T>(
    name: &str,
    max_attempts: u32,
    mut next_candidate: impl FnMut() -> String,
    mut insert: impl FnMut(&str) -> rusqlite::Result<T>,
) -> Result<T> {
    for attempt in 1..=max_attempts {
        let candidate = next_candidate();
        match insert(&candidate) {
            Ok(value) => return Ok(value),
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(
                    "Slug '{}' already taken (attempt {}/{})",
                    candidate,
                    attempt,
                    max_attempts
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(CatalogError::SlugExhausted {
        name: name.to_string(),
        attempts: max_attempts,
    }
    .into())
}

/// Inserts a row that owns a slug and returns its id.
///
/// `insert` writes the row with the given slug, or with a NULL slug when
/// the id strategy fills it in afterwards. Everything happens in one
/// transaction so a row is never visible without its slug. Random
/// suffixes are drawn from `rng`.
pub(crate) fn insert_slugged<R: Rng>(
    conn: &mut Connection,
    table: &'static str,
    name: &str,
    explicit_slug: Option<&str>,
    policy: SlugConfig,
    rng: &mut R,
    mut insert: impl FnMut(&Connection, Option<&str>) -> rusqlite::Result<usize>,
) -> Result<i64> {
    let tx = conn.transaction()?;
    let tx_conn: &Connection = &tx;

    let id = match explicit_slug {
        Some(explicit) => {
            if !slug::is_canonical(explicit) {
                return Err(CatalogError::InvalidSlug(explicit.to_string()).into());
            }
            insert(tx_conn, Some(explicit)).map_err(|e| slug_conflict(e, explicit))?;
            tx_conn.last_insert_rowid()
        }
        None => match policy.strategy {
            SlugStrategy::Id => {
                insert(tx_conn, None)?;
                let id = tx_conn.last_insert_rowid();
                assign_id_slug(tx_conn, table, name, id, policy.max_attempts)?;
                id
            }
            SlugStrategy::Random => {
                insert_with_unique_slug(
                    name,
                    policy.max_attempts,
                    || slug::with_random_suffix_from(name, rng),
                    |candidate| insert(tx_conn, Some(candidate)),
                )?;
                tx_conn.last_insert_rowid()
            }
        },
    };

    tx.commit()?;
    tracing::debug!("Inserted {} row id={}", table, id);
    Ok(id)
}

/// Sets the slug of row `id` to `<base>-<id>`.
///
/// Explicit slugs share the column, so `<base>-<id>` may already be taken.
/// Later attempts fall back to `<base>-<id>-<attempt>`.
pub(crate) fn assign_id_slug(
    conn: &Connection,
    table: &'static str,
    name: &str,
    id: i64,
    max_attempts: u32,
) -> Result<String> {
    let sql = format!("UPDATE {} SET slug = ? WHERE id = ?", table);
    let mut attempt = 0;
    insert_with_unique_slug(
        name,
        max_attempts,
        || {
            attempt += 1;
            id_slug_candidate(name, id, attempt)
        },
        |candidate| {
            conn.execute(&sql, (candidate, id))?;
            Ok(candidate.to_string())
        },
    )
}

fn id_slug_candidate(name: &str, id: i64, attempt: u32) -> String {
    if attempt <= 1 {
        slug::with_suffix(name, id)
    } else {
        slug::with_suffix(name, format!("{}-{}", id, attempt))
    }
}

fn slug_conflict(err: rusqlite::Error, slug: &str) -> anyhow::Error {
    if is_unique_violation(&err) {
        CatalogError::SlugTaken(slug.to_string()).into()
    } else {
        err.into()
    }
}
