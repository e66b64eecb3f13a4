mod functions;

use anyhow::{Context, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration;

pub type DbPool = Pool<SqliteConnectionManager>;

pub struct Migration {
    pub version: i32,
    pub description: &'static str,
    sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "Catalog tables (categories, products)",
        sql: include_str!("migrations/001_catalog.sql"),
    },
    Migration {
        version: 2,
        description: "Slug columns, backfill and unique indexes",
        sql: include_str!("migrations/002_slugs.sql"),
    },
];

#[derive(Debug, Clone)]
pub struct MigrationStatus {
    pub version: i32,
    pub description: &'static str,
    pub applied_at: Option<String>,
}

pub struct Database {
    pool: DbPool,
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

impl Database {
    pub fn open_with_pool_size(path: &str, pool_size: u32) -> Result<Self> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path).with_init(init_connection);
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .with_context(|| format!("Could not open database at {}", path.display()))?;

        let conn = pool.get()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        Ok(Self { pool })
    }

    /// Opens a named in-memory database shared by every connection in the
    /// pool. It lives as long as the pool does.
    pub fn open_memory(name: &str) -> Result<Self> {
        let uri = format!("file:{}?mode=memory&cache=shared", name);
        let manager = SqliteConnectionManager::file(uri).with_init(init_connection);
        let pool = Pool::builder().max_size(4).build(manager)?;
        Ok(Self { pool })
    }

    pub fn get(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.get()?;
        run_migrations(&conn)?;
        Ok(())
    }

    pub fn get_migration_status(&self) -> Result<Vec<MigrationStatus>> {
        let conn = self.get()?;
        ensure_migrations_table(&conn)?;

        let mut stmt = conn.prepare("SELECT applied_at FROM schema_migrations WHERE version = ?")?;
        let mut statuses = Vec::with_capacity(MIGRATIONS.len());
        for migration in MIGRATIONS {
            let applied_at: Option<String> = stmt
                .query_row([migration.version], |row| row.get(0))
                .optional()?;
            statuses.push(MigrationStatus {
                version: migration.version,
                description: migration.description,
                applied_at,
            });
        }
        Ok(statuses)
    }
}

fn init_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    functions::register(conn)
}

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

fn run_migrations(conn: &Connection) -> Result<()> {
    ensure_migrations_table(conn)?;

    let current_version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;

    for migration in MIGRATIONS {
        if migration.version > current_version {
            tracing::info!(
                "Running migration {:03}: {}",
                migration.version,
                migration.description
            );
            let tx = conn.unchecked_transaction()?;
            tx.execute_batch(migration.sql)
                .with_context(|| format!("Migration {:03} failed", migration.version))?;
            tx.execute(
                "INSERT INTO schema_migrations (version) VALUES (?)",
                [migration.version],
            )?;
            tx.commit()?;
        }
    }

    Ok(())
}
