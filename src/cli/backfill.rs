use crate::services::backfill::backfill_slugs;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;
    db.migrate()?;

    let report = backfill_slugs(&db, config.slug)?;
    if report.total() == 0 {
        tracing::info!("Every record already has a slug");
    }
    Ok(())
}
