use super::CategoryCommand;
use crate::services::categories;
use crate::services::CatalogError;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, command: CategoryCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;

    match command {
        CategoryCommand::Add { name, slug } => {
            let id = categories::create_category(&db, config.slug, &name, slug.as_deref())?;
            if let Some(category) = categories::get_category_by_id(&db, id)? {
                println!("{}", category.slug);
            }
        }
        CategoryCommand::List { json } => {
            let list = categories::list_categories(&db)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                println!("{:<6} {:<40} {:<30}", "ID", "SLUG", "NAME");
                println!("{}", "-".repeat(76));
                for category in list {
                    println!(
                        "{:<6} {:<40} {:<30}",
                        category.id, category.slug, category.name
                    );
                }
            }
        }
        CategoryCommand::Show { slug } => {
            let category = categories::get_category_by_slug(&db, &slug)?
                .ok_or(CatalogError::CategoryNotFound(slug))?;
            println!("{}", serde_json::to_string_pretty(&category)?);
        }
        CategoryCommand::Remove { slug } => {
            let category = categories::get_category_by_slug(&db, &slug)?
                .ok_or_else(|| CatalogError::CategoryNotFound(slug.clone()))?;
            categories::delete_category(&db, category.id)?;
            tracing::info!("Category '{}' removed", slug);
        }
    }

    Ok(())
}
