use super::ProductCommand;
use crate::models::NewProduct;
use crate::services::{categories, products, CatalogError};
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, command: ProductCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;

    match command {
        ProductCommand::Add {
            name,
            price,
            category,
            slug,
        } => {
            let category_id = resolve_category(&db, category)?;
            let input = NewProduct {
                name,
                slug,
                price,
                category_id,
            };
            let id = products::create_product(&db, config.slug, input)?;
            if let Some(product) = products::get_product_by_id(&db, id)? {
                println!("{}", product.slug);
            }
        }
        ProductCommand::List { category, json } => {
            let category_id = resolve_category(&db, category)?;
            let list = products::list_products(&db, category_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                println!("{:<6} {:<40} {:>12} {:<30}", "ID", "SLUG", "PRICE", "NAME");
                println!("{}", "-".repeat(90));
                for product in list {
                    println!(
                        "{:<6} {:<40} {:>12} {:<30}",
                        product.id, product.slug, product.price, product.name
                    );
                }
            }
        }
        ProductCommand::Show { slug } => {
            let product = products::get_product_by_slug(&db, &slug)?
                .ok_or(CatalogError::ProductNotFound(slug))?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        ProductCommand::Remove { slug } => {
            let product = products::get_product_by_slug(&db, &slug)?
                .ok_or_else(|| CatalogError::ProductNotFound(slug.clone()))?;
            products::delete_product(&db, product.id)?;
            tracing::info!("Product '{}' removed", slug);
        }
    }

    Ok(())
}

fn resolve_category(db: &Database, slug: Option<String>) -> Result<Option<i64>> {
    match slug {
        Some(slug) => {
            let category = categories::get_category_by_slug(db, &slug)?
                .ok_or(CatalogError::CategoryNotFound(slug))?;
            Ok(Some(category.id))
        }
        None => Ok(None),
    }
}
