use anyhow::Result;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path.join("data"))?;

    let config_path = path.join("storefront.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = r#"[database]
path = "./data/storefront.db"
pool_size = 10

[slug]
# "id" appends the row id and cannot collide.
# "random" appends a random six digit number and retries on conflict.
strategy = "id"
max_attempts = 5
"#;

    std::fs::write(&config_path, config)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'storefront migrate' to set up the database");

    Ok(())
}
