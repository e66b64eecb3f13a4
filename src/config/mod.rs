use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub slug: SlugConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

/// How new catalog records get their slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlugStrategy {
    /// Base slug plus the row id, or `<id>-<n>` when an explicit slug
    /// already holds that value.
    #[default]
    Id,
    /// Base slug plus a random six digit number, retried on conflict.
    Random,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SlugConfig {
    #[serde(default)]
    pub strategy: SlugStrategy,
    /// Candidate slugs tried per row before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            strategy: SlugStrategy::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_pool_size() -> u32 {
    10
}

fn default_max_attempts() -> u32 {
    5
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run `storefront init` to create one.",
                path.display(),
                e
            )
        })?;
        content.parse()
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        if self.slug.max_attempts == 0 {
            anyhow::bail!("slug.max_attempts must be greater than 0");
        }
        if self.slug.max_attempts > 100 {
            anyhow::bail!("slug.max_attempts must be 100 or less");
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
