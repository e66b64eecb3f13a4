pub mod backfill;
pub mod category;
pub mod init;
pub mod migrate;
pub mod product;
pub mod slug;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Catalog slug assignment for a storefront backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "storefront.toml", env = "STOREFRONT_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file and data directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Apply pending schema migrations
    Migrate {
        #[command(subcommand)]
        command: Option<MigrateCommand>,
    },
    /// Assign slugs to records that have none
    Backfill,
    /// Print the slug for a piece of text
    Slug(SlugArgs),
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },
}

#[derive(Subcommand)]
pub enum MigrateCommand {
    /// Show applied and pending migrations
    Status,
}

#[derive(Args)]
pub struct SlugArgs {
    pub text: String,
    /// Append this suffix verbatim
    #[arg(long, conflicts_with = "random")]
    pub suffix: Option<String>,
    /// Append a random six digit suffix
    #[arg(long)]
    pub random: bool,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
    },
    List {
        #[arg(long)]
        json: bool,
    },
    Show {
        slug: String,
    },
    Remove {
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum ProductCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "0")]
        price: i64,
        /// Slug of the category to file the product under
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        slug: Option<String>,
    },
    List {
        /// Only products in this category (by slug)
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Show {
        slug: String,
    },
    Remove {
        slug: String,
    },
}
