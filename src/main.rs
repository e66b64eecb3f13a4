use clap::Parser;
use storefront::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            storefront::cli::init::run(&path)?;
        }
        Some(Commands::Migrate { command }) => {
            storefront::cli::migrate::run(&cli.config, command)?;
        }
        Some(Commands::Backfill) => {
            storefront::cli::backfill::run(&cli.config)?;
        }
        Some(Commands::Slug(args)) => {
            storefront::cli::slug::run(args);
        }
        Some(Commands::Category { command }) => {
            storefront::cli::category::run(&cli.config, command)?;
        }
        Some(Commands::Product { command }) => {
            storefront::cli::product::run(&cli.config, command)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
