use barback::{
    cli::{Cli, Commands},
    config::Settings,
    Result,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,barback=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::List => barback::cli::commands::list(&settings)?,
        Commands::Search {
            query,
            spirits,
            strength,
            difficulty,
            sort,
        } => barback::cli::commands::search(&settings, query, spirits, strength, difficulty, sort)?,
        Commands::Show { id } => barback::cli::commands::show(&settings, &id)?,
        Commands::Add { file } => barback::cli::commands::add(&settings, file.as_deref())?,
        Commands::Delete { id } => barback::cli::commands::delete(&settings, &id)?,
        Commands::Facets => barback::cli::commands::facets(&settings)?,
        Commands::Browse => barback::cli::commands::browse(&settings).await?,
    }

    Ok(())
}
