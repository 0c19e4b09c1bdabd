//! MediaVault CLI - Main entry point

use clap::Parser;
use mediavault_cli::{commands, Cli, Commands, Config};
use mediavault_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Load .env if present, then parse arguments
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Verbose mode logs debug-level to the console; normal mode only warns.
    // LOG_* environment variables take precedence over the flag.
    let base = if cli.verbose {
        LogConfig::default().with_level(LogLevel::Debug)
    } else {
        LogConfig::default().with_level(LogLevel::Warn)
    };
    let log_config = base.clone().apply_env().unwrap_or(base);

    // The CLI should keep working even when logging cannot initialize
    let _ = init_logging(&log_config);

    let config = Config::new(cli.server_url.clone(), cli.rules_file.clone());

    if let Err(e) = execute_command(&cli, &config).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &Config) -> mediavault_cli::Result<()> {
    match &cli.command {
        Commands::List {
            terms,
            category,
            sort,
            order,
            format,
        } => {
            commands::list::run(
                config,
                terms.clone(),
                category.clone(),
                sort,
                order,
                format,
            )
            .await
        }

        Commands::Show { id, json } => commands::show::run(config, id, *json).await,

        Commands::Upload {
            file,
            name,
            category,
            description,
            tags,
        } => {
            commands::upload::run(
                config,
                file,
                name.clone(),
                category.clone(),
                description.clone(),
                tags.as_deref(),
            )
            .await
        }

        Commands::Update {
            id,
            name,
            category,
            description,
            tags,
            file,
        } => {
            commands::update::run(
                config,
                id,
                name.clone(),
                category.clone(),
                description.clone(),
                tags.as_deref(),
                file.as_deref(),
            )
            .await
        }

        Commands::Delete { id } => commands::delete::run(config, id).await,

        Commands::Status => commands::status::run(config).await,
    }
}
