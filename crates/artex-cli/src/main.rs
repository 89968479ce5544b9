//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to the explorer
//! service and the catalog port wired up in bootstrap.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use artex_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbosity flag
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Bootstrap the CLI context (composition root)
    let config = CliConfig {
        base_url: cli.base_url.clone(),
    };
    let ctx = bootstrap(&config)?;

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        artex_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Departments => {
            handlers::departments::execute(&ctx).await?;
        }
        Commands::Search {
            query,
            department,
            highlights,
            from,
            to,
            page,
            json,
        } => {
            let args = handlers::search::SearchArgs {
                query,
                department,
                highlights,
                from,
                to,
                page,
                json,
            };
            handlers::search::execute(&ctx, args).await?;
        }
        Commands::Surprise => {
            handlers::surprise::execute(&ctx).await?;
        }
        Commands::Show { object_id, json } => {
            handlers::show::execute(&ctx, object_id, json).await?;
        }
        Commands::Browse {
            query,
            department,
            highlights,
            from,
            to,
        } => {
            let base = handlers::search::build_filter(
                &ctx,
                query.as_deref(),
                department.as_deref(),
                highlights,
                from,
                to,
            )
            .await;
            handlers::browse::execute(&ctx, base).await?;
        }
    }

    Ok(())
}
