//! Storefront CLI
//!
//! Terminal storefront over a product catalog.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use storefront_app::cli::{Args, Command};
use storefront_app::{config_handlers, logging, repl, App, AppConfig, ConsoleNotifier};
use storefront_catalog::{CatalogQuery, CatalogSource, HttpCatalog, StaticCatalog};
use storefront_core::{CartStore, LogNotifier, NotificationSink};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command();

    // Config commands run before logging so they work with a broken config
    if let Command::Config { action } = &command {
        let mut stdout = std::io::stdout();
        config_handlers::handle_config_command(
            args.config.as_deref(),
            action.clone(),
            &mut stdout,
        )?;
        return Ok(());
    }

    let config = AppConfig::load(args.config.as_deref())?;
    logging::init(&config.logging.level, args.verbose)?;

    let source: Arc<dyn CatalogSource> = if args.offline {
        tracing::info!("Using the built-in sample catalog");
        Arc::new(StaticCatalog::sample())
    } else {
        tracing::info!(base_url = %config.catalog.base_url, "Using HTTP catalog");
        Arc::new(HttpCatalog::new(&config.catalog)?)
    };
    let query = CatalogQuery::new(source, config.catalog.path.clone());

    match command {
        Command::Products => {
            let products = query.fetch().await?;
            for product in &products {
                println!(
                    "[{}] {} | {} | ${}",
                    product.id, product.name, product.colour, product.price
                );
            }
        }
        _ => {
            // Piped sessions log notifications instead of mixing them into output
            let notifier: Arc<dyn NotificationSink> = if std::io::stdin().is_terminal() {
                Arc::new(ConsoleNotifier)
            } else {
                Arc::new(LogNotifier)
            };
            let mut app = App::new(CartStore::new(), query, notifier);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            repl::run_repl(&mut app, stdin, &mut stdout).await?;
            tracing::info!(items = app.store().len(), total = app.store().total(), "Session ended");
        }
    }

    Ok(())
}
