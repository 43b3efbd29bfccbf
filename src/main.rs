//! Biblio - Library Catalog Manager
//!
//! Interactive console front-end over a JSON-file-backed catalog.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio::{
    cli,
    config::AppConfig,
    services::LibraryService,
    store::CatalogStore,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing. The filter level comes from the configuration,
    // never from the environment; diagnostics go to stderr so they do not
    // interleave with the menu on stdout.
    let filter = tracing_subscriber::EnvFilter::new(format!("biblio={}", config.logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Biblio v{}", env!("CARGO_PKG_VERSION"));

    let store = CatalogStore::new(config.catalog.file.clone());
    let mut service = LibraryService::open(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut service, stdin.lock(), stdout.lock())?;

    Ok(())
}
