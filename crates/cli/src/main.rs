use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use stockroom_cli::{Console, Controller, render};
use stockroom_infra::{
    DocumentStore, InMemoryDocumentStore, InventoryService, MongoDocumentStore, StoreConfig,
};

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Terminal inventory management backed by MongoDB", version)]
struct Cli {
    #[arg(long, help = "MongoDB connection URI (overrides STOCKROOM_MONGO_URI)")]
    mongo_uri: Option<String>,

    #[arg(long, help = "Database name (overrides STOCKROOM_DATABASE)")]
    database: Option<String>,

    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Keep records in memory only; nothing survives the process"
    )]
    in_memory: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init();

    if cli.in_memory {
        tracing::warn!("using the in-memory store; records will not be persisted");
        let service = InventoryService::load(InMemoryDocumentStore::new())
            .context("failed to load records")?;
        run(service);
        return Ok(());
    }

    let config = StoreConfig::from_env().with_overrides(cli.mongo_uri, cli.database);
    tracing::info!(database = %config.database, "store configuration resolved");

    let store = MongoDocumentStore::connect(&config)
        .with_context(|| format!("failed to connect to MongoDB database '{}'", config.database))?;
    let service = InventoryService::load(store)
        .context("failed to load records from the document store")?;

    run(service).into_store().shutdown();
    Ok(())
}

/// Drive the menu until exit and hand the service back.
fn run<S: DocumentStore>(service: InventoryService<S>) -> InventoryService<S> {
    let stdin = io::stdin();
    let mut controller = Controller::new(service, Console::new(stdin.lock(), io::stdout()));

    // Console failures end the session but are not a startup failure.
    if let Err(err) = controller.run() {
        tracing::error!(error = %err, "console failure");
        println!(
            "{}",
            render::error(format!("An unexpected error occurred: {err}"))
        );
    }
    let (service, _) = controller.into_parts();
    service
}
