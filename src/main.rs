//! account-seed - load account fixtures into a store

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resource_accounts::{
    config::Args,
    db::{fixtures, AccountStore, MemoryAccountStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Initialize tracing/logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("resource_accounts={},info", args.log_level).into());
    if args.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("Fixtures: {}", args.fixtures.display());
    info!("Fail fast: {}", args.fail_fast);

    let records = fixtures::load_fixtures(&args.fixtures)?;
    info!("Loaded {} fixture(s)", records.len());

    let store = MemoryAccountStore::new();
    let report = fixtures::seed(&store, records, args.fail_fast).await?;

    for account in store.list().await? {
        info!(
            id = ?account.id(),
            email = account.email().unwrap_or_default(),
            roles = ?account.roles(),
            "Account ready"
        );
    }
    info!(
        created = report.created,
        skipped = report.skipped,
        "Seeding complete"
    );

    Ok(())
}
