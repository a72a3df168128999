//! Skyline importer - Main entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyline_engine::config::{self, Cli};
use skyline_engine::infrastructure::{
    clock::SystemClock,
    filesystem::{FsAssetStore, FsSceneStore},
};
use skyline_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    config::load_dotenv();

    // Exits with usage help on missing, unknown or conflicting arguments.
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyline_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = cli.to_request()?;
    tracing::info!(store_dir = %cli.store_dir.display(), "Using filesystem scene store");

    let clock = Arc::new(SystemClock::new());
    let persistence = Arc::new(FsSceneStore::new(&cli.store_dir, clock));
    let asset_store = Arc::new(FsAssetStore::new(&cli.store_dir, &request.workspace_id));
    let app = App::new(persistence, asset_store);

    let report = app.use_cases.scene.import.execute(&request).await?;
    print!("{report}");

    if report.has_failures() {
        tracing::warn!(failures = report.failures.len(), "Import finished with failures");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
