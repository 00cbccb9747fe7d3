use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api::{create_router, AppState};
use folio::config::Config;
use folio::db::{Database, DatabaseBackend, LibSqlBackend};
use folio::models::Portfolio;
use folio::services::seed::seed_sample_projects;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio back end with a rule-based portfolio assistant")]
struct Args {
    /// Portfolio record (JSON). Overrides PORTFOLIO_PATH.
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Insert the sample projects whose titles are not stored yet
    #[arg(long)]
    seed_sample_data: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let portfolio_path = args
        .portfolio
        .or_else(|| config.portfolio.path.as_ref().map(PathBuf::from));
    let portfolio = match portfolio_path {
        Some(path) => {
            tracing::info!("Loading portfolio record from {}...", path.display());
            Portfolio::from_file(&path)?
        }
        None => Portfolio::default(),
    };
    tracing::info!(
        name = %portfolio.name,
        projects = portfolio.projects.len(),
        "Portfolio loaded"
    );

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));

    if args.seed_sample_data {
        let added = seed_sample_projects(&*db).await?;
        tracing::info!("Seeded {} sample project(s)", added);
    }

    let state = AppState::new(config.clone(), db, portfolio).await;

    let cancel_token = state.shutdown.clone();

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Folio starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    tracing::info!("Folio stopped");
    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = cancel_token.cancelled() => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, closing live feeds...");
    cancel_token.cancel();
}
