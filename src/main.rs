//! SportHub API server
//!
//! Main application entry point

use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use sporthub::config::Settings;
use sporthub::database::{self, DatabaseService};
use sporthub::handlers::{api_router, AppState};
use sporthub::services::ServiceFactory;
use sporthub::utils::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting SportHub API...");

    // Initialize database connection
    info!("Connecting to database...");
    let pool = database::create_pool(&settings.database).await?;

    // Run database migrations
    database::run_migrations(&pool).await?;

    // Initialize services
    let db = DatabaseService::new(pool.clone());
    let services = ServiceFactory::new(&db, &settings)?;

    let state = AppState {
        db,
        services,
        settings: settings.clone(),
        pool,
    };

    let app = api_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SportHub API has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
    }
    info!("Shutdown signal received");
}
