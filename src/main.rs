use axum::Router;
use shiproute::config::Config;
use shiproute::db::Store;
use shiproute::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiproute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting ShipRoute API server");
    tracing::info!(
        speed_knots = config.estimator.average_speed_knots,
        fuel_burn_rate = config.estimator.fuel_burn_rate_tons_per_nm,
        waypoint_resolution = config.estimator.waypoint_resolution,
        interpolation = ?config.estimator.interpolation,
        "Configuration loaded successfully"
    );

    // Open the store (runs migrations / creates the schema)
    tracing::info!("Connecting to database...");
    let store = Store::connect(&config.database_url).await?;
    tracing::info!("Database connection established ({})", store.backend_name());

    let state = Arc::new(AppState::new(&store, &config.estimator));

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", shiproute::routes::create_router(state))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        );

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database connections");
    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
