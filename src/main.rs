//! ToolLink Server - Peer-to-Peer Tool Rental Marketplace
//!
//! A Rust REST API server for listing and renting tools.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toollink_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("toollink_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ToolLink Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
///
/// Paths are mounted at the root, matching the original API surface.
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Users
        .route("/register", post(api::users::register))
        .route("/login", post(api::users::login))
        .route("/updateUser", put(api::users::update_user))
        // Tools
        .route("/addTool", post(api::tools::add_tool))
        .route("/getTools", get(api::tools::get_tools))
        .route("/getMyListings/:user_id", get(api::tools::get_my_listings))
        .route("/updateTool", put(api::tools::update_tool))
        .route("/deleteTool/:tool_id", delete(api::tools::delete_tool))
        // Rentals
        .route("/rentTool", post(api::rentals::rent_tool))
        .route("/returnTool", post(api::rentals::return_tool))
        .route("/myRentals/:user_id", get(api::rentals::my_rentals))
        .route(
            "/getLenderStats/:user_id",
            get(api::rentals::get_lender_stats),
        )
        // Wishlist
        .route("/addToWishlist", post(api::wishlist::add_to_wishlist))
        .route(
            "/removeFromWishlist/:user_id/:tool_id",
            delete(api::wishlist::remove_from_wishlist),
        )
        .route(
            "/getWishlistIds/:user_id",
            get(api::wishlist::get_wishlist_ids),
        )
        .route("/myWishlist/:user_id", get(api::wishlist::my_wishlist))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
