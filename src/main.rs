mod api;
mod domain;
mod infrastructure;

use axum::{
    routing::{get, post},
    Router,
};
use mongodb::bson::Document;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use api::handlers::pokemon;
use domain::repositories::PokemonRepository;
use infrastructure::repositories::MongoPokemonRepository;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get MongoDB connection string
    let mongodb_uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| {
        tracing::warn!("MONGODB_URI not set, using default");
        "mongodb://localhost:27017/pokemon_db".to_string()
    });

    // Connect to database
    tracing::info!("Connecting to database...");
    let client = Client::with_uri_str(&mongodb_uri)
        .await
        .expect("Failed to connect to database");

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database("pokemon_db"));
    let collection = database.collection::<Document>("pokemon");

    tracing::info!("Database connected successfully");

    // Storage client is constructed once and injected into every handler
    let repository: Arc<dyn PokemonRepository> =
        Arc::new(MongoPokemonRepository::new(collection));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(pokemon::health_check))
        // Pokemon routes
        .route("/api/pokemon", get(pokemon::list_pokemon))
        .route("/api/pokemon", post(pokemon::create_pokemon))
        .route("/api/pokemon/:name", get(pokemon::get_pokemon_by_name))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(repository);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
