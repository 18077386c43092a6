//! End-to-end API integration tests
//!
//! These tests verify the complete HTTP API flows including:
//! - Listing, creating, and looking up Pokemon by name
//! - Required-field validation on creation
//! - Identifier serialization on read responses
//!
//! The router is wired to the in-memory repository so the full surface is
//! exercised without a running database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pokedex_api::api::handlers::pokemon;
use pokedex_api::domain::repositories::PokemonRepository;
use pokedex_api::infrastructure::repositories::InMemoryPokemonRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for oneshot

/// Setup test application with routes
fn setup_app() -> Router {
    use axum::routing::{get, post};

    let repository: Arc<dyn PokemonRepository> = Arc::new(InMemoryPokemonRepository::new());

    Router::new()
        .route("/health", get(pokemon::health_check))
        .route("/api/pokemon", get(pokemon::list_pokemon))
        .route("/api/pokemon", post(pokemon::create_pokemon))
        .route("/api/pokemon/:name", get(pokemon::get_pokemon_by_name))
        .with_state(repository)
}

/// POST a creation payload to /api/pokemon
async fn post_pokemon(app: &Router, payload: &Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pokemon")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET an arbitrary path
async fn get_path(app: &Router, path: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON
async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = get_path(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_list_with_no_stored_pokemon_returns_empty_array() {
    let app = setup_app();

    let response = get_path(&app, "/api/pokemon").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_pokemon_returns_created_with_static_message() {
    let app = setup_app();

    let payload = json!({
        "name": "Charmander",
        "type": "Fire",
        "abilities": ["Ember", "Scratch"]
    });

    let response = post_pokemon(&app, &payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Pokémon saved to database.");
    // The generated identifier is not echoed
    assert!(json.get("_id").is_none());
}

#[tokio::test]
async fn test_create_then_list_includes_matching_record() {
    let app = setup_app();

    let payload = json!({
        "name": "Squirtle",
        "type": "Water",
        "abilities": ["Water Gun"]
    });

    let response = post_pokemon(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_path(&app, "/api/pokemon").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let records = json.as_array().expect("list response should be an array");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["name"], "Squirtle");
    assert_eq!(record["type"], "Water");
    assert_eq!(record["abilities"], json!(["Water Gun"]));
    assert!(record["_id"].is_string(), "identifier should serialize to a string");
}

#[tokio::test]
async fn test_create_missing_abilities_returns_bad_request_and_persists_nothing() {
    let app = setup_app();

    let payload = json!({
        "name": "Eevee",
        "type": "Normal"
    });

    let response = post_pokemon(&app, &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields: name, type, abilities");

    // Nothing was stored
    let response = get_path(&app, "/api/pokemon").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_missing_name_or_type_returns_bad_request() {
    let app = setup_app();

    let missing_name = json!({ "type": "Psychic", "abilities": ["Confusion"] });
    let response = post_pokemon(&app, &missing_name).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing_type = json!({ "name": "Abra", "abilities": ["Teleport"] });
    let response = post_pokemon(&app, &missing_type).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_pokemon_by_name_returns_matching_record() {
    let app = setup_app();

    let payload = json!({
        "name": "Pikachu",
        "type": "Electric",
        "abilities": ["Thunderbolt", "Quick Attack"]
    });

    let response = post_pokemon(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_path(&app, "/api/pokemon/Pikachu").await;
    assert_eq!(response.status(), StatusCode::OK);

    let record = body_json(response).await;
    assert_eq!(record["name"], "Pikachu");
    assert_eq!(record["type"], "Electric");
    assert_eq!(record["abilities"], json!(["Thunderbolt", "Quick Attack"]));
    assert!(record["_id"].is_string(), "identifier should serialize to a string");
}

#[tokio::test]
async fn test_get_unknown_pokemon_returns_not_found() {
    let app = setup_app();

    let response = get_path(&app, "/api/pokemon/Mewtwo").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Pokémon not found.");
}

#[tokio::test]
async fn test_duplicate_names_are_not_rejected() {
    let app = setup_app();

    let payload = json!({
        "name": "Ditto",
        "type": "Normal",
        "abilities": ["Transform"]
    });

    let response = post_pokemon(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_pokemon(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_path(&app, "/api/pokemon").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
