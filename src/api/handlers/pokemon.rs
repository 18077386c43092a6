use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::serialize::document_to_json;
use crate::domain::pokemon::Pokemon;
use crate::domain::repositories::PokemonRepository;

/// Request body for creating a Pokemon
///
/// Every field is optional at the deserialization layer so that a missing key
/// is reported as 400 rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub abilities: Option<Vec<String>>,
}

/// Static-message response body (201 confirmation, 404 outcome)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// List all Pokemon
///
/// GET /api/pokemon
pub async fn list_pokemon(
    State(repository): State<Arc<dyn PokemonRepository>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let documents = repository.find_all().await?;
    let pokemon = documents.into_iter().map(document_to_json).collect();

    Ok(Json(pokemon))
}

/// Create a new Pokemon
///
/// POST /api/pokemon
pub async fn create_pokemon(
    State(repository): State<Arc<dyn PokemonRepository>>,
    Json(req): Json<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    // All three keys must be present; values themselves are not checked
    let (name, kind, abilities) = match (req.name, req.kind, req.abilities) {
        (Some(name), Some(kind), Some(abilities)) => (name, kind, abilities),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: name, type, abilities",
            ))
        }
    };

    let pokemon = Pokemon::new(name, kind, abilities);

    repository.insert(&pokemon).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Pokémon saved to database.")),
    ))
}

/// Get a Pokemon by name
///
/// GET /api/pokemon/:name
pub async fn get_pokemon_by_name(
    State(repository): State<Arc<dyn PokemonRepository>>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    match repository.find_by_name(&name).await? {
        Some(document) => Ok(Json(document_to_json(document)).into_response()),
        // Not-found is an outcome, not a failure
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Pokémon not found.")),
        )
            .into_response()),
    }
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
