use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

use crate::domain::pokemon::Pokemon;

/// Errors raised by the storage layer
///
/// Every driver fault is carried here and surfaces as HTTP 500 with the
/// underlying message exposed to the caller. Not-found is not an error; read
/// operations model it with `Option`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Repository trait for Pokemon records
///
/// Defines the contract for persisting and retrieving Pokemon.
/// Implementations should handle database-specific details. Each method maps
/// to exactly one storage operation; there are no transactions.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Insert a new Pokemon; the storage layer assigns the identifier
    async fn insert(&self, pokemon: &Pokemon) -> Result<(), StorageError>;

    /// Fetch every stored record
    async fn find_all(&self) -> Result<Vec<Document>, StorageError>;

    /// Find the first record whose name matches exactly
    async fn find_by_name(&self, name: &str) -> Result<Option<Document>, StorageError>;
}
