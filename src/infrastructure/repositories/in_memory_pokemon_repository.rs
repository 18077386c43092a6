use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use tokio::sync::Mutex;

use crate::domain::pokemon::Pokemon;
use crate::domain::repositories::{PokemonRepository, StorageError};

/// In-memory implementation of PokemonRepository
///
/// Backs the integration tests so the HTTP surface can be exercised without a
/// running database. Documents are held in insertion order and assigned a
/// fresh ObjectId on insert, mirroring what the MongoDB adapter stores.
#[derive(Default)]
#[allow(dead_code)]
pub struct InMemoryPokemonRepository {
    documents: Mutex<Vec<Document>>,
}

#[allow(dead_code)]
impl InMemoryPokemonRepository {
    /// Creates an empty InMemoryPokemonRepository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn insert(&self, pokemon: &Pokemon) -> Result<(), StorageError> {
        let document = doc! {
            "_id": ObjectId::new(),
            "name": pokemon.name(),
            "type": pokemon.kind(),
            "abilities": pokemon.abilities().to_vec(),
        };

        self.documents.lock().await.push(document);

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, StorageError> {
        let documents = self.documents.lock().await;

        Ok(documents.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Document>, StorageError> {
        let documents = self.documents.lock().await;
        let found = documents
            .iter()
            .find(|document| document.get_str("name").ok() == Some(name))
            .cloned();

        Ok(found)
    }
}
