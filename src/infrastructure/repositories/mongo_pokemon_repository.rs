use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::domain::pokemon::Pokemon;
use crate::domain::repositories::{PokemonRepository, StorageError};

/// MongoDB implementation of PokemonRepository
///
/// Persists Pokemon as documents in a single collection. The driver assigns
/// the `_id` of every inserted document.
pub struct MongoPokemonRepository {
    collection: Collection<Document>,
}

impl MongoPokemonRepository {
    /// Creates a new MongoPokemonRepository
    ///
    /// # Arguments
    /// * `collection` - Handle to the `pokemon` collection
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl PokemonRepository for MongoPokemonRepository {
    async fn insert(&self, pokemon: &Pokemon) -> Result<(), StorageError> {
        let document = doc! {
            "name": pokemon.name(),
            "type": pokemon.kind(),
            "abilities": pokemon.abilities().to_vec(),
        };

        let result = self.collection.insert_one(document).await?;
        tracing::debug!(id = %result.inserted_id, "inserted pokemon");

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, StorageError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents = cursor.try_collect().await?;

        Ok(documents)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Document>, StorageError> {
        let document = self.collection.find_one(doc! { "name": name }).await?;

        Ok(document)
    }
}
