// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_pokemon_repository;
pub mod mongo_pokemon_repository;

pub use in_memory_pokemon_repository::InMemoryPokemonRepository;
pub use mongo_pokemon_repository::MongoPokemonRepository;
