/// Pokemon entity
///
/// Represents a Pokemon as submitted through the create endpoint. The entity
/// carries no identifier; the storage layer assigns a unique `_id` when the
/// record is inserted.
///
/// Field values are accepted as-is: names are not deduplicated and empty
/// strings or ability lists are allowed. Presence of the three fields is
/// enforced at the API boundary, not here.
///
/// # Example
/// ```
/// use pokedex_api::domain::pokemon::Pokemon;
///
/// let pokemon = Pokemon::new(
///     "Pikachu".to_string(),
///     "Electric".to_string(),
///     vec!["Thunderbolt".to_string()],
/// );
///
/// assert_eq!(pokemon.name(), "Pikachu");
/// assert_eq!(pokemon.kind(), "Electric");
/// ```
#[derive(Debug, Clone)]
pub struct Pokemon {
    name: String,
    kind: String,
    abilities: Vec<String>,
}

impl Pokemon {
    /// Creates a new Pokemon entity
    ///
    /// # Arguments
    /// * `name` - The Pokemon's name (lookup key, not enforced unique)
    /// * `kind` - The Pokemon's type (`type` is a Rust keyword)
    /// * `abilities` - Ordered list of ability names
    pub fn new(name: String, kind: String, abilities: Vec<String>) -> Self {
        Self {
            name,
            kind,
            abilities,
        }
    }

    /// Returns the Pokemon's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the Pokemon's type
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the Pokemon's abilities
    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }
}
