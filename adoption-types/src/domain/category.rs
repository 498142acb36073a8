//! Category domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Category.
///
/// Stored as a plain string so that client-supplied ids and generated
/// UUIDs share one representation. Must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Generates a new random CategoryId (UUIDv4 rendered as a string).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a CategoryId from an existing string, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Keys that collide with the struct fields when `extra` is flattened.
// Left in the bag they would serialize as duplicate JSON keys and the
// stored document would no longer deserialize.
const RESERVED_KEYS: [&str; 2] = ["id", "name"];

fn strip_reserved(extra: &mut serde_json::Map<String, serde_json::Value>) {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
}

/// A classification for adoptable pets.
///
/// Beyond `name`, the descriptive attributes are an open bag: unknown JSON
/// fields are collected into `extra` and round-trip through storage intact.
/// Reserved keys (`id`, `name`) are stripped from the bag on construction
/// and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Human-readable category name
    pub name: String,
    /// Remaining descriptive attributes, schema-flexible
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Category {
    /// Creates a new category.
    ///
    /// # Validation
    /// - Name cannot be blank
    pub fn new(
        id: CategoryId,
        name: String,
        mut extra: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Category name cannot be empty".into(),
            ));
        }

        strip_reserved(&mut extra);
        Ok(Self { id, name, extra })
    }

    /// Replaces all mutable fields wholesale, preserving the identifier.
    pub fn apply(
        &mut self,
        name: String,
        mut extra: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Category name cannot be empty".into(),
            ));
        }

        strip_reserved(&mut extra);
        self.name = name;
        self.extra = extra;
        Ok(())
    }
}
