//! Wire representation of stored pets.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use crate::models::{Owner, Pet};

/// Largest integer an IEEE-754 double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A pet as returned to clients: the store's `_id` becomes a string `id`,
/// every other field keeps its stored value and position.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetView {
    #[schema(example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: String,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_age"
    )]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pet> for PetView {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id.to_hex(),
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            age: pet.age,
            owner: pet.owner,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

/// `None` in, `None` out; otherwise the client view of the record.
pub fn format_pet(pet: Option<Pet>) -> Option<PetView> {
    pet.map(PetView::from)
}

/// Whole ages are written as integers (`3`, not `3.0`).
fn serialize_age<S: Serializer>(age: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *age {
        Some(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
            serializer.serialize_i64(value as i64)
        }
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_none(),
    }
}
