use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{EMPTY_BODY, PetError, PetResult};
use crate::validation::validate_pet_payload;

/// Keys a pet payload may carry. Nothing else is ever persisted.
pub const ALLOWED_FIELDS: [&str; 5] = ["name", "species", "breed", "age", "owner"];

/// Parse a client-supplied identifier as a MongoDB ObjectId (24 hex digits).
pub fn parse_pet_id(raw: &str) -> PetResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| PetError::InvalidId(raw.to_string()))
}

pub fn is_valid_pet_id(raw: &str) -> bool {
    ObjectId::parse_str(raw).is_ok()
}

/// Current time at the millisecond precision MongoDB stores.
pub(crate) fn now() -> DateTime<Utc> {
    bson::DateTime::now().to_chrono()
}

/// Pet owner contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Owner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Owner {
    /// Build from a validated owner value. `null` and `{}` both mean no owner.
    fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let owner = Self {
            name: trimmed(fields.get("name")),
            contact: trimmed(fields.get("contact")),
        };
        (!owner.is_empty()).then_some(owner)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none()
    }
}

/// Pet entity - represents a pet stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    /// Create a new record with a fresh identifier and timestamps
    pub fn new(input: PetInput) -> Self {
        let now = now();
        Self {
            id: ObjectId::new(),
            name: input.name,
            species: input.species,
            breed: input.breed,
            age: input.age,
            owner: input.owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field from `input`; optional fields it lacks are cleared.
    pub fn replace_with(&mut self, input: PetInput) {
        self.name = input.name;
        self.species = input.species;
        self.breed = input.breed;
        self.age = input.age;
        self.owner = input.owner;
        self.updated_at = now();
    }

    /// Apply only the fields present in `patch`.
    pub fn merge(&mut self, patch: PetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(breed) = patch.breed {
            self.breed = Some(breed);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        self.updated_at = now();
    }
}

/// Full pet payload, used by create and replace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetInput {
    #[schema(example = "Rex")]
    pub name: String,
    #[schema(example = "dog")]
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Labrador")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, example = 3)]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl PetInput {
    /// Validate a raw payload and convert it, trimming string fields.
    pub fn from_payload(payload: &Map<String, Value>) -> PetResult<Self> {
        let errors = validate_pet_payload(payload, false);
        if !errors.is_empty() {
            return Err(PetError::Validation(errors));
        }

        Ok(Self {
            name: required(payload, "name")?,
            species: required(payload, "species")?,
            breed: trimmed(payload.get("breed")),
            age: payload.get("age").and_then(Value::as_f64),
            owner: payload.get("owner").and_then(Owner::from_value),
        })
    }
}

/// Partial pet payload. Absent fields are left untouched.
///
/// `owner` distinguishes "not sent" (`None`) from "clear it" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetPatch {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub owner: Option<Option<Owner>>,
}

impl PetPatch {
    /// Reject an empty body, validate in partial mode, then convert.
    pub fn from_payload(payload: &Map<String, Value>) -> PetResult<Self> {
        if payload.is_empty() {
            return Err(PetError::Validation(vec![EMPTY_BODY.to_string()]));
        }

        let errors = validate_pet_payload(payload, true);
        if !errors.is_empty() {
            return Err(PetError::Validation(errors));
        }

        Ok(Self {
            name: trimmed(payload.get("name")),
            species: trimmed(payload.get("species")),
            breed: trimmed(payload.get("breed")),
            age: payload.get("age").and_then(Value::as_f64),
            owner: payload.get("owner").map(Owner::from_value),
        })
    }

    /// Names of the fields this patch changes, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("species", self.species.is_some()),
            ("breed", self.breed.is_some()),
            ("age", self.age.is_some()),
            ("owner", self.owner.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, changed)| changed.then_some(field))
        .collect()
    }
}

fn trimmed(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn required(payload: &Map<String, Value>, field: &str) -> PetResult<String> {
    trimmed(payload.get(field))
        .ok_or_else(|| PetError::Internal(format!("validated payload is missing \"{field}\"")))
}
