use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::PetResult;
use crate::models::{Pet, PetInput, PetPatch};

/// Repository trait for Pet persistence
///
/// Lookups by id return `Ok(None)` when no record exists; deciding whether
/// that is an error is up to the caller.
///
/// Replace and merge are separate operations: `replace_by_id` clears every
/// optional field the input lacks, `merge_by_id` never touches a field the
/// patch does not name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Persist a new pet
    async fn create(&self, input: PetInput) -> PetResult<Pet>;

    /// Fetch one page of pets in insertion order
    async fn find_many(&self, skip: u64, limit: u64) -> PetResult<Vec<Pet>>;

    /// Count all pets
    async fn count_all(&self) -> PetResult<u64>;

    /// Get a pet by ID
    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>>;

    /// Overwrite a pet, returning its new state
    async fn replace_by_id(&self, id: ObjectId, input: PetInput) -> PetResult<Option<Pet>>;

    /// Update the fields named in `patch`, returning the new state
    async fn merge_by_id(&self, id: ObjectId, patch: PetPatch) -> PetResult<Option<Pet>>;

    /// Delete a pet, returning the removed record
    async fn delete_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>>;
}
