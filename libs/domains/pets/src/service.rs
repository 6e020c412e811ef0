//! Pet Service - request orchestration
//!
//! Each operation checks the identifier first, then the payload, then talks to
//! the repository. Every significant outcome is reported to the activity log.

use mongodb::bson::oid::ObjectId;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{PetError, PetResult};
use crate::logger::{ActivityLogger, LogLevel, TracingActivityLogger};
use crate::models::{Pet, PetInput, PetPatch, parse_pet_id};
use crate::pagination::{PageRequest, Pagination};
use crate::repository::PetRepository;

#[derive(Debug, Clone, Copy)]
enum Action {
    Fetch,
    Replace,
    Patch,
    Delete,
}

impl Action {
    fn invalid_id_message(self) -> &'static str {
        match self {
            Action::Fetch => "Invalid pet identifier received.",
            Action::Replace => "Invalid pet identifier received for full update.",
            Action::Patch => "Invalid pet identifier received for partial update.",
            Action::Delete => "Invalid pet identifier received for delete.",
        }
    }

    fn not_found_message(self) -> &'static str {
        match self {
            Action::Fetch => "Pet not found when fetching.",
            Action::Replace => "Pet not found when attempting full update.",
            Action::Patch => "Pet not found when attempting partial update.",
            Action::Delete => "Pet not found when attempting delete.",
        }
    }
}

/// Pet service providing the create/list/get/replace/patch/delete operations
pub struct PetService<R: PetRepository> {
    repository: Arc<R>,
    logger: Arc<dyn ActivityLogger>,
}

impl<R: PetRepository> PetService<R> {
    /// Create a new PetService that logs through `tracing`
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            logger: Arc::new(TracingActivityLogger),
        }
    }

    /// Replace the activity logger
    pub fn with_logger(mut self, logger: impl ActivityLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    fn log(&self, level: LogLevel, message: &str, meta: Value) {
        self.logger.log(level, message, &meta);
    }

    fn parse_id(&self, raw: &str, action: Action) -> PetResult<ObjectId> {
        parse_pet_id(raw).inspect_err(|_| {
            self.log(LogLevel::Warn, action.invalid_id_message(), json!({ "id": raw }));
        })
    }

    fn found(&self, pet: Option<Pet>, id: ObjectId, action: Action) -> PetResult<Pet> {
        pet.ok_or_else(|| {
            let id = id.to_hex();
            self.log(LogLevel::Warn, action.not_found_message(), json!({ "id": id }));
            PetError::NotFound(id)
        })
    }

    /// Validate a full payload and persist a new pet
    #[instrument(skip(self, payload))]
    pub async fn create_pet(&self, payload: &Map<String, Value>) -> PetResult<Pet> {
        let input = PetInput::from_payload(payload)?;
        let pet = self.repository.create(input).await?;

        self.log(
            LogLevel::Success,
            "Pet created successfully.",
            json!({ "id": pet.id.to_hex(), "name": pet.name, "species": pet.species }),
        );
        Ok(pet)
    }

    /// Fetch one page and the total count concurrently
    #[instrument(skip(self))]
    pub async fn list_pets(&self, request: PageRequest) -> PetResult<(Vec<Pet>, Pagination)> {
        let (pets, total) = tokio::try_join!(
            self.repository.find_many(request.skip(), request.limit),
            self.repository.count_all(),
        )?;

        self.log(
            LogLevel::Info,
            "Pet listing retrieved.",
            json!({
                "count": pets.len(),
                "total": total,
                "page": request.page,
                "limit": request.limit,
            }),
        );
        Ok((pets, Pagination::new(request, total)))
    }

    /// Get a pet by its textual ID
    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: &str) -> PetResult<Pet> {
        let id = self.parse_id(id, Action::Fetch)?;
        let pet = self.repository.find_by_id(id).await?;
        let pet = self.found(pet, id, Action::Fetch)?;

        self.log(
            LogLevel::Info,
            "Pet retrieved successfully.",
            json!({ "id": id.to_hex() }),
        );
        Ok(pet)
    }

    /// Overwrite a pet; optional fields missing from the payload are cleared
    #[instrument(skip(self, payload))]
    pub async fn replace_pet(&self, id: &str, payload: &Map<String, Value>) -> PetResult<Pet> {
        let id = self.parse_id(id, Action::Replace)?;
        let input = PetInput::from_payload(payload)?;
        let pet = self.repository.replace_by_id(id, input).await?;
        let pet = self.found(pet, id, Action::Replace)?;

        self.log(
            LogLevel::Success,
            "Pet replaced successfully.",
            json!({ "id": id.to_hex() }),
        );
        Ok(pet)
    }

    /// Update only the fields present in the payload
    #[instrument(skip(self, payload))]
    pub async fn patch_pet(&self, id: &str, payload: &Map<String, Value>) -> PetResult<Pet> {
        let id = self.parse_id(id, Action::Patch)?;
        let patch = PetPatch::from_payload(payload)?;
        let changes = patch.changed_fields();
        let pet = self.repository.merge_by_id(id, patch).await?;
        let pet = self.found(pet, id, Action::Patch)?;

        self.log(
            LogLevel::Success,
            "Pet updated successfully.",
            json!({ "id": id.to_hex(), "changes": changes }),
        );
        Ok(pet)
    }

    /// Delete a pet
    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: &str) -> PetResult<()> {
        let id = self.parse_id(id, Action::Delete)?;
        let pet = self.repository.delete_by_id(id).await?;
        self.found(pet, id, Action::Delete)?;

        self.log(
            LogLevel::Success,
            "Pet deleted successfully.",
            json!({ "id": id.to_hex() }),
        );
        Ok(())
    }
}

impl<R: PetRepository> Clone for PetService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            logger: Arc::clone(&self.logger),
        }
    }
}
