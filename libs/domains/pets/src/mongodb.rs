//! MongoDB implementation of PetRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::PetResult;
use crate::models::{Pet, PetInput, PetPatch, now};
use crate::pagination::MAX_SKIP;
use crate::repository::PetRepository;

pub const COLLECTION_NAME: &str = "pets";

/// MongoDB implementation of the PetRepository
pub struct MongoPetRepository {
    collection: Collection<Pet>,
}

impl MongoPetRepository {
    /// Create a new MongoPetRepository over the `pets` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoPetRepository::new(client.database("petcare"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoPetRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Pet>(collection_name);
        Self { collection }
    }

    /// `$set` every provided field, `$unset` the optional ones the input lacks.
    fn replace_update(input: &PetInput) -> PetResult<Document> {
        let mut set = doc! {
            "name": input.name.as_str(),
            "species": input.species.as_str(),
            "updatedAt": bson::DateTime::from_chrono(now()),
        };
        let mut unset = Document::new();

        match &input.breed {
            Some(breed) => set.insert("breed", breed.as_str()),
            None => unset.insert("breed", ""),
        };
        match input.age {
            Some(age) => set.insert("age", age),
            None => unset.insert("age", ""),
        };
        match &input.owner {
            Some(owner) => set.insert("owner", bson::to_bson(owner)?),
            None => unset.insert("owner", ""),
        };

        let mut update = doc! { "$set": set };
        if !unset.is_empty() {
            update.insert("$unset", unset);
        }
        Ok(update)
    }

    /// `$set` only the fields named in the patch. A cleared owner is `$unset`.
    fn merge_update(patch: &PetPatch) -> PetResult<Document> {
        let mut set = doc! { "updatedAt": bson::DateTime::from_chrono(now()) };

        if let Some(name) = &patch.name {
            set.insert("name", name.as_str());
        }
        if let Some(species) = &patch.species {
            set.insert("species", species.as_str());
        }
        if let Some(breed) = &patch.breed {
            set.insert("breed", breed.as_str());
        }
        if let Some(age) = patch.age {
            set.insert("age", age);
        }

        let mut update = Document::new();
        match &patch.owner {
            Some(Some(owner)) => {
                set.insert("owner", bson::to_bson(owner)?);
            }
            Some(None) => {
                update.insert("$unset", doc! { "owner": "" });
            }
            None => {}
        }
        update.insert("$set", set);
        Ok(update)
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    #[instrument(skip(self, input), fields(pet_name = %input.name))]
    async fn create(&self, input: PetInput) -> PetResult<Pet> {
        let pet = Pet::new(input);

        self.collection.insert_one(&pet).await?;

        tracing::debug!(pet_id = %pet.id, "Pet document inserted");
        Ok(pet)
    }

    #[instrument(skip(self))]
    async fn find_many(&self, skip: u64, limit: u64) -> PetResult<Vec<Pet>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip.min(MAX_SKIP))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;
        let pets: Vec<Pet> = cursor.try_collect().await?;

        Ok(pets)
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> PetResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let pet = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(pet)
    }

    #[instrument(skip(self, input))]
    async fn replace_by_id(&self, id: ObjectId, input: PetInput) -> PetResult<Option<Pet>> {
        let update = Self::replace_update(&input)?;
        let pet = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(pet)
    }

    #[instrument(skip(self, patch))]
    async fn merge_by_id(&self, id: ObjectId, patch: PetPatch) -> PetResult<Option<Pet>> {
        let update = Self::merge_update(&patch)?;
        let pet = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(pet)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let pet = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?;
        Ok(pet)
    }
}
