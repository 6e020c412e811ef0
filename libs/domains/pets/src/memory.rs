//! In-memory implementation of PetRepository, for tests and local runs
//! without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::PetResult;
use crate::models::{Pet, PetInput, PetPatch};
use crate::repository::PetRepository;

/// Pets kept in insertion order behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records, e.g. fixtures.
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        Self {
            pets: RwLock::new(pets),
        }
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, input: PetInput) -> PetResult<Pet> {
        let pet = Pet::new(input);
        self.pets.write().await.push(pet.clone());
        Ok(pet)
    }

    async fn find_many(&self, skip: u64, limit: u64) -> PetResult<Vec<Pet>> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let pets = self.pets.read().await;
        Ok(pets.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn count_all(&self) -> PetResult<u64> {
        Ok(self.pets.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let pets = self.pets.read().await;
        Ok(pets.iter().find(|pet| pet.id == id).cloned())
    }

    async fn replace_by_id(&self, id: ObjectId, input: PetInput) -> PetResult<Option<Pet>> {
        let mut pets = self.pets.write().await;
        Ok(pets.iter_mut().find(|pet| pet.id == id).map(|pet| {
            pet.replace_with(input);
            pet.clone()
        }))
    }

    async fn merge_by_id(&self, id: ObjectId, patch: PetPatch) -> PetResult<Option<Pet>> {
        let mut pets = self.pets.write().await;
        Ok(pets.iter_mut().find(|pet| pet.id == id).map(|pet| {
            pet.merge(patch);
            pet.clone()
        }))
    }

    async fn delete_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let mut pets = self.pets.write().await;
        let removed = pets
            .iter()
            .position(|pet| pet.id == id)
            .map(|index| pets.remove(index));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    fn input(name: &str) -> PetInput {
        PetInput {
            name: name.to_string(),
            species: "dog".to_string(),
            breed: Some("Beagle".to_string()),
            age: Some(2.0),
            owner: Some(Owner {
                name: Some("Ana".to_string()),
                contact: None,
            }),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPetRepository::new();
        let pet = repo.create(input("Rex")).await.unwrap();

        assert_eq!(repo.find_by_id(pet.id).await.unwrap(), Some(pet));
        assert_eq!(repo.find_by_id(ObjectId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_many_pages_in_insertion_order() {
        let repo = InMemoryPetRepository::new();
        for i in 0..15 {
            repo.create(input(&format!("pet-{i}"))).await.unwrap();
        }

        let page = repo.find_many(10, 10).await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].name, "pet-10");
        assert_eq!(repo.count_all().await.unwrap(), 15);
        assert!(repo.find_many(u64::MAX, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_clears_and_merge_preserves() {
        let repo = InMemoryPetRepository::new();
        let pet = repo.create(input("Rex")).await.unwrap();

        let merged = repo
            .merge_by_id(
                pet.id,
                PetPatch {
                    name: Some("Max".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(merged.name, "Max");
        assert_eq!(merged.breed.as_deref(), Some("Beagle"));

        let replaced = repo
            .replace_by_id(
                pet.id,
                PetInput {
                    breed: None,
                    age: None,
                    owner: None,
                    ..input("Bo")
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.name, "Bo");
        assert_eq!(replaced.breed, None);
        assert_eq!(replaced.owner, None);
        assert_eq!(replaced.created_at, pet.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPetRepository::new();
        let id = ObjectId::new();

        assert!(repo.replace_by_id(id, input("Rex")).await.unwrap().is_none());
        assert!(repo.merge_by_id(id, PetPatch::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryPetRepository::new();
        let pet = repo.create(input("Rex")).await.unwrap();

        assert_eq!(repo.delete_by_id(pet.id).await.unwrap().map(|p| p.id), Some(pet.id));
        assert!(repo.delete_by_id(pet.id).await.unwrap().is_none());
        assert_eq!(repo.count_all().await.unwrap(), 0);
    }
}
