//! MongoDB repository tests
//!
//! These run `MongoPetRepository` against a real MongoDB started with
//! testcontainers. They need Docker, so they are ignored by default:
//!
//! ```text
//! cargo test -p domain_pets --test mongodb_test -- --ignored
//! ```

use domain_pets::*;
use test_utils::{TestDataBuilder, TestMongo};

fn input(name: String) -> PetInput {
    PetInput {
        name,
        species: "dog".to_string(),
        breed: Some("Beagle".to_string()),
        age: Some(3.0),
        owner: Some(Owner {
            name: Some("Ana".to_string()),
            contact: Some("555-0100".to_string()),
        }),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_by_id() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_create_find");

    let created = repo.create(input(builder.name("pet", "rex"))).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
    assert_eq!(repo.find_by_id(builder.object_id()).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_many_sorted_and_paged() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_paging");

    for i in 0..15 {
        repo.create(input(builder.name("pet", &i.to_string())))
            .await
            .unwrap();
    }

    let page = repo.find_many(10, 10).await.unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].name, builder.name("pet", "10"));
    assert_eq!(repo.count_all().await.unwrap(), 15);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_clears_and_keeps_created_at() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_replace");

    let created = repo.create(input(builder.name("pet", "rex"))).await.unwrap();
    let replaced = repo
        .replace_by_id(
            created.id,
            PetInput {
                name: "Max".to_string(),
                species: "cat".to_string(),
                breed: None,
                age: None,
                owner: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Max");
    assert_eq!(replaced.breed, None);
    assert_eq!(replaced.age, None);
    assert_eq!(replaced.owner, None);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_merge_preserves_unlisted_fields() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_merge");

    let created = repo.create(input(builder.name("pet", "rex"))).await.unwrap();
    let merged = repo
        .merge_by_id(
            created.id,
            PetPatch {
                age: Some(4.5),
                owner: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(merged.name, created.name);
    assert_eq!(merged.breed, created.breed);
    assert_eq!(merged.age, Some(4.5));
    assert_eq!(merged.owner, None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_updates_and_delete_on_missing_id() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_missing");
    let id = builder.object_id();

    assert!(
        repo.replace_by_id(id, input(builder.name("pet", "x")))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.merge_by_id(
            id,
            PetPatch {
                age: Some(1.0),
                ..Default::default()
            }
        )
        .await
        .unwrap()
        .is_none()
    );
    assert!(repo.delete_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_twice() {
    let mongo = TestMongo::new().await;
    let repo = MongoPetRepository::new(mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_delete");

    let created = repo.create(input(builder.name("pet", "rex"))).await.unwrap();

    assert!(repo.delete_by_id(created.id).await.unwrap().is_some());
    assert!(repo.delete_by_id(created.id).await.unwrap().is_none());
    assert_eq!(repo.count_all().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_many_past_the_end_is_empty() {
    let mongo = TestMongo::new().await;
    let db = mongo.client().database("petcare_paging");
    let repo = MongoPetRepository::with_collection(db, "pets");
    let builder = TestDataBuilder::from_test_name("mongo_past_end");

    repo.create(input(builder.name("pet", "rex"))).await.unwrap();

    let request = PageRequest::from_query(&PageQuery {
        page: Some("999999999999999999".to_string()),
        limit: None,
    });
    assert!(
        repo.find_many(request.skip(), request.limit)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(repo.find_many(u64::MAX, 10).await.unwrap().is_empty());
    assert_eq!(repo.count_all().await.unwrap(), 1);
}
