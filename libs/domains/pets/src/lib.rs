//! Pets Domain
//!
//! Pet records backed by MongoDB: payload validation, persistence,
//! response shaping and paginated listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelopes, status codes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Identifier checks, validation, activity log
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Stored record, typed inputs, wire view
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_pets::{handlers, mongodb::MongoPetRepository, service::PetService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("petcare");
//!
//! let repository = MongoPetRepository::new(db);
//! let service = PetService::new(repository);
//!
//! let router = axum::Router::new().nest("/pets", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod formatter;
pub mod handlers;
pub mod logger;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{PetError, PetResult};
pub use formatter::{PetView, format_pet};
pub use handlers::ApiDoc;
pub use logger::{ActivityLogger, LogLevel, TracingActivityLogger};
pub use memory::InMemoryPetRepository;
pub use models::{Owner, Pet, PetInput, PetPatch, is_valid_pet_id, parse_pet_id};
pub use crate::mongodb::MongoPetRepository;
pub use pagination::{PageQuery, PageRequest, Pagination, PetListResponse};
pub use repository::PetRepository;
pub use service::PetService;
pub use validation::validate_pet_payload;
