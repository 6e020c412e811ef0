//! Pets API routes

use axum::Router;
use domain_pets::{MongoPetRepository, PetService, handlers};

use crate::state::AppState;

/// Create pets router
pub fn router(state: &AppState) -> Router {
    let repository = MongoPetRepository::new(state.db.clone());
    let service = PetService::new(repository);

    handlers::router(service)
}
