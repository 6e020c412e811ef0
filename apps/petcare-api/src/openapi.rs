//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PetCare API",
        version = "0.1.0",
        description = "REST API for managing pet records, backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/pets", api = domain_pets::ApiDoc)
    ),
    tags(
        (name = "Pets", description = "Pet record management (MongoDB)")
    )
)]
pub struct ApiDoc;
