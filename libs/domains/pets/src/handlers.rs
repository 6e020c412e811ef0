use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    DataResponse, JsonObject, MessageResponse,
    errors::responses::{
        BadRequestIdentifierResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PetResult;
use crate::formatter::{PetView, format_pet};
use crate::models::{Owner, PetInput};
use crate::pagination::{PageQuery, PageRequest, Pagination, PetListResponse};
use crate::repository::PetRepository;
use crate::service::PetService;

pub const CREATED: &str = "Pet created successfully.";
pub const LISTED: &str = "Pets retrieved successfully.";
pub const RETRIEVED: &str = "Pet retrieved successfully.";
pub const UPDATED: &str = "Pet updated successfully.";
pub const DELETED: &str = "Pet deleted successfully.";

/// OpenAPI documentation for Pets API
#[derive(OpenApi)]
#[openapi(
    paths(list_pets, create_pet, get_pet, replace_pet, patch_pet, delete_pet),
    components(
        schemas(PetView, PetInput, Owner, Pagination, PetListResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdentifierResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Pets", description = "Pet record management (MongoDB)")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<PetService<R>>>;

/// Create the pets router with all HTTP endpoints
pub fn router<R: PetRepository + 'static>(service: PetService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route(
            "/{id}",
            get(get_pet)
                .put(replace_pet)
                .patch(patch_pet)
                .delete(delete_pet),
        )
        .with_state(shared_service)
}

/// List pets, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Pets",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of pets", body = PetListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_pets<R: PetRepository>(
    State(service): SharedService<R>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> PetResult<Json<PetListResponse>> {
    let request = PageRequest::from_query(&PageQuery::from_pairs(pairs));
    let (pets, pagination) = service.list_pets(request).await?;

    Ok(Json(PetListResponse {
        message: LISTED.to_string(),
        data: pets.into_iter().map(PetView::from).collect(),
        pagination,
    }))
}

/// Create a new pet
#[utoipa::path(
    post,
    path = "",
    tag = "Pets",
    request_body = PetInput,
    responses(
        (status = 201, description = "Pet created", body = DataResponse<PetView>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_pet<R: PetRepository>(
    State(service): SharedService<R>,
    JsonObject(payload): JsonObject,
) -> PetResult<impl IntoResponse> {
    let pet = service.create_pet(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(CREATED, format_pet(Some(pet)))),
    ))
}

/// Get a pet by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ObjectId (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Pet found", body = DataResponse<PetView>),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_pet<R: PetRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> PetResult<Json<DataResponse<Option<PetView>>>> {
    let pet = service.get_pet(&id).await?;
    Ok(Json(DataResponse::new(RETRIEVED, format_pet(Some(pet)))))
}

/// Replace a pet; optional fields left out are cleared
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ObjectId (24 hex digits)")
    ),
    request_body = PetInput,
    responses(
        (status = 200, description = "Pet replaced", body = DataResponse<PetView>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_pet<R: PetRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
    JsonObject(payload): JsonObject,
) -> PetResult<Json<DataResponse<Option<PetView>>>> {
    let pet = service.replace_pet(&id, &payload).await?;
    Ok(Json(DataResponse::new(UPDATED, format_pet(Some(pet)))))
}

/// Update some fields of a pet
///
/// Send any non-empty subset of the pet fields. `"owner": null` removes the
/// owner; an owner object replaces the stored one as a whole.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ObjectId (24 hex digits)")
    ),
    request_body(content = PetInput, description = "Any non-empty subset of the pet fields"),
    responses(
        (status = 200, description = "Pet updated", body = DataResponse<PetView>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_pet<R: PetRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
    JsonObject(payload): JsonObject,
) -> PetResult<Json<DataResponse<Option<PetView>>>> {
    let pet = service.patch_pet(&id, &payload).await?;
    Ok(Json(DataResponse::new(UPDATED, format_pet(Some(pet)))))
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ObjectId (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Pet deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_pet<R: PetRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> PetResult<Json<MessageResponse>> {
    service.delete_pet(&id).await?;
    Ok(Json(MessageResponse::new(DELETED)))
}
