//! JSON REST handlers for park areas.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use kennywood_app::ports::ParkAreaRepository;
use kennywood_domain::error::{KennywoodError, NotFoundError};
use kennywood_domain::id::ParkAreaId;
use kennywood_domain::park_area::ParkAreaDraft;

use crate::error::ApiError;
use crate::extract::BaseUrl;
use crate::serializer::{ParkAreaRepresentation, ParkAreaSerializer};
use crate::state::AppState;

/// Request body for creating or updating a park area.
///
/// Both fields are optional here so that a missing field becomes a
/// structured validation error rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct ParkAreaPayload {
    pub name: Option<String>,
    pub theme: Option<String>,
}

impl ParkAreaPayload {
    fn into_draft(self) -> Result<ParkAreaDraft, KennywoodError> {
        let mut builder = ParkAreaDraft::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(theme) = self.theme {
            builder = builder.theme(theme);
        }
        builder.build()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ParkAreaRepresentation>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the retrieve endpoint.
pub enum RetrieveResponse {
    Ok(Json<ParkAreaRepresentation>),
}

impl IntoResponse for RetrieveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// The created record; clients rely on `200` rather than `201` here.
    Ok(Json<ParkAreaRepresentation>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A path segment that is not an integer cannot name any park area.
fn parse_id(raw: &str) -> Result<ParkAreaId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(KennywoodError::from(NotFoundError {
            entity: "ParkArea",
            id: raw.to_string(),
        }))
    })
}

/// `GET /parkareas`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    base: BaseUrl,
) -> Result<ListResponse, ApiError>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    let areas = state.park_area_service.list_park_areas().await?;
    let body = ParkAreaSerializer::new(&base).many(areas);
    Ok(ListResponse::Ok(Json(body)))
}

/// `GET /parkareas/{id}`
pub async fn retrieve<R>(
    State(state): State<AppState<R>>,
    base: BaseUrl,
    Path(id): Path<String>,
) -> Result<RetrieveResponse, ApiError>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let area = state.park_area_service.get_park_area(id).await?;
    Ok(RetrieveResponse::Ok(Json(
        ParkAreaSerializer::new(&base).one(area),
    )))
}

/// `POST /parkareas`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    base: BaseUrl,
    payload: Result<Json<ParkAreaPayload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;
    let created = state.park_area_service.create_park_area(draft).await?;
    Ok(CreateResponse::Ok(Json(
        ParkAreaSerializer::new(&base).one(created),
    )))
}

/// `PUT /parkareas/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<ParkAreaPayload>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;
    state.park_area_service.update_park_area(id, draft).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /parkareas/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.park_area_service.delete_park_area(id).await?;
    Ok(DeleteResponse::NoContent)
}
