//! JSON REST handlers for devices.
//!
//! One set of handlers serves every device kind; the kind comes from the
//! path and decides how the body is decoded.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use vhome_app::ports::DeviceRepository;
use vhome_domain::dto::DeviceDto;

use crate::error::ApiError;
use crate::state::AppState;
use crate::version;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceDto>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and upsert endpoints.
pub enum DeviceResponse {
    Ok(Json<DeviceDto>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => "OK".into_response(),
        }
    }
}

/// `GET /api/{version}/house/device/{kind}`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Path((version, kind)): Path<(String, String)>,
) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let kind = version::resolve(&version, &kind)?;
    let devices = state.house_service.list_by_kind(kind).await?;
    Ok(ListResponse::Ok(Json(
        devices.iter().map(DeviceDto::from).collect(),
    )))
}

/// `GET /api/{version}/house/device/{kind}/{label}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path((version, kind, label)): Path<(String, String, String)>,
) -> Result<DeviceResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let kind = version::resolve(&version, &kind)?;
    let device = state.house_service.get_device(kind, &label).await?;
    Ok(DeviceResponse::Ok(Json(DeviceDto::from(&device))))
}

/// `POST /api/{version}/house/device/{kind}`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Path((version, kind)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<DeviceResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let kind = version::resolve(&version, &kind)?;
    let Json(body) = body?;
    let dto = DeviceDto::from_json(kind, body)?;
    let device = state.house_service.create_device(kind, dto).await?;
    Ok(DeviceResponse::Ok(Json(DeviceDto::from(&device))))
}

/// `PUT /api/{version}/house/device/{kind}/{label}`
pub async fn upsert<R>(
    State(state): State<AppState<R>>,
    Path((version, kind, label)): Path<(String, String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<DeviceResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let kind = version::resolve(&version, &kind)?;
    let Json(body) = body?;
    let dto = DeviceDto::from_json(kind, body)?;
    let device = state.house_service.upsert_device(kind, &label, dto).await?;
    Ok(DeviceResponse::Ok(Json(DeviceDto::from(&device))))
}

/// `DELETE /api/{version}/house/device/{kind}/{label}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path((version, kind, label)): Path<(String, String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let kind = version::resolve(&version, &kind)?;
    state.house_service.delete_device(kind, &label).await?;
    Ok(DeleteResponse::Ok)
}
