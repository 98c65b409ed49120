//! JSON REST handler for the whole house.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use vhome_app::ports::DeviceRepository;
use vhome_domain::dto::HouseDto;

use crate::error::ApiError;
use crate::state::AppState;
use crate::version::ApiVersion;

/// Possible responses from the house endpoint.
pub enum GetResponse {
    Ok(Json<HouseDto>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/{version}/house`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(version): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    version.parse::<ApiVersion>()?;
    let devices = state.house_service.list_devices().await?;
    Ok(GetResponse::Ok(Json(devices.into_iter().collect())))
}
