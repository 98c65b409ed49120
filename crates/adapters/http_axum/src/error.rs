//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use vhome_domain::device::UnknownKindError;
use vhome_domain::error::{HouseError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure an API endpoint can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// The path names an API version this server does not speak.
    UnknownVersion(String),
    /// The path names no device kind.
    UnknownKind(UnknownKindError),
    House(HouseError),
}

impl From<HouseError> for ApiError {
    fn from(err: HouseError) -> Self {
        Self::House(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::House(err.into())
    }
}

impl From<UnknownKindError> for ApiError {
    fn from(err: UnknownKindError) -> Self {
        Self::UnknownKind(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnknownVersion(version) => (
                StatusCode::NOT_FOUND,
                format!("unknown API version {version}"),
            ),
            Self::UnknownKind(err) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::House(HouseError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::House(HouseError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::House(HouseError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhome_domain::error::{ConflictError, NotFoundError};

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        assert_eq!(
            status_of(ValidationError::MissingLabel),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = HouseError::from(NotFoundError {
            kind: "light",
            label: "light1".to_string(),
        });
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_conflict_to_409() {
        let err = HouseError::from(ConflictError {
            label: "light1".to_string(),
        });
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_unknown_version_and_kind_to_404() {
        assert_eq!(
            status_of(ApiError::UnknownVersion("v9".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(UnknownKindError("toaster".to_string())),
            StatusCode::NOT_FOUND
        );
    }
}
