//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use vhome_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` and serves a health check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use vhome_app::services::house_service::HouseService;
    use vhome_domain::device::{Device, DeviceKind};
    use vhome_domain::error::{ConflictError, HouseError};
    use vhome_domain::label::Label;

    /// Repository holding a single light labelled `light1`.
    struct StubHouse;

    fn light1() -> Device {
        DeviceKind::Light.create(Label::new("light1").unwrap())
    }

    impl DeviceRepository for StubHouse {
        async fn add(&self, device: Device) -> Result<Device, HouseError> {
            if device.label().as_str() == "light1" {
                return Err(ConflictError {
                    label: "light1".to_string(),
                }
                .into());
            }
            Ok(device)
        }
        async fn get(&self, label: &Label) -> Result<Option<Device>, HouseError> {
            Ok((label.as_str() == "light1").then(light1))
        }
        async fn update(&self, device: Device) -> Result<Device, HouseError> {
            Ok(device)
        }
        async fn remove(&self, _label: &Label) -> Result<Device, HouseError> {
            Ok(light1())
        }
        async fn get_all(&self) -> Result<Vec<Device>, HouseError> {
            Ok(vec![light1()])
        }
        async fn get_by_kind(&self, kind: DeviceKind) -> Result<Vec<Device>, HouseError> {
            Ok(vec![light1()]
                .into_iter()
                .filter(|d| d.kind() == kind)
                .collect())
        }
    }

    /// Repository that must never be reached.
    struct UnreachableHouse;

    impl DeviceRepository for UnreachableHouse {
        async fn add(&self, _device: Device) -> Result<Device, HouseError> {
            unreachable!("house accessed")
        }
        async fn get(&self, _label: &Label) -> Result<Option<Device>, HouseError> {
            unreachable!("house accessed")
        }
        async fn update(&self, _device: Device) -> Result<Device, HouseError> {
            unreachable!("house accessed")
        }
        async fn remove(&self, _label: &Label) -> Result<Device, HouseError> {
            unreachable!("house accessed")
        }
        async fn get_all(&self) -> Result<Vec<Device>, HouseError> {
            unreachable!("house accessed")
        }
        async fn get_by_kind(&self, _kind: DeviceKind) -> Result<Vec<Device>, HouseError> {
            unreachable!("house accessed")
        }
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_device_dto_when_present() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request("GET", "/api/v0.1/house/device/light/light1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"deviceType": "Light", "label": "light1", "enabled": false, "status": "on"})
        );
    }

    #[tokio::test]
    async fn should_return_404_when_device_is_another_kind() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request("GET", "/api/v0.1/house/device/door/light1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_409_with_error_body_when_label_taken() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request(
                "POST",
                "/api/v0.1/house/device/light",
                Some(json!({"label": "light1"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("light1"));
    }

    #[tokio::test]
    async fn should_return_400_when_body_is_not_json() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v0.1/house/device/light")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_ok_body_when_device_deleted() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request("DELETE", "/api/v0.1/house/device/light/light1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn should_list_house() {
        let app = build(AppState::new(HouseService::new(StubHouse)));
        let response = app
            .oneshot(request("GET", "/api/v0.1/house", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["devices"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_unknown_version_without_touching_house() {
        let requests = [
            request("GET", "/api/v9/house", None),
            request("GET", "/api/v9/house/device/light", None),
            request("GET", "/api/v9/house/device/light/light1", None),
            request("POST", "/api/v9/house/device/light", Some(json!({"label": "x"}))),
            request("PUT", "/api/v9/house/device/light/x", Some(json!({}))),
            request("DELETE", "/api/v9/house/device/light/light1", None),
        ];

        for req in requests {
            let app = build(AppState::new(HouseService::new(UnreachableHouse)));
            let response = app.oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn should_return_404_for_blank_label_without_touching_house() {
        for method in ["GET", "DELETE"] {
            let app = build(AppState::new(HouseService::new(UnreachableHouse)));
            let response = app
                .oneshot(request(method, "/api/v0.1/house/device/light/%20", None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert!(json_body(response).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_kind_without_touching_house() {
        let app = build(AppState::new(HouseService::new(UnreachableHouse)));
        let response = app
            .oneshot(request("GET", "/api/v0.1/house/device/toaster/t1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
