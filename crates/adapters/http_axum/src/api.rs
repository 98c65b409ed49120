//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod house;

use axum::Router;
use axum::routing::get;

use vhome_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Every route carries the API version as its first segment.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        // House
        .route("/{version}/house", get(house::get::<R>))
        // Devices
        .route(
            "/{version}/house/device/{kind}",
            get(devices::list::<R>).post(devices::create::<R>),
        )
        .route(
            "/{version}/house/device/{kind}/{label}",
            get(devices::get::<R>)
                .put(devices::upsert::<R>)
                .delete(devices::delete::<R>),
        )
}
