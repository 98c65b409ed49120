//! Shared application state for axum handlers.

use std::sync::Arc;

use vhome_app::ports::DeviceRepository;
use vhome_app::services::house_service::HouseService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// House use-cases.
    pub house_service: Arc<HouseService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            house_service: Arc::clone(&self.house_service),
        }
    }
}

impl<R> AppState<R>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(house_service: HouseService<R>) -> Self {
        Self {
            house_service: Arc::new(house_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(house_service: Arc<HouseService<R>>) -> Self {
        Self { house_service }
    }
}
