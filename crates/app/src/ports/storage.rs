//! Storage port — the house registry.

use std::future::Future;

use vhome_domain::device::{Device, DeviceKind};
use vhome_domain::error::HouseError;
use vhome_domain::label::Label;

/// Registry of every device in the house, keyed by label.
///
/// Each operation touches a single label and is atomic on its own.
pub trait DeviceRepository {
    /// Insert a device whose label is not yet present.
    ///
    /// Fails with [`HouseError::Conflict`] when the label is taken; the
    /// registry is left unchanged.
    fn add(&self, device: Device) -> impl Future<Output = Result<Device, HouseError>> + Send;

    /// Get a device by label.
    fn get(&self, label: &Label)
    -> impl Future<Output = Result<Option<Device>, HouseError>> + Send;

    /// Replace the stored device holding the same label.
    ///
    /// Fails with [`HouseError::NotFound`] when the label is absent.
    fn update(&self, device: Device)
    -> impl Future<Output = Result<Device, HouseError>> + Send;

    /// Remove a device by label, returning it.
    ///
    /// Fails with [`HouseError::NotFound`] when the label is absent.
    fn remove(&self, label: &Label)
    -> impl Future<Output = Result<Device, HouseError>> + Send;

    /// Every device in the house.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HouseError>> + Send;

    /// Every device of one kind.
    fn get_by_kind(
        &self,
        kind: DeviceKind,
    ) -> impl Future<Output = Result<Vec<Device>, HouseError>> + Send;
}
