//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vhome_app::ports::DeviceRepository;
use vhome_domain::device::{Device, DeviceKind};
use vhome_domain::error::{ConflictError, HouseError, NotFoundError};
use vhome_domain::label::Label;

fn not_found(label: &Label) -> HouseError {
    NotFoundError {
        kind: "device",
        label: label.to_string(),
    }
    .into()
}

/// Every device of the house, keyed by label.
///
/// Each operation takes the lock once, so insert-if-absent, replace and
/// remove are atomic per label.
#[derive(Debug, Default)]
pub struct House {
    devices: RwLock<HashMap<Label, Device>>,
}

impl House {
    /// Create an empty house.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Label, Device>> {
        self.devices.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Label, Device>> {
        self.devices.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_sync(&self, device: Device) -> Result<Device, HouseError> {
        match self.write().entry(device.label().clone()) {
            Entry::Occupied(_) => Err(ConflictError {
                label: device.label().to_string(),
            }
            .into()),
            Entry::Vacant(slot) => {
                tracing::info!(label = %device.label(), kind = %device.kind(), "device added");
                slot.insert(device.clone());
                Ok(device)
            }
        }
    }

    fn update_sync(&self, device: Device) -> Result<Device, HouseError> {
        let mut devices = self.write();
        let Some(slot) = devices.get_mut(device.label()) else {
            return Err(not_found(device.label()));
        };
        tracing::info!(label = %device.label(), kind = %device.kind(), "device updated");
        tracing::debug!(before = ?slot, after = ?device, "device update");
        *slot = device.clone();
        Ok(device)
    }

    fn remove_sync(&self, label: &Label) -> Result<Device, HouseError> {
        let device = self.write().remove(label).ok_or_else(|| not_found(label))?;
        tracing::info!(label = %label, kind = %device.kind(), "device removed");
        Ok(device)
    }
}

impl DeviceRepository for House {
    fn add(&self, device: Device) -> impl Future<Output = Result<Device, HouseError>> + Send {
        let result = self.add_sync(device);
        async move { result }
    }

    fn get(
        &self,
        label: &Label,
    ) -> impl Future<Output = Result<Option<Device>, HouseError>> + Send {
        let result = self.read().get(label).cloned();
        async move { Ok(result) }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HouseError>> + Send {
        let result = self.update_sync(device);
        async move { result }
    }

    fn remove(&self, label: &Label) -> impl Future<Output = Result<Device, HouseError>> + Send {
        let result = self.remove_sync(label);
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HouseError>> + Send {
        let result: Vec<Device> = self.read().values().cloned().collect();
        async move { Ok(result) }
    }

    fn get_by_kind(
        &self,
        kind: DeviceKind,
    ) -> impl Future<Output = Result<Vec<Device>, HouseError>> + Send {
        let result: Vec<Device> = self
            .read()
            .values()
            .filter(|device| device.kind() == kind)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
}
