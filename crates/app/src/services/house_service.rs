//! House service — use-cases for managing the devices of the house.

use vhome_domain::device::{Device, DeviceKind};
use vhome_domain::dto::DeviceDto;
use vhome_domain::error::{ConflictError, HouseError, NotFoundError, ValidationError};
use vhome_domain::factory;
use vhome_domain::label::Label;

use crate::ports::DeviceRepository;

/// Application service for the house registry.
pub struct HouseService<R> {
    repo: R,
}

fn not_found(kind: DeviceKind, label: &str) -> HouseError {
    NotFoundError {
        kind: kind.name(),
        label: label.to_string(),
    }
    .into()
}

impl<R: DeviceRepository> HouseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a device of `kind` by label.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::NotFound`] when no device of `kind` holds the
    /// label. A blank label is never held by any device.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, kind: DeviceKind, label: &str) -> Result<Device, HouseError> {
        let Ok(label) = Label::new(label) else {
            return Err(not_found(kind, label));
        };
        match self.repo.get(&label).await? {
            Some(device) if device.kind() == kind => Ok(device),
            _ => Err(not_found(kind, label.as_str())),
        }
    }

    /// Create a device of `kind` from a wire record, then apply the rest of
    /// the record to it.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Validation`] when the record is rejected (missing
    /// label, unknown status, another kind), or [`HouseError::Conflict`] when
    /// the label is already present.
    #[tracing::instrument(skip(self, dto), fields(label = dto.label()))]
    pub async fn create_device(
        &self,
        kind: DeviceKind,
        dto: DeviceDto,
    ) -> Result<Device, HouseError> {
        if dto.kind() != kind {
            return Err(ValidationError::KindMismatch {
                expected: kind,
                actual: dto.kind(),
            }
            .into());
        }
        let device = factory::create_with(&dto)?;
        self.repo.add(device).await
    }

    /// Create the device when the label is absent, otherwise apply the
    /// record to the stored device.
    ///
    /// The path label is authoritative: the record's label, when present,
    /// must be the same.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Validation`] for a rejected record or a label
    /// mismatch, or [`HouseError::Conflict`] when the label belongs to a
    /// device of another kind.
    #[tracing::instrument(skip(self, dto))]
    pub async fn upsert_device(
        &self,
        kind: DeviceKind,
        label: &str,
        mut dto: DeviceDto,
    ) -> Result<Device, HouseError> {
        let label = Label::new(label)?;
        if let Some(body) = dto.label()
            && body != label.as_str()
        {
            return Err(ValidationError::LabelMismatch {
                path: label.to_string(),
                body: body.to_string(),
            }
            .into());
        }
        dto.set_label(label.as_str());

        // A concurrent create or delete can land between the lookup and the
        // write: retry once on the other path.
        match self.repo.get(&label).await? {
            None => match self.create_device(kind, dto.clone()).await {
                Err(HouseError::Conflict(_)) => {
                    let existing = self
                        .repo
                        .get(&label)
                        .await?
                        .ok_or_else(|| not_found(kind, label.as_str()))?;
                    self.update_existing(kind, existing, &dto).await
                }
                result => result,
            },
            Some(existing) => match self.update_existing(kind, existing, &dto).await {
                Err(HouseError::NotFound(_)) => self.create_device(kind, dto).await,
                result => result,
            },
        }
    }

    async fn update_existing(
        &self,
        kind: DeviceKind,
        mut existing: Device,
        dto: &DeviceDto,
    ) -> Result<Device, HouseError> {
        if existing.kind() != kind {
            return Err(ConflictError {
                label: existing.label().to_string(),
            }
            .into());
        }
        existing.apply(dto)?;
        self.repo.update(existing).await
    }

    /// Remove a device of `kind` by label.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::NotFound`] when no device of `kind` holds the
    /// label.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, kind: DeviceKind, label: &str) -> Result<Device, HouseError> {
        let device = self.get_device(kind, label).await?;
        self.repo.remove(device.label()).await
    }

    /// List every device of the house, ordered by label.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, HouseError> {
        let mut devices = self.repo.get_all().await?;
        devices.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(devices)
    }

    /// List every device of one kind, ordered by label.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_by_kind(&self, kind: DeviceKind) -> Result<Vec<Device>, HouseError> {
        let mut devices = self.repo.get_by_kind(kind).await?;
        devices.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(devices)
    }
}
