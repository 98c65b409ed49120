//! Device factory — builds a device from a wire record.

use crate::device::Device;
use crate::dto::DeviceDto;
use crate::error::ValidationError;
use crate::label::Label;

/// Build the variant named by `dto` with the record's label and the
/// variant's default state. Other fields of the record are ignored.
///
/// # Errors
///
/// Returns [`ValidationError::MissingLabel`] or
/// [`ValidationError::BlankLabel`] when the record has no usable label.
pub fn create(dto: &DeviceDto) -> Result<Device, ValidationError> {
    let label = Label::required(dto.label())?;
    Ok(dto.kind().create(label))
}

/// Build the variant named by `dto` and apply the rest of the record to it.
///
/// # Errors
///
/// Returns the label error of [`create`] or the validation error of
/// [`Device::apply`]. Nothing is built when the record is rejected.
pub fn create_with(dto: &DeviceDto) -> Result<Device, ValidationError> {
    let mut device = create(dto)?;
    device.apply(dto)?;
    Ok(device)
}
