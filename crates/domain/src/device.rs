//! Device — a virtual appliance living in the house.
//!
//! Every variant is a plain struct implementing [`Appliance`]; the
//! [`Device`] enum wraps them so the house can store any variant under one
//! label space.

mod actuator;
mod door;
mod fireplace;
mod light;
mod rgb_light;
mod thermometer;

pub use actuator::Actuator;
pub use door::Door;
pub use fireplace::Fireplace;
pub use light::Light;
pub use rgb_light::{Rgb, RgbLight};
pub use thermometer::Thermometer;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dto::DeviceDto;
use crate::error::ValidationError;
use crate::label::Label;

/// Discriminant of the device variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    RgbLight,
    Fireplace,
    Door,
    Thermometer,
}

impl DeviceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::RgbLight,
        Self::Fireplace,
        Self::Door,
        Self::Thermometer,
    ];

    /// Path segment used by the HTTP API (`light`, `rgb_light`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::RgbLight => "rgb_light",
            Self::Fireplace => "fireplace",
            Self::Door => "door",
            Self::Thermometer => "thermometer",
        }
    }

    /// Human readable name, used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::RgbLight => "RGB light",
            Self::Fireplace => "fireplace",
            Self::Door => "door",
            Self::Thermometer => "thermometer",
        }
    }

    /// `deviceType` tag used by the wire records.
    #[must_use]
    pub fn dto_tag(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::RgbLight => "RGBLight",
            Self::Fireplace => "Fireplace",
            Self::Door => "Door",
            Self::Thermometer => "Thermometer",
        }
    }

    #[must_use]
    pub fn from_dto_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dto_tag() == tag)
    }

    /// Build a device of this kind in its default state.
    #[must_use]
    pub fn create(self, label: Label) -> Device {
        match self {
            Self::Light => Device::Light(Light::new(label)),
            Self::RgbLight => Device::RgbLight(RgbLight::new(label)),
            Self::Fireplace => Device::Fireplace(Fireplace::new(label)),
            Self::Door => Device::Door(Door::new(label)),
            Self::Thermometer => Device::Thermometer(Thermometer::new(label)),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The path segment does not name a device kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind: {0}")]
pub struct UnknownKindError(pub String);

impl FromStr for DeviceKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

/// Capabilities shared by every device variant.
pub trait Appliance: Clone {
    /// Partial update accepted by [`Appliance::apply`].
    type Update;

    /// Variant discriminant.
    const KIND: DeviceKind;

    fn label(&self) -> &Label;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Current state-machine state, `None` for passive devices.
    fn status(&self) -> Option<&'static str>;

    /// Check `update` against the variant's invariants without applying it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rejected field.
    fn validate(&self, update: &Self::Update) -> Result<(), ValidationError>;

    /// Apply the present fields of an already validated `update`.
    fn apply_unchecked(&mut self, update: &Self::Update);

    /// Validate then apply `update`. Absent fields keep their value and a
    /// rejected update leaves the device untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] produced by [`Appliance::validate`].
    fn apply(&mut self, update: &Self::Update) -> Result<(), ValidationError> {
        self.validate(update)?;
        self.apply_unchecked(update);
        Ok(())
    }

    /// Copy every attribute except the label.
    #[must_use]
    fn create_with_same_attributes(&self, label: Label) -> Self;

    /// Compare every attribute except the label.
    fn has_same_attributes(&self, other: &Self) -> bool;
}

/// Any device the house can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Light(Light),
    RgbLight(RgbLight),
    Fireplace(Fireplace),
    Door(Door),
    Thermometer(Thermometer),
}

impl Device {
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::RgbLight(_) => DeviceKind::RgbLight,
            Self::Fireplace(_) => DeviceKind::Fireplace,
            Self::Door(_) => DeviceKind::Door,
            Self::Thermometer(_) => DeviceKind::Thermometer,
        }
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        match self {
            Self::Light(d) => d.label(),
            Self::RgbLight(d) => d.label(),
            Self::Fireplace(d) => d.label(),
            Self::Door(d) => d.label(),
            Self::Thermometer(d) => d.label(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Light(d) => d.is_enabled(),
            Self::RgbLight(d) => d.is_enabled(),
            Self::Fireplace(d) => d.is_enabled(),
            Self::Door(d) => d.is_enabled(),
            Self::Thermometer(d) => d.is_enabled(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<&'static str> {
        match self {
            Self::Light(d) => d.status(),
            Self::RgbLight(d) => d.status(),
            Self::Fireplace(d) => d.status(),
            Self::Door(d) => d.status(),
            Self::Thermometer(d) => d.status(),
        }
    }

    /// Apply a DTO of the same variant following the partial-update rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KindMismatch`] when the DTO describes
    /// another variant, or the variant's own validation error.
    pub fn apply(&mut self, dto: &DeviceDto) -> Result<(), ValidationError> {
        match (self, dto) {
            (Self::Light(d), DeviceDto::Light(u)) => d.apply(u),
            (Self::RgbLight(d), DeviceDto::RgbLight(u)) => d.apply(u),
            (Self::Fireplace(d), DeviceDto::Fireplace(u)) => d.apply(u),
            (Self::Door(d), DeviceDto::Door(u)) => d.apply(u),
            (Self::Thermometer(d), DeviceDto::Thermometer(u)) => d.apply(u),
            (device, dto) => Err(ValidationError::KindMismatch {
                expected: device.kind(),
                actual: dto.kind(),
            }),
        }
    }

    /// Copy of this device under another label.
    #[must_use]
    pub fn create_with_same_attributes(&self, label: Label) -> Self {
        match self {
            Self::Light(d) => Self::Light(d.create_with_same_attributes(label)),
            Self::RgbLight(d) => Self::RgbLight(d.create_with_same_attributes(label)),
            Self::Fireplace(d) => Self::Fireplace(d.create_with_same_attributes(label)),
            Self::Door(d) => Self::Door(d.create_with_same_attributes(label)),
            Self::Thermometer(d) => Self::Thermometer(d.create_with_same_attributes(label)),
        }
    }

    /// Compare every attribute except the label.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KindMismatch`] when `other` is another
    /// variant.
    pub fn has_same_attributes(&self, other: &Self) -> Result<bool, ValidationError> {
        match (self, other) {
            (Self::Light(a), Self::Light(b)) => Ok(a.has_same_attributes(b)),
            (Self::RgbLight(a), Self::RgbLight(b)) => Ok(a.has_same_attributes(b)),
            (Self::Fireplace(a), Self::Fireplace(b)) => Ok(a.has_same_attributes(b)),
            (Self::Door(a), Self::Door(b)) => Ok(a.has_same_attributes(b)),
            (Self::Thermometer(a), Self::Thermometer(b)) => Ok(a.has_same_attributes(b)),
            (a, b) => Err(ValidationError::KindMismatch {
                expected: a.kind(),
                actual: b.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ActuatorDto;

    fn label(value: &str) -> Label {
        Label::new(value).unwrap()
    }

    #[test]
    fn should_parse_kind_from_path_segment() {
        assert_eq!("rgb_light".parse::<DeviceKind>().unwrap(), DeviceKind::RgbLight);
        assert_eq!("door".parse::<DeviceKind>().unwrap(), DeviceKind::Door);
    }

    #[test]
    fn should_reject_unknown_path_segment() {
        let result = "toaster".parse::<DeviceKind>();
        assert_eq!(result, Err(UnknownKindError("toaster".to_string())));
    }

    #[test]
    fn should_map_dto_tag_back_to_kind() {
        for kind in DeviceKind::ALL {
            assert_eq!(DeviceKind::from_dto_tag(kind.dto_tag()), Some(kind));
        }
        assert_eq!(DeviceKind::from_dto_tag("rgb_light"), None);
    }

    #[test]
    fn should_create_matching_variant_for_every_kind() {
        for kind in DeviceKind::ALL {
            let device = kind.create(label("dev"));
            assert_eq!(device.kind(), kind);
            assert_eq!(device.label().as_str(), "dev");
            assert!(!device.is_enabled());
        }
    }

    #[test]
    fn should_reject_dto_of_another_kind() {
        let mut device = DeviceKind::Door.create(label("door1"));
        let result = device.apply(&DeviceDto::Light(ActuatorDto::default()));
        assert_eq!(
            result,
            Err(ValidationError::KindMismatch {
                expected: DeviceKind::Door,
                actual: DeviceKind::Light,
            })
        );
    }

    #[test]
    fn should_reject_attribute_comparison_across_kinds() {
        let light = DeviceKind::Light.create(label("light1"));
        let door = DeviceKind::Door.create(label("door1"));
        assert!(light.has_same_attributes(&door).is_err());
    }

    #[test]
    fn should_keep_attributes_when_copied_under_new_label() {
        let mut fireplace = DeviceKind::Fireplace.create(label("fireplace1"));
        fireplace
            .apply(&DeviceDto::Fireplace(ActuatorDto {
                enabled: Some(true),
                status: Some("extinguished".to_string()),
                ..ActuatorDto::default()
            }))
            .unwrap();

        let copy = fireplace.create_with_same_attributes(label("fireplace2"));
        assert_eq!(copy.label().as_str(), "fireplace2");
        assert!(copy.has_same_attributes(&fireplace).unwrap());
    }
}
