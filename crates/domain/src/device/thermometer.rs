//! Thermometer — a passive device with a measurement unit.

use crate::device::{Appliance, DeviceKind};
use crate::dto::ThermometerDto;
use crate::error::ValidationError;
use crate::label::Label;

/// A passive thermometer. It has no state machine, only a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thermometer {
    label: Label,
    enabled: bool,
    unit: String,
}

impl Thermometer {
    pub const DEFAULT_UNIT: &'static str = "C";

    #[must_use]
    pub fn new(label: Label) -> Self {
        Self {
            label,
            enabled: false,
            unit: Self::DEFAULT_UNIT.to_string(),
        }
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }
}

impl Appliance for Thermometer {
    type Update = ThermometerDto;

    const KIND: DeviceKind = DeviceKind::Thermometer;

    fn label(&self) -> &Label {
        &self.label
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn status(&self) -> Option<&'static str> {
        None
    }

    fn validate(&self, _update: &ThermometerDto) -> Result<(), ValidationError> {
        Ok(())
    }

    fn apply_unchecked(&mut self, update: &ThermometerDto) {
        if let Some(unit) = &update.unit {
            self.unit.clone_from(unit);
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
    }

    fn create_with_same_attributes(&self, label: Label) -> Self {
        Self {
            label,
            ..self.clone()
        }
    }

    fn has_same_attributes(&self, other: &Self) -> bool {
        self.enabled == other.enabled && self.unit == other.unit
    }
}
