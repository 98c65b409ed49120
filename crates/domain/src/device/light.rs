//! Light — responds to `turn_on` / `turn_off`.

use crate::device::{Actuator, Appliance, DeviceKind};
use crate::dto::ActuatorDto;
use crate::error::ValidationError;
use crate::label::Label;
use crate::state_machine::{Transition, TransitionTable};

/// A simple light that can be turned on and off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    actuator: Actuator,
}

impl Light {
    /// Status of the light when it is on.
    pub const ON: &'static str = "on";
    /// Status of the light when it is off.
    pub const OFF: &'static str = "off";

    pub const TURN_ON: &'static str = "turn_on";
    pub const TURN_OFF: &'static str = "turn_off";

    #[must_use]
    pub fn new(label: Label) -> Self {
        Self {
            actuator: Actuator::new(label, &TABLE),
        }
    }

    pub fn turn_on(&mut self) {
        self.actuator.control_signal(Self::TURN_ON);
    }

    pub fn turn_off(&mut self) {
        self.actuator.control_signal(Self::TURN_OFF);
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.actuator.status() == Self::ON
    }
}

static TABLE: TransitionTable = TransitionTable::new(
    &[Light::ON, Light::OFF],
    &[
        Transition::new(Light::ON, Light::TURN_OFF, Light::OFF),
        Transition::new(Light::OFF, Light::TURN_ON, Light::ON),
    ],
);

impl Appliance for Light {
    type Update = ActuatorDto;

    const KIND: DeviceKind = DeviceKind::Light;

    fn label(&self) -> &Label {
        self.actuator.label()
    }

    fn is_enabled(&self) -> bool {
        self.actuator.is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.actuator.set_enabled(enabled);
    }

    fn status(&self) -> Option<&'static str> {
        Some(self.actuator.status())
    }

    fn validate(&self, update: &ActuatorDto) -> Result<(), ValidationError> {
        self.actuator
            .validate_status(Self::KIND, update.status.as_deref())
    }

    fn apply_unchecked(&mut self, update: &ActuatorDto) {
        self.actuator
            .apply_unchecked(update.enabled, update.status.as_deref());
    }

    fn create_with_same_attributes(&self, label: Label) -> Self {
        Self {
            actuator: self.actuator.relabel(label),
        }
    }

    fn has_same_attributes(&self, other: &Self) -> bool {
        self.actuator.has_same_attributes(&other.actuator)
    }
}
