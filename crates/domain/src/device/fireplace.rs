//! Fireplace — on fire or extinguished.

use crate::device::{Actuator, Appliance, DeviceKind};
use crate::dto::ActuatorDto;
use crate::error::ValidationError;
use crate::label::Label;
use crate::state_machine::{Transition, TransitionTable};

/// A fireplace that can be fired up and extinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fireplace {
    actuator: Actuator,
}

impl Fireplace {
    pub const ON_FIRE: &'static str = "on_fire";
    pub const EXTINGUISHED: &'static str = "extinguished";

    pub const FIRE_UP: &'static str = "fire_up";
    pub const EXTINGUISH: &'static str = "extinguish";

    #[must_use]
    pub fn new(label: Label) -> Self {
        Self {
            actuator: Actuator::new(label, &TABLE),
        }
    }

    pub fn fire_up(&mut self) {
        self.actuator.control_signal(Self::FIRE_UP);
    }

    pub fn extinguish(&mut self) {
        self.actuator.control_signal(Self::EXTINGUISH);
    }

    #[must_use]
    pub fn is_on_fire(&self) -> bool {
        self.actuator.status() == Self::ON_FIRE
    }
}

static TABLE: TransitionTable = TransitionTable::new(
    &[Fireplace::ON_FIRE, Fireplace::EXTINGUISHED],
    &[
        Transition::new(Fireplace::ON_FIRE, Fireplace::EXTINGUISH, Fireplace::EXTINGUISHED),
        Transition::new(Fireplace::EXTINGUISHED, Fireplace::FIRE_UP, Fireplace::ON_FIRE),
    ],
);

impl Appliance for Fireplace {
    type Update = ActuatorDto;

    const KIND: DeviceKind = DeviceKind::Fireplace;

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
