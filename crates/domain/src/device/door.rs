//! Door — opened or closed.

use crate::device::{Actuator, Appliance, DeviceKind};
use crate::dto::ActuatorDto;
use crate::error::ValidationError;
use crate::label::Label;
use crate::state_machine::{Transition, TransitionTable};

/// A door that can be opened and closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    actuator: Actuator,
}

impl Door {
    pub const OPENED: &'static str = "Opened";
    pub const CLOSED: &'static str = "Closed";

    pub const OPEN: &'static str = "Open";
    pub const CLOSE: &'static str = "Close";

    #[must_use]
    pub fn new(label: Label) -> Self {
        Self {
            actuator: Actuator::new(label, &TABLE),
        }
    }

    /// Open the door; no-op when already opened.
    pub fn open(&mut self) {
        if self.actuator.status() == Self::CLOSED {
            self.actuator.control_signal(Self::OPEN);
        }
    }

    /// Close the door; no-op when already closed.
    pub fn close(&mut self) {
        if self.actuator.status() == Self::OPENED {
            self.actuator.control_signal(Self::CLOSE);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.actuator.status() == Self::OPENED
    }
}

static TABLE: TransitionTable = TransitionTable::new(
    &[Door::OPENED, Door::CLOSED],
    &[
        Transition::new(Door::OPENED, Door::CLOSE, Door::CLOSED),
        Transition::new(Door::CLOSED, Door::OPEN, Door::OPENED),
    ],
);

impl Appliance for Door {
    type Update = ActuatorDto;

    const KIND: DeviceKind = DeviceKind::Door;

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
        match update.status.as_deref() {
            Some(Self::OPENED) => self.open(),
            Some(Self::CLOSED) => self.close(),
            _ => {}
        }
        if let Some(enabled) = update.enabled {
            self.actuator.set_enabled(enabled);
        }
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
