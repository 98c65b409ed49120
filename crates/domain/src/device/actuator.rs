//! Actuator — the label, enabled flag and state machine shared by every
//! device driven through control signals.

use crate::device::DeviceKind;
use crate::error::ValidationError;
use crate::label::Label;
use crate::state_machine::{StateMachine, TransitionTable};

/// Common core of the signal-driven devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actuator {
    label: Label,
    enabled: bool,
    machine: StateMachine,
}

impl Actuator {
    /// Disabled actuator in the table's initial state.
    #[must_use]
    pub fn new(label: Label, table: &'static TransitionTable) -> Self {
        Self {
            label,
            enabled: false,
            machine: StateMachine::new(table),
        }
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        self.machine.current()
    }

    /// Issue a control signal; returns `true` when the state changed.
    pub fn control_signal(&mut self, signal: &str) -> bool {
        self.machine.signal(signal).is_some()
    }

    /// Reject a requested status the table does not declare.
    pub(crate) fn validate_status(
        &self,
        kind: DeviceKind,
        status: Option<&str>,
    ) -> Result<(), ValidationError> {
        match status {
            Some(status) if !self.machine.table().has_state(status) => {
                Err(ValidationError::UnknownStatus {
                    kind,
                    status: status.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Apply the present fields; the status only transitions when it differs
    /// from the current one.
    pub(crate) fn apply_unchecked(&mut self, enabled: Option<bool>, status: Option<&str>) {
        if let Some(status) = status {
            self.machine.transition_to(status);
        }
        if let Some(enabled) = enabled {
            self.enabled = enabled;
        }
    }

    pub(crate) fn relabel(&self, label: Label) -> Self {
        Self {
            label,
            ..self.clone()
        }
    }

    pub(crate) fn has_same_attributes(&self, other: &Self) -> bool {
        self.enabled == other.enabled && self.status() == other.status()
    }
}
