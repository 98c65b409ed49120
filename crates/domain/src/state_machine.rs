//! Transition tables and the per-device state machine.
//!
//! A [`TransitionTable`] maps `(state, signal)` to the next state. Tables are
//! `const`-constructed: an invalid table is rejected when the constant is
//! evaluated, so every [`StateMachine`] runs against a checked table.

/// One edge of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: &'static str,
    pub signal: &'static str,
    pub to: &'static str,
}

impl Transition {
    #[must_use]
    pub const fn new(from: &'static str, signal: &'static str, to: &'static str) -> Self {
        Self { from, signal, to }
    }
}

/// Reasons a transition table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateMachineError {
    #[error("a transition table needs at least one state")]
    NoStates,

    #[error("state {0:?} is declared twice")]
    DuplicateState(&'static str),

    #[error("transition {signal:?} starts from undeclared state {from:?}")]
    UnknownSource {
        from: &'static str,
        signal: &'static str,
    },

    #[error("transition {signal:?} leads to undeclared state {to:?}")]
    UnknownTarget {
        to: &'static str,
        signal: &'static str,
    },

    #[error("signal {signal:?} is declared twice from state {from:?}")]
    DuplicateSignal {
        from: &'static str,
        signal: &'static str,
    },
}

/// Checked set of states and transitions.
///
/// The first declared state is the initial state of every machine built on
/// the table.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionTable {
    states: &'static [&'static str],
    transitions: &'static [Transition],
}

impl TransitionTable {
    /// Build a table, panicking during constant evaluation if it is invalid.
    ///
    /// Intended for `static` tables; use [`TransitionTable::check`] to
    /// inspect the failure reason.
    ///
    /// # Panics
    ///
    /// Panics when [`TransitionTable::check`] rejects the table.
    #[must_use]
    pub const fn new(states: &'static [&'static str], transitions: &'static [Transition]) -> Self {
        match Self::check(states, transitions) {
            Ok(()) => Self {
                states,
                transitions,
            },
            Err(_) => panic!("invalid transition table"),
        }
    }

    /// Validate a table without building it.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateMachineError`] found: no states, a duplicate
    /// state, a transition touching an undeclared state, or a signal declared
    /// twice from the same state.
    pub const fn check(
        states: &'static [&'static str],
        transitions: &'static [Transition],
    ) -> Result<(), StateMachineError> {
        if states.is_empty() {
            return Err(StateMachineError::NoStates);
        }

        let mut i = 0;
        while i < states.len() {
            let mut j = i + 1;
            while j < states.len() {
                if str_eq(states[i], states[j]) {
                    return Err(StateMachineError::DuplicateState(states[i]));
                }
                j += 1;
            }
            i += 1;
        }

        let mut i = 0;
        while i < transitions.len() {
            let t = transitions[i];
            if !contains(states, t.from) {
                return Err(StateMachineError::UnknownSource {
                    from: t.from,
                    signal: t.signal,
                });
            }
            if !contains(states, t.to) {
                return Err(StateMachineError::UnknownTarget {
                    to: t.to,
                    signal: t.signal,
                });
            }
            let mut j = i + 1;
            while j < transitions.len() {
                let other = transitions[j];
                if str_eq(t.from, other.from) && str_eq(t.signal, other.signal) {
                    return Err(StateMachineError::DuplicateSignal {
                        from: t.from,
                        signal: t.signal,
                    });
                }
                j += 1;
            }
            i += 1;
        }

        Ok(())
    }

    /// The state every new machine starts in.
    #[must_use]
    pub const fn initial(&self) -> &'static str {
        self.states[0]
    }

    /// All declared states, initial state first.
    #[must_use]
    pub fn states(&self) -> &'static [&'static str] {
        self.states
    }

    /// Whether `state` is declared in this table.
    #[must_use]
    pub fn has_state(&self, state: &str) -> bool {
        self.resolve(state).is_some()
    }

    /// Next state for `signal` issued in `state`, if the table allows it.
    #[must_use]
    pub fn next(&self, state: &str, signal: &str) -> Option<&'static str> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.signal == signal)
            .map(|t| t.to)
    }

    /// Signal leading directly from `from` to `to`, if any.
    #[must_use]
    pub fn signal_between(&self, from: &str, to: &str) -> Option<&'static str> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.to == to)
            .map(|t| t.signal)
    }

    fn resolve(&self, state: &str) -> Option<&'static str> {
        self.states.iter().copied().find(|s| *s == state)
    }
}

/// Current state of one device, driven by named signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine {
    table: &'static TransitionTable,
    current: &'static str,
}

impl StateMachine {
    /// Start a machine in the table's initial state.
    #[must_use]
    pub const fn new(table: &'static TransitionTable) -> Self {
        Self {
            table,
            current: table.initial(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &'static str {
        self.current
    }

    #[must_use]
    pub fn table(&self) -> &'static TransitionTable {
        self.table
    }

    /// Issue `signal`. Returns the new state, or `None` when the signal is
    /// not accepted from the current state (the machine is left untouched).
    pub fn signal(&mut self, signal: &str) -> Option<&'static str> {
        let next = self.table.next(self.current, signal)?;
        self.current = next;
        Some(next)
    }

    /// Move to `target` through the signal connecting it to the current
    /// state. Returns `true` when a transition happened; staying in the
    /// current state or an unreachable target is a no-op.
    pub fn transition_to(&mut self, target: &str) -> bool {
        match self.table.signal_between(self.current, target) {
            Some(signal) => self.signal(signal).is_some(),
            None => false,
        }
    }
}

const fn contains(states: &[&str], needle: &str) -> bool {
    let mut i = 0;
    while i < states.len() {
        if str_eq(states[i], needle) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    static SWITCH: TransitionTable = TransitionTable::new(
        &["on", "off"],
        &[
            Transition::new("on", "turn_off", "off"),
            Transition::new("off", "turn_on", "on"),
        ],
    );

    #[test]
    fn should_start_in_first_declared_state() {
        let machine = StateMachine::new(&SWITCH);
        assert_eq!(machine.current(), "on");
    }

    #[test]
    fn should_follow_signal_from_declared_source() {
        let mut machine = StateMachine::new(&SWITCH);
        assert_eq!(machine.signal("turn_off"), Some("off"));
        assert_eq!(machine.current(), "off");
    }

    #[test]
    fn should_ignore_signal_from_wrong_source() {
        let mut machine = StateMachine::new(&SWITCH);
        assert_eq!(machine.signal("turn_on"), None);
        assert_eq!(machine.current(), "on");
    }

    #[test]
    fn should_ignore_unknown_signal() {
        let mut machine = StateMachine::new(&SWITCH);
        assert_eq!(machine.signal("explode"), None);
        assert_eq!(machine.current(), "on");
    }

    #[test]
    fn should_transition_to_target_when_it_differs() {
        let mut machine = StateMachine::new(&SWITCH);
        assert!(machine.transition_to("off"));
        assert_eq!(machine.current(), "off");
    }

    #[test]
    fn should_not_transition_when_already_in_target() {
        let mut machine = StateMachine::new(&SWITCH);
        assert!(!machine.transition_to("on"));
        assert_eq!(machine.current(), "on");
    }

    #[test]
    fn should_report_declared_states() {
        assert!(SWITCH.has_state("off"));
        assert!(!SWITCH.has_state("dimmed"));
        assert_eq!(SWITCH.states(), &["on", "off"]);
    }

    #[test]
    fn should_reject_empty_table() {
        assert_eq!(
            TransitionTable::check(&[], &[]),
            Err(StateMachineError::NoStates)
        );
    }

    #[test]
    fn should_reject_duplicate_state() {
        assert_eq!(
            TransitionTable::check(&["on", "on"], &[]),
            Err(StateMachineError::DuplicateState("on"))
        );
    }

    #[test]
    fn should_reject_transition_to_undeclared_state() {
        const DIM: &[Transition] = &[Transition::new("on", "dim", "dimmed")];
        assert_eq!(
            TransitionTable::check(&["on"], DIM),
            Err(StateMachineError::UnknownTarget {
                to: "dimmed",
                signal: "dim"
            })
        );
    }

    #[test]
    fn should_reject_transition_from_undeclared_state() {
        const WAKE: &[Transition] = &[Transition::new("off", "turn_on", "on")];
        assert_eq!(
            TransitionTable::check(&["on"], WAKE),
            Err(StateMachineError::UnknownSource {
                from: "off",
                signal: "turn_on"
            })
        );
    }

    #[test]
    fn should_reject_signal_declared_twice_from_same_state() {
        const FLIP: &[Transition] = &[
            Transition::new("on", "flip", "off"),
            Transition::new("on", "flip", "on"),
        ];
        assert_eq!(
            TransitionTable::check(&["on", "off"], FLIP),
            Err(StateMachineError::DuplicateSignal {
                from: "on",
                signal: "flip"
            })
        );
    }
}
