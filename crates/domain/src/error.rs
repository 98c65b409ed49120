//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HouseError`]
//! via `#[from]`.

use crate::device::DeviceKind;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum HouseError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("conflict: {0}")]
    Conflict(#[from] ConflictError),
}

/// A domain invariant was violated by the caller's input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("label must not be blank")]
    BlankLabel,

    #[error("label is required")]
    MissingLabel,

    #[error("label {body} in body does not match label {path} in path")]
    LabelMismatch { path: String, body: String },

    #[error("unknown status {status:?} for {kind}")]
    UnknownStatus { kind: DeviceKind, status: String },

    #[error("expected a {expected} but got a {actual}")]
    KindMismatch {
        expected: DeviceKind,
        actual: DeviceKind,
    },

    #[error("malformed device body: {0}")]
    MalformedBody(String),
}

/// The requested device does not exist in the house.
#[derive(Debug, thiserror::Error)]
#[error("{kind} with label {label} is not present in the house")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub label: String,
}

/// A device with the same label is already present in the house.
#[derive(Debug, thiserror::Error)]
#[error("device with label {label} already exists")]
pub struct ConflictError {
    pub label: String,
}
