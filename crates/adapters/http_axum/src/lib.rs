//! # vhome-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **versioned JSON API** of the house
//!   (`/api/{version}/house`, `/api/{version}/house/device/{kind}/{label}`, …)
//! - Reject unknown API versions and device kinds before touching the house
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `vhome-app` (for port traits and services) and `vhome-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod version;
