//! # vhome-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement:
//!   - `DeviceRepository` — the house registry, keyed by label
//! - Define the **driving port** as a use-case struct:
//!   - `HouseService` — get, create, upsert, delete and list devices
//! - Orchestrate domain objects without knowing *how* the house is stored
//!
//! ## Dependency rule
//! Depends on `vhome-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
