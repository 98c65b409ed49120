//! # vhome-domain
//!
//! Pure domain model for the vhome virtual smart home.
//!
//! ## Responsibilities
//! - Foundational types: validated labels, error conventions
//! - Define the per-device **state machines** (transition tables)
//! - Define **Devices** (light, RGB light, fireplace, door, thermometer)
//!   and their shared capability trait
//! - Define the wire **DTOs**, the DTO mapper and the device factory
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod label;
pub mod state_machine;

pub mod device;
pub mod dto;
pub mod factory;
pub mod mapper;
