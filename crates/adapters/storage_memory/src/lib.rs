//! # vhome-adapter-storage-memory
//!
//! In-memory house registry.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `vhome-app::ports::storage`
//! - Keep every device of the house in a label-keyed map behind a read/write lock
//! - Log every mutation of the house
//!
//! ## Dependency rule
//! Depends on `vhome-app` (for port traits) and `vhome-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod house;

pub use house::House;
