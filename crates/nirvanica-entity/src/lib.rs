//! # nirvanica-entity
//!
//! Domain entity models for the Nirvanica booking engine. Every struct in
//! this crate represents a persisted record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`;
//! persisted entities serialize with camelCase field names to match the
//! stored JSON document layout.

pub mod booking;
pub mod stats;
