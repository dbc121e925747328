//! # nirvanica-core
//!
//! Core crate for the Nirvanica booking engine. Contains traits,
//! configuration schemas, the booking reference type, domain events,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Nirvanica crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
