//! # nirvanica-store
//!
//! Key-value store implementations for the Nirvanica booking engine.
//! Supports two modes:
//!
//! - **memory**: in-process map, gone when the process exits (the
//!   browser-session analog)
//! - **local**: one file per key under a data directory (the durable
//!   browser-profile analog)
//!
//! The provider is selected at runtime based on configuration.

pub mod manager;
pub mod providers;

pub use manager::StoreManager;
