//! ENTSO-E Case Repository Library
//!
//! A Rust library for resolving and loading ENTSO-E network case files from the
//! common exchange directory layout. Given an instant in time, a case type and an
//! optional country, it locates the snapshot or forecast files that describe the
//! network state at that instant and hands them to a format-specific importer.

pub mod app;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{Error, Result};
