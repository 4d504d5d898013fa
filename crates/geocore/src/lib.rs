//! Core types and collaborator interfaces for the UGV console
//!
//! This crate provides:
//! - Geographic primitives (`LatLng`, `Pose`) and the geodesic step offset
//! - The `MapBackend` and `KeyValueStore` collaborator traits
//! - Mock collaborators for tests and headless runs
//! - The shared `ConsoleError` type

pub mod error;
pub mod geo;
pub mod mock;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
