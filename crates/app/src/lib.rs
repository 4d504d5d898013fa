//! UGV console session
//!
//! Wires the motion controllers, the long-press detector, and the waypoint
//! stage into one interactive session over a `MapBackend`:
//! - `config`: serde-backed console configuration
//! - `session`: the `UgvConsole` lifecycle and command surface
//! - `store`: file-backed key-value persistence

pub mod config;
pub mod session;
pub mod store;

pub use config::*;
pub use session::*;
pub use store::*;
