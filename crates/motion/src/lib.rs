//! Vehicle motion control
//!
//! This crate provides:
//! - `HeadingController` for bounded discrete rotation
//! - `MotionController` for fixed-step advances and teleports
//! - Key command routing from raw key identifiers to controller calls

pub mod controller;
pub mod heading;
pub mod router;

pub use controller::*;
pub use heading::*;
pub use router::*;
