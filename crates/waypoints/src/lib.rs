//! Waypoint staging and persistence
//!
//! Two-phase lifecycle: a single pending candidate is proposed (by a
//! long-press or equivalent), then either promoted into the persisted saved
//! sequence or discarded. The saved sequence is rewritten to storage as one
//! JSON blob on every mutation.

pub mod stage;

pub use stage::*;
