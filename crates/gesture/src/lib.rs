//! Pointer/touch gesture detection
//!
//! Currently a single primitive: long-press, disambiguated from a tap by a
//! hold deadline. The detector is timestamp-driven and map-agnostic so any
//! consumer can sit behind it.

pub mod long_press;

pub use long_press::*;
