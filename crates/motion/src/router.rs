//! Key command routing
//!
//! Raw key identifiers are narrowed into a closed command enum before they
//! touch a controller, so dispatch is an exhaustive match and everything
//! unrecognized is dropped in one place.

use geocore::traits::MapBackend;

use crate::controller::MotionController;
use crate::heading::TURN_STEP_DEGREES;

/// The four recognized discrete drive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl KeyCommand {
    /// Map a key identifier to a command. Anything but the four arrow keys
    /// is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyCommand::Forward),
            "ArrowDown" => Some(KeyCommand::Backward),
            "ArrowLeft" => Some(KeyCommand::TurnLeft),
            "ArrowRight" => Some(KeyCommand::TurnRight),
            _ => None,
        }
    }

    /// Dispatch this command to the motion controller.
    pub fn apply(self, motion: &mut MotionController, map: &mut dyn MapBackend) {
        match self {
            KeyCommand::Forward => motion.advance(true, map),
            KeyCommand::Backward => motion.advance(false, map),
            KeyCommand::TurnLeft => motion.turn(-TURN_STEP_DEGREES, map),
            KeyCommand::TurnRight => motion.turn(TURN_STEP_DEGREES, map),
        }
    }
}
