use geocore::types::normalize_heading;

/// Degrees applied per discrete turn command. Fixed, not user-configurable.
pub const TURN_STEP_DEGREES: i32 = 3;

/// Owns the vehicle heading and applies bounded relative rotations.
///
/// The heading is whole degrees, clockwise, always in `[0, 360)`.
#[derive(Debug, Clone)]
pub struct HeadingController {
    heading: i32,
}

impl HeadingController {
    pub fn new(initial_degrees: i32) -> Self {
        HeadingController {
            heading: normalize_heading(initial_degrees),
        }
    }

    /// Apply a relative rotation and return the new heading.
    ///
    /// Normalized with a euclidean remainder so left turns through north
    /// (e.g. 0° - 3°) land at 357° rather than -3°.
    pub fn rotate(&mut self, delta_degrees: i32) -> i32 {
        self.heading = normalize_heading(self.heading + delta_degrees);
        self.heading
    }

    pub fn heading(&self) -> i32 {
        self.heading
    }
}

impl Default for HeadingController {
    fn default() -> Self {
        HeadingController::new(0)
    }
}
