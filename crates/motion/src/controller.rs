//! Motion controller
//!
//! Advances the vehicle by a fixed metric step along its heading, issuing
//! render commands to the map backend for every committed move. Marker and
//! viewport updates are fire-and-forget; the backend cannot fail a move.

use log::debug;

use geocore::geo;
use geocore::traits::{MapBackend, MarkerId};
use geocore::types::{LatLng, Pose};

use crate::heading::HeadingController;

/// Meters covered by one forward or backward step.
pub const STEP_METERS: f64 = 5.0;

/// Owns the vehicle position, delegates heading to `HeadingController`.
///
/// Motion and marker operations are silent no-ops until a vehicle marker is
/// bound, tolerating out-of-order lifecycle calls (key events arriving
/// before the map is up, or after teardown).
#[derive(Debug)]
pub struct MotionController {
    position: LatLng,
    heading: HeadingController,
    marker: Option<MarkerId>,
}

impl MotionController {
    pub fn new(start: LatLng, initial_heading: i32) -> Self {
        MotionController {
            position: start,
            heading: HeadingController::new(initial_heading),
            marker: None,
        }
    }

    /// Bind the vehicle marker placed by the session. Motion commands are
    /// inert until this is called.
    pub fn bind_marker(&mut self, marker: MarkerId) {
        self.marker = Some(marker);
    }

    /// Detach from the marker on session teardown.
    pub fn unbind(&mut self) {
        self.marker = None;
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn heading(&self) -> i32 {
        self.heading.heading()
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.heading.heading())
    }

    /// Step the vehicle 5 m along (or against) its heading and re-center the
    /// viewport on the new position, animated, at the current zoom.
    pub fn advance(&mut self, forward: bool, map: &mut dyn MapBackend) {
        let Some(marker) = self.marker else { return };

        let meters = if forward { STEP_METERS } else { -STEP_METERS };
        let angle_rad = f64::from(self.heading.heading()).to_radians();
        let (d_lat, d_lng) = geo::offset(self.position.lat, meters, angle_rad);
        self.position = LatLng::new(self.position.lat + d_lat, self.position.lng + d_lng);

        debug!(
            "advance {} -> ({:.6}, {:.6}) heading {}",
            if forward { "forward" } else { "backward" },
            self.position.lat,
            self.position.lng,
            self.heading.heading()
        );

        map.set_marker_position(marker, self.position);
        map.recenter(self.position, map.zoom(), true);
    }

    /// Rotate the heading by `delta_degrees` and push the new angle to the
    /// marker icon.
    pub fn turn(&mut self, delta_degrees: i32, map: &mut dyn MapBackend) {
        let Some(marker) = self.marker else { return };

        let heading = self.heading.rotate(delta_degrees);
        map.set_marker_rotation(marker, heading);
    }

    /// Teleport to an arbitrary coordinate: marker and viewport jump, no
    /// heading or offset math is involved.
    pub fn drive_to(&mut self, destination: LatLng, map: &mut dyn MapBackend) {
        let Some(marker) = self.marker else { return };

        debug!("drive_to ({:.6}, {:.6})", destination.lat, destination.lng);
        self.position = destination;
        map.set_marker_position(marker, destination);
        map.recenter(destination, map.zoom(), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geocore::mock::{MockMap, RenderCommand};
    use geocore::traits::MarkerKind;

    const START: LatLng = LatLng { lat: 50.0755, lng: 14.4378 };
    const TURN_STEP: i32 = 37;

    fn bound_controller(map: &mut MockMap) -> (MotionController, MarkerId) {
        let marker = map.place_marker(START, MarkerKind::Vehicle, true);
        let mut ctrl = MotionController::new(START, 0);
        ctrl.bind_marker(marker);
        (ctrl, marker)
    }

    #[test]
    fn test_advance_before_bind_is_noop() {
        let mut map = MockMap::new(START, 15);
        let mut ctrl = MotionController::new(START, 0);

        ctrl.advance(true, &mut map);

        assert_eq!(ctrl.position(), START);
        assert!(map.commands().is_empty());
    }

    #[test]
    fn test_forward_then_backward_returns_to_start() {
        let mut map = MockMap::new(START, 15);
        let (mut ctrl, _) = bound_controller(&mut map);
        ctrl.turn(TURN_STEP, &mut map); // arbitrary non-axis heading

        ctrl.advance(true, &mut map);
        ctrl.advance(false, &mut map);

        assert_relative_eq!(ctrl.position().lat, START.lat, epsilon = 1e-9);
        assert_relative_eq!(ctrl.position().lng, START.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_step_moves_north_at_zero_heading() {
        let mut map = MockMap::new(START, 15);
        let (mut ctrl, marker) = bound_controller(&mut map);

        ctrl.advance(true, &mut map);

        assert!(ctrl.position().lat > START.lat);
        assert_relative_eq!(ctrl.position().lng, START.lng, epsilon = 1e-12);
        assert_eq!(map.marker_position(marker), Some(ctrl.position()));
    }

    #[test]
    fn test_advance_recenters_animated_at_current_zoom() {
        let mut map = MockMap::new(START, 13);
        let (mut ctrl, _) = bound_controller(&mut map);

        ctrl.advance(true, &mut map);

        let recenter = map
            .commands()
            .iter()
            .rev()
            .find(|c| matches!(c, RenderCommand::Recenter { .. }))
            .expect("advance must recenter");
        assert_eq!(
            *recenter,
            RenderCommand::Recenter {
                at: ctrl.position(),
                zoom: 13,
                animate: true,
            }
        );
    }

    #[test]
    fn test_turn_rotates_marker() {
        let mut map = MockMap::new(START, 15);
        let (mut ctrl, marker) = bound_controller(&mut map);

        ctrl.turn(-3, &mut map);

        assert_eq!(ctrl.heading(), 357);
        assert_eq!(map.marker_rotation(marker), Some(357));
    }

    #[test]
    fn test_drive_to_teleports_without_heading_change() {
        let mut map = MockMap::new(START, 15);
        let (mut ctrl, marker) = bound_controller(&mut map);
        ctrl.turn(90, &mut map);

        let dest = LatLng::new(51.5, -0.12);
        ctrl.drive_to(dest, &mut map);

        assert_eq!(ctrl.position(), dest);
        assert_eq!(ctrl.heading(), 90);
        assert_eq!(map.marker_position(marker), Some(dest));
    }

    #[test]
    fn test_unbind_disables_motion() {
        let mut map = MockMap::new(START, 15);
        let (mut ctrl, _) = bound_controller(&mut map);
        ctrl.unbind();

        let before = map.commands().len();
        ctrl.advance(true, &mut map);
        ctrl.turn(3, &mut map);
        ctrl.drive_to(LatLng::new(0.0, 0.0), &mut map);

        assert_eq!(ctrl.position(), START);
        assert_eq!(map.commands().len(), before);
    }
}
