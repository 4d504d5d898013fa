//! Long-press detection
//!
//! State machine: `Idle -> Armed -> (fire | cancel) -> Idle`. A press-start
//! on the attached surface arms a deadline; releasing before the deadline
//! cancels silently, holding past it fires exactly once. The host pumps
//! `poll` with its clock instead of the detector owning a timer thread, so
//! arm/cancel/fire ordering is deterministic on the event loop.

use log::debug;
use nalgebra::Point2;

/// Hold duration that separates a long press from a tap.
pub const LONG_PRESS_MS: u64 = 1500;

/// Where on the surface a press landed.
///
/// Presses over interactive controls or explicitly marked ignore zones never
/// arm the detector; only the bare map surface does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRegion {
    /// The map surface itself.
    Surface,
    /// An interactive control (buttons, panels) layered over the surface.
    Control,
    /// A region explicitly opted out of long-press handling.
    Ignored,
}

/// A raw press-start observation from the host event source.
#[derive(Debug, Clone, Copy)]
pub struct PressEvent {
    /// Container-relative screen position of the press.
    pub screen: Point2<f64>,
    pub region: PressRegion,
    pub timestamp_ms: u64,
}

/// Detector state, exposed for assertions and host display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorState {
    #[default]
    Idle,
    Armed,
}

/// One live press gesture: where it started and when it will fire.
///
/// Held in a single `Option` so a second arm can only replace the first;
/// stacked deadlines are unrepresentable.
#[derive(Debug, Clone, Copy)]
struct PressSession {
    screen: Point2<f64>,
    deadline_ms: u64,
}

/// Long-press detector for one attached surface.
pub struct LongPressDetector {
    hold_ms: u64,
    session: Option<PressSession>,
    gate: Option<Box<dyn Fn() -> bool>>,
}

impl LongPressDetector {
    pub fn new() -> Self {
        Self::with_hold(LONG_PRESS_MS)
    }

    /// Create with a custom hold duration (tests shorten it).
    pub fn with_hold(hold_ms: u64) -> Self {
        LongPressDetector {
            hold_ms,
            session: None,
            gate: None,
        }
    }

    /// Attach to a surface with an external gating predicate. The predicate
    /// is consulted at every press-start; returning false keeps the detector
    /// idle for that press.
    pub fn attach(&mut self, gate: impl Fn() -> bool + 'static) {
        self.gate = Some(Box::new(gate));
    }

    /// Detach from the surface, dropping the gate and any live session.
    /// A second detach is a no-op.
    pub fn detach(&mut self) {
        self.gate = None;
        self.session = None;
    }

    pub fn is_attached(&self) -> bool {
        self.gate.is_some()
    }

    pub fn state(&self) -> DetectorState {
        if self.session.is_some() {
            DetectorState::Armed
        } else {
            DetectorState::Idle
        }
    }

    /// Feed a press-start. Arms a deadline unless the detector is detached,
    /// the gate declines, or the press landed outside the bare surface.
    /// A press-start while already armed replaces the previous session
    /// (last-armed-wins), never stacks a second deadline.
    pub fn press_start(&mut self, event: PressEvent) {
        let Some(gate) = &self.gate else { return };
        if !gate() || event.region != PressRegion::Surface {
            return;
        }

        // Overwriting the Option drops any earlier deadline before arming.
        self.session = Some(PressSession {
            screen: event.screen,
            deadline_ms: event.timestamp_ms + self.hold_ms,
        });
        debug!(
            "long-press armed at ({:.0}, {:.0})",
            event.screen.x, event.screen.y
        );
    }

    /// Feed a press-end (pointer-up / touch-end). Cancels any armed session;
    /// nothing fires for that press.
    pub fn press_end(&mut self) {
        if self.session.take().is_some() {
            debug!("long-press cancelled");
        }
    }

    /// Advance the detector clock. When an armed session's deadline has
    /// passed, consumes it and yields the press-start screen point exactly
    /// once.
    pub fn poll(&mut self, now_ms: u64) -> Option<Point2<f64>> {
        let session = self.session?;
        if now_ms < session.deadline_ms {
            return None;
        }
        self.session = None;
        debug!("long-press fired");
        Some(session.screen)
    }
}

impl Default for LongPressDetector {
    fn default() -> Self {
        LongPressDetector::new()
    }
}
