//! Host capabilities
//!
//! The column depends on two collaborator interfaces instead of concrete
//! input or rendering machinery:
//!
//! - [`DragTracker`] turns raw pointer positions into one accumulated drag
//!   vector per gesture (direction detection and axis locking stay with the
//!   host's input layer).
//! - [`RenderProbe`] reports the currently rendered, interpolated offset so a
//!   new gesture can resume from a still-animating strip without a jump.

/// Reports the offset the rendering collaborator is currently showing.
///
/// While a settle transition is in flight the rendered offset differs from
/// the column's stored target; grabbing the strip mid-animation resumes from
/// the rendered value.
pub trait RenderProbe: Send + Sync {
    /// Current interpolated offset of the visual element, in pixels
    fn rendered_offset(&self) -> f32;
}

/// Accumulates raw pointer positions into a per-gesture drag vector
pub trait DragTracker {
    /// Begin a gesture at the given pointer position
    fn begin(&mut self, x: f32, y: f32);

    /// Record a new pointer position within the active gesture
    fn update(&mut self, x: f32, y: f32);

    /// Accumulated (delta_x, delta_y) since the gesture began
    fn delta(&self) -> (f32, f32);
}

/// Default drag tracker: delta is simply current position minus start
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    start: Option<(f32, f32)>,
    current: (f32, f32),
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently being tracked
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// End the gesture and clear tracking state
    pub fn finish(&mut self) {
        self.start = None;
    }
}

impl DragTracker for PointerTracker {
    fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
        self.current = (x, y);
    }

    fn update(&mut self, x: f32, y: f32) {
        if self.start.is_some() {
            self.current = (x, y);
        }
    }

    fn delta(&self) -> (f32, f32) {
        match self.start {
            Some((x0, y0)) => (self.current.0 - x0, self.current.1 - y0),
            None => (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_from_gesture_start() {
        let mut tracker = PointerTracker::new();
        tracker.begin(10.0, 100.0);
        tracker.update(12.0, 60.0);
        tracker.update(8.0, 30.0);
        assert_eq!(tracker.delta(), (-2.0, -70.0));
    }

    #[test]
    fn idle_tracker_reports_zero_delta() {
        let mut tracker = PointerTracker::new();
        tracker.update(50.0, 50.0);
        assert_eq!(tracker.delta(), (0.0, 0.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn finish_clears_tracking() {
        let mut tracker = PointerTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.update(0.0, -40.0);
        tracker.finish();
        assert!(!tracker.is_active());
        assert_eq!(tracker.delta(), (0.0, 0.0));
    }
}
