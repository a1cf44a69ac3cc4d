//! Settle transition interpolation
//!
//! The column core only stores a target offset and a duration; the rendering
//! host owns the actual animation. [`SettleTransition`] is the sampling
//! helper a host (or a test) uses to produce the interpolated offset between
//! a settle request and the transition-end signal.

use crate::easing::Easing;

/// One eased offset transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleTransition {
    /// Offset at the moment the settle was requested
    pub from: f32,
    /// Exact snap target (`-index * item_height`)
    pub to: f32,
    /// Requested duration in milliseconds; 0 applies instantly
    pub duration_ms: f32,
    pub easing: Easing,
}

impl SettleTransition {
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Interpolated offset at `elapsed_ms` since the transition started.
    ///
    /// Zero-duration transitions report the target immediately; elapsed time
    /// past the duration clamps to the target.
    pub fn value_at(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.to;
        }
        if elapsed_ms <= 0.0 {
            return self.from;
        }
        let progress = self.easing.apply(elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }

    /// Whether the transition has run its full duration
    pub fn is_finished(&self, elapsed_ms: f32) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}
