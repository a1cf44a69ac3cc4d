//! Momentum estimation
//!
//! At gesture release the column decides between an inertial settle and a
//! plain snap by looking at the final portion of the drag only: a reference
//! sample (offset, timestamp) that is refreshed whenever it grows older than
//! the release window. Momentum therefore reflects the velocity of the last
//! sub-window segment, not the average over the whole gesture.

/// Minimum elapsed time used for the speed division.
///
/// Time deltas are non-negative by construction; this floor keeps the
/// division finite if release lands on the same clock sample as the
/// reference.
const MIN_RELEASE_ELAPSED_MS: f64 = 1.0;

/// Tuning constants for release behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumConfig {
    /// Maximum age of the reference sample for momentum to apply, and the
    /// refresh interval for resampling during the drag (milliseconds)
    pub release_window_ms: f64,
    /// Minimum net movement since the reference sample for momentum (pixels)
    pub distance_threshold_px: f32,
    /// Fixed deceleration rate dividing release speed into a projection
    /// distance (pixels per millisecond squared)
    pub deceleration: f32,
    /// Duration of a momentum settle; one long eased curve covers all
    /// momentum magnitudes (milliseconds)
    pub momentum_duration_ms: f32,
    /// Duration of a plain snap-to-nearest settle (milliseconds)
    pub snap_duration_ms: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            release_window_ms: 300.0,    // momentum only for quick releases
            distance_threshold_px: 15.0, // ignore jitter-sized movement
            deceleration: 0.0015,
            momentum_duration_ms: 1500.0,
            snap_duration_ms: 200.0,
        }
    }
}

impl MomentumConfig {
    /// Whether a release with this recent movement qualifies for momentum
    pub fn qualifies(&self, distance: f32, elapsed_ms: f64) -> bool {
        elapsed_ms < self.release_window_ms && distance.abs() > self.distance_threshold_px
    }

    /// Project the offset an inertial continuation would reach.
    ///
    /// `offset + sign(distance) * (speed / deceleration)` with
    /// `speed = |distance| / elapsed`.
    pub fn project(&self, offset: f32, distance: f32, elapsed_ms: f64) -> f32 {
        let elapsed = elapsed_ms.max(MIN_RELEASE_ELAPSED_MS) as f32;
        let speed = distance.abs() / elapsed;
        offset + distance.signum() * (speed / self.deceleration)
    }
}

/// The reference sample momentum is measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSample {
    /// Offset at the time of the sample (pixels)
    pub offset: f32,
    /// Clock reading at the time of the sample (milliseconds)
    pub timestamp_ms: f64,
}

impl ReferenceSample {
    pub fn new(offset: f32, timestamp_ms: f64) -> Self {
        Self {
            offset,
            timestamp_ms,
        }
    }

    /// Whether this sample is older than the release window at `now_ms`
    pub fn is_stale(&self, now_ms: f64, config: &MomentumConfig) -> bool {
        now_ms - self.timestamp_ms > config.release_window_ms
    }
}
