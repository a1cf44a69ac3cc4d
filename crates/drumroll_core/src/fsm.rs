//! State-transition trait for gesture state machines
//!
//! Widget interaction states are plain enums; implement [`StateTransitions`]
//! to map events to transitions with pattern matching. Guards that need
//! widget data live in the widget's own handlers, which are free to override
//! the returned state.
//!
//! ```rust
//! use drumroll_core::events::event_types::*;
//! use drumroll_core::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
//! enum Phase {
//!     #[default]
//!     Idle,
//!     Dragging,
//! }
//!
//! impl StateTransitions for Phase {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Phase::Idle, GESTURE_MOVE) => Some(Phase::Dragging),
//!             (Phase::Dragging, GESTURE_END) => Some(Phase::Idle),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let phase = Phase::Idle;
//! assert_eq!(phase.on_event(GESTURE_MOVE), Some(Phase::Dragging));
//! assert_eq!(phase.on_event(GESTURE_END), None);
//! ```

use crate::events::EventType;

/// Trait for state types that handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::fmt::Debug + Send + Sync + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}
