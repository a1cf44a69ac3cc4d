//! Gesture event types
//!
//! Unified event identifiers and payloads for the drag lifecycle a picker
//! column consumes from its input and rendering collaborators.

/// Event type identifier
pub type EventType = u32;

/// Gesture lifecycle event types
pub mod event_types {
    use super::EventType;

    /// Pointer went down; a gesture may begin
    pub const GESTURE_START: EventType = 1;
    /// Pointer moved with an accumulated drag delta
    pub const GESTURE_MOVE: EventType = 2;
    /// Pointer released
    pub const GESTURE_END: EventType = 3;
    /// Gesture aborted by the host (treated identically to release)
    pub const GESTURE_CANCEL: EventType = 4;
    /// The rendering collaborator finished its eased transition
    pub const TRANSITION_END: EventType = 5;
    /// A specific row was activated directly (tap)
    pub const ITEM_TAP: EventType = 6;
}

/// A gesture event with associated data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer down; start-of-gesture bookkeeping
    Start,
    /// Accumulated drag vector since gesture start, from the touch tracker
    Move { delta_x: f32, delta_y: f32 },
    /// Pointer released
    End,
    /// Gesture aborted
    Cancel,
    /// Settle animation completed
    TransitionEnd,
    /// Direct activation of one row
    ItemTap { index: usize },
}

impl GestureEvent {
    /// The event type identifier for this event
    pub fn event_type(&self) -> EventType {
        match self {
            GestureEvent::Start => event_types::GESTURE_START,
            GestureEvent::Move { .. } => event_types::GESTURE_MOVE,
            GestureEvent::End => event_types::GESTURE_END,
            GestureEvent::Cancel => event_types::GESTURE_CANCEL,
            GestureEvent::TransitionEnd => event_types::TRANSITION_END,
            GestureEvent::ItemTap { .. } => event_types::ITEM_TAP,
        }
    }
}
