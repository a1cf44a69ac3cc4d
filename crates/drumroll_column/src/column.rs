//! Picker column widget core
//!
//! Owns the gesture-driven offset state machine: raw drag deltas become a
//! scroll offset, release decides between an inertial settle and a plain
//! snap, the target resolves to the nearest enabled row, and a single
//! debounced change notification fires once the settle animation completes.
//!
//! # Features
//!
//! - **FSM-based state**: clear state machine for Idle, Dragging, Settling
//! - **Momentum**: recency-biased velocity estimation at release
//! - **Disabled rows**: targets resolve to the nearest enabled index
//! - **Deferred change**: one pending notification slot, emitted on
//!   transition end, never queued
//! - **Reentrant gestures**: grabbing a still-animating strip resumes from
//!   the rendered offset via [`RenderProbe`]
//!
//! All mutation happens inside one event handler at a time; the column is
//! single-threaded and owned exclusively by its widget instance.

use std::sync::Arc;

use drumroll_core::clock::{Clock, SystemClock};
use drumroll_core::events::{event_types, GestureEvent};
use drumroll_core::option::PickerOption;
use drumroll_core::resolver::{nearest_enabled_index, offset_to_index};
use drumroll_core::StateTransitions;

use crate::error::ColumnError;
use crate::host::RenderProbe;
use crate::momentum::{MomentumConfig, ReferenceSample};

// ============================================================================
// Gesture Phase
// ============================================================================

/// Gesture lifecycle phase for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPhase {
    /// No gesture and no animation in flight
    #[default]
    Idle,
    /// Pointer is down and has moved; offset follows the drag
    Dragging,
    /// An eased settle transition is in flight
    Settling,
}

impl StateTransitions for ColumnPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            // Grabbing a still-animating strip freezes it at the rendered
            // offset; the gesture handler reads the probe before this fires.
            (ColumnPhase::Settling, GESTURE_START) => Some(ColumnPhase::Idle),
            (ColumnPhase::Idle, GESTURE_MOVE) => Some(ColumnPhase::Dragging),
            (ColumnPhase::Settling, GESTURE_MOVE) => Some(ColumnPhase::Dragging),
            (ColumnPhase::Dragging, GESTURE_END) => Some(ColumnPhase::Settling),
            (ColumnPhase::Dragging, GESTURE_CANCEL) => Some(ColumnPhase::Settling),
            (ColumnPhase::Settling, TRANSITION_END) => Some(ColumnPhase::Idle),
            (ColumnPhase::Idle, ITEM_TAP) => Some(ColumnPhase::Settling),
            (ColumnPhase::Settling, ITEM_TAP) => Some(ColumnPhase::Settling),
            _ => None,
        }
    }
}

// ============================================================================
// Column Configuration
// ============================================================================

/// Change callback type; receives the newly committed index
pub type ChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for a picker column
#[derive(Clone)]
pub struct ColumnConfig {
    /// Ordered option list, fixed for the lifetime of the column
    pub options: Vec<PickerOption>,
    /// Key used to extract display text from record options
    pub value_key: String,
    /// Pixels per row (> 0)
    pub item_height: f32,
    /// Visible row count (> 0); layout-only, no core-logic impact
    pub visible_item_count: usize,
    /// Initial selection, resolved through the nearest enabled index
    pub default_index: usize,
    /// Pass-through styling hook, no logic impact
    pub class_name: Option<String>,
    /// Release and settle tuning
    pub momentum: MomentumConfig,
    /// Selection-change callback, fired for user-driven transitions only
    pub on_change: Option<ChangeCallback>,
    /// Rendering collaborator reporting the live interpolated offset
    pub render_probe: Option<Arc<dyn RenderProbe>>,
    /// Injected clock; defaults to a monotonic system clock
    pub clock: Option<Arc<dyn Clock>>,
}

impl ColumnConfig {
    pub fn new(options: Vec<PickerOption>) -> Self {
        Self {
            options,
            value_key: "value".to_string(),
            item_height: 34.0,
            visible_item_count: 5,
            default_index: 0,
            class_name: None,
            momentum: MomentumConfig::default(),
            on_change: None,
            render_probe: None,
            clock: None,
        }
    }

    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height;
        self
    }

    pub fn visible_item_count(mut self, count: usize) -> Self {
        self.visible_item_count = count;
        self
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn momentum(mut self, momentum: MomentumConfig) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn render_probe(mut self, probe: Arc<dyn RenderProbe>) -> Self {
        self.render_probe = Some(probe);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }
}

// ============================================================================
// Column
// ============================================================================

/// A deferred selection change: commit `index`, and emit only if user-driven
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingChange {
    index: usize,
    user_action: bool,
}

/// One vertically scrolling picker column
pub struct Column {
    options: Vec<PickerOption>,
    value_key: String,
    item_height: f32,
    visible_item_count: usize,
    class_name: Option<String>,
    momentum: MomentumConfig,

    /// Committed selection, in `[0, options.len())`
    current_index: usize,
    /// Vertical translation in pixels; settled values are exact row offsets
    offset: f32,
    /// Duration for the next offset transition in milliseconds; 0 = instant
    duration: f32,
    /// True from the first drag movement until the settle animation completes
    moving: bool,
    phase: ColumnPhase,

    // Per-gesture bookkeeping, reset at each gesture start
    drag_start_offset: f32,
    reference: ReferenceSample,

    /// At most one deferred notification; overwritten, never queued
    pending_change: Option<PendingChange>,

    on_change: Option<ChangeCallback>,
    render_probe: Option<Arc<dyn RenderProbe>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("options", &self.options)
            .field("value_key", &self.value_key)
            .field("item_height", &self.item_height)
            .field("visible_item_count", &self.visible_item_count)
            .field("class_name", &self.class_name)
            .field("momentum", &self.momentum)
            .field("current_index", &self.current_index)
            .field("offset", &self.offset)
            .field("duration", &self.duration)
            .field("moving", &self.moving)
            .field("phase", &self.phase)
            .field("drag_start_offset", &self.drag_start_offset)
            .field("reference", &self.reference)
            .field("pending_change", &self.pending_change)
            .finish_non_exhaustive()
    }
}

impl Column {
    /// Create a column, resolving the default index to the nearest enabled
    /// row and applying its offset instantly.
    pub fn new(config: ColumnConfig) -> Result<Self, ColumnError> {
        if config.options.is_empty() {
            return Err(ColumnError::EmptyOptions);
        }
        if !(config.item_height > 0.0) || !config.item_height.is_finite() {
            return Err(ColumnError::InvalidItemHeight(config.item_height));
        }
        if config.visible_item_count == 0 {
            return Err(ColumnError::InvalidVisibleItemCount);
        }

        let clock = config
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()) as Arc<dyn Clock>);

        let current_index = nearest_enabled_index(&config.options, config.default_index);
        let offset = -(current_index as f32) * config.item_height;
        let now = clock.now_ms();

        Ok(Self {
            options: config.options,
            value_key: config.value_key,
            item_height: config.item_height,
            visible_item_count: config.visible_item_count,
            class_name: config.class_name,
            momentum: config.momentum,
            current_index,
            offset,
            duration: 0.0,
            moving: false,
            phase: ColumnPhase::Idle,
            drag_start_offset: offset,
            reference: ReferenceSample::new(offset, now),
            pending_change: None,
            on_change: config.on_change,
            render_probe: config.render_probe,
            clock,
        })
    }

    // =========================================================================
    // Offset State
    // =========================================================================

    /// Current vertical translation in pixels (negative scrolls content up)
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Write the offset directly, clamped to the drag bounds.
    ///
    /// Hosts routing auxiliary input (e.g. wheel events) through the column
    /// use this; gesture and settle writes happen through the handlers.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = self.clamp_drag(offset);
    }

    /// Duration requested for the next offset transition, in milliseconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration_ms: f32) {
        self.duration = duration_ms.max(0.0);
    }

    /// Drag bound: one item of slack past either end acts as rubber-band
    /// room, so the clamp range is looser than the settled-offset range.
    fn clamp_drag(&self, offset: f32) -> f32 {
        let lower = -(self.options.len() as f32) * self.item_height;
        offset.clamp(lower, self.item_height)
    }

    fn snap_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.item_height
    }

    // =========================================================================
    // Gesture Handlers
    // =========================================================================

    /// Dispatch one gesture event to the matching handler
    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Start => self.gesture_start(),
            GestureEvent::Move { delta_y, .. } => self.gesture_move(delta_y),
            GestureEvent::End => self.gesture_end(),
            GestureEvent::Cancel => self.gesture_cancel(),
            GestureEvent::TransitionEnd => self.transition_end(),
            GestureEvent::ItemTap { index } => self.item_tap(index),
        }
    }

    /// Pointer down: capture the gesture start state.
    ///
    /// If a settle is still animating, the drag resumes from the rendered
    /// offset reported by the probe rather than the committed target, so the
    /// strip does not jump under the pointer.
    pub fn gesture_start(&mut self) {
        if self.phase == ColumnPhase::Settling {
            if let Some(probe) = &self.render_probe {
                self.offset = self.clamp_drag(probe.rendered_offset());
            }
        }
        self.duration = 0.0;
        self.moving = false;
        self.pending_change = None;
        self.drag_start_offset = self.offset;
        self.reference = ReferenceSample::new(self.offset, self.clock.now_ms());
        if let Some(next) = self.phase.on_event(event_types::GESTURE_START) {
            self.phase = next;
        }
    }

    /// Pointer moved: apply the accumulated drag delta from the touch
    /// tracker. Called at input-sampling frequency; hosts must also suppress
    /// the surface's default scroll behavior for the gesture.
    pub fn gesture_move(&mut self, delta_y: f32) {
        self.moving = true;
        if let Some(next) = self.phase.on_event(event_types::GESTURE_MOVE) {
            self.phase = next;
        }
        self.offset = self.clamp_drag(self.drag_start_offset + delta_y);

        // Refresh the momentum reference once it ages out of the release
        // window; momentum then reflects only the final segment of the drag.
        let now = self.clock.now_ms();
        if self.reference.is_stale(now, &self.momentum) {
            self.reference = ReferenceSample::new(self.offset, now);
        }

        tracing::trace!(
            delta_y,
            offset = self.offset,
            reference = self.reference.offset,
            "gesture move"
        );
    }

    /// Pointer released: settle with momentum, snap to the nearest row, or
    /// do nothing if the drag never moved the strip.
    pub fn gesture_end(&mut self) {
        if let Some(next) = self.phase.on_event(event_types::GESTURE_END) {
            self.phase = next;
        }
        self.finish_release();
    }

    /// Gesture aborted by the host; handled identically to a release
    pub fn gesture_cancel(&mut self) {
        if let Some(next) = self.phase.on_event(event_types::GESTURE_CANCEL) {
            self.phase = next;
        }
        self.finish_release();
    }

    /// Shared release path for end and cancel
    fn finish_release(&mut self) {
        let elapsed = self.clock.now_ms() - self.reference.timestamp_ms;
        let distance = self.offset - self.reference.offset;

        if self.momentum.qualifies(distance, elapsed) {
            let projected = self.momentum.project(self.offset, distance, elapsed);
            let target = offset_to_index(projected, self.item_height, self.options.len());
            tracing::debug!(distance, elapsed, projected, target, "momentum settle");
            self.settle_to(target, self.momentum.momentum_duration_ms, true);
        } else if self.offset != self.drag_start_offset {
            let target = offset_to_index(self.offset, self.item_height, self.options.len());
            tracing::debug!(target, "snap settle");
            self.settle_to(target, self.momentum.snap_duration_ms, true);
        } else {
            // Pointer went down and up without moving the strip: no settle,
            // no event.
            self.moving = false;
            self.phase = ColumnPhase::Idle;
        }
    }

    /// Rendering collaborator finished its transition: clear `moving` and
    /// fire a pending notification exactly once.
    pub fn transition_end(&mut self) {
        if let Some(next) = self.phase.on_event(event_types::TRANSITION_END) {
            self.phase = next;
        }
        self.moving = false;
        if let Some(change) = self.pending_change.take() {
            self.commit(change);
        }
    }

    /// Direct activation of one row (tap): a user-driven settle at that row
    pub fn item_tap(&mut self, index: usize) {
        if let Some(next) = self.phase.on_event(event_types::ITEM_TAP) {
            self.phase = next;
        }
        self.settle_to(index, self.momentum.snap_duration_ms, true);
    }

    // =========================================================================
    // Settling & Change Notification
    // =========================================================================

    /// Settle at `index` (resolved to the nearest enabled row) over
    /// `duration_ms`. The change notification defers until transition end
    /// while an animation is in flight, else fires synchronously.
    fn settle_to(&mut self, index: usize, duration_ms: f32, user_action: bool) {
        let resolved = nearest_enabled_index(&self.options, index);
        self.offset = self.snap_offset(resolved);
        self.duration = duration_ms;

        if resolved == self.current_index {
            // Settling back onto the committed row announces nothing; a new
            // settle also overwrites any previously pending slot.
            self.pending_change = None;
            return;
        }

        let change = PendingChange {
            index: resolved,
            user_action,
        };
        if self.moving {
            self.pending_change = Some(change);
        } else {
            self.pending_change = None;
            self.commit(change);
        }
    }

    fn commit(&mut self, change: PendingChange) {
        self.current_index = change.index;
        if change.user_action {
            if let Some(handler) = &self.on_change {
                handler(change.index);
            }
        }
    }

    // =========================================================================
    // Public Operations
    // =========================================================================

    /// Move the selection to `index`, resolved to the nearest enabled row.
    ///
    /// Emits the change signal only when `user_action` is true and the
    /// resolved index differs from the committed one; programmatic changes
    /// stay silent even when the index moves.
    pub fn set_index(&mut self, index: usize, user_action: bool) {
        self.settle_to(index, self.momentum.snap_duration_ms, user_action);
    }

    /// Select the first option whose display text equals `value`.
    ///
    /// Programmatic: never emits. No match is a silent no-op.
    pub fn set_value(&mut self, value: &str) {
        let found = self
            .options
            .iter()
            .position(|option| option.display_text(&self.value_key) == value);
        if let Some(index) = found {
            self.set_index(index, false);
        }
    }

    /// The currently committed option
    pub fn value(&self) -> Option<&PickerOption> {
        self.options.get(self.current_index)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Visible row count; layout-only
    pub fn visible_item_count(&self) -> usize {
        self.visible_item_count
    }

    /// Styling pass-through for the rendering layer
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn momentum_config(&self) -> &MomentumConfig {
        &self.momentum
    }

    /// True between the first drag movement and settle-animation completion
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn phase(&self) -> ColumnPhase {
        self.phase
    }

    /// Attach or replace the rendering collaborator probe
    pub fn set_render_probe(&mut self, probe: Arc<dyn RenderProbe>) {
        self.render_probe = Some(probe);
    }
}
