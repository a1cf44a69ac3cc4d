//! Drumroll Core
//!
//! Foundational primitives for the drumroll wheel-picker:
//!
//! - **Option Model**: selectable entries as opaque values with a disabled flag
//! - **Index Resolution**: pure offset-to-index snapping over a partially
//!   disabled domain
//! - **Gesture Events**: unified event types for the drag lifecycle
//! - **Settle Interpolation**: eased transitions a rendering host samples to
//!   drive the visual transform
//!
//! # Example
//!
//! ```rust
//! use drumroll_core::{resolver, PickerOption};
//!
//! let options = vec![
//!     PickerOption::text("A"),
//!     PickerOption::text("B").disable(),
//!     PickerOption::text("C"),
//! ];
//!
//! // Snap an offset to the nearest row, then skip disabled entries.
//! let index = resolver::offset_to_index(-38.0, 40.0, options.len());
//! assert_eq!(resolver::nearest_enabled_index(&options, index), 2);
//! ```

pub mod clock;
pub mod easing;
pub mod events;
pub mod fsm;
pub mod option;
pub mod resolver;
pub mod transition;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use events::{EventType, GestureEvent};
pub use fsm::StateTransitions;
pub use option::PickerOption;
pub use transition::SettleTransition;
