//! Drumroll Column
//!
//! A vertically scrolling picker column: a finite list of options rendered as
//! a strip the user drags, which snaps to the nearest enabled row and
//! optionally keeps moving with simulated inertia after release.
//!
//! This crate owns the numeric and state contract only. Rendering is a
//! collaborator: it reads the column's `offset`/`duration`, drives its own
//! eased transition (see `drumroll_core::SettleTransition`), and reports back
//! through [`Column::transition_end`]. Touch tracking is likewise a
//! collaborator feeding accumulated drag deltas into the gesture handlers.
//!
//! # Example
//!
//! ```rust
//! use drumroll_column::{Column, ColumnConfig};
//! use drumroll_core::PickerOption;
//!
//! let mut column = Column::new(
//!     ColumnConfig::new(vec![
//!         PickerOption::text("Mon"),
//!         PickerOption::text("Tue"),
//!         PickerOption::text("Wed"),
//!     ])
//!     .item_height(40.0)
//!     .default_index(1),
//! )
//! .unwrap();
//!
//! assert_eq!(column.offset(), -40.0);
//!
//! // Drag up most of a row and release: the strip settles on row 2.
//! column.gesture_start();
//! column.gesture_move(-35.0);
//! column.gesture_end();
//! assert_eq!(column.offset(), -80.0);
//! ```

pub mod column;
pub mod container;
pub mod error;
pub mod host;
pub mod momentum;

pub use column::{Column, ColumnConfig, ColumnPhase};
pub use container::{ColumnId, PickerContainer};
pub use error::ColumnError;
pub use host::{DragTracker, PointerTracker, RenderProbe};
pub use momentum::MomentumConfig;
