//! Column configuration errors
//!
//! Construction is the only fallible surface. Runtime inputs (indices,
//! offsets, timestamps) are always clamped, never rejected.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColumnError {
    #[error("item_height must be positive, got {0}")]
    InvalidItemHeight(f32),

    #[error("visible_item_count must be positive")]
    InvalidVisibleItemCount,

    #[error("options list is empty")]
    EmptyOptions,
}
