//! Pure index resolution
//!
//! Maps a scroll offset to a candidate row index and a candidate index to the
//! nearest non-disabled index. These are free functions over the option slice
//! so they stay trivially testable.

use crate::option::PickerOption;

/// Snap an offset to the nearest row index.
///
/// `clamp(round(-offset / item_height), 0, count - 1)`. Rounding ties go half
/// away from zero (`f32::round`), which is deterministic across platforms.
/// Returns 0 for an empty option list.
pub fn offset_to_index(offset: f32, item_height: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let candidate = (-offset / item_height).round().max(0.0) as usize;
    candidate.min(count - 1)
}

/// Resolve a candidate index to the nearest enabled one.
///
/// The candidate is clamped into range first. The scan runs forward from the
/// candidate to the end, then backward from `candidate - 1` to 0; the forward
/// match wins when enabled entries exist on both sides. A list with no
/// enabled entries falls back to index 0 even though it is disabled.
pub fn nearest_enabled_index(options: &[PickerOption], index: usize) -> usize {
    if options.is_empty() {
        return 0;
    }
    let candidate = index.min(options.len() - 1);

    for i in candidate..options.len() {
        if !options[i].disabled {
            return i;
        }
    }
    for i in (0..candidate).rev() {
        if !options[i].disabled {
            return i;
        }
    }

    tracing::debug!("no enabled option in list; falling back to index 0");
    0
}
