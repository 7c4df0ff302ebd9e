use crate::types::Sample;

/// Writes `anchor` across a leading or trailing gap.
///
/// `gap` holds only missing slots: it ends right before the first anchor
/// or starts right after the last one.
pub(super) fn fill_flat(gap: &mut [Sample], anchor: f64) {
    for slot in gap.iter_mut() {
        *slot = Sample::Value(anchor);
    }
}
