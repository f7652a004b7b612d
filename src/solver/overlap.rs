//! Pairwise session conflict test.

use crate::models::Session;

/// Whether two sessions conflict.
///
/// Sessions on different days never conflict. On the same day, the
/// half-open ranges `[start, end)` are tested for intersection, so a
/// session ending at 09:00 and another starting at 09:00 are compatible.
#[inline]
pub fn overlaps(a: &Session, b: &Session) -> bool {
    if a.day != b.day {
        return false;
    }
    let (a_start, a_end) = (a.start_time.minutes(), a.end_time.minutes());
    let (b_start, b_end) = (b.start_time.minutes(), b.end_time.minutes());
    a_start < b_end && b_start < a_end
}
