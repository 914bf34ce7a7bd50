/// Static partitioning of the divisor search space across workers.

use std::ops::Range;

/// Split the inclusive span `[start, ceiling]` into up to `thread_count`
/// contiguous half-open windows of uniform size (the last may be short).
///
/// Windows are disjoint and their union covers the span exactly, so no
/// candidate divisor is ever scanned twice. Windows that would begin past
/// the ceiling are omitted; an empty span yields no windows.
pub fn windows(start: i128, ceiling: i128, thread_count: usize) -> Vec<Range<i128>> {
    if ceiling < start || thread_count == 0 {
        return Vec::new();
    }
    let span = ceiling - start + 1;
    let size = (span + thread_count as i128 - 1) / thread_count as i128;
    let mut out = Vec::with_capacity(thread_count);
    for i in 0..thread_count as i128 {
        let lo = start + i * size;
        if lo > ceiling {
            break;
        }
        let hi = (lo + size).min(ceiling + 1);
        out.push(lo..hi);
    }
    out
}
