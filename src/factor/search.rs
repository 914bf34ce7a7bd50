/// The worker's scanning loop: optimistic reads against a cached
/// cofactor, pessimistic extraction under the lock.

use std::ops::Range;

use super::state::{Extraction, FactorState};

/// Scan one window of odd divisor candidates against the shared state.
///
/// The hot loop divides the locally cached cofactor, so a hit may be
/// stale; [`FactorState::extract`] re-validates under the lock before
/// anything is recorded. Staleness only costs redundant scanning. The
/// loop is bounded by the window plus the shrinking-ceiling break, so
/// every worker terminates even if the done hint is never observed.
pub fn scan_range(window: Range<i128>, state: &FactorState) {
    let mut cached = state.snapshot();

    // Windows are built from an odd start with a uniform size, but a
    // window can still begin on an even value when the size is odd.
    // Nudging up stays inside this window, preserving disjointness.
    let mut p = window.start;
    if p % 2 == 0 {
        p += 1;
    }

    while p < window.end {
        if state.is_done() {
            return;
        }
        // p * p would overflow near the top of the range; compare divided.
        if p > cached / p {
            break;
        }
        if cached % p == 0 {
            match state.extract(p) {
                Extraction::Done => return,
                Extraction::Remaining(cofactor) => cached = cofactor,
            }
        }
        p += 2;
    }
}
