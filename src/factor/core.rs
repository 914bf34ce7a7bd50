/// Coordinator for the parallel trial-division factorization engine.
///
/// Sequential pre-pass (strip factor 2, integer square root), then a
/// fixed set of scoped OS threads scanning disjoint windows of odd
/// divisor candidates against one shared [`FactorState`], then a
/// sequential finish (residual prime, sort). Uses std::thread::scope so
/// the workers borrow the state directly; ~no pool init cost and the
/// join is structural.

use std::thread;

use super::partition::windows;
use super::search::scan_range;
use super::state::FactorState;
use crate::wide::format_wide;

/// First odd divisor candidate. Factor 2 is stripped before the parallel
/// phase, so the scan never needs even candidates.
const SEARCH_START: i128 = 3;

/// Worker count when the runtime cannot report hardware concurrency.
const DEFAULT_THREADS: usize = 4;

/// Worker count: hardware concurrency, with a fixed fallback.
pub fn thread_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_THREADS)
}

/// Integer square root by binary search: the largest `r` with `r*r <= n`.
/// Compares `mid <= n / mid` instead of squaring, which would overflow
/// near the top of the i128 range.
pub fn isqrt(n: i128) -> i128 {
    debug_assert!(n >= 1);
    let mut result = 1;
    let (mut lo, mut hi) = (1i128, n);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if mid <= n / mid {
            result = mid;
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    result
}

/// Prime factors of `n` with multiplicity, sorted ascending, using one
/// worker per hardware thread. Empty for `n <= 1`.
pub fn factorize(n: i128) -> Vec<i128> {
    factorize_with_threads(n, thread_count())
}

/// Like [`factorize`] with an explicit worker count. The factor multiset
/// is identical for every worker count; only scan duration varies.
pub fn factorize_with_threads(n: i128, threads: usize) -> Vec<i128> {
    if n <= 1 {
        return Vec::new();
    }
    let threads = threads.max(1);

    let mut cofactor = n;
    let mut factors = Vec::new();
    while cofactor % 2 == 0 {
        factors.push(2);
        cofactor /= 2;
    }
    if cofactor == 1 {
        return factors;
    }

    // No divisor of the cofactor above its square root can pair with one
    // below it that the scan would miss, so the ceiling is sqrt(cofactor).
    let ceiling = isqrt(cofactor);
    let state = FactorState::new(cofactor, factors);

    let ranges = windows(SEARCH_START, ceiling, threads);
    if !ranges.is_empty() {
        thread::scope(|s| {
            for window in ranges {
                let state = &state;
                s.spawn(move || scan_range(window, state));
            }
        });
    }

    // Every worker has joined; exclusive access is back with the
    // coordinator and no further concurrent mutation can occur.
    let (mut factors, residue) = state.into_parts();
    if residue > 1 {
        // A composite residue would have had a factor at or below the
        // original ceiling; whatever survived the scan is prime.
        factors.push(residue);
    }
    factors.sort_unstable();
    factors
}

/// Render a factor list space-separated, no trailing space.
pub fn format_factors(factors: &[i128]) -> String {
    let mut out = String::with_capacity(factors.len() * 4);
    for (i, f) in factors.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format_wide(*f));
    }
    out
}
