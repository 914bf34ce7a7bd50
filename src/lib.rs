#![allow(clippy::manual_div_ceil, clippy::manual_range_contains)]

/// Use mimalloc as the global allocator.
/// Faster than glibc malloc for the small allocations the factor list
/// churns through, with better thread-local caching during the parallel
/// scan phase.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod factor;
pub mod wide;
