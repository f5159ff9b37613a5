//! In-place, comparison based sorting of index ranges.
//!
//! Three strategies share one set of index primitives:
//!
//! - [`unstable::adaptive`], a depth bounded quicksort that detects presorted and reversed
//!   ranges, switches to median-of-sixteen pivots and shell sort on skewed partitions and falls
//!   back to heapsort once its depth budget is spent.
//! - [`stable::merge_sort`], a top-down merge sort merging by rotation for tiny runs and through
//!   a buffer sized to the shorter run otherwise.
//! - [`other::static_sort`], a bucket distribution sort for integer keys.
//!
//! Every entry point takes the slice plus a half-open range `[a, b)` and never touches elements
//! outside of it.

mod heapsort;
mod partition;
mod pivot;
mod primitives;
mod runs;
mod smallsort;

pub mod other;
pub mod stable;
pub mod unstable;

pub use other::static_sort::StaticKey;

/// Sorts the whole slice with [`unstable::adaptive::sort`].
#[inline]
pub fn unstable_sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    unstable::adaptive::sort(v, 0, len);
}

/// Sorts the whole slice with [`stable::merge_sort::sort`].
#[inline]
pub fn stable_sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    stable::merge_sort::sort(v, 0, len);
}

/// Sorts the whole slice with [`other::static_sort::sort`].
#[inline]
pub fn static_sort<T>(v: &mut [T])
where
    T: StaticKey,
{
    let len = v.len();
    other::static_sort::sort(v, 0, len);
}
