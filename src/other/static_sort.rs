//! Bucket distribution sort for integer keys.
//!
//! Every element is projected onto `f64` and mapped linearly onto one of `b - a` buckets. The
//! elements are moved into their buckets in a single in-place cycle pass and each bucket is then
//! finished with insertion sort or heapsort. Close to linear for roughly uniform keys, skewed keys
//! only make the buckets uneven.

use std::mem;

use crate::heapsort;
use crate::primitives;
use crate::smallsort;

/// Buckets longer than this are finished with heapsort instead of insertion sort.
const BUCKET_INSERTION_THRESHOLD: usize = 16;

/// Keys the static sort can distribute into buckets.
///
/// `to_f64` must be monotonic with respect to `Ord`: `x <= y` implies
/// `x.to_f64() <= y.to_f64()`. Precision loss is allowed, it only makes buckets uneven.
///
/// Implemented for the primitive integers only. Floats are not `Ord`, sort them through a
/// wrapper with a total order whose `to_f64` stays finite for every key in the range.
pub trait StaticKey: Copy + Ord {
    /// Projects the key onto the number line used for bucket assignment.
    fn to_f64(self) -> f64;
}

macro_rules! static_key_impl {
    ($($t:ty),*) => {
        $(
            impl StaticKey for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

static_key_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Smallest and largest value of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

/// Finds the smallest and largest value of `v[a..b]` in a single pass.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds.
pub fn min_max<T>(v: &[T], a: usize, b: usize) -> MinMax<T>
where
    T: Copy + Ord,
{
    primitives::assert_range(v.len(), a, b);
    assert!(a < b, "min_max of an empty range");

    let mut min = v[a];
    let mut max = v[a];

    for &x in &v[(a + 1)..b] {
        if x < min {
            min = x;
        } else if x > max {
            max = x;
        }
    }

    MinMax { min, max }
}

/// Sorts `v[a..b]` by distributing it into `b - a` buckets, but might not preserve the order of
/// equal elements.
///
/// Needs two `usize` per element of auxiliary memory. Elements outside of `v[a..b]` are never
/// touched.
///
/// # Panics
///
/// Panics if `a > b`, `b > v.len()` or if the smallest or largest key projects onto a value that
/// is not finite.
pub fn sort<T>(v: &mut [T], a: usize, b: usize)
where
    T: StaticKey,
{
    primitives::assert_range(v.len(), a, b);

    let len = b - a;
    if len < 2 {
        return;
    }

    let MinMax { min, max } = min_max(v, a, b);
    let lo = min.to_f64();
    let hi = max.to_f64();
    assert!(
        lo.is_finite() && hi.is_finite(),
        "static sort keys must project onto finite values, got [{lo}, {hi}]"
    );

    if min == max {
        log::debug!("static sort of {len} equal elements, nothing to distribute");
        return;
    }

    log::trace!("static sort of {len} elements in [{lo}, {hi}]");

    let scale = len as f64 / (hi - lo + 1.0);
    // Monotonic in `x`, so every bucket only holds keys not less than those of earlier buckets.
    let bucket = |x: T| -> usize { (((x.to_f64() - lo) * scale) as usize).min(len - 1) };

    let mut counts = vec![0usize; len];
    for &x in &v[a..b] {
        counts[bucket(x)] += 1;
    }

    // `offsets[i]` is the next unplaced slot of bucket `i`.
    let mut offsets = Vec::with_capacity(len);
    let mut start = a;
    for &count in &counts {
        offsets.push(start);
        start += count;
    }

    distribute(v, &mut counts, &mut offsets, min, bucket);

    // Every `offsets[i]` now points past the end of bucket `i`.
    let mut start = a;
    for &end in &offsets {
        let bucket_len = end - start;
        if bucket_len > BUCKET_INSERTION_THRESHOLD {
            heapsort::heapsort(v, start, end, &mut |x: &T, y: &T| x.lt(y));
        } else if bucket_len > 1 {
            smallsort::insertion_sort_guarded(v, start, end, &mut |x: &T, y: &T| x.lt(y));
        }
        start = end;
    }
}

/// Moves every element into its bucket by following permutation cycles.
///
/// Each cycle starts at the first unplaced slot of a bucket, which is filled with `placeholder`
/// until the cycle comes back around and overwrites it. Completion is tracked by slot index,
/// `placeholder` may well be a genuine key.
fn distribute<T, B>(
    v: &mut [T],
    counts: &mut [usize],
    offsets: &mut [usize],
    placeholder: T,
    bucket: B,
) where
    T: Copy,
    B: Fn(T) -> usize,
{
    for bkt in 0..counts.len() {
        while counts[bkt] > 0 {
            let origin = offsets[bkt];
            let mut carried = mem::replace(&mut v[origin], placeholder);

            loop {
                let dest_bucket = bucket(carried);
                let to = offsets[dest_bucket];
                offsets[dest_bucket] += 1;
                counts[dest_bucket] -= 1;

                carried = mem::replace(&mut v[to], carried);
                if to == origin {
                    break;
                }
            }
        }
    }
}
