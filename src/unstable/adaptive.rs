//! Adaptive, depth bounded quicksort.
//!
//! Every loop iteration first checks whether the active range already is a single ascending or
//! descending run. Skewed partitions switch the range to median-of-sixteen pivots, or to shell
//! sort if it is short, and once the depth budget of `floor(log2(len))` is spent the rest of the
//! range is heapsorted.

use std::cmp::Ordering;
use std::mem;

use crate::heapsort;
use crate::partition;
use crate::pivot;
use crate::primitives;
use crate::runs;
use crate::smallsort;

/// Ranges up to this length are finished with insertion sort.
const SMALL_SORT_THRESHOLD: usize = 16;

/// Skewed ranges up to this length are finished with shell sort.
const SHELL_SORT_THRESHOLD: usize = 80;

/// A partition is skewed if one side is at least this many times larger than the other.
const UNBALANCE_RATIO: usize = 16;

/// Sorts `v[a..b]`, but might not preserve the order of equal elements.
///
/// This sort is unstable, in-place and *O*(*n* \* log(*n*)) worst-case. Elements outside of
/// `v[a..b]` are never touched.
///
/// # Panics
///
/// Panics if `a > b` or `b > v.len()`.
#[inline]
pub fn sort<T>(v: &mut [T], a: usize, b: usize)
where
    T: Ord,
{
    unstable_sort(v, a, b, |x, y| x.lt(y));
}

/// Sorts `v[a..b]` with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator must define a total order. If it does not, the resulting order is unspecified,
/// but `v[a..b]` still holds exactly the elements it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], a: usize, b: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, a, b, |x, y| compare(x, y) == Ordering::Less);
}

/// Sorts `v[a..b]` with a key extraction function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], a: usize, b: usize, mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    unstable_sort(v, a, b, |x, y| f(x).lt(&f(y)));
}

// --- IMPL ---

fn unstable_sort<T, F>(v: &mut [T], a: usize, b: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    primitives::assert_range(v.len(), a, b);

    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = b - a;
    if len < 2 {
        return;
    }

    log::trace!("unstable sort of {len} elements");

    let limit = len.ilog2() as usize;
    quicksort(v, a, b, limit, false, &mut is_less);
}

/// Sorts `v[a..b]` recursing into the left side of every partition and looping on the right.
///
/// `limit` is the number of partition levels left before heapsort takes over. If `unbalanced` is
/// set the range is the smaller side of a skewed partition and every pivot comes from
/// median-of-sixteen.
fn quicksort<T, F>(
    v: &mut [T],
    mut a: usize,
    mut b: usize,
    mut limit: usize,
    unbalanced: bool,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while b - a > SMALL_SORT_THRESHOLD {
        if runs::sorted_run(v, a, b, is_less) {
            return;
        }

        if limit == 0 {
            log::debug!("depth budget spent, heapsort over {} elements", b - a);
            heapsort::heapsort(v, a, b, is_less);
            return;
        }

        let mut p = a;
        if !unbalanced {
            pivot::median_of_three(v, a, b, is_less);
            p = partition::partition_hoare(v, a, b, is_less);
        }

        if unbalanced || is_skewed(p - a, b - (p + 1)) {
            if b - a <= SHELL_SORT_THRESHOLD {
                log::debug!("skewed partition, shell sort over {} elements", b - a);
                smallsort::shell_sort(v, a, b, is_less);
                return;
            }

            if !unbalanced {
                // Put the pivot in place, finish the smaller side and keep the larger one.
                v.swap(a, p);
                if p - a < b - (p + 1) {
                    quicksort(v, a, p, limit - 1, true, is_less);
                    a = p;
                } else {
                    quicksort(v, p + 1, b, limit - 1, true, is_less);
                    b = p;
                }
            }

            // The range holds at least 40 elements here, so the samples are distinct.
            pivot::median_of_sixteen(v, a, b, is_less);
            p = partition::partition_hoare(v, a, b, is_less);
        }

        v.swap(a, p);
        limit -= 1;

        quicksort(v, a, p, limit, false, is_less);
        a = p + 1;
    }

    smallsort::insertion_sort_guarded(v, a, b, is_less);
}

#[inline]
fn is_skewed(left_len: usize, right_len: usize) -> bool {
    left_len == 0
        || right_len == 0
        || left_len / right_len >= UNBALANCE_RATIO
        || right_len / left_len >= UNBALANCE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_detection() {
        assert!(is_skewed(0, 10));
        assert!(is_skewed(10, 0));
        assert!(is_skewed(16, 1));
        assert!(is_skewed(3, 48));
        assert!(!is_skewed(15, 1));
        assert!(!is_skewed(5, 5));
        assert!(!is_skewed(4, 63));
    }

    #[test]
    fn sort_by_key_reverse() {
        let mut v = (0..300).collect::<Vec<i32>>();
        sort_by_key(&mut v, 0, 300, |x| std::cmp::Reverse(*x));

        assert_eq!(v, (0..300).rev().collect::<Vec<i32>>());
    }

    #[test]
    fn zero_sized() {
        let mut v = [(); 100];
        sort(&mut v, 0, 100);
        sort(&mut v, 10, 20);
    }

    #[test]
    #[should_panic(expected = "invalid sort range")]
    fn rejects_out_of_bounds_range() {
        let mut v = [3, 2, 1];
        sort(&mut v, 1, 4);
    }
}
