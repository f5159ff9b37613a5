//! Top-down merge sort.
//!
//! Ranges of up to 32 elements are binary insertion sorted. Merges skip the already ordered
//! edges of both runs, rotate runs that are fully inverted, merge tiny remainders in place by
//! rotation and everything else through a buffer holding only the shorter run.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::primitives::{self, Bias};
use crate::runs;
use crate::smallsort;

/// Ranges up to this length are finished with binary insertion sort.
const SMALL_SORT_THRESHOLD: usize = 32;

/// Strictly descending prefixes longer than this are reversed before splitting.
const REVERSED_RUN_THRESHOLD: usize = 8;

/// Merges whose shorter side is at most this long rotate instead of buffering.
const MERGE_IN_PLACE_THRESHOLD: usize = 8;

/// Sorts `v[a..b]` and preserves the order of equal elements.
///
/// Allocates a buffer of at most half the range length while merging. Elements outside of
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
    stable_sort(v, a, b, |x, y| x.lt(y));
}

/// Sorts `v[a..b]` with a comparator function and preserves the order of equal elements.
///
/// The comparator must define a total order. If it does not, the resulting order is unspecified,
/// but `v[a..b]` still holds exactly the elements it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], a: usize, b: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, a, b, |x, y| compare(x, y) == Ordering::Less);
}

/// Sorts `v[a..b]` with a key extraction function and preserves the order of equal elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], a: usize, b: usize, mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    stable_sort(v, a, b, |x, y| f(x).lt(&f(y)));
}

// --- IMPL ---

fn stable_sort<T, F>(v: &mut [T], a: usize, b: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    primitives::assert_range(v.len(), a, b);

    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if b - a < 2 {
        return;
    }

    log::trace!("stable sort of {} elements", b - a);

    merge_sort(v, a, b, &mut is_less);
}

fn merge_sort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if runs::reversed_prefix(v, a, b, REVERSED_RUN_THRESHOLD, is_less) {
        return;
    }

    if b - a > SMALL_SORT_THRESHOLD {
        let m = a + (b - a) / 2;

        merge_sort(v, a, m, is_less);
        merge_sort(v, m, b, is_less);

        merge(v, a, m, b, is_less);
    } else {
        smallsort::binary_insertion_sort(v, a, b, is_less);
    }
}

/// Merges the sorted runs `v[a..m]` and `v[m..b]` into one sorted run.
pub(crate) fn merge<T, F>(v: &mut [T], mut a: usize, m: usize, mut b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a <= m && m <= b && b <= v.len());

    if a == m || m == b {
        return;
    }

    // Already in order.
    if !is_less(&v[m], &v[m - 1]) {
        return;
    }

    // Every right element is smaller than every left element.
    if is_less(&v[b - 1], &v[a]) {
        primitives::rotate(v, a, m, b);
        return;
    }

    // Right elements not less than the left maximum and left elements not greater than the right
    // minimum are already in their final place.
    b = primitives::binary_search(v, m, b, &v[m - 1], Bias::Left, is_less);
    a = primitives::binary_search(v, a, m - 1, &v[m], Bias::Right, is_less);

    let left_len = m - a;
    let right_len = b - m;

    if right_len < left_len {
        if right_len <= MERGE_IN_PLACE_THRESHOLD {
            merge_in_place(v, a, m, b, is_less);
        } else {
            merge_down(v, a, m, b, is_less);
        }
    } else if left_len <= MERGE_IN_PLACE_THRESHOLD {
        merge_in_place(v, a, m, b, is_less);
    } else {
        merge_up(v, a, m, b, is_less);
    }
}

/// Merges by rotating each block of elements that is out of order into place at once.
///
/// Needs no memory, but rotates `O(min(left, right) * (m - a))` elements.
fn merge_in_place<T, F>(v: &mut [T], a: usize, m: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if m - a <= b - m {
        // Walk the left run forwards, moving every block of right elements smaller than the
        // current left element in front of it.
        let mut i = a;
        let mut j = m;

        while i < j && j < b {
            if is_less(&v[j], &v[i]) {
                // Right elements equal to `v[i]` stay behind it.
                let k = primitives::binary_search(v, j + 1, b, &v[i], Bias::Left, is_less);
                primitives::rotate(v, i, j, k);

                i += k - j;
                j = k;
            } else {
                i += 1;
            }
        }
    } else {
        // Walk the right run backwards, moving every block of left elements greater than the
        // current right element behind it. Both ends are exclusive.
        let mut i_end = m;
        let mut j_end = b;

        while i_end > a && j_end > i_end {
            if is_less(&v[j_end - 1], &v[i_end - 1]) {
                // Left elements equal to `v[j_end - 1]` stay in front of it.
                let k = primitives::binary_search(
                    v,
                    a,
                    i_end - 1,
                    &v[j_end - 1],
                    Bias::Right,
                    is_less,
                );
                primitives::rotate(v, k, i_end, j_end);

                j_end -= i_end - k;
                i_end = k;
            } else {
                j_end -= 1;
            }
        }
    }
}

/// Buffers the left run and merges both runs front to back.
fn merge_up<T, F>(v: &mut [T], a: usize, m: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = m - a;
    let mut buf = Vec::<T>::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr();
    let arr_ptr = v.as_mut_ptr();

    // SAFETY: `a < m < b <= v.len()` and `buf` has room for `m - a` elements. The buffered run is
    // a bitwise copy, `hole` tracks the part of it that still has to go back into `v` and writes
    // it back even if `is_less` panics. `buf` keeps a length of zero, so it only frees memory.
    unsafe {
        ptr::copy_nonoverlapping(arr_ptr.add(a), buf_ptr, len);

        let mut hole = MergeHole {
            start: buf_ptr,
            end: buf_ptr.add(len),
            dest: arr_ptr.add(a),
        };

        let mut right = arr_ptr.add(m);
        let right_end = arr_ptr.add(b);

        while hole.start < hole.end && right < right_end {
            // Consume the lesser side. If equal, prefer the left run to maintain stability.
            let to_copy = if is_less(&*right, &*hole.start) {
                get_and_increment(&mut right)
            } else {
                get_and_increment(&mut hole.start)
            };
            ptr::copy_nonoverlapping(to_copy, get_and_increment(&mut hole.dest), 1);
        }
        // If the right run ran out first `hole` copies the rest of the left run behind it.
    }
}

/// Buffers the right run and merges both runs back to front.
fn merge_down<T, F>(v: &mut [T], a: usize, m: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = b - m;
    let mut buf = Vec::<T>::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr();
    let arr_ptr = v.as_mut_ptr();

    // SAFETY: `a < m < b <= v.len()` and `buf` has room for `b - m` elements, see `merge_up`.
    unsafe {
        ptr::copy_nonoverlapping(arr_ptr.add(m), buf_ptr, len);

        // `hole.dest` points past the unconsumed left elements, `hole.end` past the unconsumed
        // buffered ones.
        let mut hole = MergeHole {
            start: buf_ptr,
            end: buf_ptr.add(len),
            dest: arr_ptr.add(m),
        };

        let left_start = arr_ptr.add(a);
        let mut out = arr_ptr.add(b);

        while left_start < hole.dest && hole.start < hole.end {
            // Consume the greater side. If equal, prefer the right run to maintain stability.
            let to_copy = if is_less(&*hole.end.sub(1), &*hole.dest.sub(1)) {
                decrement_and_get(&mut hole.dest)
            } else {
                decrement_and_get(&mut hole.end)
            };
            ptr::copy_nonoverlapping(to_copy, decrement_and_get(&mut out), 1);
        }
        // If the left run ran out first `hole` copies the rest of the right run in front.
    }
}

unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
    let old = *ptr;
    // SAFETY: the caller keeps the pointer within or one past its allocation.
    *ptr = unsafe { ptr.add(1) };
    old
}

unsafe fn decrement_and_get<T>(ptr: &mut *mut T) -> *mut T {
    // SAFETY: the caller keeps the pointer within its allocation.
    *ptr = unsafe { ptr.sub(1) };
    *ptr
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` is the unconsumed part of the buffer
        // and `dest..` the matching gap in the slice.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IsLess = fn(&(i32, usize), &(i32, usize)) -> bool;
    type Merger = fn(&mut [(i32, usize)], usize, usize, usize, &mut IsLess);

    /// Builds two sorted, tagged runs of the given lengths with plenty of equal keys between them.
    fn tagged_runs(left_len: usize, right_len: usize) -> Vec<(i32, usize)> {
        let mut left = (0..left_len).map(|i| (i as i32 / 3, 0)).collect::<Vec<_>>();
        let mut right = (0..right_len).map(|i| (i as i32 / 2, 0)).collect::<Vec<_>>();
        left.sort();
        right.sort();

        let mut v = vec![(-1, 0)];
        v.extend(left);
        v.extend(right);
        v.push((i32::MAX, 0));

        for (idx, elem) in v.iter_mut().enumerate() {
            elem.1 = idx;
        }

        v
    }

    fn check_merge(merge_fn: Merger, left_len: usize, right_len: usize) {
        let mut v = tagged_runs(left_len, right_len);
        let mut expected = v.clone();
        // The tags grow with the position, so a full sort of the tuples is the stable order.
        expected.sort();

        let mut is_less: IsLess = |x, y| x.0 < y.0;
        merge_fn(&mut v, 1, 1 + left_len, 1 + left_len + right_len, &mut is_less);

        assert_eq!(v, expected, "left: {left_len} right: {right_len}");
    }

    #[test]
    fn merge_all_strategies() {
        for left_len in [1, 2, 5, 8, 9, 20, 64] {
            for right_len in [1, 3, 8, 9, 33, 70] {
                check_merge(|v, a, m, b, is_less| merge(v, a, m, b, is_less), left_len, right_len);
            }
        }
    }

    #[test]
    fn merge_in_place_both_directions() {
        for (left_len, right_len) in [(3, 12), (12, 3), (8, 8), (1, 30), (30, 1)] {
            check_merge(
                |v, a, m, b, is_less| merge_in_place(v, a, m, b, is_less),
                left_len,
                right_len,
            );
        }
    }

    #[test]
    fn merge_buffered_both_directions() {
        for (left_len, right_len) in [(10, 40), (40, 10), (25, 25), (1, 1)] {
            check_merge(|v, a, m, b, is_less| merge_up(v, a, m, b, is_less), left_len, right_len);
            check_merge(|v, a, m, b, is_less| merge_down(v, a, m, b, is_less), left_len, right_len);
        }
    }

    #[test]
    fn merge_inverted_runs_rotates() {
        let mut v = [5, 6, 7, 8, 1, 2, 3];
        merge(&mut v, 0, 4, 7, &mut |x: &i32, y: &i32| x < y);
        assert_eq!(v, [1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn merge_owned_values() {
        let mut v = "bdfhjlnprtacegikmoqs"
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        merge(&mut v, 0, 10, 20, &mut |x: &String, y: &String| x < y);

        let mut expected = v.clone();
        expected.sort();
        assert_eq!(v, expected);
    }
}
