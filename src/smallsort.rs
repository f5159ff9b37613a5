//! Insertion based sorts for short ranges and skewed partitions.

use std::mem::ManuallyDrop;
use std::ptr;

use crate::primitives::{self, Bias};

/// Gap sequence of the shell sort fallback, the final pass is a plain insertion sort.
const SHELL_GAPS: [usize; 5] = [48, 21, 7, 3, 1];

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` is the value taken out of the slice and `dest` the single slot that is
        // currently a logical duplicate. Also runs if `is_less` panics.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Inserts `v[i]` into the sorted gapped run `.., v[i - 2 * gap], v[i - gap]`, never moving
/// below index `lower`.
///
/// # Safety
///
/// `lower <= i < v.len()` and `gap >= 1`.
unsafe fn insert_gapped<T, F>(v: &mut [T], lower: usize, i: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(lower <= i && i < v.len() && gap >= 1);

    if i < lower + gap {
        return;
    }

    let arr_ptr = v.as_mut_ptr();

    // SAFETY: every index touched lies in `lower..=i`, which the caller guarantees to be in
    // bounds.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // Compare in place first, the value only leaves the slice if it has to move.
        if !is_less(&*i_ptr, &*i_ptr.sub(gap)) {
            return;
        }

        let tmp = ManuallyDrop::new(ptr::read(i_ptr));
        // The hole always marks the slot `tmp` belongs into so far. If `is_less` panics the hole
        // is filled with `tmp` and `v` holds every element exactly once again.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(gap),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        let mut j = i - gap;
        while j >= lower + gap {
            let next_ptr = arr_ptr.add(j - gap);
            if !is_less(&*tmp, &*next_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(next_ptr, hole.dest, 1);
            hole.dest = next_ptr;
            j -= gap;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}

/// Insertion sort over `v[a..b]` that first swaps every new minimum into `v[a]`.
///
/// With a lawful `Ord` the value at `a` stops every inner scan, the lower bound is only there to
/// keep a lying comparison sound.
pub(crate) fn insertion_sort_guarded<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a <= b && b <= v.len());

    for i in (a + 1)..b {
        if is_less(&v[i], &v[a]) {
            v.swap(i, a);
        }

        // SAFETY: a < i < b <= v.len().
        unsafe {
            insert_gapped(v, a, i, 1, is_less);
        }
    }
}

/// Stable insertion sort over `v[a..b]` locating each insertion point with a binary search.
pub(crate) fn binary_insertion_sort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a <= b && b <= v.len());

    for i in (a + 1)..b {
        if is_less(&v[i], &v[i - 1]) {
            // Equal elements already in place stay in front of the inserted one.
            let pos = primitives::binary_search(v, a, i - 1, &v[i], Bias::Right, is_less);
            primitives::shift_insert(v, i, pos);
        }
    }
}

/// Shell sort over `v[a..b]` with the fixed gaps `48, 21, 7, 3, 1`.
pub(crate) fn shell_sort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a <= b && b <= v.len());

    for gap in SHELL_GAPS {
        for i in (a + gap)..b {
            // SAFETY: a <= i < b <= v.len() and every gap is at least 1.
            unsafe {
                insert_gapped(v, a, i, gap, is_less);
            }
        }
    }
}
