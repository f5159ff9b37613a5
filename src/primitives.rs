//! Index range primitives shared by all sorts.
//!
//! Everything here works on a half-open range `[a, b)` of a larger slice and leaves elements
//! outside of that range alone.

use std::ptr;

/// Panics unless `[a, b)` is a valid range into a slice of length `len`.
#[inline]
#[track_caller]
pub(crate) fn assert_range(len: usize, a: usize, b: usize) {
    assert!(
        a <= b && b <= len,
        "invalid sort range [{a}, {b}) for slice of length {len}"
    );
}

/// Which insertion point [`binary_search`] reports for runs of elements equal to the key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Bias {
    /// First index whose element is not less than the key.
    Left,
    /// First index whose element is greater than the key.
    Right,
}

/// Reverses `v[a..b]` by swapping pairs from both ends inwards.
pub(crate) fn reverse<T>(v: &mut [T], mut a: usize, mut b: usize) {
    debug_assert!(a <= b && b <= v.len());

    while b - a > 1 {
        b -= 1;
        v.swap(a, b);
        a += 1;
    }
}

/// Rotates `v[a..b]` so that the block `v[m..b]` ends up in front of `v[a..m]`.
///
/// The shorter block is swapped into its final place until one side has at most one element
/// left, that last element is then moved with a single shift.
pub(crate) fn rotate<T>(v: &mut [T], mut a: usize, m: usize, mut b: usize) {
    debug_assert!(a <= m && m <= b && b <= v.len());

    while b - m > 1 && m - a > 1 {
        let left_len = m - a;
        let right_len = b - m;

        if right_len < left_len {
            block_swap(v, a, m, right_len);
            a += right_len;
        } else {
            block_swap(v, a, b - left_len, left_len);
            b -= left_len;
        }
    }

    if b - m == 1 {
        shift_insert(v, m, a);
    } else if m - a == 1 {
        shift_insert(v, a, b - 1);
    }
}

/// Swaps `v[x..x + len]` with `v[y..y + len]`, the blocks must not overlap.
#[inline]
fn block_swap<T>(v: &mut [T], x: usize, y: usize, len: usize) {
    debug_assert!(x + len <= y);

    let (head, tail) = v.split_at_mut(y);
    head[x..x + len].swap_with_slice(&mut tail[..len]);
}

/// Moves `v[from]` to index `to`, shifting every element in between one slot towards `from`.
pub(crate) fn shift_insert<T>(v: &mut [T], from: usize, to: usize) {
    if from == to {
        return;
    }

    let lo = from.min(to);
    let hi = from.max(to);
    let run = &mut v[lo..=hi];
    let shift_len = hi - lo;
    let run_ptr = run.as_mut_ptr();

    // SAFETY: `run` holds `shift_len + 1` elements and every pointer below stays inside of it.
    // No user code runs between reading the value out and writing it back, so the duplicate left
    // behind by the read can never be observed.
    unsafe {
        if from > to {
            let tmp = ptr::read(run_ptr.add(shift_len));
            ptr::copy(run_ptr, run_ptr.add(1), shift_len);
            ptr::write(run_ptr, tmp);
        } else {
            let tmp = ptr::read(run_ptr);
            ptr::copy(run_ptr.add(1), run_ptr, shift_len);
            ptr::write(run_ptr.add(shift_len), tmp);
        }
    }
}

/// Returns the insertion point of `key` into the sorted range `v[a..b]`.
///
/// `key` must not live inside `v[a..b]`.
pub(crate) fn binary_search<T, F>(
    v: &[T],
    mut a: usize,
    mut b: usize,
    key: &T,
    bias: Bias,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a <= b && b <= v.len());

    while a < b {
        let m = a + (b - a) / 2;

        let key_goes_left = match bias {
            Bias::Left => !is_less(&v[m], key),
            Bias::Right => is_less(key, &v[m]),
        };

        if key_goes_left {
            b = m;
        } else {
            a = m + 1;
        }
    }

    a
}
