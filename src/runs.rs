//! Single pass run detection.

use crate::primitives;

/// Returns `true` if `v[a..b]` is sorted once this returns.
///
/// A non-decreasing range is left alone, a strictly descending one is reversed. Anything else is
/// reported as `false` as soon as the scan has seen both an ascent and a descent.
pub(crate) fn sorted_run<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if b - a < 2 {
        return true;
    }

    let mut non_decreasing = true;
    let mut strictly_descending = true;

    for i in a..(b - 1) {
        if is_less(&v[i + 1], &v[i]) {
            non_decreasing = false;
        } else {
            strictly_descending = false;
        }

        if !non_decreasing && !strictly_descending {
            return false;
        }
    }

    // Equal neighbors rule out a descending run, so reversing never reorders equal elements.
    if strictly_descending {
        log::debug!("reversing descending run of {} elements", b - a);
        primitives::reverse(v, a, b);
    }

    true
}

/// Reverses the strictly descending prefix of `v[a..b]` if it is longer than `limit`.
///
/// Returns `true` if that prefix covered the whole range, leaving it sorted.
pub(crate) fn reversed_prefix<T, F>(
    v: &mut [T],
    a: usize,
    b: usize,
    limit: usize,
    is_less: &mut F,
) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if b - a < 2 {
        return true;
    }

    let mut end = a + 1;
    while end < b && is_less(&v[end], &v[end - 1]) {
        end += 1;
    }

    if end - a > limit {
        primitives::reverse(v, a, end);
        return end == b;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn sorted_run_classifies() {
        let mut ascending = [1, 2, 2, 3, 5];
        assert!(sorted_run(&mut ascending, 0, 5, &mut is_less));
        assert_eq!(ascending, [1, 2, 2, 3, 5]);

        let mut descending = [0, 9, 7, 4, 1, 0];
        assert!(sorted_run(&mut descending, 1, 5, &mut is_less));
        assert_eq!(descending, [0, 1, 4, 7, 9, 0]);

        let mut plateau = [3, 3, 3, 3];
        assert!(sorted_run(&mut plateau, 0, 4, &mut is_less));
        assert_eq!(plateau, [3, 3, 3, 3]);

        let mut mixed = [5, 4, 4, 3];
        assert!(!sorted_run(&mut mixed, 0, 4, &mut is_less));
        assert_eq!(mixed, [5, 4, 4, 3]);

        let mut single = [1];
        assert!(sorted_run(&mut single, 0, 1, &mut is_less));
        assert!(sorted_run(&mut single, 1, 1, &mut is_less));
    }

    #[test]
    fn reversed_prefix_reverses_long_prefix() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 5, 0];
        assert!(!reversed_prefix(&mut v, 0, 11, 8, &mut is_less));
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 5, 0]);
    }

    #[test]
    fn reversed_prefix_short_prefix_untouched() {
        let mut v = [3, 2, 1, 5, 0];
        assert!(!reversed_prefix(&mut v, 0, 5, 8, &mut is_less));
        assert_eq!(v, [3, 2, 1, 5, 0]);
    }

    #[test]
    fn reversed_prefix_whole_range() {
        let mut v = (0..20).rev().collect::<Vec<i32>>();
        assert!(reversed_prefix(&mut v, 0, 20, 8, &mut is_less));
        assert_eq!(v, (0..20).collect::<Vec<i32>>());
    }
}
