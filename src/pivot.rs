//! Pivot selection. Both selectors leave their choice at the start of the range.

/// Comparator network over 16 equally spaced samples, numbered `1..=16`.
///
/// Applied in order the 60 compare-exchanges fully sort the samples, sample 8 is the median.
const MEDIAN_OF_SIXTEEN_NETWORK: [(usize, usize); 60] = [
    (1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
    (1, 3), (5, 7), (9, 11), (13, 15), (2, 4), (6, 8), (10, 12), (14, 16),
    (1, 5), (9, 13), (2, 6), (10, 14), (3, 7), (11, 15), (4, 8), (12, 16),
    (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (8, 16),
    (6, 11), (7, 10), (4, 13), (14, 15), (8, 12), (2, 3), (5, 9),
    (2, 5), (8, 14), (3, 9), (12, 15), (6, 7), (10, 11),
    (3, 5), (12, 14), (4, 9), (8, 13),
    (7, 9), (11, 13), (4, 6), (8, 10),
    (4, 5), (6, 7), (8, 9), (10, 11), (12, 13),
    (7, 8), (9, 10),
];

#[inline]
fn swap_if_less<T, F>(v: &mut [T], x: usize, y: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[y], &v[x]) {
        v.swap(x, y);
    }
}

/// Moves the median of `v[a]`, the midpoint and `v[b - 1]` to `v[a]`.
pub(crate) fn median_of_three<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(b - a >= 3);

    let last = b - 1;
    let mid = a + (last - a) / 2;

    swap_if_less(v, a, mid, is_less);

    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);

        // `v[mid]` is now the smallest value of the three, the median is the larger of `v[a]`
        // and `v[mid]`.
        if is_less(&v[mid], &v[a]) {
            return;
        }
    }

    v.swap(a, mid);
}

/// Sorts 16 equally spaced samples of `v[a..b]` in place and moves their median to `v[a]`.
///
/// The samples sit at `a + k * gap` for `k` in `1..=16`, so the range needs at least 17
/// elements.
pub(crate) fn median_of_sixteen<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let gap = (b - 1 - a) / 16;
    debug_assert!(gap >= 1);

    for (x, y) in MEDIAN_OF_SIXTEEN_NETWORK {
        swap_if_less(v, a + x * gap, a + y * gap, is_less);
    }

    v.swap(a, a + 8 * gap);
}
