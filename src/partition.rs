/// Hoare partition of `v[a..b]` around the pivot held at `v[a]`.
///
/// Two cursors move inwards, the left one over elements less than the pivot and the right one
/// over elements greater than it, and swap when both stop. Returns the index `p` where the right
/// cursor ended up. Afterwards `v[a + 1..=p]` holds elements `<=` the pivot and `v[p + 1..b]`
/// elements `>=` it. The pivot itself stays at `v[a]`, equal elements may land on either side.
pub(crate) fn partition_hoare<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(a < b && b <= v.len());

    let mut i = a;
    let mut j = b;

    loop {
        i += 1;
        while i < b && is_less(&v[i], &v[a]) {
            i += 1;
        }

        j -= 1;
        // The pivot stops this scan at `a` unless `is_less` is not a strict order.
        while j > a && is_less(&v[a], &v[j]) {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
    }
}
