//! Max-heap sort, the *O*(*n* \* log(*n*)) fallback of the unstable and static sorts.

/// Sorts `v[a..b]` with heapsort.
pub(crate) fn heapsort<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let heap = &mut v[a..b];
    let len = heap.len();

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(heap, node, len, is_less);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        heap.swap(0, end);
        sift_down(heap, 0, end, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        // Choose the greater child.
        if child + 1 < end && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn sorts_sub_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for len in [0, 1, 2, 3, 10, 17, 64, 333] {
            let mut v = (0..len + 6).map(|_| rng.gen_range(-50..50)).collect::<Vec<i32>>();
            let mut expected = v.clone();
            expected[3..len + 3].sort();

            heapsort(&mut v, 3, len + 3, &mut |a: &i32, b: &i32| a < b);
            assert_eq!(v, expected, "len: {len}");
        }
    }
}
