use std::cmp::Ordering;

use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "adaptive_unstable".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        sort_toolkit::unstable_sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = v.len();
        sort_toolkit::unstable::adaptive::sort_by(v, 0, len, compare);
    }

    fn sort_range<T>(v: &mut [T], a: usize, b: usize)
    where
        T: Ord,
    {
        sort_toolkit::unstable::adaptive::sort(v, a, b);
    }
}

instantiate_sort_tests!(SortImpl);
