use sort_toolkit::other::static_sort;
use sort_toolkit::stable::merge_sort;
use sort_toolkit::unstable::adaptive;

#[test]
fn unstable_small_permutation() {
    let mut v = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
    sort_toolkit::unstable_sort(&mut v);

    assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn stable_keeps_equal_keys_in_order() {
    let mut v = [(1, "a"), (1, "b"), (0, "c")];
    merge_sort::sort_by_key(&mut v, 0, 3, |pair| pair.0);

    assert_eq!(v, [(0, "c"), (1, "a"), (1, "b")]);
}

#[test]
fn descending_input_takes_reverse_path() {
    let descending = (0..20).rev().collect::<Vec<i32>>();
    let ascending = (0..20).collect::<Vec<i32>>();

    let mut comp_count = 0;
    let mut v = descending.clone();
    adaptive::sort_by(&mut v, 0, 20, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(v, ascending);
    // One scan over neighbors, no partitioning.
    assert_eq!(comp_count, 19);

    let mut comp_count = 0;
    let mut v = descending;
    merge_sort::sort_by(&mut v, 0, 20, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(v, ascending);
    assert_eq!(comp_count, 19);
}

#[test]
fn static_all_equal() {
    let mut v = [10, 10, 10, 10];
    sort_toolkit::static_sort(&mut v);

    assert_eq!(v, [10, 10, 10, 10]);
}

#[test]
fn empty_and_singleton_ranges() {
    let original = [3, 1, 2];

    for (a, b) in [(0, 0), (1, 1), (3, 3), (0, 1), (2, 3)] {
        let mut v = original;
        adaptive::sort(&mut v, a, b);
        assert_eq!(v, original);

        let mut v = original;
        merge_sort::sort(&mut v, a, b);
        assert_eq!(v, original);

        let mut v = original;
        static_sort::sort(&mut v, a, b);
        assert_eq!(v, original);
    }

    let mut empty: [i32; 0] = [];
    sort_toolkit::unstable_sort(&mut empty);
    sort_toolkit::stable_sort(&mut empty);
    sort_toolkit::static_sort(&mut empty);
}

#[test]
fn range_confinement_with_sentinels() {
    let mut v = [i32::MIN, 9, 2, 7, 2, 0, 5, i32::MAX];

    adaptive::sort(&mut v, 1, 7);
    assert_eq!(v, [i32::MIN, 0, 2, 2, 5, 7, 9, i32::MAX]);

    let mut v = [i32::MAX, 9, 2, 7, 2, 0, 5, i32::MIN];

    merge_sort::sort(&mut v, 1, 7);
    assert_eq!(v, [i32::MAX, 0, 2, 2, 5, 7, 9, i32::MIN]);

    let mut v = [i32::MAX, 9, 2, 7, 2, 0, 5, i32::MIN];

    static_sort::sort(&mut v, 1, 7);
    assert_eq!(v, [i32::MAX, 0, 2, 2, 5, 7, 9, i32::MIN]);
}

#[test]
fn sorted_input_is_not_moved() {
    // Equal keys with distinct identities, any movement between them would show.
    let mut v = (0..500).map(|i| (i / 7, i)).collect::<Vec<(i32, i32)>>();
    let expected = v.clone();

    adaptive::sort_by_key(&mut v, 0, 500, |pair| pair.0);
    assert_eq!(v, expected);

    merge_sort::sort_by_key(&mut v, 0, 500, |pair| pair.0);
    assert_eq!(v, expected);
}

#[test]
#[should_panic(expected = "invalid sort range")]
fn stable_rejects_inverted_range() {
    let mut v = [1, 2, 3];
    merge_sort::sort(&mut v, 2, 1);
}

#[test]
#[should_panic(expected = "invalid sort range")]
fn static_rejects_out_of_bounds_range() {
    let mut v = [1, 2, 3];
    static_sort::sort(&mut v, 0, 4);
}
