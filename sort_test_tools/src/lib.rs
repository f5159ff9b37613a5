//! Shared test suites for the sorts of this workspace.
//!
//! A sort is hooked up by implementing [`Sort`] (or [`KeySort`] for integer-only sorts) and
//! invoking [`instantiate_sort_tests!`] (or [`instantiate_key_sort_tests!`]) in an integration
//! test.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts only `v[a..b]`.
    fn sort_range<T>(v: &mut [T], a: usize, b: usize)
    where
        T: Ord;
}

/// A sort that only handles primitive integer keys.
pub trait KeySort {
    fn name() -> String;

    fn sort_i32(v: &mut [i32]);

    fn sort_i64(v: &mut [i64]);

    fn sort_u64(v: &mut [u64]);

    /// Sorts only `v[a..b]`.
    fn sort_range_i32(v: &mut [i32], a: usize, b: usize);
}

pub mod patterns;
