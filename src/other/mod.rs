// Distribution sort for primitive integer keys.
pub mod static_sort;
