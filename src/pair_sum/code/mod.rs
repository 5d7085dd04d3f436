//! Pair-sum implementations.
//!
//! This module contains the three search strategies and the table used to
//! iterate over them.

mod brute_force;
mod hash_table;
mod sort_pointers;

pub use brute_force::brute_force;
pub use hash_table::hash_table;
pub use sort_pointers::sort_pointers;

use crate::utils::VariantInfo;

/// Signature shared by every strategy: `Some((i, j))` with `i < j`, or `None`.
pub type PairSumFn = fn(&[i64], i64) -> Option<(usize, usize)>;

pub const BRUTE_FORCE: &str = "brute_force";
pub const SORT_POINTERS: &str = "sort_pointers";
pub const HASH_TABLE: &str = "hash_table";

pub fn brute_force_variant() -> VariantInfo<PairSumFn> {
    VariantInfo {
        name: BRUTE_FORCE,
        description: "Every pair in row-major order, O(n^2)",
        function: brute_force,
    }
}

pub fn sort_pointers_variant() -> VariantInfo<PairSumFn> {
    VariantInfo {
        name: SORT_POINTERS,
        description: "Sort then two pointers, O(n log n)",
        function: sort_pointers,
    }
}

pub fn hash_table_variant() -> VariantInfo<PairSumFn> {
    VariantInfo {
        name: HASH_TABLE,
        description: "One pass with a hash map, O(n)",
        function: hash_table,
    }
}

/// All strategies, slowest first.
pub fn available_variants() -> Vec<VariantInfo<PairSumFn>> {
    vec![
        brute_force_variant(),
        sort_pointers_variant(),
        hash_table_variant(),
    ]
}
