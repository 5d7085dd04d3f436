//! Single pass with a value-to-first-index map.

use std::collections::HashMap;

/// Find a pair in one pass, remembering where each value first appeared.
///
/// For each position the complement `target - v` is looked up among the
/// values already seen. A complement outside the `i64` range cannot be present
/// and is not looked up.
pub fn hash_table(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &v) in nums.iter().enumerate() {
        if let Some(&j) = target.checked_sub(v).and_then(|c| first_seen.get(&c)) {
            return Some((j, i));
        }
        first_seen.entry(v).or_insert(i);
    }
    None
}
