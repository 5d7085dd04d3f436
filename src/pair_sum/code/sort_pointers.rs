//! Sort a value/index copy, then close in from both ends.

use std::cmp::Ordering;

/// Find a pair by sorting and scanning inward with two pointers.
///
/// The copy is ordered by value, ties by original index, so the result is
/// deterministic. With duplicate values the pair found can differ from the
/// brute-force one. The returned indices are original positions, smaller first.
pub fn sort_pointers(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }

    let mut indexed: Vec<(i64, usize)> = nums.iter().copied().zip(0..).collect();
    indexed.sort_unstable();

    let target = target as i128;
    let (mut left, mut right) = (0, indexed.len() - 1);

    while left < right {
        let sum = indexed[left].0 as i128 + indexed[right].0 as i128;
        match sum.cmp(&target) {
            Ordering::Equal => {
                let (a, b) = (indexed[left].1, indexed[right].1);
                return Some((a.min(b), a.max(b)));
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}
