//! Exhaustive pair scan.

/// Find a pair by checking every `(i, j)` with `i < j`.
///
/// Pairs are visited in row-major order, so among several valid pairs the one
/// with the smallest `i`, then the smallest `j`, is returned. No lookup
/// structure is used; the running time is quadratic on purpose.
///
/// # Example
/// ```
/// use pair_sum_bench::pair_sum::brute_force;
///
/// assert_eq!(brute_force(&[0, 4, 3, 0], 0), Some((0, 3)));
/// assert_eq!(brute_force(&[1, 2, 3], 100), None);
/// ```
pub fn brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let target = target as i128;
    let n = nums.len();

    for i in 0..n {
        let a = nums[i] as i128;
        for j in (i + 1)..n {
            if a + nums[j] as i128 == target {
                return Some((i, j));
            }
        }
    }
    None
}
