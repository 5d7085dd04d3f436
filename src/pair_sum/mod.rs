//! # Pair-Sum Search
//!
//! Given a sequence `nums` and a `target`, find positions `i < j` with
//! `nums[i] + nums[j] == target`.
//!
//! ## Strategies
//!
//! - **Brute force**: check every pair, O(n²) time, O(1) space
//! - **Sort + two pointers**: sort a value/index copy, scan inward, O(n log n)
//! - **Hash table**: one pass with a value-to-first-index map, O(n) average
//!
//! All three agree on whether a pair exists. With duplicate values they may
//! return different pairs.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::ContractViolation;

/// Check that `outcome` is an acceptable answer for `(nums, target)`.
///
/// `None` is always accepted here; agreement on existence is checked across
/// strategies by [`check_agreement`].
pub fn check_outcome(
    algorithm: &'static str,
    nums: &[i64],
    target: i64,
    outcome: Option<(usize, usize)>,
) -> Result<(), ContractViolation> {
    let Some((i, j)) = outcome else {
        return Ok(());
    };
    let size = nums.len();

    if i >= j {
        return Err(ContractViolation::IndexOrder { algorithm, size, i, j });
    }
    if j >= size {
        return Err(ContractViolation::OutOfBounds { algorithm, size, i, j });
    }
    if nums[i] as i128 + nums[j] as i128 != target as i128 {
        return Err(ContractViolation::WrongSum {
            algorithm,
            size,
            i,
            j,
            target,
        });
    }
    Ok(())
}

/// Check that two strategies agree on whether a pair exists.
pub fn check_agreement(
    size: usize,
    reference: (&'static str, Option<(usize, usize)>),
    other: (&'static str, Option<(usize, usize)>),
) -> Result<(), ContractViolation> {
    let reference_found = reference.1.is_some();
    let found = other.1.is_some();
    if found != reference_found {
        return Err(ContractViolation::Disagreement {
            algorithm: other.0,
            reference: reference.0,
            size,
            found,
            reference_found,
        });
    }
    Ok(())
}

/// Run every strategy on a small fixed input and cross-check the answers.
pub fn verify() -> Result<(), ContractViolation> {
    let cases: [(&[i64], i64); 4] = [
        (&[0, 4, 3, 0], 0),
        (&[2, 7, 11, 15], 9),
        (&[3, 3], 6),
        (&[1, 2, 3, 4, 5], 100),
    ];

    let variants = available_variants();
    for (nums, target) in cases {
        let reference = brute_force(nums, target);
        check_outcome(BRUTE_FORCE, nums, target, reference)?;

        for variant in &variants {
            let outcome = (variant.function)(nums, target);
            check_outcome(variant.name, nums, target, outcome)?;
            check_agreement(nums.len(), (BRUTE_FORCE, reference), (variant.name, outcome))?;
        }
    }
    Ok(())
}
