use super::code;
use super::{check_agreement, check_outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(0..max)).collect()
}

#[test]
fn test_brute_force_row_major_tie_break() {
    assert_eq!(code::brute_force(&[0, 4, 3, 0], 0), Some((0, 3)));
    assert_eq!(code::brute_force(&[1, 1, 1, 1], 2), Some((0, 1)));
    // (1, 2) sums to 5 as well, but (0, 3) comes first in row-major order
    assert_eq!(code::brute_force(&[1, 2, 3, 4], 5), Some((0, 3)));
}

#[test]
fn test_hash_table_keeps_first_occurrence() {
    assert_eq!(code::hash_table(&[5, 5, 5], 10), Some((0, 1)));
    assert_eq!(code::hash_table(&[2, 7, 2, 7], 9), Some((0, 1)));
}

#[test]
fn test_sort_pointers_returns_smaller_index_first() {
    assert_eq!(code::sort_pointers(&[5, 1], 6), Some((0, 1)));
    assert_eq!(code::sort_pointers(&[3, 1, 3], 6), Some((0, 2)));
}

#[test]
fn test_degenerate_inputs() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[], 0), None, "{} on empty", variant.name);
        assert_eq!((variant.function)(&[7], 14), None, "{} on single", variant.name);
        assert_eq!((variant.function)(&[3, 3], 6), Some((0, 1)), "{} on pair", variant.name);
    }
}

#[test]
fn test_extreme_values_do_not_overflow() {
    let nums = [i64::MAX, 1, i64::MIN, -1];
    for variant in code::available_variants() {
        let outcome = (variant.function)(&nums, -1);
        assert!(outcome.is_some(), "{} missed MAX + MIN", variant.name);
        check_outcome(variant.name, &nums, -1, outcome).unwrap();

        assert_eq!((variant.function)(&nums, i64::MIN), None, "{}", variant.name);
    }
}

#[test]
fn test_planted_pair_is_found_by_all() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let len = rng.random_range(2..300);
        let nums = random_values(&mut rng, len, 1000);
        let i = rng.random_range(0..len - 1);
        let j = rng.random_range(i + 1..len);
        let target = nums[i] + nums[j];

        for variant in code::available_variants() {
            let outcome = (variant.function)(&nums, target);
            assert!(outcome.is_some(), "{} missed planted ({}, {})", variant.name, i, j);
            check_outcome(variant.name, &nums, target, outcome).unwrap();
        }
    }
}

#[test]
fn test_absent_target_is_not_found() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let len = rng.random_range(0..300);
        // even values never sum to an odd target
        let nums: Vec<i64> = random_values(&mut rng, len, 500).iter().map(|v| v * 2).collect();
        let target = rng.random_range(-1000..1000) * 2 + 1;

        for variant in code::available_variants() {
            assert_eq!((variant.function)(&nums, target), None, "{}", variant.name);
        }
        assert_eq!(code::brute_force(&nums, -999_999), None);
    }
}

#[test]
fn test_strategies_agree_on_existence() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let len = rng.random_range(0..40);
        // narrow range so duplicates and multiple solutions are common
        let nums = random_values(&mut rng, len, 20);
        let target = rng.random_range(0..40);

        let reference = code::brute_force(&nums, target);
        for variant in code::available_variants() {
            let outcome = (variant.function)(&nums, target);
            check_outcome(variant.name, &nums, target, outcome).unwrap();
            check_agreement(len, (code::BRUTE_FORCE, reference), (variant.name, outcome)).unwrap();
        }
    }
}

#[test]
fn test_check_outcome_rejects_bad_pairs() {
    let nums = [1, 2, 3];
    assert!(check_outcome("t", &nums, 5, Some((1, 2))).is_ok());
    assert!(check_outcome("t", &nums, 5, None).is_ok());

    let err = check_outcome("t", &nums, 5, Some((2, 1))).unwrap_err();
    assert!(matches!(err, crate::error::ContractViolation::IndexOrder { .. }));
    let err = check_outcome("t", &nums, 5, Some((1, 3))).unwrap_err();
    assert!(matches!(err, crate::error::ContractViolation::OutOfBounds { .. }));
    let err = check_outcome("t", &nums, 5, Some((0, 1))).unwrap_err();
    assert!(matches!(err, crate::error::ContractViolation::WrongSum { target: 5, .. }));
}

#[test]
fn test_verify_passes() {
    super::verify().unwrap();
}
