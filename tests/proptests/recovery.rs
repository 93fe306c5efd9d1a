//! Property tests for subset enumeration and secret selection

use std::collections::BTreeSet;

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use unshroud::combinations::{Combinations, combination_count};
use unshroud::domain::{Share, ShareSet};
use unshroud::{analyze, recover_secret};

/// A polynomial with a positive constant term and its genuine shares
#[derive(Clone, Debug)]
struct SharedSecret {
    threshold: usize,
    secret: BigInt,
    shares: Vec<Share>,
}

impl SharedSecret {
    fn set(&self) -> ShareSet {
        ShareSet::new(self.shares.clone()).expect("Generated shares are valid")
    }
}

/// Distinct positive `x` values, `count` of them
fn distinct_xs(g: &mut Gen, count: usize) -> Vec<u32> {
    let mut xs = BTreeSet::new();
    while xs.len() < count {
        xs.insert(u32::from(u16::arbitrary(g)) + 1);
    }
    xs.into_iter().collect()
}

impl Arbitrary for SharedSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        // Threshold 1..=4 with up to three surplus genuine shares
        let threshold = usize::from(u8::arbitrary(g) % 4) + 1;
        let count = threshold + usize::from(u8::arbitrary(g) % 4);

        let secret: BigInt = BigInt::from(u64::arbitrary(g)) + 1;
        let mut coefficients = vec![secret.clone()];
        for _ in 1..threshold {
            coefficients.push(BigInt::from(u32::arbitrary(g)));
        }

        let shares = distinct_xs(g, count)
            .into_iter()
            .map(|x| {
                let y = coefficients
                    .iter()
                    .rev()
                    .fold(BigInt::from(0), |acc, c| acc * x + c);
                Share::new(x, y)
            })
            .collect();

        SharedSecret {
            threshold,
            secret,
            shares,
        }
    }
}

/// With no decoys every combination reconstructs the same secret
#[quickcheck]
fn prop_unanimity_without_decoys(shared: SharedSecret) -> bool {
    let recovery = analyze(&shared.set(), shared.threshold);
    let expected_votes = combination_count(shared.shares.len(), shared.threshold);

    recovery.secret() == Some(&shared.secret)
        && recovery.tally().len() == 1
        && BigUint::from(recovery.tally().votes_for(&shared.secret)) == expected_votes
        && recovery.suspected_decoys().is_empty()
}

/// Decoys never take votes away from the genuine subsets
#[quickcheck]
fn prop_genuine_subsets_always_vote_for_secret(shared: SharedSecret, decoys: Vec<u64>) -> bool {
    let genuine_xs: BTreeSet<BigInt> = shared.shares.iter().map(|s| s.x.clone()).collect();
    let mut shares = shared.shares.clone();

    // Decoys sit beyond every genuine x
    let offset = 70_000u32;
    for (i, y) in decoys.iter().take(3).enumerate() {
        let x = offset + u32::try_from(i).unwrap_or_else(|_| unreachable!("i < 3"));
        shares.push(Share::new(x, *y));
    }

    let Ok(set) = ShareSet::new(shares) else {
        return false;
    };
    let recovery = analyze(&set, shared.threshold);
    let genuine_votes = combination_count(genuine_xs.len(), shared.threshold);

    BigUint::from(recovery.tally().votes_for(&shared.secret)) >= genuine_votes
}

/// Running the selection twice gives the same tally and winner
#[quickcheck]
fn prop_recovery_is_deterministic(shared: SharedSecret, noise: Vec<u16>) -> bool {
    let mut shares = shared.shares.clone();
    for (i, y) in noise.iter().take(3).enumerate() {
        let x = 70_000u32 + u32::try_from(i).unwrap_or_else(|_| unreachable!("i < 3"));
        shares.push(Share::new(x, *y));
    }
    let Ok(set) = ShareSet::new(shares) else {
        return false;
    };

    let first = analyze(&set, shared.threshold);
    let second = analyze(&set, shared.threshold);

    first.secret() == second.secret()
        && first.tally().candidates() == second.tally().candidates()
        && first.suspected_decoys() == second.suspected_decoys()
}

/// Zero or oversized thresholds find nothing and try nothing
#[quickcheck]
fn prop_invalid_threshold_not_found(shared: SharedSecret, excess: u8) -> bool {
    let set = shared.set();
    let too_large = set.len() + 1 + usize::from(excess % 8);

    recover_secret(&set, 0).is_none()
        && recover_secret(&set, too_large).is_none()
        && recover_secret(&set, usize::MAX).is_none()
        && analyze(&set, too_large).combinations_tried() == 0
}

/// With threshold one and distinct positive values the first share wins the tie
#[quickcheck]
fn prop_threshold_one_tie_goes_to_smallest_x(values: Vec<u32>) -> bool {
    let distinct: BTreeSet<u32> = values.into_iter().map(|v| v % 1_000_000 + 1).collect();
    if distinct.is_empty() {
        return true;
    }

    // Pair descending values with ascending x so order by x differs from order by value
    let shares: Vec<Share> = distinct
        .iter()
        .rev()
        .zip(1u32..)
        .map(|(&y, x)| Share::new(x, y))
        .collect();
    let first_y = BigInt::from(*distinct.iter().next_back().unwrap_or(&0));

    let Ok(set) = ShareSet::new(shares) else {
        return false;
    };
    let recovery = analyze(&set, 1);

    recovery.tally().len() == distinct.len() && recovery.secret() == Some(&first_y)
}

/// The enumerator yields exactly C(n, k) distinct, ordered subsets
#[quickcheck]
fn prop_enumeration_is_complete_and_unique(n: u8, k: u8) -> bool {
    let n = usize::from(n % 11);
    let k = usize::from(k % 12);
    let items: Vec<usize> = (0..n).collect();

    let combos: Vec<Vec<usize>> = Combinations::new(&items, k)
        .map(|c| c.into_iter().copied().collect())
        .collect();

    let unique: BTreeSet<_> = combos.iter().cloned().collect();
    let each_increasing = combos.iter().all(|c| c.windows(2).all(|w| w[0] < w[1]));
    let lexicographic = combos.windows(2).all(|w| w[0] < w[1]);

    BigUint::from(combos.len()) == combination_count(n, k)
        && unique.len() == combos.len()
        && each_increasing
        && lexicographic
        && combos.iter().all(|c| c.len() == k)
}
