//! Majority-vote secret selection over every threshold-sized subset
//!
//! Each `k`-subset of the shares is interpolated. Subsets made only of
//! genuine shares all agree on the secret, while subsets containing decoys
//! either fail to produce a positive integer or scatter across unrelated
//! values. The most frequent candidate wins.
//!
//! Ties go to the candidate that reached the winning count first in
//! enumeration order. The tally tracks the leader as votes arrive instead of
//! scanning a hash map afterwards, so the outcome never depends on hashing.

use std::collections::{BTreeSet, HashMap};

use num_bigint::BigInt;

use crate::combinations::Combinations;
use crate::domain::{Share, ShareSet, Threshold};
use crate::interpolate::secret_candidate;

/// One distinct candidate value and the combinations that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub secret: BigInt,
    pub votes: u64,
    /// Zero-based rank of the first combination that produced this value
    pub first_rank: u64,
    /// `x` of every share that took part in a combination voting for this value
    pub supporters: BTreeSet<BigInt>,
}

/// Vote counts per candidate, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    candidates: Vec<Candidate>,
    positions: HashMap<BigInt, usize>,
    leader: Option<usize>,
}

impl VoteTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one vote for `secret` cast by the combination at `rank`
    ///
    /// Ranks must be supplied in increasing order for the tie-break to be
    /// meaningful.
    pub fn record(&mut self, secret: BigInt, rank: u64, combination: &[&Share]) {
        let position = match self.positions.get(&secret) {
            Some(&position) => position,
            None => {
                let position = self.candidates.len();
                self.positions.insert(secret.clone(), position);
                self.candidates.push(Candidate {
                    secret,
                    votes: 0,
                    first_rank: rank,
                    supporters: BTreeSet::new(),
                });
                position
            }
        };

        let candidate = &mut self.candidates[position];
        candidate.votes += 1;
        candidate
            .supporters
            .extend(combination.iter().map(|share| share.x.clone()));

        // Strictly greater: an equal count reached later keeps the old leader
        let leading_votes = self.leader.map_or(0, |i| self.candidates[i].votes);
        if self.candidates[position].votes > leading_votes {
            self.leader = Some(position);
        }
    }

    /// The candidate with the most votes, if any vote was cast
    #[must_use]
    pub fn winner(&self) -> Option<&Candidate> {
        self.leader.map(|i| &self.candidates[i])
    }

    /// Candidates in the order they were first produced
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn votes_for(&self, secret: &BigInt) -> u64 {
        self.positions
            .get(secret)
            .map_or(0, |&i| self.candidates[i].votes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Full outcome of a recovery attempt
#[derive(Debug, Clone)]
pub struct Recovery {
    threshold: usize,
    share_xs: Vec<BigInt>,
    combinations_tried: u64,
    valid_combinations: u64,
    tally: VoteTally,
}

impl Recovery {
    /// The recovered secret, or `None` when no combination produced one
    #[must_use]
    pub fn secret(&self) -> Option<&BigInt> {
        self.tally.winner().map(|c| &c.secret)
    }

    #[must_use]
    pub fn into_secret(self) -> Option<BigInt> {
        let leader = self.tally.leader?;
        self.tally.candidates.into_iter().nth(leader).map(|c| c.secret)
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Candidate> {
        self.tally.winner()
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> usize {
        self.share_xs.len()
    }

    #[must_use]
    pub fn combinations_tried(&self) -> u64 {
        self.combinations_tried
    }

    /// Number of combinations that interpolated to a positive integer
    #[must_use]
    pub fn valid_combinations(&self) -> u64 {
        self.valid_combinations
    }

    #[must_use]
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    /// `x` of shares never used by a combination that voted for the winner
    ///
    /// Empty when nothing was recovered.
    #[must_use]
    pub fn suspected_decoys(&self) -> Vec<BigInt> {
        let Some(winner) = self.tally.winner() else {
            return Vec::new();
        };
        self.share_xs
            .iter()
            .filter(|x| !winner.supporters.contains(*x))
            .cloned()
            .collect()
    }
}

/// Interpolates every `k`-subset of `shares` and tallies the results
///
/// Never fails: a zero threshold, a threshold above the share count, and a
/// set where no subset yields a positive integer all produce a [`Recovery`]
/// without a secret.
#[must_use]
pub fn analyze(shares: &ShareSet, k: usize) -> Recovery {
    let mut recovery = Recovery {
        threshold: k,
        share_xs: shares.iter().map(|share| share.x.clone()).collect(),
        combinations_tried: 0,
        valid_combinations: 0,
        tally: VoteTally::new(),
    };

    let Ok(threshold) = Threshold::new(k) else {
        return recovery;
    };
    if *threshold > shares.len() {
        return recovery;
    }

    for (rank, combination) in (0u64..).zip(Combinations::new(shares.as_slice(), *threshold)) {
        recovery.combinations_tried += 1;
        if let Some(secret) = secret_candidate(&combination) {
            recovery.valid_combinations += 1;
            recovery.tally.record(secret, rank, &combination);
        }
    }

    recovery
}

/// Recovers the secret hidden among genuine and decoy shares
///
/// Returns the most frequent positive integer produced by interpolating
/// each `k`-subset, or `None` if there is none.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use unshroud::domain::{Share, ShareSet};
/// use unshroud::recover_secret;
///
/// let shares = ShareSet::new(vec![
///     Share::new(1, 12),
///     Share::new(2, 21),
///     Share::new(3, 34),
///     Share::new(4, 999), // decoy
/// ])
/// .unwrap();
///
/// assert_eq!(recover_secret(&shares, 3), Some(BigInt::from(7)));
/// assert_eq!(recover_secret(&shares, 0), None);
/// assert_eq!(recover_secret(&shares, 5), None);
/// ```
#[must_use]
pub fn recover_secret(shares: &ShareSet, k: usize) -> Option<BigInt> {
    analyze(shares, k).into_secret()
}
