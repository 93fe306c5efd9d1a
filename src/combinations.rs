//! Lazy enumeration of fixed-size subsets
//!
//! [`Combinations`] walks every `k`-element subset of a slice exactly once in
//! increasing-index lexicographic order. Only the current index vector is
//! kept between steps, so memory stays at `O(k)` regardless of how many
//! subsets exist. Each yielded subset is a fresh `Vec` that shares nothing
//! with the iterator's internal state.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Iterator over all `k`-element subsets of `items`
///
/// Subsets preserve the relative order of `items`. For `k == 0` or
/// `k > items.len()` the iterator is empty.
///
/// # Examples
///
/// ```rust
/// use unshroud::combinations::Combinations;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// let picks: Vec<String> = Combinations::new(&letters, 2)
///     .map(|combo| combo.into_iter().collect())
///     .collect();
///
/// assert_eq!(picks, ["ab", "ac", "ad", "bc", "bd", "cd"]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> Combinations<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T], k: usize) -> Self {
        // k is not bounded by the input, so no indices are allocated unless
        // a subset actually exists
        let exhausted = k == 0 || k > items.len();
        Self {
            items,
            indices: if exhausted { Vec::new() } else { (0..k).collect() },
            exhausted,
        }
    }

    /// Moves `indices` to the next subset, or marks the iterator exhausted
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.exhausted = true;
            return;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let items = self.items;
        let combo = self.indices.iter().map(|&i| &items[i]).collect();
        self.advance();
        Some(combo)
    }
}

impl<T> std::iter::FusedIterator for Combinations<'_, T> {}

/// Number of `k`-element subsets of an `n`-element set, `C(n, k)`
///
/// Zero when `k == 0` or `k > n`, matching what [`Combinations`] yields.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use unshroud::combinations::combination_count;
///
/// assert_eq!(combination_count(4, 3), BigUint::from(4u8));
/// assert_eq!(combination_count(10, 5), BigUint::from(252u16));
/// assert_eq!(combination_count(3, 5), BigUint::from(0u8));
/// ```
#[must_use]
pub fn combination_count(n: usize, k: usize) -> BigUint {
    if k == 0 || k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    // Running product stays integral: after step i it equals C(n - k + i, i)
    (1..=k).fold(BigUint::one(), |acc, i| acc * (n - k + i) / i)
}
