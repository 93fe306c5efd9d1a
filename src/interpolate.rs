//! Exact Lagrange interpolation at `x = 0`
//!
//! For points `(x_j, y_j)` the constant term of the unique polynomial of
//! degree `< k` through them is
//!
//! ```text
//! f(0) = Σ_j  y_j · Π_{i≠j} (0 - x_i) / (x_j - x_i)
//! ```
//!
//! Every term is carried as a reduced [`Fraction`], so the result is exact
//! no matter how large the `x` differences grow.

use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::domain::Share;
use crate::rational::Fraction;

/// Constant term of the polynomial through `shares`, as an exact fraction
///
/// Returns `None` if two shares have the same `x` (the basis denominator
/// would be zero). An empty slice interpolates to zero; a single share
/// interpolates to its own `y`.
#[must_use]
pub fn constant_term(shares: &[&Share]) -> Option<Fraction> {
    let mut total = Fraction::zero();

    for (j, share_j) in shares.iter().enumerate() {
        let mut basis_num = BigInt::one();
        let mut basis_den = BigInt::one();

        for (i, share_i) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            basis_num *= -&share_i.x;
            basis_den *= &share_j.x - &share_i.x;
        }

        let term = Fraction::new(&share_j.y * basis_num, basis_den)?;
        total = &total + &term;
    }

    Some(total)
}

/// Secret encoded by `shares`, if they interpolate to a positive integer
///
/// A fractional or non-positive constant term means the subset cannot be
/// the genuine one; that is an ordinary outcome and yields `None`.
///
/// # Examples
///
/// ```rust
/// use unshroud::domain::Share;
/// use unshroud::interpolate::secret_candidate;
///
/// // f(x) = 2x^2 + 3x + 7
/// let genuine = [Share::new(1, 12), Share::new(2, 21), Share::new(3, 34)];
/// let refs: Vec<_> = genuine.iter().collect();
/// assert_eq!(secret_candidate(&refs), Some(7.into()));
///
/// // (1, 1) and (3, 2) meet the y axis at 1/2
/// let skewed = [Share::new(1, 1), Share::new(3, 2)];
/// let refs: Vec<_> = skewed.iter().collect();
/// assert_eq!(secret_candidate(&refs), None);
/// ```
#[must_use]
pub fn secret_candidate(shares: &[&Share]) -> Option<BigInt> {
    constant_term(shares)?
        .to_integer()
        .filter(BigInt::is_positive)
}
