//! Exact rational arithmetic over arbitrary-precision integers
//!
//! Every [`Fraction`] is kept in lowest terms with a positive denominator,
//! so two fractions are equal exactly when their fields are equal.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// A reduced fraction `numerator / denominator`
///
/// Invariant: `denominator > 0` and `gcd(|numerator|, denominator) == 1`.
/// Zero is always stored as `0 / 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds a fraction from any numerator and non-zero denominator
    ///
    /// Returns `None` when `denominator` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use unshroud::rational::Fraction;
    ///
    /// let half = Fraction::new(BigInt::from(-4), BigInt::from(-8)).unwrap();
    /// assert_eq!(half.numerator(), &BigInt::from(1));
    /// assert_eq!(half.denominator(), &BigInt::from(2));
    ///
    /// assert!(Fraction::new(BigInt::from(1), BigInt::from(0)).is_none());
    /// ```
    #[must_use]
    pub fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        let mut fraction = Self {
            numerator,
            denominator,
        };
        fraction.normalize_sign();
        fraction.reduce();
        Some(fraction)
    }

    /// The fraction `0 / 1`
    #[must_use]
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// Lifts an integer to `n / 1`
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns the value as an integer when the denominator is exactly one
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use unshroud::rational::Fraction;
    ///
    /// let six = Fraction::new(BigInt::from(12), BigInt::from(2)).unwrap();
    /// assert_eq!(six.to_integer(), Some(BigInt::from(6)));
    ///
    /// let third = Fraction::new(BigInt::from(1), BigInt::from(3)).unwrap();
    /// assert_eq!(third.to_integer(), None);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        self.denominator
            .is_one()
            .then(|| self.numerator.clone())
    }

    fn normalize_sign(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -std::mem::take(&mut self.numerator);
            self.denominator = -std::mem::take(&mut self.denominator);
        }
    }

    // gcd(0, d) == d, so a zero numerator collapses to 0 / 1. The
    // denominator is never zero here, which keeps the divisor non-zero.
    fn reduce(&mut self) {
        let divisor = self.numerator.gcd(&self.denominator);
        if !divisor.is_one() {
            self.numerator /= &divisor;
            self.denominator /= &divisor;
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let mut sum = Fraction {
            numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            denominator: &self.denominator * &rhs.denominator,
        };
        sum.reduce();
        sum
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        let mut product = Fraction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        };
        product.reduce();
        product
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_new_reduces_to_lowest_terms() {
        let f = frac(6, 8);
        assert_eq!(f.numerator(), &BigInt::from(3));
        assert_eq!(f.denominator(), &BigInt::from(4));
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        let f = frac(3, -9);
        assert_eq!(f.numerator(), &BigInt::from(-1));
        assert_eq!(f.denominator(), &BigInt::from(3));

        let g = frac(-3, -9);
        assert_eq!(g, frac(1, 3));
    }

    #[test]
    fn test_zero_numerator_is_canonical() {
        assert_eq!(frac(0, -17), Fraction::zero());
        assert_eq!(frac(0, 5).denominator(), &BigInt::one());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(Fraction::new(BigInt::from(0), BigInt::from(0)).is_none());
        assert!(Fraction::new(BigInt::from(7), BigInt::from(0)).is_none());
    }

    #[test]
    fn test_add() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 6) + frac(1, 3), frac(1, 2));
        assert_eq!(frac(3, 4) + frac(-3, 4), Fraction::zero());
        assert_eq!(&frac(-1, 2) + &frac(-1, 2), frac(-1, 1));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(frac(2, 3) * frac(9, 4), frac(3, 2));
        assert_eq!(frac(-2, 3) * frac(3, -2), frac(1, 1));
        assert_eq!(&frac(5, 7) * &Fraction::zero(), Fraction::zero());
    }

    #[test]
    fn test_negate() {
        assert_eq!(-frac(2, 5), frac(-2, 5));
        assert_eq!(-&frac(-2, 5), frac(2, 5));
        assert_eq!(-Fraction::zero(), Fraction::zero());
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(frac(10, 5).to_integer(), Some(BigInt::from(2)));
        assert_eq!(frac(-10, 5).to_integer(), Some(BigInt::from(-2)));
        assert_eq!(Fraction::zero().to_integer(), Some(BigInt::zero()));
        assert_eq!(frac(10, 4).to_integer(), None);
    }

    #[test]
    fn test_no_precision_loss_beyond_u128() {
        let big = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
        let f = Fraction::new(&big * BigInt::from(3), BigInt::from(3)).unwrap();
        assert_eq!(f.to_integer(), Some(big.clone()));

        let sum = &f + &Fraction::new(BigInt::one(), big.clone()).unwrap();
        assert_eq!(sum.denominator(), &big);
        assert_eq!(sum.to_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(4, 2).to_string(), "2");
        assert_eq!(frac(-1, 3).to_string(), "-1/3");
    }
}
