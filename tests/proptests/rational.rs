//! Property tests for exact fraction arithmetic

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use quickcheck_macros::quickcheck;
use unshroud::rational::Fraction;

fn fraction(numerator: i64, denominator: i64) -> Option<Fraction> {
    Fraction::new(BigInt::from(numerator), BigInt::from(denominator))
}

fn is_canonical(f: &Fraction) -> bool {
    f.denominator().is_positive() && f.numerator().gcd(f.denominator()).is_one()
}

/// Every constructed or derived fraction is reduced with a positive denominator
#[quickcheck]
fn prop_results_stay_canonical(a: (i64, i64), b: (i64, i64)) -> bool {
    let (Some(x), Some(y)) = (fraction(a.0, a.1), fraction(b.0, b.1)) else {
        return true; // zero denominator
    };

    [x.clone(), &x + &y, &x * &y, -x.clone()]
        .iter()
        .all(is_canonical)
}

/// Addition matches cross-multiplication and commutes
#[quickcheck]
fn prop_add_matches_cross_multiplication(a: (i32, i32), b: (i32, i32)) -> bool {
    let (Some(x), Some(y)) = (
        fraction(a.0.into(), a.1.into()),
        fraction(b.0.into(), b.1.into()),
    ) else {
        return true;
    };

    let expected = Fraction::new(
        BigInt::from(a.0) * b.1 + BigInt::from(b.0) * a.1,
        BigInt::from(a.1) * b.1,
    );

    Some(&x + &y) == expected && &x + &y == &y + &x
}

/// A fraction is an integer exactly when its denominator divides its numerator
#[quickcheck]
fn prop_to_integer_iff_divisible(numerator: i64, denominator: i64) -> bool {
    let Some(f) = fraction(numerator, denominator) else {
        return true;
    };

    let divisible = BigInt::from(numerator).is_multiple_of(&BigInt::from(denominator));
    f.to_integer().is_some() == divisible
}

/// Negating twice is the identity and x + (-x) is zero
#[quickcheck]
fn prop_negation(numerator: i64, denominator: i64) -> bool {
    let Some(f) = fraction(numerator, denominator) else {
        return true;
    };

    -(-f.clone()) == f && &f + &(-&f) == Fraction::zero()
}
