//! A single interpolation point

use num_bigint::BigInt;

/// A point `(x, y)` that may or may not lie on the secret polynomial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
