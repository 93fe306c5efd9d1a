//! Threshold newtype for secret recovery

use anyhow::Result;

/// Number of genuine shares that determine the secret polynomial (1..)
///
/// Invariant: threshold >= 1 (enforced at construction).
/// The polynomial has degree `threshold - 1`; a threshold of one means every
/// share carries the secret directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns an error if the threshold is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unshroud::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // A single share is a degenerate but valid threshold
    /// assert!(Threshold::new(1).is_ok());
    ///
    /// // No secret is spread over zero shares
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
