//! Validated, ordered collection of shares

use anyhow::{Result, bail};
use num_traits::Signed;

use super::Share;

/// Shares sorted ascending by `x`
///
/// Enforces that every `x` is positive and unique and that every `y` is
/// non-negative. Once built the set is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareSet(Vec<Share>);

impl ShareSet {
    /// Creates a share set, sorting the shares by `x`
    ///
    /// # Errors
    /// Returns an error if any `x` is zero or negative, any `y` is negative,
    /// or two shares have the same `x`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unshroud::domain::{Share, ShareSet};
    ///
    /// let set = ShareSet::new(vec![Share::new(3, 34), Share::new(1, 12)]).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.as_slice()[0], Share::new(1, 12));
    ///
    /// // Two shares cannot sit at the same x
    /// assert!(ShareSet::new(vec![Share::new(2, 5), Share::new(2, 7)]).is_err());
    ///
    /// // x = 0 would be the secret itself
    /// assert!(ShareSet::new(vec![Share::new(0, 5)]).is_err());
    /// ```
    pub fn new(mut shares: Vec<Share>) -> Result<Self> {
        for share in &shares {
            if !share.x.is_positive() {
                bail!("Share x must be positive (got {})", share.x);
            }
            if share.y.is_negative() {
                bail!("Share at x = {} has negative value {}", share.x, share.y);
            }
        }

        shares.sort_by(|a, b| a.x.cmp(&b.x));

        if let Some(pair) = shares.windows(2).find(|pair| pair[0].x == pair[1].x) {
            bail!("Duplicate share at x = {}", pair[0].x);
        }

        Ok(Self(shares))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Share] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
