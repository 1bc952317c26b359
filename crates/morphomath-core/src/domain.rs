//! Domain - closed integer index range
//!
//! A [`Domain`] is the support `[inf, sup]` of a [`Function`](crate::Function).
//! Locations are signed so that structuring element offsets can be added to
//! them without wrapping; out-of-range candidates are filtered with
//! [`Domain::contains`].

use crate::error::{Error, Result};
use std::iter::Rev;
use std::ops::RangeInclusive;

/// Closed integer range `[inf, sup]` with `inf <= sup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    inf: i64,
    sup: i64,
}

impl Domain {
    /// Create a domain `[inf, sup]`
    ///
    /// Returns [`Error::InvalidDomain`] when `inf > sup` or when the number
    /// of locations does not fit in a `usize`.
    pub fn new(inf: i64, sup: i64) -> Result<Self> {
        if inf > sup {
            return Err(Error::InvalidDomain { inf, sup });
        }
        sup.checked_sub(inf)
            .and_then(|d| d.checked_add(1))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(Error::InvalidDomain { inf, sup })?;
        Ok(Self { inf, sup })
    }

    /// Create the domain `[0, len - 1]`
    pub fn with_len(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        let sup = i64::try_from(len - 1).map_err(|_| Error::InvalidDomain {
            inf: 0,
            sup: i64::MAX,
        })?;
        Self::new(0, sup)
    }

    /// Lower bound (inclusive)
    #[inline]
    pub fn inf(&self) -> i64 {
        self.inf
    }

    /// Upper bound (inclusive)
    #[inline]
    pub fn sup(&self) -> i64 {
        self.sup
    }

    /// Number of locations, `sup - inf + 1`
    ///
    /// Cannot overflow: [`Domain::new`] rejects ranges whose size exceeds
    /// `i64::MAX`.
    #[inline]
    pub fn size(&self) -> usize {
        (self.sup - self.inf + 1) as usize
    }

    /// Test whether `x` lies in `[inf, sup]`
    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.inf <= x && x <= self.sup
    }

    /// Buffer index of a location, if it lies in the domain
    #[inline]
    pub fn index_of(&self, x: i64) -> Option<usize> {
        self.contains(x).then(|| (x - self.inf) as usize)
    }

    /// Ascending sequence `inf, inf + 1, ..., sup`
    pub fn forward_iterator(&self) -> RangeInclusive<i64> {
        self.inf..=self.sup
    }

    /// Descending sequence `sup, sup - 1, ..., inf`
    pub fn backward_iterator(&self) -> Rev<RangeInclusive<i64>> {
        (self.inf..=self.sup).rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_bounds() {
        let d = Domain::new(-2, 5).unwrap();
        assert_eq!(d.size(), 8);
        assert_eq!(d.inf(), -2);
        assert_eq!(d.sup(), 5);
    }

    #[test]
    fn test_single_point_domain() {
        let d = Domain::new(3, 3).unwrap();
        assert_eq!(d.size(), 1);
        assert!(d.contains(3));
        assert!(!d.contains(2));
    }

    #[test]
    fn test_reversed_bounds_error() {
        assert_eq!(
            Domain::new(4, 1),
            Err(Error::InvalidDomain { inf: 4, sup: 1 })
        );
    }

    #[test]
    fn test_too_wide_domain_rejected() {
        assert_eq!(
            Domain::new(i64::MIN, i64::MAX),
            Err(Error::InvalidDomain {
                inf: i64::MIN,
                sup: i64::MAX
            })
        );
        assert!(Domain::new(0, i64::MAX).is_err());
        assert!(Domain::new(-1, i64::MAX - 1).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_widest_domain_size() {
        let d = Domain::new(1, i64::MAX).unwrap();
        assert_eq!(d.size() as u64, i64::MAX as u64);
        assert_eq!(d.index_of(i64::MAX), Some((i64::MAX - 1) as usize));

        let d = Domain::new(i64::MIN, -2).unwrap();
        assert_eq!(d.size() as u64, i64::MAX as u64);
        assert_eq!(d.index_of(-2), Some((i64::MAX - 1) as usize));
    }

    #[test]
    fn test_with_len() {
        let d = Domain::with_len(6).unwrap();
        assert_eq!((d.inf(), d.sup()), (0, 5));
        assert_eq!(Domain::with_len(0), Err(Error::EmptyInput));
    }

    #[test]
    fn test_contains() {
        let d = Domain::new(0, 4).unwrap();
        assert!(d.contains(0));
        assert!(d.contains(4));
        assert!(!d.contains(-1));
        assert!(!d.contains(5));
    }

    #[test]
    fn test_index_of() {
        let d = Domain::new(10, 12).unwrap();
        assert_eq!(d.index_of(10), Some(0));
        assert_eq!(d.index_of(12), Some(2));
        assert_eq!(d.index_of(13), None);
    }

    #[test]
    fn test_iterators_are_restartable() {
        let d = Domain::new(1, 4).unwrap();
        let fwd: Vec<i64> = d.forward_iterator().collect();
        let bwd: Vec<i64> = d.backward_iterator().collect();
        assert_eq!(fwd, vec![1, 2, 3, 4]);
        assert_eq!(bwd, vec![4, 3, 2, 1]);
        assert_eq!(d.forward_iterator().count(), 4);
    }
}
