//! Function - integer-valued signal over a domain
//!
//! A [`Function`] owns its value buffer exclusively. Buffer index `i`
//! corresponds to domain location `domain.inf() + i`; functions built from a
//! plain sequence use the domain `[0, N - 1]`.
//!
//! Operations either mutate the owned buffer in place (returning `&mut Self`
//! so calls can be chained) or produce a new, independently owned `Function`.

mod arith;

pub use arith::Padding;

use crate::domain::Domain;
use crate::error::{Error, Result};

/// Integer-valued 1D signal
///
/// Two functions compare equal iff their domains match and all values are
/// pairwise equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    values: Vec<i64>,
    domain: Domain,
}

impl Function {
    /// Create a function over an explicit domain
    ///
    /// Returns [`Error::LengthMismatch`] when `values.len() != domain.size()`.
    pub fn new(domain: Domain, values: Vec<i64>) -> Result<Self> {
        if values.len() != domain.size() {
            return Err(Error::LengthMismatch {
                expected: domain.size(),
                actual: values.len(),
            });
        }
        Ok(Self { values, domain })
    }

    /// Create a function over `[0, values.len() - 1]`
    pub fn from_vec(values: Vec<i64>) -> Result<Self> {
        let domain = Domain::with_len(values.len())?;
        Ok(Self { values, domain })
    }

    /// Create a function from a slice of values over `[0, N - 1]`
    pub fn from_slice(values: &[i64]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }

    /// Create a zero-valued function over `domain`
    pub fn zeros(domain: Domain) -> Self {
        Self {
            values: vec![0; domain.size()],
            domain,
        }
    }

    /// Zero-valued function on the same domain
    pub fn clone_zeros(&self) -> Self {
        Self::zeros(self.domain)
    }

    /// The function's domain
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of values (size of the domain)
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a domain holds at least one location
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at domain location `x`
    pub fn get(&self, x: i64) -> Option<i64> {
        self.domain.index_of(x).map(|i| self.values[i])
    }

    /// Set the value at domain location `x`
    pub fn set(&mut self, x: i64, value: i64) -> Result<()> {
        let i = self.domain.index_of(x).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "location {} outside domain [{}, {}]",
                x,
                self.domain.inf(),
                self.domain.sup()
            ))
        })?;
        self.values[i] = value;
        Ok(())
    }

    /// Values as a slice, in domain order
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Values as a mutable slice, in domain order
    pub fn as_slice_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    /// Consume the function and return its value buffer
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Inf of the function (global minimum)
    pub fn min(&self) -> i64 {
        self.values.iter().copied().min().unwrap_or_default()
    }

    /// Sup of the function (global maximum)
    pub fn max(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or_default()
    }

    /// Domain location of the first global maximum
    pub fn argmax(&self) -> i64 {
        let mut best = 0;
        for (i, &v) in self.values.iter().enumerate() {
            if v > self.values[best] {
                best = i;
            }
        }
        self.domain.inf() + best as i64
    }

    /// Check that `other` is defined over the same domain
    pub fn check_same_domain(&self, other: &Function) -> Result<()> {
        if self.domain != other.domain {
            return Err(Error::DomainMismatch {
                expected: (self.domain.inf(), self.domain.sup()),
                actual: (other.domain.inf(), other.domain.sup()),
            });
        }
        Ok(())
    }

    /// Test `self <= other` at every location
    ///
    /// Functions over different domains are never comparable.
    pub fn le_pointwise(&self, other: &Function) -> bool {
        self.domain == other.domain
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a <= b)
    }

    /// Iterate over values in domain order
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }
}

impl std::ops::Index<usize> for Function {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl std::ops::IndexMut<usize> for Function {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl<'a> IntoIterator for &'a Function {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl TryFrom<Vec<i64>> for Function {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::from_vec(values)
    }
}
