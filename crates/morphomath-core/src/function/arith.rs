//! Function arithmetic: sums, saturating differences, translation and
//! point-wise rank operations.
//!
//! All binary operations require both operands to share a domain and
//! return [`Error::DomainMismatch`](crate::Error::DomainMismatch) otherwise.

use super::Function;
use crate::error::Result;

/// Fill value for locations vacated by [`Function::translate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Pad with zero, the inf of a non-negative signal
    #[default]
    Zero,
    /// Pad with the current sup of the function
    Max,
}

impl Function {
    /// Add `other` element-wise, in place
    ///
    /// No clamping is applied: the sum may exceed either operand's range.
    pub fn add(&mut self, other: &Function) -> Result<&mut Self> {
        self.check_same_domain(other)?;
        for (a, &b) in self.values.iter_mut().zip(&other.values) {
            *a = a.saturating_add(b);
        }
        Ok(self)
    }

    /// Subtract `other` element-wise, in place, clamping negatives to zero
    ///
    /// Intensities are non-negative, so this is a saturating difference and
    /// not a plain integer subtraction.
    pub fn subtract(&mut self, other: &Function) -> Result<&mut Self> {
        self.check_same_domain(other)?;
        for (a, &b) in self.values.iter_mut().zip(&other.values) {
            *a = a.saturating_sub(b).max(0);
        }
        Ok(self)
    }

    /// Add a constant to every value, in place
    pub fn add_constant(&mut self, value: i64) -> &mut Self {
        for a in self.values.iter_mut() {
            *a = a.saturating_add(value);
        }
        self
    }

    /// Subtract a constant from every value, in place, clamping at zero
    pub fn subtract_constant(&mut self, value: i64) -> &mut Self {
        for a in self.values.iter_mut() {
            *a = a.saturating_sub(value).max(0);
        }
        self
    }

    /// Point-wise maximum with `other`, in place
    pub fn pointwise_max(&mut self, other: &Function) -> Result<&mut Self> {
        self.check_same_domain(other)?;
        for (a, &b) in self.values.iter_mut().zip(&other.values) {
            *a = (*a).max(b);
        }
        Ok(self)
    }

    /// Point-wise minimum with `other`, in place
    pub fn pointwise_min(&mut self, other: &Function) -> Result<&mut Self> {
        self.check_same_domain(other)?;
        for (a, &b) in self.values.iter_mut().zip(&other.values) {
            *a = (*a).min(b);
        }
        Ok(self)
    }

    /// Shift all values by `offset` positions, in place
    ///
    /// A positive offset moves values towards `sup`. Vacated locations are
    /// filled according to `padding`; an offset of at least the domain size
    /// leaves only padding. `offset == 0` is the identity.
    pub fn translate(&mut self, offset: i64, padding: Padding) -> &mut Self {
        if offset == 0 {
            return self;
        }

        let pad_value = match padding {
            Padding::Zero => 0,
            Padding::Max => self.max(),
        };

        let n = self.values.len();
        let shift = offset.unsigned_abs().min(n as u64) as usize;
        let mut shifted = vec![pad_value; n];
        if offset > 0 {
            shifted[shift..].copy_from_slice(&self.values[..n - shift]);
        } else {
            shifted[..n - shift].copy_from_slice(&self.values[shift..]);
        }
        self.values = shifted;
        self
    }
}
