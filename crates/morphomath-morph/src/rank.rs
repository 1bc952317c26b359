//! Naive rank filtering
//!
//! For every location the rank (min or max) over the structuring element
//! neighbourhood is recomputed from scratch, `O(N * |se|)` work in total.
//!
//! # Boundary policy
//!
//! Neighbours outside the domain are absent from the set, so the element
//! effectively shrinks at the edges. This is the reference policy used by
//! geodesic reconstruction and h-dome.

use crate::sel::{StructuringElement, StructuringElementIterator, SubDomain};
use morphomath_core::Function;

/// Rank operator shared by the naive and VHGW filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankOp {
    /// Minimum (erosion)
    Min,
    /// Maximum (dilation)
    Max,
}

impl RankOp {
    /// Combine two values
    #[inline]
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            RankOp::Min => a.min(b),
            RankOp::Max => a.max(b),
        }
    }

    /// Rank of a set of values, `None` for an empty set
    pub fn reduce<I: IntoIterator<Item = i64>>(self, values: I) -> Option<i64> {
        values.into_iter().reduce(|a, b| self.apply(a, b))
    }

    /// The dual operator
    pub fn dual(self) -> Self {
        match self {
            RankOp::Min => RankOp::Max,
            RankOp::Max => RankOp::Min,
        }
    }
}

/// Apply a rank filter in place
///
/// The output is computed into a fresh buffer and written back once complete.
/// A location whose neighbourhood is empty (possible only when the element
/// lacks offset 0) keeps its value.
pub fn rank_filter(
    f: &mut Function,
    sel: &StructuringElement,
    op: RankOp,
    sub_domain: SubDomain,
) {
    let domain = f.domain();
    let it = StructuringElementIterator::new(sel, domain);

    let filtered: Vec<i64> = domain
        .forward_iterator()
        .map(|i| {
            let neighbours = it.iterate_at(i, sub_domain).filter_map(|j| f.get(j));
            op.reduce(neighbours)
                .unwrap_or_else(|| f.get(i).unwrap_or_default())
        })
        .collect();

    f.as_slice_mut().copy_from_slice(&filtered);
}
