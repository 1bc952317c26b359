//! Van Herk / Gill-Werman linear-time rank filter
//!
//! Filters with a ball of radius `r` in `O(N)` total work, independent of
//! `r`. The signal is cut into blocks of `S = 2r + 1` samples; a forward
//! running rank restarts at every block start and a backward running rank
//! restarts at every block end, so any window of `S` samples is covered by
//! one forward and one backward value.
//!
//! # Boundary policy
//!
//! Windows clipped by the left edge read the forward buffer alone; windows
//! running past the right edge combine the backward buffer with the last
//! forward value while inside the final (synthetic) padding block, and read
//! the backward buffer alone beyond it. None of these reads touches a sample
//! outside the domain. Geodesic reconstruction and h-dome
//! never use this filter; they rely on [`rank_filter`](crate::rank_filter).
//!
//! # Reference
//!
//! C. Clienti, M. Bilodeau and S. Beucher, "An Efficient Hardware
//! Architecture without Line Memories for Morphological Image Processing",
//! ACIVS 2008, pp. 147-156.

use crate::rank::RankOp;
use morphomath_core::Function;

/// Apply a VHGW rank filter with a ball of `radius`, in place
#[allow(clippy::needless_range_loop)]
pub fn rank_filter_vhgw(f: &mut Function, radius: u32, op: RankOp) {
    let values = f.as_slice();
    let n = values.len();
    let r = radius as usize;
    let size = 2 * r + 1;
    let sup = n - 1;
    let padding = size - sup % size - 1;
    let sup_plus_padding = n + padding;

    let mut forward = vec![0; n];
    for i in 0..n {
        forward[i] = if i % size == 0 {
            values[i]
        } else {
            op.apply(forward[i - 1], values[i])
        };
    }

    let mut backward = vec![0; n];
    for i in (0..n).rev() {
        backward[i] = if i == sup || (i + 1) % size == 0 {
            values[i]
        } else {
            op.apply(backward[i + 1], values[i])
        };
    }

    let filtered: Vec<i64> = (0..n)
        .map(|i| {
            let right = i + r;
            match i.checked_sub(r) {
                // The whole domain fits in the first block when the window
                // overhangs both edges.
                None => forward[right.min(sup)],
                Some(left) if right >= n => {
                    if right < sup_plus_padding {
                        op.apply(forward[sup], backward[left])
                    } else {
                        backward[left]
                    }
                }
                Some(left) => op.apply(forward[right], backward[left]),
            }
        })
        .collect();

    f.as_slice_mut().copy_from_slice(&filtered);
}

/// Erode with a ball of `radius` using the VHGW algorithm
pub fn erode_vhgw(f: &Function, radius: u32) -> Function {
    let mut out = f.clone();
    rank_filter_vhgw(&mut out, radius, RankOp::Min);
    out
}

/// Dilate with a ball of `radius` using the VHGW algorithm
pub fn dilate_vhgw(f: &Function, radius: u32) -> Function {
    let mut out = f.clone();
    rank_filter_vhgw(&mut out, radius, RankOp::Max);
    out
}

/// Open (erode then dilate) with a ball of `radius` using the VHGW algorithm
pub fn open_vhgw(f: &Function, radius: u32) -> Function {
    let mut out = f.clone();
    rank_filter_vhgw(&mut out, radius, RankOp::Min);
    rank_filter_vhgw(&mut out, radius, RankOp::Max);
    out
}

/// Close (dilate then erode) with a ball of `radius` using the VHGW algorithm
pub fn close_vhgw(f: &Function, radius: u32) -> Function {
    let mut out = f.clone();
    rank_filter_vhgw(&mut out, radius, RankOp::Max);
    rank_filter_vhgw(&mut out, radius, RankOp::Min);
    out
}
