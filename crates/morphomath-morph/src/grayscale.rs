//! Grayscale morphological operations on 1D functions
//!
//! - **Dilation**: maximum over the structuring element neighbourhood
//! - **Erosion**: minimum over the structuring element neighbourhood
//! - **Opening**: erosion followed by dilation (removes small positive spikes)
//! - **Closing**: dilation followed by erosion (fills small negative notches)
//! - **Top-hat**: `f - open(f)`, the features narrower than the element
//! - **Bottom-hat**: `close(f) - f`, the notches narrower than the element
//! - **Gradient**: `dilate(f) - erode(f)`
//!
//! Every operation leaves its input untouched and returns a new function.
//! Differences use the saturating subtraction of [`Function::subtract`].

use crate::rank::{RankOp, rank_filter};
use crate::sel::{StructuringElement, SubDomain};
use morphomath_core::Function;

/// Dilate a function with a structuring element
pub fn dilate(f: &Function, sel: &StructuringElement) -> Function {
    let mut out = f.clone();
    rank_filter(&mut out, sel, RankOp::Max, SubDomain::Full);
    out
}

/// Erode a function with a structuring element
pub fn erode(f: &Function, sel: &StructuringElement) -> Function {
    let mut out = f.clone();
    rank_filter(&mut out, sel, RankOp::Min, SubDomain::Full);
    out
}

/// Open a function (erosion followed by dilation)
pub fn open(f: &Function, sel: &StructuringElement) -> Function {
    let mut out = f.clone();
    rank_filter(&mut out, sel, RankOp::Min, SubDomain::Full);
    rank_filter(&mut out, sel, RankOp::Max, SubDomain::Full);
    out
}

/// Close a function (dilation followed by erosion)
pub fn close(f: &Function, sel: &StructuringElement) -> Function {
    let mut out = f.clone();
    rank_filter(&mut out, sel, RankOp::Max, SubDomain::Full);
    rank_filter(&mut out, sel, RankOp::Min, SubDomain::Full);
    out
}

/// Top-hat transform (original - opening)
pub fn top_hat(f: &Function, sel: &StructuringElement) -> Function {
    let opened = open(f, sel);
    saturating_difference(f, &opened)
}

/// Bottom-hat transform (closing - original)
pub fn bottom_hat(f: &Function, sel: &StructuringElement) -> Function {
    let closed = close(f, sel);
    saturating_difference(&closed, f)
}

/// Morphological gradient (dilation - erosion)
pub fn gradient(f: &Function, sel: &StructuringElement) -> Function {
    let dilated = dilate(f, sel);
    let eroded = erode(f, sel);
    saturating_difference(&dilated, &eroded)
}

/// `a - b` clamped at zero; both operands come from the same domain
fn saturating_difference(a: &Function, b: &Function) -> Function {
    let mut out = a.clone();
    for (x, &y) in out.as_slice_mut().iter_mut().zip(b.iter()) {
        *x = x.saturating_sub(y).max(0);
    }
    out
}
