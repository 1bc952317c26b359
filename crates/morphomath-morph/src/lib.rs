//! morphomath-morph - Morphological operations on 1D integer signals
//!
//! This crate provides:
//!
//! - Structuring elements with `+`/`-` half neighbourhoods
//! - A naive rank filter (edge-shrinking boundary policy) and the
//!   Van Herk / Gill-Werman linear-time filter for balls of any radius
//! - Erosion, dilation, opening, closing, top-hat, bottom-hat, gradient
//! - Geodesic reconstruction (fixed-point and sequential-scan) and h-dome
//! - Morphological sequence operations for chaining multiple operations
//! - Spectral peak extraction from decibel spectra

mod error;
pub mod grayscale;
pub mod rank;
pub mod reconstruct;
pub mod sel;
pub mod sequence;
pub mod spectrum;
pub mod vhgw;

pub use error::{MorphError, MorphResult};
pub use rank::{RankOp, rank_filter};
pub use sel::{StructuringElement, StructuringElementIterator, SubDomain, unit_ball};

pub use grayscale::{bottom_hat, close, dilate, erode, gradient, open, top_hat};

pub use vhgw::{close_vhgw, dilate_vhgw, erode_vhgw, open_vhgw, rank_filter_vhgw};

pub use reconstruct::{geodesic_reconstruction, geodesic_reconstruction_sequential, h_dome};

pub use sequence::{MorphOp, MorphSequence, morph_sequence};

pub use spectrum::{prominent_peak, quantize_decibels, spectrum_h_dome};
