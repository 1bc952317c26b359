//! Morphomath - 1D mathematical morphology for quantized signals
//!
//! Rank-order filters, geodesic reconstruction and h-dome extraction over
//! integer-valued 1D functions such as a power spectrum in decibels.
//!
//! # Example
//!
//! ```
//! use morphomath::{Function, morph::h_dome};
//!
//! let spectrum = Function::from_vec(vec![0, 0, 10, 0, 0]).unwrap();
//! let domes = h_dome(&spectrum, 4).unwrap();
//! assert_eq!(domes.as_slice(), &[0, 0, 4, 0, 0]);
//! assert_eq!(domes.argmax(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use morphomath_core::*;

// Re-export the morphology crate as a module to avoid name conflicts
pub use morphomath_morph as morph;
