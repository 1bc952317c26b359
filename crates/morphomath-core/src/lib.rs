//! Morphomath Core - Basic data structures for 1D mathematical morphology
//!
//! This crate provides the data structures shared by the morphology
//! operators:
//!
//! - [`Domain`] - Closed integer index range `[inf, sup]`
//! - [`Function`] - Integer-valued signal over a domain, with saturating
//!   arithmetic, translation and point-wise rank operations
//!
//! Intensities are treated as non-negative: [`Function::subtract`] clamps
//! negative results to zero.

pub mod domain;
pub mod error;
pub mod function;

pub use domain::Domain;
pub use error::{Error, Result};
pub use function::{Function, Padding};
