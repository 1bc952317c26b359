//! morphomath-test - Regression test framework for morphomath
//!
//! Supports two modes, selected by the `REGTEST_MODE` environment variable:
//!
//! - **Compare** (default): record and report every mismatch
//! - **Display**: run the checks and print results without failing
//!
//! # Usage
//!
//! ```
//! use morphomath_test::{RegParams, signal};
//!
//! let mut rp = RegParams::new("example");
//! let f = signal("0 5 0 0 8 0").unwrap();
//! rp.compare_values(8.0, f.max() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use morphomath_core::Function;

/// Build a function over `[0, N - 1]` from whitespace or comma separated
/// integers, e.g. `"0 5 0, 0 8 0"`
pub fn signal(input: &str) -> TestResult<Function> {
    let values = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|e| TestError::SignalParse {
                input: input.to_string(),
                message: format!("'{}': {}", token, e),
            })
        })
        .collect::<TestResult<Vec<i64>>>()?;
    Ok(Function::from_vec(values)?)
}
