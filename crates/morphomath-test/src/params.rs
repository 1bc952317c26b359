//! Regression test parameters and operations

use morphomath_core::Function;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Display mode - report results but never fail
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and the
/// failures recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "hdome")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values within `delta`
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two functions for exact equality (domain and values)
    pub fn compare_functions(&mut self, expected: &Function, actual: &Function) -> bool {
        self.index += 1;

        if expected.domain() != actual.domain() {
            self.record(format!(
                "Failure in {}_reg: function comparison for index {} - domain mismatch: {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.domain(),
                actual.domain()
            ));
            return false;
        }

        let mismatch = expected
            .iter()
            .zip(actual.iter())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            self.record(format!(
                "Failure in {}_reg: function comparison for index {} - value mismatch at {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name,
                self.index,
                expected.domain().inf() + i as i64,
                expected.as_slice(),
                actual.as_slice()
            ));
            return false;
        }

        true
    }

    /// Check that `lower <= upper` at every location
    pub fn compare_le(&mut self, lower: &Function, upper: &Function) -> bool {
        self.index += 1;

        if lower.le_pointwise(upper) {
            return true;
        }
        self.record(format!(
            "Failure in {}_reg: ordering check for index {}\n\
             lower = {:?}\n\
             upper = {:?}",
            self.test_name,
            self.index,
            lower.as_slice(),
            upper.as_slice()
        ));
        false
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        if self.mode == RegTestMode::Compare {
            self.success = false;
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
