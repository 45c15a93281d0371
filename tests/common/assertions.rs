//! Domain-specific assertion macros for fmc harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *what* normalizer invariant was violated.

// ---------------------------------------------------------------------------
// Sequence assertions
// ---------------------------------------------------------------------------

/// Assert that a normalised sequence carries exactly these values, in order.
///
/// ```rust
/// assert_values!(observations, [100.0, 200.0, 50.0, 75.0]);
/// ```
#[macro_export]
macro_rules! assert_values {
    ($observations:expr, [$($value:expr),* $(,)?]) => {{
        let actual: Vec<f64> = $observations.iter().map(|o| o.value).collect();
        let expected: Vec<f64> = vec![$($value),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "normalised values differ from expected (order matters)"
        );
    }};
}

/// Assert that a normalised sequence carries exactly these labels, in order.
/// `None` labels are compared as `"<none>"`.
#[macro_export]
macro_rules! assert_labels {
    ($observations:expr, [$($label:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $observations
            .iter()
            .map(|o| o.label.as_deref().unwrap_or("<none>"))
            .collect();
        let expected: Vec<&str> = vec![$($label),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "normalised labels differ from expected (order matters)"
        );
    }};
}

// ---------------------------------------------------------------------------
// Failure assertions
// ---------------------------------------------------------------------------

/// Assert that normalization fails with `InvalidInput` for the given raw
/// JSON string.
#[macro_export]
macro_rules! assert_invalid_input {
    ($raw:expr) => {{
        let value: serde_json::Value =
            serde_json::from_str($raw).expect("assert_invalid_input! needs valid JSON");
        match fmc_core::normalize(&value) {
            Err(fmc_core::FmcError::InvalidInput(_)) => {}
            Err(other) => panic!(
                "assert_invalid_input! failed: wrong error variant for {}:\n  {other:?}",
                $raw
            ),
            Ok(observations) => panic!(
                "assert_invalid_input! failed: {} unexpectedly normalised to {} observation(s)",
                $raw,
                observations.len()
            ),
        }
    }};
}
