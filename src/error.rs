//! Error types for the uncertain-bounds library.
//!
//! Arithmetic and transcendental operations never fail: domain violations
//! travel through the `value` and `error` fields as NaN or infinity. The
//! errors defined here only come from validated construction and parsing.

use std::num::ParseFloatError;

use thiserror::Error;

/// The main error type for the uncertain-bounds library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UncertainError {
    /// Error when an error bound is rejected by a validating constructor.
    #[error("Invalid error bound {error}: {constraint}")]
    InvalidError {
        /// The rejected error bound
        error: f64,
        /// A description of the constraint that was violated
        constraint: &'static str,
    },

    /// Error when a nominal value is NaN.
    #[error("Non-finite value: {value}")]
    NonFiniteValue {
        /// The rejected nominal value
        value: f64,
    },

    /// Error when interval bounds are reversed or not finite.
    #[error("Invalid bounds: [{lower}, {upper}] must be finite with lower <= upper")]
    InvalidBounds {
        /// The lower end of the interval
        lower: f64,
        /// The upper end of the interval
        upper: f64,
    },

    /// Error when parsing an empty string.
    #[error("Empty input: expected a value such as `1.5 ± 0.1`")]
    EmptyInput,

    /// Error when one of the numeric components fails to parse.
    #[error("Invalid number '{input}': {source}")]
    InvalidNumber {
        /// The offending component
        input: String,
        /// The underlying float parse error
        #[source]
        source: ParseFloatError,
    },

    /// Error when the text does not have the `value ± error` shape.
    #[error("Malformed input '{input}': {reason}")]
    MalformedInput {
        /// The full input text
        input: String,
        /// Why the text was rejected
        reason: &'static str,
    },
}

/// A specialized `Result` type for validated construction and parsing.
pub type Result<T> = std::result::Result<T, UncertainError>;

impl UncertainError {
    /// Create an error for a rejected error bound.
    ///
    /// # Example
    /// ```
    /// use uncertain_bounds::error::UncertainError;
    ///
    /// let error = UncertainError::invalid_error(-0.5, "must be non-negative");
    /// assert!(error.to_string().contains("-0.5"));
    /// ```
    pub fn invalid_error(error: f64, constraint: &'static str) -> Self {
        Self::InvalidError { error, constraint }
    }

    /// Create an error for a NaN nominal value.
    pub fn non_finite(value: f64) -> Self {
        Self::NonFiniteValue { value }
    }

    /// Create an error for reversed interval bounds.
    ///
    /// # Example
    /// ```
    /// use uncertain_bounds::error::UncertainError;
    ///
    /// let error = UncertainError::invalid_bounds(2.0, 1.0);
    /// assert!(error.to_string().contains("lower 2"));
    /// ```
    pub fn invalid_bounds(lower: f64, upper: f64) -> Self {
        Self::InvalidBounds { lower, upper }
    }

    /// Create an error for an unparsable numeric component.
    pub fn invalid_number(input: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            source,
        }
    }

    /// Create an error for structurally malformed text.
    pub fn malformed(input: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedInput {
            input: input.into(),
            reason,
        }
    }
}
