#![allow(clippy::float_cmp)]

use crate::error::{Result, UncertainError};
use std::fmt;
use std::str::FromStr;

/// A nominal value paired with a worst-case bound on its absolute deviation.
///
/// `Uncertain` is a plain `Copy` value: every operation reads its operands and
/// builds a new result. The error bound is expected to be non-negative, but
/// [`Uncertain::new`] does not check it, and some boundary cases of the
/// propagation rules produce infinite or NaN bounds on purpose. Callers test
/// the returned fields for NaN and infinity the same way they would with
/// plain `f64` math.
///
/// # Example
/// ```rust
/// use uncertain_bounds::Uncertain;
///
/// let length = Uncertain::new(10.0, 1.0);
/// let width = Uncertain::new(5.0, 0.5);
/// let area = length * width;
///
/// assert_eq!(area.value, 50.0);
/// assert!((area.error - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uncertain {
    /// The nominal (central) estimate
    pub value: f64,
    /// Bound on the absolute deviation from `value`
    pub error: f64,
}

impl Uncertain {
    /// Creates an uncertain value without validating the error bound.
    #[must_use]
    pub const fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }

    /// Creates a value known exactly (zero error bound).
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let two = Uncertain::exact(2.0);
    /// assert!(two.is_exact());
    /// ```
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self { value, error: 0.0 }
    }

    /// Creates an uncertain value, rejecting a NaN value and a negative or
    /// NaN error bound.
    ///
    /// # Errors
    /// Returns [`UncertainError::NonFiniteValue`] for a NaN value and
    /// [`UncertainError::InvalidError`] for a bad error bound.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// assert!(Uncertain::try_new(1.0, 0.1).is_ok());
    /// assert!(Uncertain::try_new(1.0, -0.1).is_err());
    /// ```
    pub fn try_new(value: f64, error: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(UncertainError::non_finite(value));
        }
        if error.is_nan() {
            return Err(UncertainError::invalid_error(error, "must be a number"));
        }
        if error < 0.0 {
            return Err(UncertainError::invalid_error(error, "must be non-negative"));
        }
        Ok(Self::new(value, error))
    }

    /// Creates the uncertain value covering the closed interval
    /// `[lower, upper]`: midpoint plus or minus half the width.
    ///
    /// # Errors
    /// Returns [`UncertainError::InvalidBounds`] when `lower > upper` or
    /// either bound is not finite.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let v = Uncertain::from_bounds(9.0, 11.0).unwrap();
    /// assert_eq!(v, Uncertain::new(10.0, 1.0));
    /// ```
    pub fn from_bounds(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(UncertainError::invalid_bounds(lower, upper));
        }
        let value = lower / 2.0 + upper / 2.0;
        let error = upper / 2.0 - lower / 2.0;
        Ok(Self::new(value, error))
    }

    /// Lower end of the bounded interval.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.value - self.error
    }

    /// Upper end of the bounded interval.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.value + self.error
    }

    /// Both ends of the bounded interval as `(lower, upper)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower(), self.upper())
    }

    /// Error bound relative to the magnitude of the value.
    ///
    /// Infinite for a zero value with a nonzero error, NaN when both are zero.
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        self.error / self.value.abs()
    }

    /// Whether the error bound is zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.error == 0.0
    }

    /// Whether both the value and the error bound are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.error.is_finite()
    }

    /// Whether `x` lies inside the bounded interval, ends included.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let (lower, upper) = self.bounds();
        lower <= x && x <= upper
    }
}

impl From<f64> for Uncertain {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

impl From<(f64, f64)> for Uncertain {
    fn from((value, error): (f64, f64)) -> Self {
        Self::new(value, error)
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "{:.*} ± {:.*}",
                precision, self.value, precision, self.error
            ),
            None => write!(f, "{} ± {}", self.value, self.error),
        }
    }
}

const SEPARATORS: [&str; 3] = ["±", "+/-", "+-"];

impl FromStr for Uncertain {
    type Err = UncertainError;

    /// Parses `"value ± error"`, `"value +/- error"`, `"value+-error"` or a
    /// bare `"value"` (exact).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UncertainError::EmptyInput);
        }

        let split = SEPARATORS
            .iter()
            .find_map(|&sep| trimmed.split_once(sep));

        let Some((value_text, error_text)) = split else {
            return parse_component(trimmed).map(Self::exact);
        };

        let value_text = value_text.trim();
        let error_text = error_text.trim();
        if value_text.is_empty() {
            return Err(UncertainError::malformed(s, "missing value"));
        }
        if error_text.is_empty() {
            return Err(UncertainError::malformed(s, "missing error bound"));
        }
        if SEPARATORS
            .iter()
            .any(|&sep| value_text.contains(sep) || error_text.contains(sep))
        {
            return Err(UncertainError::malformed(s, "more than one separator"));
        }

        Ok(Self::new(
            parse_component(value_text)?,
            parse_component(error_text)?,
        ))
    }
}

fn parse_component(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|source| UncertainError::invalid_number(text, source))
}
