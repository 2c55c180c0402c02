#![allow(clippy::float_cmp)]

use crate::Uncertain;

/// Tolerance used to decide whether two results agree.
///
/// The absolute check always applies. A relative tolerance, when set, is an
/// additional way to pass: two numbers match if either check accepts them.
///
/// # Example
/// ```rust
/// use uncertain_bounds::operations::Tolerance;
///
/// let strict = Tolerance::default();
/// assert!(!strict.matches(1e6, 1e6 + 1e-6));
///
/// let loose = Tolerance::default().with_relative(1e-9);
/// assert!(loose.matches(1e6, 1e6 + 1e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest accepted absolute difference
    pub absolute: f64,
    /// Largest accepted difference relative to the larger magnitude
    pub relative: Option<f64>,
}

impl Tolerance {
    /// Absolute tolerance used by [`Tolerance::default`].
    pub const DEFAULT_ABSOLUTE: f64 = 1e-12;

    /// Creates a tolerance with only an absolute check.
    #[must_use]
    pub const fn absolute(absolute: f64) -> Self {
        Self {
            absolute,
            relative: None,
        }
    }

    /// Adds a relative check on top of the absolute one.
    #[must_use]
    pub const fn with_relative(self, relative: f64) -> Self {
        Self {
            absolute: self.absolute,
            relative: Some(relative),
        }
    }

    /// Whether two numbers agree under this tolerance.
    ///
    /// Two NaNs match each other, and an infinity only matches the same
    /// infinity.
    #[must_use]
    pub fn matches(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return a.is_nan() && b.is_nan();
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }

        let diff = (a - b).abs();
        if diff <= self.absolute {
            return true;
        }
        self.relative
            .is_some_and(|relative| diff <= relative * a.abs().max(b.abs()))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::absolute(Self::DEFAULT_ABSOLUTE)
    }
}

/// Compares two numbers with [`Tolerance::default`].
#[must_use]
pub fn approx_eq_f64(a: f64, b: f64) -> bool {
    Tolerance::default().matches(a, b)
}

impl Uncertain {
    /// Whether value and error both agree with `other` under the default
    /// absolute tolerance of `1e-12`.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let q = Uncertain::new(10.0, 1.0) / Uncertain::new(10.0, 1.0);
    /// assert!(q.approx_eq(&Uncertain::new(1.0, 0.2)));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Uncertain) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    /// Whether value and error both agree with `other` under `tolerance`.
    #[must_use]
    pub fn approx_eq_with(&self, other: &Uncertain, tolerance: Tolerance) -> bool {
        tolerance.matches(self.value, other.value) && tolerance.matches(self.error, other.error)
    }

    /// Whether the two bounded intervals share at least one point.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let a = Uncertain::new(10.0, 1.0);
    /// assert!(a.overlaps(&Uncertain::new(11.5, 0.5)));
    /// assert!(!a.overlaps(&Uncertain::new(13.0, 0.5)));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Uncertain) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }
}
