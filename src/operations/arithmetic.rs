#![allow(clippy::float_cmp)]

use crate::Uncertain;
use crate::operations::corner_extremes;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

// Addition: absolute errors add up
impl Add for Uncertain {
    type Output = Uncertain;

    fn add(self, rhs: Self) -> Self::Output {
        Uncertain::new(self.value + rhs.value, self.error + rhs.error)
    }
}

impl Add<f64> for Uncertain {
    type Output = Uncertain;

    fn add(self, rhs: f64) -> Self::Output {
        self + Uncertain::exact(rhs)
    }
}

impl Add<Uncertain> for f64 {
    type Output = Uncertain;

    fn add(self, rhs: Uncertain) -> Self::Output {
        Uncertain::exact(self) + rhs
    }
}

// Subtraction: absolute errors add up as well
impl Sub for Uncertain {
    type Output = Uncertain;

    fn sub(self, rhs: Self) -> Self::Output {
        Uncertain::new(self.value - rhs.value, self.error + rhs.error)
    }
}

impl Sub<f64> for Uncertain {
    type Output = Uncertain;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Uncertain::exact(rhs)
    }
}

impl Sub<Uncertain> for f64 {
    type Output = Uncertain;

    fn sub(self, rhs: Uncertain) -> Self::Output {
        Uncertain::exact(self) - rhs
    }
}

// Multiplication: relative errors add up
impl Mul for Uncertain {
    type Output = Uncertain;

    /// Multiplies two uncertain values by summing their relative errors.
    ///
    /// Relative error is undefined for a zero value, so when either factor
    /// is zero the bound comes from [`Uncertain::mul_worst_case`] instead.
    fn mul(self, rhs: Self) -> Self::Output {
        if self.value == 0.0 || rhs.value == 0.0 {
            trace!(
                lhs = self.value,
                rhs = rhs.value,
                "zero factor, using worst-case product bound"
            );
            return self.mul_worst_case(rhs);
        }

        let value = self.value * rhs.value;
        let relative = self.error / self.value.abs() + rhs.error / rhs.value.abs();
        Uncertain::new(value, relative * value.abs())
    }
}

impl Mul<f64> for Uncertain {
    type Output = Uncertain;

    fn mul(self, rhs: f64) -> Self::Output {
        self * Uncertain::exact(rhs)
    }
}

impl Mul<Uncertain> for f64 {
    type Output = Uncertain;

    fn mul(self, rhs: Uncertain) -> Self::Output {
        Uncertain::exact(self) * rhs
    }
}

// Division: relative errors add up
impl Div for Uncertain {
    type Output = Uncertain;

    /// Divides by summing relative errors.
    ///
    /// A zero divisor is not special-cased: the quotient and its error come
    /// out infinite (or NaN) following IEEE division. A zero dividend has no
    /// relative error, so the divisor is reciprocated and the bound comes
    /// from [`Uncertain::mul_worst_case`].
    fn div(self, rhs: Self) -> Self::Output {
        if self.value == 0.0 {
            trace!(divisor = rhs.value, "zero dividend, using worst-case quotient bound");
            return self.mul_worst_case(rhs.reciprocal());
        }

        let value = self.value / rhs.value;
        let relative = self.error / self.value.abs() + rhs.error / rhs.value.abs();
        Uncertain::new(value, relative * value.abs())
    }
}

impl Div<f64> for Uncertain {
    type Output = Uncertain;

    fn div(self, rhs: f64) -> Self::Output {
        self / Uncertain::exact(rhs)
    }
}

impl Div<Uncertain> for f64 {
    type Output = Uncertain;

    fn div(self, rhs: Uncertain) -> Self::Output {
        Uncertain::exact(self) / rhs
    }
}

impl Neg for Uncertain {
    type Output = Uncertain;

    fn neg(self) -> Self::Output {
        Uncertain::new(-self.value, self.error)
    }
}

impl Sum for Uncertain {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Uncertain::exact(0.0), |acc, x| acc + x)
    }
}

impl Product for Uncertain {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Uncertain::exact(1.0), |acc, x| acc * x)
    }
}

impl Uncertain {
    /// Multiplies by evaluating the product at every corner of the error box.
    ///
    /// The error is half the spread between the largest and smallest corner
    /// product; the value is the plain product of the nominal values. This is
    /// exact for a bilinear function and works for zero factors, where the
    /// relative-error rule of `*` breaks down.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let product = Uncertain::new(0.0, 1.0).mul_worst_case(Uncertain::new(10.0, 1.0));
    /// assert_eq!(product.value, 0.0);
    /// assert_eq!(product.error, 11.0);
    /// ```
    #[must_use]
    pub fn mul_worst_case(self, rhs: Uncertain) -> Uncertain {
        let (min, max) = corner_extremes(self, rhs, |x, y| x * y);
        Uncertain::new(self.value * rhs.value, (max - min) / 2.0)
    }

    /// Square root with linear error propagation, `error / (2·sqrt(value))`.
    ///
    /// The derivative is unbounded at zero, so a zero value takes
    /// `sqrt(error)` as its bound. Negative values give NaN for both fields.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let root = Uncertain::new(0.64, 0.4).sqrt();
    /// assert!((root.value - 0.8).abs() < 1e-12);
    /// assert!((root.error - 0.25).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Uncertain {
        if self.value == 0.0 {
            trace!(error = self.error, "sqrt at zero, using sqrt of the error bound");
            return Uncertain::new(0.0, self.error.sqrt());
        }

        let value = self.value.sqrt();
        Uncertain::new(value, self.error / (2.0 * value))
    }

    /// `1/x` carrying the relative error of `x` over unchanged.
    fn reciprocal(self) -> Uncertain {
        let relative = self.error / self.value;
        let value = 1.0 / self.value;
        Uncertain::new(value, value * relative)
    }
}
