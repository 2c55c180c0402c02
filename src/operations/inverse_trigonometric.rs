#![allow(clippy::float_cmp)]

use crate::Uncertain;
use crate::operations::corner_extremes;
use std::f64::consts::PI;
use tracing::trace;

impl Uncertain {
    /// Arccosine in radians.
    ///
    /// The derivative `-1/sqrt(1 - x²)` is unbounded at `x = ±1`, so the
    /// bound there is the one-sided distance to the arccosine of the point
    /// one error inside the domain. Values outside `[-1, 1]` give a NaN
    /// value.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    /// use std::f64::consts::PI;
    ///
    /// let angle = Uncertain::new(-1.0, 0.1).acos();
    /// assert_eq!(angle.value, PI);
    /// assert!((angle.error - 0.451026811796262).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn acos(self) -> Uncertain {
        if self.error == 0.0 {
            return Uncertain::exact(self.value.acos());
        }

        if self.value == -1.0 {
            trace!(error = self.error, "acos at -1, using one-sided bound");
            return Uncertain::new(PI, PI - (-1.0 + self.error).acos());
        }
        if self.value == 1.0 {
            trace!(error = self.error, "acos at 1, using one-sided bound");
            return Uncertain::new(0.0, (1.0 - self.error).acos());
        }

        let derivative = -1.0 / (1.0 - self.value * self.value).sqrt();
        Uncertain::new(self.value.acos(), (derivative * self.error).abs())
    }

    /// Arcsine in radians, with the same boundary handling as
    /// [`Uncertain::acos`].
    #[must_use]
    pub fn asin(self) -> Uncertain {
        let value = self.value.asin();

        if self.error == 0.0 {
            return Uncertain::exact(value);
        }

        if self.value == -1.0 {
            trace!(error = self.error, "asin at -1, using one-sided bound");
            return Uncertain::new(value, (-1.0 + self.error).asin() - value);
        }
        if self.value == 1.0 {
            trace!(error = self.error, "asin at 1, using one-sided bound");
            return Uncertain::new(value, value - (1.0 - self.error).asin());
        }

        let derivative = 1.0 / (1.0 - self.value * self.value).sqrt();
        Uncertain::new(value, (derivative * self.error).abs())
    }

    /// Arctangent in radians, error scaled by `1/(1 + x²)`.
    ///
    /// The scale factor vanishes at infinity, so `±∞` maps to `±π/2` with a
    /// zero error whatever the input error.
    #[must_use]
    pub fn atan(self) -> Uncertain {
        Uncertain::new(
            self.value.atan(),
            self.error * (1.0 / (1.0 + self.value * self.value)),
        )
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the `y` coordinate).
    ///
    /// The error is half the spread of `atan2` over the corners of the error
    /// box. A box that straddles the branch cut at `±π` yields corners of
    /// exactly `-π` and `π`; that spread is an artifact of the cut and is
    /// reported as zero. Any infinite coordinate makes the result locally
    /// constant, so the error is zero too.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let y = Uncertain::new(f64::INFINITY, 10.0);
    /// let x = Uncertain::new(f64::INFINITY, 10.0);
    /// let angle = y.atan2(x);
    /// assert!((angle.value - FRAC_PI_4).abs() < 1e-12);
    /// assert_eq!(angle.error, 0.0);
    /// ```
    #[must_use]
    pub fn atan2(self, x: Uncertain) -> Uncertain {
        let value = self.value.atan2(x.value);

        if self.value.is_infinite() || x.value.is_infinite() {
            trace!(y = self.value, x = x.value, "atan2 of infinite input");
            return Uncertain::exact(value);
        }

        let (min, max) = corner_extremes(self, x, f64::atan2);
        if min == -max && max == PI {
            trace!(y = self.value, x = x.value, "atan2 box spans the branch cut");
            return Uncertain::exact(value);
        }

        Uncertain::new(value, ((max - min) / 2.0).abs())
    }
}
