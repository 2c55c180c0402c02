use crate::Uncertain;

// Linear propagation: error = |f'(value)| * error.
// Infinite or NaN input values give NaN for both fields.
impl Uncertain {
    /// Sine of a value in radians.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let s = Uncertain::new(0.0, 0.05).sin();
    /// assert_eq!(s, Uncertain::new(0.0, 0.05));
    /// ```
    #[must_use]
    pub fn sin(self) -> Uncertain {
        self.sin_cos().0
    }

    /// Cosine of a value in radians.
    #[must_use]
    pub fn cos(self) -> Uncertain {
        self.sin_cos().1
    }

    /// Sine and cosine from a single evaluation, same results as calling
    /// [`Uncertain::sin`] and [`Uncertain::cos`].
    ///
    /// # Example
    /// ```rust
    /// use uncertain_bounds::Uncertain;
    ///
    /// let angle = Uncertain::new(std::f64::consts::FRAC_PI_3, 0.1);
    /// let (sin, cos) = angle.sin_cos();
    /// assert!((sin.error - 0.05).abs() < 1e-12);
    /// assert!((cos.value - 0.5).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn sin_cos(self) -> (Uncertain, Uncertain) {
        let (s, c) = self.value.sin_cos();
        (
            Uncertain::new(s, (c * self.error).abs()),
            Uncertain::new(c, (-s * self.error).abs()),
        )
    }

    /// Tangent of a value in radians, error scaled by `tan² + 1`.
    ///
    /// Nothing special happens near the poles: the error grows with the
    /// value and becomes huge or infinite.
    #[must_use]
    pub fn tan(self) -> Uncertain {
        let value = self.value.tan();
        Uncertain::new(value, (value * value + 1.0) * self.error)
    }
}
