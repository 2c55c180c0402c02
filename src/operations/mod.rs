pub mod arithmetic;
pub mod comparison;
pub mod inverse_trigonometric;
pub mod trigonometric;

pub use comparison::{Tolerance, approx_eq_f64};

use crate::Uncertain;

/// Smallest and largest of `f` evaluated at the four corners of the box
/// `(a.value ± a.error) × (b.value ± b.error)`.
///
/// A NaN corner makes both results NaN.
pub(crate) fn corner_extremes<F>(a: Uncertain, b: Uncertain, f: F) -> (f64, f64)
where
    F: Fn(f64, f64) -> f64,
{
    let corners = [
        f(a.value + a.error, b.value + b.error),
        f(a.value + a.error, b.value - b.error),
        f(a.value - a.error, b.value - b.error),
        f(a.value - a.error, b.value + b.error),
    ];

    corners
        .iter()
        .fold((corners[0], corners[0]), |(min, max), &corner| {
            if min.is_nan() || corner.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (min.min(corner), max.max(corner))
            }
        })
}
