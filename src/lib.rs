//! # uncertain-bounds
//!
//! Values carrying a worst-case error bound, with the bound propagated
//! through arithmetic, square roots and trigonometry.
//!
//! Every quantity is an [`Uncertain`]: a nominal value plus a bound on its
//! absolute deviation. Operations follow the classic propagation rules:
//!
//! - `+` and `-` add absolute errors
//! - `*` and `/` add relative errors, falling back to evaluating the corners
//!   of the error box when a value is zero
//! - functions scale the error by the magnitude of their derivative, with
//!   explicit handling where the derivative blows up
//!
//! ```rust
//! use uncertain_bounds::Uncertain;
//!
//! let x = Uncertain::new(10.0, 1.0);
//! let y = Uncertain::new(5.0, 0.5);
//!
//! let area = x * y;
//! assert_eq!(area.value, 50.0);
//!
//! let angle = y.atan2(x);
//! println!("angle = {angle:.4}");
//! ```
//!
//! ## Domain violations
//!
//! Numeric operations never return errors. Arccosine of a value outside
//! `[-1, 1]`, the square root of a negative number or a division by zero
//! put NaN or infinity in the result, just as the plain `f64` functions do:
//!
//! ```rust
//! use uncertain_bounds::Uncertain;
//!
//! let q = Uncertain::new(10.0, 3.0) / Uncertain::new(0.0, 4.0);
//! assert!(q.value.is_infinite() && q.error.is_infinite());
//!
//! let root = Uncertain::new(-1.0, 0.0).sqrt();
//! assert!(root.value.is_nan());
//! ```
//!
//! Only validated construction and parsing can fail, with
//! [`UncertainError`].

pub mod error;
pub mod operations;
pub mod uncertain;

pub use error::UncertainError;
pub use operations::Tolerance;
pub use uncertain::Uncertain;
