//! Numerical conventions shared by every phasor operation.
//!
//! ## Rounding
//!
//! Magnitude and angle are rounded to [`ROUNDING_DECIMALS`] decimal places at
//! every construction site. Arithmetic results are rebuilt from rectangular
//! form, so they are rounded too; this keeps repeated conversions stable and
//! makes equality of derived quantities reproducible.
//!
//! ## Rotators
//!
//! The Fortescue operator `a = 1∠120°` and its square `a² = 1∠240°` are the
//! two nontrivial cube roots of unity. Their phasor forms live on
//! [`Phasor`](crate::phasor::Phasor) as `ROTATOR_1` and `ROTATOR_2`.

/// Decimal places kept for magnitude and angle.
pub const ROUNDING_DECIMALS: usize = 8;

/// Angle of the first unit rotator `a`, in degrees.
pub const ROTATOR_1_ANGLE_DEG: f64 = 120.0;
/// Angle of the second unit rotator `a²`, in degrees.
pub const ROTATOR_2_ANGLE_DEG: f64 = 240.0;

/// Scale applied to each Fortescue sum.
pub const ONE_THIRD: f64 = 1.0 / 3.0;
