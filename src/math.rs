//! Shared numerical primitives anchored on `num-complex` and `nalgebra`.

use nalgebra::{Matrix3, Vector3};

use crate::constants::{ONE_THIRD, ROTATOR_1_ANGLE_DEG, ROTATOR_2_ANGLE_DEG, ROUNDING_DECIMALS};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Rectangular (complex) form of a phasor.
pub type CScalar = num_complex::Complex<Scalar>;
/// Rectangular values of a three-phase set, ordered a/b/c or 0/1/2.
pub type C3 = Vector3<CScalar>;
/// Three-by-three complex matrix.
pub type C3x3 = Matrix3<CScalar>;

/// Rounds `value` to the crate-wide decimal precision.
///
/// Every phasor constructor funnels through this function, including the
/// rectangular-to-polar factory. Rounding works on the exact binary value and
/// sends ties to the even digit. Non-finite values pass through unchanged.
#[must_use]
pub fn round_to_precision(value: Scalar) -> Scalar {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", ROUNDING_DECIMALS, value).parse().unwrap_or(value)
}

/// Complex division `num / den` with Smith's scaling.
///
/// Avoids the overflow and underflow of `norm_sqr` for very large or very
/// small divisors. `den` must not be zero.
#[must_use]
pub fn scaled_div(num: CScalar, den: CScalar) -> CScalar {
    if den.re.abs() >= den.im.abs() {
        let ratio = den.im / den.re;
        let scale = den.re + den.im * ratio;
        CScalar::new(
            (num.re + num.im * ratio) / scale,
            (num.im - num.re * ratio) / scale,
        )
    } else {
        let ratio = den.re / den.im;
        let scale = den.re * ratio + den.im;
        CScalar::new(
            (num.re * ratio + num.im) / scale,
            (num.im * ratio - num.re) / scale,
        )
    }
}

/// Returns the complex exponential `e^(j * degrees)`.
#[inline]
#[must_use]
pub fn unit_phasor(degrees: Scalar) -> CScalar {
    CScalar::from_polar(1.0, degrees.to_radians())
}

/// Forward Fortescue matrix mapping `[a, b, c]` onto `[zero, positive, negative]`.
#[must_use]
pub fn fortescue_matrix() -> C3x3 {
    let one = CScalar::new(1.0, 0.0);
    let a = unit_phasor(ROTATOR_1_ANGLE_DEG);
    let a2 = unit_phasor(ROTATOR_2_ANGLE_DEG);
    C3x3::new(one, one, one, one, a, a2, one, a2, a) * CScalar::new(ONE_THIRD, 0.0)
}

/// Inverse Fortescue matrix mapping `[zero, positive, negative]` back onto `[a, b, c]`.
#[must_use]
pub fn inverse_fortescue_matrix() -> C3x3 {
    let one = CScalar::new(1.0, 0.0);
    let a = unit_phasor(ROTATOR_1_ANGLE_DEG);
    let a2 = unit_phasor(ROTATOR_2_ANGLE_DEG);
    C3x3::new(one, one, one, one, a2, a, one, a, a2)
}
