//! Magnitude/angle phasors and their arithmetic.
//!
//! Every operator converts both operands to rectangular form, combines them
//! there and rebuilds the result with [`Phasor::from_rectangular`]. As a
//! consequence any arithmetic result reports its angle in the `atan2` range,
//! even when the inputs were built with angles outside it.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};

use crate::constants::{ROTATOR_1_ANGLE_DEG, ROTATOR_2_ANGLE_DEG};
use crate::errors::FortescueError;
use crate::math::{round_to_precision, scaled_div, CScalar, Scalar};

/// Sinusoidal quantity represented by a magnitude and a phase angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPhasor", into = "RawPhasor"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    magnitude: Scalar,
    angle_degrees: Scalar,
}

impl Phasor {
    /// Unit rotator `a = 1∠120°`.
    pub const ROTATOR_1: Self = Self::from_rounded(1.0, ROTATOR_1_ANGLE_DEG);
    /// Unit rotator `a² = 1∠240°`.
    pub const ROTATOR_2: Self = Self::from_rounded(1.0, ROTATOR_2_ANGLE_DEG);
    /// The zero phasor `0∠0°`.
    pub const ZERO: Self = Self::from_rounded(0.0, 0.0);

    /// Creates a phasor, rounding both fields to the crate precision.
    ///
    /// The magnitude sign is not checked and the angle may lie in any range.
    #[must_use]
    pub fn new(magnitude: Scalar, angle_degrees: Scalar) -> Self {
        Self {
            magnitude: round_to_precision(magnitude),
            angle_degrees: round_to_precision(angle_degrees),
        }
    }

    // Only for values that already carry at most eight decimals.
    const fn from_rounded(magnitude: Scalar, angle_degrees: Scalar) -> Self {
        Self {
            magnitude,
            angle_degrees,
        }
    }

    /// Builds a phasor from a rectangular value.
    ///
    /// The angle is `atan2(im, re)` in degrees, so it always lies in
    /// `-180°..=180°`.
    #[must_use]
    pub fn from_rectangular(z: CScalar) -> Self {
        let (r, theta) = z.to_polar();
        Self::new(r, theta.to_degrees())
    }

    /// Magnitude as stored after rounding.
    #[must_use]
    pub const fn magnitude(&self) -> Scalar {
        self.magnitude
    }

    /// Angle in degrees as stored after rounding.
    #[must_use]
    pub const fn angle_degrees(&self) -> Scalar {
        self.angle_degrees
    }

    /// Angle in radians.
    #[must_use]
    pub fn angle_radians(&self) -> Scalar {
        self.angle_degrees.to_radians()
    }

    /// Rectangular form `magnitude * e^(j * angle)`.
    #[must_use]
    pub fn to_rectangular(&self) -> CScalar {
        CScalar::from_polar(self.magnitude, self.angle_radians())
    }

    /// Real component of the rectangular form.
    #[must_use]
    pub fn real_part(&self) -> Scalar {
        self.to_rectangular().re
    }

    /// Imaginary component of the rectangular form.
    #[must_use]
    pub fn imaginary_part(&self) -> Scalar {
        self.to_rectangular().im
    }

    /// Complex conjugate, rebuilt from rectangular form.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from_rectangular(self.to_rectangular().conj())
    }

    /// Returns true when the rectangular value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_exact_zero(self.to_rectangular())
    }

    /// `self + rhs` in rectangular space.
    #[must_use]
    pub fn plus(&self, rhs: impl Into<Operand>) -> Self {
        Self::from_rectangular(self.to_rectangular() + rhs.into().to_rectangular())
    }

    /// `self - rhs` in rectangular space.
    #[must_use]
    pub fn subtract(&self, rhs: impl Into<Operand>) -> Self {
        Self::from_rectangular(self.to_rectangular() - rhs.into().to_rectangular())
    }

    /// `self * rhs` in rectangular space.
    #[must_use]
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Self {
        Self::from_rectangular(self.to_rectangular() * rhs.into().to_rectangular())
    }

    /// `self / rhs` in rectangular space, or [`Phasor::ZERO`] when the
    /// divisor's rectangular value is exactly zero.
    ///
    /// The fallback never raises; it is also what the `/` operator does.
    /// Nonzero divisors go through Smith's scaled division, so extreme
    /// magnitudes do not overflow.
    #[must_use]
    pub fn divide_or_zero(&self, rhs: impl Into<Operand>) -> Self {
        let divisor = rhs.into().to_rectangular();
        if is_exact_zero(divisor) {
            tracing::debug!(dividend = %self, "division by a zero phasor, returning 0@0");
            return Self::ZERO;
        }
        Self::from_rectangular(scaled_div(self.to_rectangular(), divisor))
    }
}

fn is_exact_zero(z: CScalar) -> bool {
    z.re == 0.0 && z.im == 0.0
}

impl Default for Phasor {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}@{:.2}", self.magnitude, self.angle_degrees)
    }
}

impl FromStr for Phasor {
    type Err = FortescueError;

    /// Parses the `magnitude@angle` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FortescueError::InvalidPhasorText(s.to_owned());
        let (magnitude, angle) = s.split_once('@').ok_or_else(invalid)?;
        let magnitude = magnitude.trim().parse::<Scalar>().map_err(|_| invalid())?;
        let angle = angle.trim().parse::<Scalar>().map_err(|_| invalid())?;
        Ok(Self::new(magnitude, angle))
    }
}

impl From<CScalar> for Phasor {
    fn from(z: CScalar) -> Self {
        Self::from_rectangular(z)
    }
}

impl From<Phasor> for CScalar {
    fn from(p: Phasor) -> Self {
        p.to_rectangular()
    }
}

/// Right-hand operand accepted by phasor arithmetic.
///
/// Real and complex scalars are promoted to complex values with angle zero
/// before combining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Another phasor.
    Phasor(Phasor),
    /// A real or complex scalar.
    Scalar(CScalar),
}

impl Operand {
    /// Rectangular value of the operand.
    #[must_use]
    pub fn to_rectangular(self) -> CScalar {
        match self {
            Self::Phasor(p) => p.to_rectangular(),
            Self::Scalar(z) => z,
        }
    }
}

impl From<Phasor> for Operand {
    fn from(p: Phasor) -> Self {
        Self::Phasor(p)
    }
}

impl From<&Phasor> for Operand {
    fn from(p: &Phasor) -> Self {
        Self::Phasor(*p)
    }
}

impl From<Scalar> for Operand {
    fn from(x: Scalar) -> Self {
        Self::Scalar(CScalar::new(x, 0.0))
    }
}

impl From<CScalar> for Operand {
    fn from(z: CScalar) -> Self {
        Self::Scalar(z)
    }
}

impl<T: Into<Operand>> Add<T> for Phasor {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self.plus(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Phasor {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self.subtract(rhs)
    }
}

impl<T: Into<Operand>> Mul<T> for Phasor {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.multiply(rhs)
    }
}

impl<T: Into<Operand>> Div<T> for Phasor {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.divide_or_zero(rhs)
    }
}

impl Mul<Phasor> for Scalar {
    type Output = Phasor;

    fn mul(self, rhs: Phasor) -> Phasor {
        rhs.multiply(self)
    }
}

impl Neg for Phasor {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_rectangular(-self.to_rectangular())
    }
}

impl AbsDiffEq for Phasor {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    /// Compares rectangular values component-wise.
    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        let (x, y) = (self.to_rectangular(), other.to_rectangular());
        x.re.abs_diff_eq(&y.re, epsilon) && x.im.abs_diff_eq(&y.im, epsilon)
    }
}

impl RelativeEq for Phasor {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        let (x, y) = (self.to_rectangular(), other.to_rectangular());
        x.re.relative_eq(&y.re, epsilon, max_relative)
            && x.im.relative_eq(&y.im, epsilon, max_relative)
    }
}

/// Serialized form; deserializing goes back through [`Phasor::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPhasor {
    magnitude: Scalar,
    angle_degrees: Scalar,
}

#[cfg(feature = "serde")]
impl From<RawPhasor> for Phasor {
    fn from(raw: RawPhasor) -> Self {
        Self::new(raw.magnitude, raw.angle_degrees)
    }
}

#[cfg(feature = "serde")]
impl From<Phasor> for RawPhasor {
    fn from(p: Phasor) -> Self {
        Self {
            magnitude: p.magnitude,
            angle_degrees: p.angle_degrees,
        }
    }
}
