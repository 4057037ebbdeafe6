//! Three-phase sets and their Fortescue decomposition.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::constants::ONE_THIRD;
use crate::errors::FortescueError;
use crate::math::C3;
use crate::phasor::Phasor;

/// Phase identifier within a three-phase set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Phase a.
    A,
    /// Phase b.
    B,
    /// Phase c.
    C,
}

impl Phase {
    /// All phases in a/b/c order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        };
        f.write_str(label)
    }
}

impl FromStr for Phase {
    type Err = FortescueError;

    /// Accepts `a`, `b` or `c` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "A" => Ok(Self::A),
            "b" | "B" => Ok(Self::B),
            "c" | "C" => Ok(Self::C),
            other => Err(FortescueError::InvalidPhaseLabel(other.to_owned())),
        }
    }
}

/// Zero-, positive- and negative-sequence components of a three-phase set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceComponents {
    /// Zero sequence.
    pub zero: Phasor,
    /// Positive sequence.
    pub positive: Phasor,
    /// Negative sequence.
    pub negative: Phasor,
}

impl From<SequenceComponents> for (Phasor, Phasor, Phasor) {
    fn from(seq: SequenceComponents) -> Self {
        (seq.zero, seq.positive, seq.negative)
    }
}

/// Phase-to-phase differences `a-b`, `b-c`, `c-a`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseToPhase {
    /// `a - b`.
    pub ab: Phasor,
    /// `b - c`.
    pub bc: Phasor,
    /// `c - a`.
    pub ca: Phasor,
}

impl From<PhaseToPhase> for (Phasor, Phasor, Phasor) {
    fn from(pp: PhaseToPhase) -> Self {
        (pp.ab, pp.bc, pp.ca)
    }
}

/// Three phasors labeled a/b/c, e.g. a voltage or a current set.
///
/// No balance or 120° spacing is assumed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThreePhase {
    /// Phase a.
    pub a: Phasor,
    /// Phase b.
    pub b: Phasor,
    /// Phase c.
    pub c: Phasor,
}

impl ThreePhase {
    /// Stores the three phasors as given.
    #[must_use]
    pub const fn new(a: Phasor, b: Phasor, c: Phasor) -> Self {
        Self { a, b, c }
    }

    /// Rebuilds phase quantities from sequence components.
    ///
    /// `a = 0 + 1 + 2`, `b = 0 + a²·1 + a·2`, `c = 0 + a·1 + a²·2`.
    #[must_use]
    pub fn from_sequence(seq: &SequenceComponents) -> Self {
        let SequenceComponents {
            zero,
            positive,
            negative,
        } = *seq;
        Self {
            a: zero + positive + negative,
            b: zero + Phasor::ROTATOR_2 * positive + Phasor::ROTATOR_1 * negative,
            c: zero + Phasor::ROTATOR_1 * positive + Phasor::ROTATOR_2 * negative,
        }
    }

    /// Phasor for `phase`.
    #[must_use]
    pub const fn phase(&self, phase: Phase) -> Phasor {
        match phase {
            Phase::A => self.a,
            Phase::B => self.b,
            Phase::C => self.c,
        }
    }

    /// Phase-to-phase differences `(a-b, b-c, c-a)`.
    #[must_use]
    pub fn phase_to_phase(&self) -> PhaseToPhase {
        PhaseToPhase {
            ab: self.a - self.b,
            bc: self.b - self.c,
            ca: self.c - self.a,
        }
    }

    /// Fortescue transform into `(zero, positive, negative)` sequences.
    #[must_use]
    pub fn sequence_components(&self) -> SequenceComponents {
        let Self { a, b, c } = *self;
        SequenceComponents {
            zero: ONE_THIRD * (a + b + c),
            positive: ONE_THIRD * (a + Phasor::ROTATOR_1 * b + Phasor::ROTATOR_2 * c),
            negative: ONE_THIRD * (a + Phasor::ROTATOR_2 * b + Phasor::ROTATOR_1 * c),
        }
    }

    /// Rectangular values as an `[a, b, c]` column vector.
    #[must_use]
    pub fn to_rectangular(&self) -> C3 {
        C3::new(
            self.a.to_rectangular(),
            self.b.to_rectangular(),
            self.c.to_rectangular(),
        )
    }
}

impl Index<Phase> for ThreePhase {
    type Output = Phasor;

    fn index(&self, phase: Phase) -> &Phasor {
        match phase {
            Phase::A => &self.a,
            Phase::B => &self.b,
            Phase::C => &self.c,
        }
    }
}

impl fmt::Display for ThreePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}, b={}, c={}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, AbsDiffEq};
    use proptest::prelude::*;

    use super::*;
    use crate::math::fortescue_matrix;

    fn balanced(magnitude: f64, angle: f64) -> ThreePhase {
        ThreePhase::new(
            Phasor::new(magnitude, angle),
            Phasor::new(magnitude, angle + 240.0),
            Phasor::new(magnitude, angle + 120.0),
        )
    }

    #[test]
    fn parses_phase_labels() {
        assert_eq!("a".parse::<Phase>().unwrap(), Phase::A);
        assert_eq!("B".parse::<Phase>().unwrap(), Phase::B);
        assert_eq!("c".parse::<Phase>().unwrap(), Phase::C);
        assert_eq!(
            "d".parse::<Phase>().unwrap_err(),
            FortescueError::InvalidPhaseLabel("d".into())
        );
        assert!("ab".parse::<Phase>().is_err());
    }

    #[test]
    fn phase_accessor_and_index_agree() {
        let set = balanced(1.0, 0.0);
        for phase in Phase::ALL {
            assert_eq!(set.phase(phase), set[phase]);
        }
        assert_eq!(set[Phase::B], Phasor::new(1.0, 240.0));
    }

    #[test]
    fn balanced_set_has_only_positive_sequence() {
        let seq = balanced(1.0, 0.0).sequence_components();
        assert_abs_diff_eq!(seq.zero.magnitude(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(seq.negative.magnitude(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(seq.positive.magnitude(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(seq.positive.angle_degrees(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn negative_sequence_set_is_detected() {
        let set = ThreePhase::new(
            Phasor::new(2.0, 0.0),
            Phasor::new(2.0, 120.0),
            Phasor::new(2.0, 240.0),
        );
        let (zero, positive, negative): (Phasor, Phasor, Phasor) = set.sequence_components().into();
        assert_abs_diff_eq!(zero.magnitude(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(positive.magnitude(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(negative.magnitude(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn in_phase_set_is_pure_zero_sequence() {
        let p = Phasor::new(5.0, 45.0);
        let seq = ThreePhase::new(p, p, p).sequence_components();
        assert_abs_diff_eq!(seq.zero, p, epsilon = 1e-6);
        assert_abs_diff_eq!(seq.positive.magnitude(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(seq.negative.magnitude(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn phase_to_phase_of_balanced_set() {
        let pp = balanced(66_395.0, 0.0).phase_to_phase();
        let line = 66_395.0 * 3f64.sqrt();
        assert_relative_eq!(pp.ab.magnitude(), line, max_relative = 1e-9);
        assert_relative_eq!(pp.ab.angle_degrees(), 30.0, epsilon = 1e-6);
        assert_relative_eq!(pp.bc.magnitude(), line, max_relative = 1e-9);
        assert_relative_eq!(pp.bc.angle_degrees(), -90.0, epsilon = 1e-6);
        assert_relative_eq!(pp.ca.magnitude(), line, max_relative = 1e-9);
        assert_relative_eq!(pp.ca.angle_degrees(), 150.0, epsilon = 1e-6);
        let (ab, bc, ca): (Phasor, Phasor, Phasor) = pp.into();
        assert_abs_diff_eq!(ab + bc + ca, Phasor::ZERO, epsilon = 1e-4);
    }

    #[test]
    fn sequence_matches_matrix_transform() {
        let set = ThreePhase::new(
            Phasor::new(10.0, 5.0),
            Phasor::new(7.0, -100.0),
            Phasor::new(3.0, 140.0),
        );
        let seq = set.sequence_components();
        let expected = fortescue_matrix() * set.to_rectangular();
        assert_abs_diff_eq!(seq.zero, Phasor::from_rectangular(expected[0]), epsilon = 1e-6);
        assert_abs_diff_eq!(seq.positive, Phasor::from_rectangular(expected[1]), epsilon = 1e-6);
        assert_abs_diff_eq!(seq.negative, Phasor::from_rectangular(expected[2]), epsilon = 1e-6);
    }

    fn phasor_strategy() -> impl Strategy<Value = Phasor> {
        (0.0..10.0f64, -360.0..360.0f64).prop_map(|(m, a)| Phasor::new(m, a))
    }

    proptest! {
        #[test]
        fn prop_sequence_transform_is_invertible(
            a in phasor_strategy(),
            b in phasor_strategy(),
            c in phasor_strategy(),
        ) {
            let set = ThreePhase::new(a, b, c);
            let seq = set.sequence_components();
            let SequenceComponents { zero, positive, negative } = seq;

            prop_assert!((zero + positive + negative).abs_diff_eq(&a, 1e-6));
            prop_assert!(
                (zero + Phasor::ROTATOR_2 * positive + Phasor::ROTATOR_1 * negative)
                    .abs_diff_eq(&b, 1e-6)
            );
            prop_assert!(
                (zero + Phasor::ROTATOR_1 * positive + Phasor::ROTATOR_2 * negative)
                    .abs_diff_eq(&c, 1e-6)
            );

            let rebuilt = ThreePhase::from_sequence(&seq);
            for phase in Phase::ALL {
                prop_assert!(rebuilt[phase].abs_diff_eq(&set[phase], 1e-6));
            }
        }
    }
}
