//! Voltage/current pairs at a single measurement point.

use crate::errors::FortescueError;
use crate::phasor::Phasor;
use crate::three_phase::{Phase, ThreePhase};

/// Per-phase and total complex power `S = V · conj(I)`.
///
/// Each magnitude is apparent power and each angle is the power-factor angle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalPower {
    /// Phase a power.
    pub a: Phasor,
    /// Phase b power.
    pub b: Phasor,
    /// Phase c power.
    pub c: Phasor,
    /// `a + b + c`.
    pub total: Phasor,
}

impl From<TerminalPower> for (Phasor, Phasor, Phasor, Phasor) {
    fn from(s: TerminalPower) -> Self {
        (s.a, s.b, s.c, s.total)
    }
}

/// Voltage and current sets measured at one terminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminal {
    voltage: ThreePhase,
    current: ThreePhase,
}

impl Terminal {
    /// Pairs a voltage set with a current set.
    #[must_use]
    pub const fn new(voltage: ThreePhase, current: ThreePhase) -> Self {
        Self { voltage, current }
    }

    /// Voltage set.
    #[must_use]
    pub const fn voltage(&self) -> &ThreePhase {
        &self.voltage
    }

    /// Current set.
    #[must_use]
    pub const fn current(&self) -> &ThreePhase {
        &self.current
    }

    /// `V / I` for one phase. A zero current yields `0@0`.
    #[must_use]
    pub fn single_phase_impedance(&self, phase: Phase) -> Phasor {
        self.voltage[phase].divide_or_zero(self.current[phase])
    }

    /// [`single_phase_impedance`](Self::single_phase_impedance) for a text label.
    ///
    /// # Errors
    ///
    /// Returns [`FortescueError::InvalidPhaseLabel`] unless `label` is `a`, `b` or `c`.
    pub fn single_phase_impedance_by_label(&self, label: &str) -> Result<Phasor, FortescueError> {
        Ok(self.single_phase_impedance(label.parse()?))
    }

    /// `(V1 - V2) / (I1 - I2)` between two phases.
    ///
    /// Using the same phase twice divides by zero and yields `0@0`.
    #[must_use]
    pub fn phase_to_phase_impedance(&self, first: Phase, second: Phase) -> Phasor {
        let v = self.voltage[first] - self.voltage[second];
        let i = self.current[first] - self.current[second];
        v.divide_or_zero(i)
    }

    /// [`phase_to_phase_impedance`](Self::phase_to_phase_impedance) for text labels.
    ///
    /// # Errors
    ///
    /// Returns [`FortescueError::InvalidPhaseLabel`] for the first label outside `a`, `b`, `c`.
    pub fn phase_to_phase_impedance_by_label(
        &self,
        first: &str,
        second: &str,
    ) -> Result<Phasor, FortescueError> {
        Ok(self.phase_to_phase_impedance(first.parse()?, second.parse()?))
    }

    /// Zero-sequence impedance `V0 / I0`.
    #[must_use]
    pub fn zero_sequence_impedance(&self) -> Phasor {
        let v = self.voltage.sequence_components().zero;
        let i = self.current.sequence_components().zero;
        v.divide_or_zero(i)
    }

    /// Positive-sequence impedance `V1 / I1`.
    #[must_use]
    pub fn positive_sequence_impedance(&self) -> Phasor {
        let v = self.voltage.sequence_components().positive;
        let i = self.current.sequence_components().positive;
        v.divide_or_zero(i)
    }

    /// Negative-sequence impedance `V2 / I2`.
    #[must_use]
    pub fn negative_sequence_impedance(&self) -> Phasor {
        let v = self.voltage.sequence_components().negative;
        let i = self.current.sequence_components().negative;
        v.divide_or_zero(i)
    }

    /// Complex power per phase and in total.
    #[must_use]
    pub fn power(&self) -> TerminalPower {
        let [a, b, c] =
            Phase::ALL.map(|phase| self.voltage[phase] * self.current[phase].conjugate());
        TerminalPower {
            a,
            b,
            c,
            total: a + b + c,
        }
    }
}
