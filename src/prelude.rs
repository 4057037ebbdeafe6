//! Convenience re-exports for symmetrical-component studies.

pub use crate::constants::*;
pub use crate::errors::FortescueError;
pub use crate::math::{
    fortescue_matrix, inverse_fortescue_matrix, round_to_precision, unit_phasor, C3, C3x3,
    CScalar, Scalar,
};
pub use crate::phasor::{Operand, Phasor};
pub use crate::terminal::{Terminal, TerminalPower};
pub use crate::three_phase::{Phase, PhaseToPhase, SequenceComponents, ThreePhase};
