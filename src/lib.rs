#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Rounding precision and rotator angles shared by every operation.
pub mod constants;
/// Shared numerical primitives (complex aliases, rounding, Fortescue matrices).
pub mod math;
/// Magnitude/angle phasors and their arithmetic.
pub mod phasor;
/// Three-phase sets, phase identifiers and sequence components.
pub mod three_phase;
/// Paired voltage/current sets, impedances and power.
pub mod terminal;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::FortescueError;
pub use phasor::{Operand, Phasor};
pub use terminal::{Terminal, TerminalPower};
pub use three_phase::{Phase, PhaseToPhase, SequenceComponents, ThreePhase};
