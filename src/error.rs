//! Error types for the column model.
//!
//! All fallible operations return [`ModelError`]. Guard failures during a
//! run abort immediately and carry the failing timestep and vertical level
//! where applicable.

use thiserror::Error;

/// Error type for column-model construction and time stepping.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed vertical grid (too short, non-ascending, or zero spacing).
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// A profile array does not match the grid length.
    #[error("profile '{name}' has {got} levels, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    /// Time step must be strictly positive.
    #[error("time step must be positive, got {dt}")]
    NonPositiveTimeStep { dt: f64 },

    /// Invalid parameter set for a stability relation or closure.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// A denominator guard fired during a stability-parameter evaluation.
    #[error("degenerate denominator in {context} at level {level}")]
    DegenerateDenominator {
        context: &'static str,
        level: usize,
    },

    /// NaN or infinity detected in an output profile after a step.
    #[error("non-finite {field} at step {step}, level {level}")]
    NonFinite {
        field: &'static str,
        step: usize,
        level: usize,
    },

    /// A configuration branch that is intentionally not implemented.
    #[error("unsupported configuration: {reason}")]
    Unsupported { reason: String },
}
