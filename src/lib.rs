//! # scm-rs
//!
//! A single-column atmospheric boundary-layer model.
//!
//! Given vertical profiles of temperature, horizontal wind, and pressure on
//! a fixed height grid, the model advances them in time by combining:
//! - A prognostic TKE turbulence closure (Mellor-Yamada Level-1.5)
//! - Surface-layer similarity stability functions (four families)
//! - Bulk-Richardson-number to stability-parameter relations
//! - SSP-RK3 (Shu-Osher) time integration
//! - A pluggable surface-flux interface
//!
//! The run is single-threaded, fully sequential, and deterministic given
//! its inputs. Numerical guard failures abort the run with the failing
//! timestep and level attached.

pub mod closure;
pub mod error;
pub mod grid;
pub mod operators;
pub mod physics;
pub mod simulation;
pub mod stability;
pub mod state;
pub mod surface;
pub mod time;

// Re-export main types for convenience
pub use closure::{ClosureConstants, MellorYamada15};
pub use error::ModelError;
pub use grid::VerticalGrid;
pub use operators::gradient;
pub use physics::scalar_tendency;
pub use simulation::{ColumnModel, SimulationConfig, SimulationResult, Snapshot};
pub use stability::{
    BeljaarsHoltslagParams, Em95Params, Gf96Params, RichardsonRelation, ShebaParams,
    StabilityVariant, rb_shear,
};
pub use state::{CP_AIR, P_REF, R_DRY, RHO_REF_DEFAULT, StateProfile};
pub use surface::{ConstantFluxes, SurfaceFluxProvider, SurfaceFluxes};
pub use time::{
    ForwardEuler, Integrable, IntegratorInfo, SspRk3, StandardIntegrator, TimeIntegrator,
};
