//! Time integration.

mod integrator;

pub use integrator::{
    ForwardEuler, Integrable, IntegratorInfo, SspRk3, StandardIntegrator, TimeIntegrator,
};
