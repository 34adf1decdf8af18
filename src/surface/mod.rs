//! Surface flux providers.
//!
//! The driver queries a pluggable provider once per step for the surface
//! forcing. The default implementation is a placeholder returning fixed
//! constants until a real bulk parameterization is supplied.

use crate::grid::VerticalGrid;

/// Surface fluxes for one timestep.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceFluxes {
    /// Sensible heat flux (W/m²).
    pub sensible: f64,
    /// Latent heat flux (W/m²).
    pub latent: f64,
    /// Zonal momentum flux (N/m²).
    pub tau_u: f64,
    /// Meridional momentum flux (N/m²).
    pub tau_v: f64,
}

/// Pluggable surface-flux computation.
pub trait SurfaceFluxProvider: Send + Sync {
    /// Compute surface fluxes from the current profiles.
    fn fluxes(
        &self,
        temperature: &[f64],
        wind_u: &[f64],
        wind_v: &[f64],
        grid: &VerticalGrid,
    ) -> SurfaceFluxes;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Placeholder provider returning fixed constants.
#[derive(Clone, Copy, Debug)]
pub struct ConstantFluxes {
    pub sensible: f64,
    pub latent: f64,
    pub tau_u: f64,
    pub tau_v: f64,
}

impl Default for ConstantFluxes {
    fn default() -> Self {
        Self {
            sensible: 10.0,
            latent: 5.0,
            tau_u: 0.01,
            tau_v: 0.01,
        }
    }
}

impl SurfaceFluxProvider for ConstantFluxes {
    fn fluxes(
        &self,
        _temperature: &[f64],
        _wind_u: &[f64],
        _wind_v: &[f64],
        _grid: &VerticalGrid,
    ) -> SurfaceFluxes {
        SurfaceFluxes {
            sensible: self.sensible,
            latent: self.latent,
            tau_u: self.tau_u,
            tau_v: self.tau_v,
        }
    }

    fn name(&self) -> &'static str {
        "constant-fluxes"
    }
}
