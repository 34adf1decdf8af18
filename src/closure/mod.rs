//! Mellor-Yamada Level-1.5 turbulence closure.
//!
//! Prognostic update of the TKE profile from the current state. Only
//! interior levels are updated; the first and last levels are externally
//! supplied boundary conditions and pass through untouched.
//!
//! The update is a fully explicit Euler sub-step. This is a known
//! limitation: for time steps large relative to the dissipation timescale
//! the scheme oscillates against the TKE floor instead of relaxing
//! smoothly. The floor clamp keeps every level at or above `tke_min`.

use crate::grid::VerticalGrid;
use crate::operators::gradient;
use crate::state::StateProfile;

/// Closure constants, immutable per run.
#[derive(Clone, Copy, Debug)]
pub struct ClosureConstants {
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Von Kármán constant.
    pub kappa: f64,
    /// Dissipation coefficient.
    pub c_e2: f64,
    /// Buoyancy-production coefficient.
    pub c_e3: f64,
    /// TKE floor (m²/s²).
    pub tke_min: f64,
}

impl Default for ClosureConstants {
    fn default() -> Self {
        Self {
            g: 9.81,
            kappa: 0.4,
            c_e2: 0.92,
            c_e3: 0.4,
            tke_min: 1e-6,
        }
    }
}

/// Mellor-Yamada Level-1.5 TKE scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct MellorYamada15 {
    constants: ClosureConstants,
}

impl MellorYamada15 {
    /// Create a closure with the given constants.
    pub fn new(constants: ClosureConstants) -> Self {
        Self { constants }
    }

    /// The closure constants in use.
    pub fn constants(&self) -> &ClosureConstants {
        &self.constants
    }

    /// Advance the TKE profile by one explicit sub-step of length `dt`.
    ///
    /// For each interior level k:
    /// - mixing length ℓ = κ·(z[k+1] - z[k-1])/2
    /// - shear production S = ℓ²·((dU/dz)² + (dV/dz)²)
    /// - buoyancy production B = -(g/θ)·e·dθ/dz
    /// - dissipation D = c_e2·e^(3/2)/ℓ
    /// - e' = e + dt·(S + c_e3·B - D), clamped to `tke_min`
    ///
    /// Buoyancy and dissipation use the pre-update TKE value. Levels 0 and
    /// nz-1 are never modified. Returns the updated TKE profile.
    pub fn update<'a>(
        &self,
        state: &'a mut StateProfile,
        grid: &VerticalGrid,
        dt: f64,
    ) -> &'a [f64] {
        let z = grid.heights();
        let nz = grid.nz();
        let c = &self.constants;

        let theta = state.potential_temperature();
        let dtheta_dz = gradient(&theta, z);
        let du_dz = gradient(&state.wind_u, z);
        let dv_dz = gradient(&state.wind_v, z);

        let tke_old = state.tke.clone();
        for k in 1..nz - 1 {
            // Strictly positive: grid spacing is nonzero and kappa > 0.
            let mixing_length = c.kappa * (z[k + 1] - z[k - 1]) / 2.0;
            debug_assert!(mixing_length > 0.0);

            let shear_prod =
                mixing_length * mixing_length * (du_dz[k] * du_dz[k] + dv_dz[k] * dv_dz[k]);
            let buoy_prod = -c.g / theta[k] * tke_old[k] * dtheta_dz[k];
            let dissipation = c.c_e2 * tke_old[k].powf(1.5) / mixing_length;

            let updated = tke_old[k] + dt * (shear_prod + c.c_e3 * buoy_prod - dissipation);
            state.tke[k] = updated.max(c.tke_min);
        }

        &state.tke
    }
}
