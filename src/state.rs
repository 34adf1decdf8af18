//! Column state: the prognostic profiles.
//!
//! A [`StateProfile`] holds one array per prognostic quantity, all indexed
//! identically to the [`VerticalGrid`](crate::grid::VerticalGrid). It is
//! created once at initialization and mutated in place by the closure
//! (TKE) and the time integrator (temperature, wind) once per step.

use crate::error::ModelError;
use crate::grid::VerticalGrid;

// ============================================================================
// Physical Constants
// ============================================================================

/// Specific gas constant of dry air (J/(kg·K)).
pub const R_DRY: f64 = 287.0;

/// Specific heat capacity of dry air at constant pressure (J/(kg·K)).
pub const CP_AIR: f64 = 1004.0;

/// Reference pressure for potential temperature (Pa).
pub const P_REF: f64 = 100_000.0;

/// Default reference air density (kg/m³).
pub const RHO_REF_DEFAULT: f64 = 1.2;

// ============================================================================
// State Profile
// ============================================================================

/// Prognostic profiles of a single column.
///
/// Potential temperature is a derived quantity, recomputed from temperature
/// and pressure whenever needed; it is never stored.
#[derive(Clone, Debug)]
pub struct StateProfile {
    /// Temperature (K).
    pub temperature: Vec<f64>,
    /// Zonal wind component (m/s).
    pub wind_u: Vec<f64>,
    /// Meridional wind component (m/s).
    pub wind_v: Vec<f64>,
    /// Pressure (Pa).
    pub pressure: Vec<f64>,
    /// Turbulence kinetic energy (m²/s²).
    pub tke: Vec<f64>,
}

impl StateProfile {
    /// Create a state from caller-supplied profiles, validated against the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LengthMismatch`] if any profile length differs
    /// from the grid length.
    pub fn new(
        temperature: Vec<f64>,
        wind_u: Vec<f64>,
        wind_v: Vec<f64>,
        pressure: Vec<f64>,
        tke: Vec<f64>,
        grid: &VerticalGrid,
    ) -> Result<Self, ModelError> {
        let nz = grid.nz();
        check_len("temperature", temperature.len(), nz)?;
        check_len("wind_u", wind_u.len(), nz)?;
        check_len("wind_v", wind_v.len(), nz)?;
        check_len("pressure", pressure.len(), nz)?;
        check_len("tke", tke.len(), nz)?;
        Ok(Self {
            temperature,
            wind_u,
            wind_v,
            pressure,
            tke,
        })
    }

    /// Create a state with a uniform initial TKE value at every level.
    pub fn with_uniform_tke(
        temperature: Vec<f64>,
        wind_u: Vec<f64>,
        wind_v: Vec<f64>,
        pressure: Vec<f64>,
        tke0: f64,
        grid: &VerticalGrid,
    ) -> Result<Self, ModelError> {
        let tke = vec![tke0; grid.nz()];
        Self::new(temperature, wind_u, wind_v, pressure, tke, grid)
    }

    /// Number of vertical levels.
    pub fn nz(&self) -> usize {
        self.temperature.len()
    }

    /// Potential temperature θ = T·(p_ref/p)^(R/c_p), freshly allocated.
    pub fn potential_temperature(&self) -> Vec<f64> {
        let exponent = R_DRY / CP_AIR;
        self.temperature
            .iter()
            .zip(&self.pressure)
            .map(|(&t, &p)| t * (P_REF / p).powf(exponent))
            .collect()
    }
}

fn check_len(name: &'static str, got: usize, expected: usize) -> Result<(), ModelError> {
    if got == expected {
        Ok(())
    } else {
        Err(ModelError::LengthMismatch {
            name,
            got,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3() -> VerticalGrid {
        VerticalGrid::new(vec![0.0, 50.0, 100.0]).unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let grid = grid3();
        let res = StateProfile::new(
            vec![290.0, 289.0, 288.0],
            vec![5.0, 5.0], // one short
            vec![0.0, 0.0, 0.0],
            vec![1e5, 9.9e4, 9.8e4],
            vec![1e-6; 3],
            &grid,
        );
        assert!(matches!(
            res,
            Err(ModelError::LengthMismatch { name: "wind_u", .. })
        ));
    }

    #[test]
    fn test_potential_temperature_at_reference_pressure() {
        let grid = grid3();
        let state = StateProfile::with_uniform_tke(
            vec![290.0, 285.0, 280.0],
            vec![0.0; 3],
            vec![0.0; 3],
            vec![P_REF; 3],
            1e-6,
            &grid,
        )
        .unwrap();
        // At p = p_ref, theta equals T exactly.
        let theta = state.potential_temperature();
        for (th, t) in theta.iter().zip(&state.temperature) {
            assert!((th - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_potential_temperature_increases_below_reference() {
        let grid = grid3();
        let state = StateProfile::with_uniform_tke(
            vec![280.0; 3],
            vec![0.0; 3],
            vec![0.0; 3],
            vec![9e4, 8e4, 7e4],
            1e-6,
            &grid,
        )
        .unwrap();
        // p < p_ref means theta > T.
        for (th, t) in state.potential_temperature().iter().zip(&state.temperature) {
            assert!(th > t);
        }
    }
}
