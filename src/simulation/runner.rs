//! Column simulation driver.
//!
//! Owns the evolving [`StateProfile`] and orchestrates the per-timestep
//! sequence: surface-flux query, surface forcing of the lowest level, TKE
//! closure update, RK3 advance of temperature and wind, snapshot emission.
//! The advecting wind is captured exactly once at construction as an
//! independent copy of the initial wind-u profile.

use crate::closure::MellorYamada15;
use crate::error::ModelError;
use crate::grid::VerticalGrid;
use crate::physics::scalar_tendency;
use crate::state::{CP_AIR, RHO_REF_DEFAULT, StateProfile};
use crate::surface::{ConstantFluxes, SurfaceFluxProvider};
use crate::time::{IntegratorInfo, StandardIntegrator, TimeIntegrator};

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Configuration for a simulation run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Time step (s), strictly positive.
    pub dt: f64,
    /// Number of timesteps to run.
    pub n_steps: usize,
    /// Reference air density for the surface energy forcing (kg/m³).
    pub rho_ref: f64,
    /// Whether to print progress to stdout.
    pub verbose: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 60.0,
            n_steps: 10,
            rho_ref: RHO_REF_DEFAULT,
            verbose: false,
        }
    }
}

impl SimulationConfig {
    /// Set the time step.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the number of timesteps.
    pub fn with_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Set the reference air density.
    pub fn with_rho_ref(mut self, rho_ref: f64) -> Self {
        self.rho_ref = rho_ref;
        self
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

// =============================================================================
// Snapshot and Result
// =============================================================================

/// Per-timestep output: the updated profiles and the 0-based step index.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Index of the completed step, starting at 0.
    pub step: usize,
    /// Temperature (K).
    pub temperature: Vec<f64>,
    /// Zonal wind (m/s).
    pub wind_u: Vec<f64>,
    /// Meridional wind (m/s).
    pub wind_v: Vec<f64>,
    /// Turbulence kinetic energy (m²/s²).
    pub tke: Vec<f64>,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationResult {
    /// Number of timesteps completed.
    pub n_steps: usize,
    /// Total wall-clock time in seconds.
    pub wall_time: f64,
}

// =============================================================================
// Column Model
// =============================================================================

/// Single-column boundary-layer model.
///
/// # Type Parameters
///
/// * `P` - Surface-flux provider (defaults to the constant placeholder)
pub struct ColumnModel<P: SurfaceFluxProvider = ConstantFluxes> {
    grid: VerticalGrid,
    state: StateProfile,
    closure: MellorYamada15,
    integrator: StandardIntegrator,
    flux_provider: P,
    config: SimulationConfig,
    /// Wind-u snapshot from t=0, the advecting velocity for the whole run.
    /// Independent storage; never aliases the live wind field.
    frozen_wind: Vec<f64>,
}

impl ColumnModel<ConstantFluxes> {
    /// Create a model with the default closure, integrator, and the
    /// constant surface-flux placeholder.
    ///
    /// Captures the frozen advecting wind from the initial state before
    /// any mutation of the live wind field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveTimeStep`] for `dt <= 0` and
    /// [`ModelError::LengthMismatch`] if the state does not match the grid.
    pub fn new(
        grid: VerticalGrid,
        state: StateProfile,
        config: SimulationConfig,
    ) -> Result<Self, ModelError> {
        if !(config.dt > 0.0) {
            return Err(ModelError::NonPositiveTimeStep { dt: config.dt });
        }
        if state.nz() != grid.nz() {
            return Err(ModelError::LengthMismatch {
                name: "state",
                got: state.nz(),
                expected: grid.nz(),
            });
        }
        let frozen_wind = state.wind_u.clone();
        Ok(Self {
            grid,
            state,
            closure: MellorYamada15::default(),
            integrator: StandardIntegrator::default(),
            flux_provider: ConstantFluxes::default(),
            config,
            frozen_wind,
        })
    }
}

impl<P: SurfaceFluxProvider> ColumnModel<P> {
    /// Replace the surface-flux provider.
    pub fn with_flux_provider<Q: SurfaceFluxProvider>(self, provider: Q) -> ColumnModel<Q> {
        ColumnModel {
            grid: self.grid,
            state: self.state,
            closure: self.closure,
            integrator: self.integrator,
            flux_provider: provider,
            config: self.config,
            frozen_wind: self.frozen_wind,
        }
    }

    /// Replace the turbulence closure.
    pub fn with_closure(mut self, closure: MellorYamada15) -> Self {
        self.closure = closure;
        self
    }

    /// Replace the time integrator.
    pub fn with_integrator(mut self, integrator: StandardIntegrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// The current state.
    pub fn state(&self) -> &StateProfile {
        &self.state
    }

    /// The vertical grid.
    pub fn grid(&self) -> &VerticalGrid {
        &self.grid
    }

    /// The frozen advecting wind captured at construction.
    pub fn frozen_advecting_wind(&self) -> &[f64] {
        &self.frozen_wind
    }

    /// Run all configured steps, collecting one snapshot per step.
    pub fn run(&mut self) -> Result<Vec<Snapshot>, ModelError> {
        let mut snapshots = Vec::with_capacity(self.config.n_steps);
        self.run_with_callback(|snap| snapshots.push(snap.clone()))?;
        Ok(snapshots)
    }

    /// Run all configured steps, streaming each snapshot to `callback`.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SimulationResult, ModelError>
    where
        F: FnMut(&Snapshot),
    {
        let start_wall = std::time::Instant::now();

        if self.config.verbose {
            println!(
                "Starting column simulation: {} steps of {}s, {} integrator, {} fluxes",
                self.config.n_steps,
                self.config.dt,
                self.integrator.name(),
                self.flux_provider.name()
            );
        }

        for step in 0..self.config.n_steps {
            self.advance(step)?;
            self.check_finite(step)?;

            callback(&Snapshot {
                step,
                temperature: self.state.temperature.clone(),
                wind_u: self.state.wind_u.clone(),
                wind_v: self.state.wind_v.clone(),
                tke: self.state.tke.clone(),
            });

            if self.config.verbose && (step + 1) % 100 == 0 {
                println!("  step {}/{}", step + 1, self.config.n_steps);
            }
        }

        let wall_time = start_wall.elapsed().as_secs_f64();
        if self.config.verbose {
            println!(
                "Simulation complete: {} steps in {:.2}s",
                self.config.n_steps, wall_time
            );
        }

        Ok(SimulationResult {
            n_steps: self.config.n_steps,
            wall_time,
        })
    }

    /// One timestep: fluxes, surface forcing, closure, RK3 advance.
    fn advance(&mut self, step: usize) -> Result<(), ModelError> {
        let dt = self.config.dt;

        // (a) Query the surface-flux provider with the current profiles.
        let fluxes = self.flux_provider.fluxes(
            &self.state.temperature,
            &self.state.wind_u,
            &self.state.wind_v,
            &self.grid,
        );

        // (b) Surface energy forcing on the lowest level.
        self.state.temperature[0] += dt * fluxes.sensible / (CP_AIR * self.config.rho_ref);

        // (c) Closure update; this step's TKE, frozen across RK stages.
        self.closure.update(&mut self.state, &self.grid, dt);
        let tke = self.state.tke.clone();

        // (d) Advance T, u, v independently with the shared tendency.
        let grid = &self.grid;
        let frozen = &self.frozen_wind;
        let t = step as f64 * dt;
        self.integrator
            .step(&mut self.state.temperature, dt, t, |x, _| {
                scalar_tendency(x, &tke, frozen, grid)
            });
        self.integrator.step(&mut self.state.wind_u, dt, t, |x, _| {
            scalar_tendency(x, &tke, frozen, grid)
        });
        self.integrator.step(&mut self.state.wind_v, dt, t, |x, _| {
            scalar_tendency(x, &tke, frozen, grid)
        });

        Ok(())
    }

    /// Scan the output profiles for NaN/Inf; abort with step and level.
    fn check_finite(&self, step: usize) -> Result<(), ModelError> {
        let fields: [(&'static str, &[f64]); 4] = [
            ("temperature", &self.state.temperature),
            ("wind_u", &self.state.wind_u),
            ("wind_v", &self.state.wind_v),
            ("tke", &self.state.tke),
        ];
        for (field, values) in fields {
            if let Some(level) = values.iter().position(|v| !v.is_finite()) {
                return Err(ModelError::NonFinite { field, step, level });
            }
        }
        Ok(())
    }
}
