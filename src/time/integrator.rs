//! Trait-based time integrator abstraction.
//!
//! The column model advances each prognostic profile with an explicit
//! integrator driven by a tendency closure. The traits here separate the
//! vector-space operations a solution type must provide ([`Integrable`])
//! from the integrator metadata ([`IntegratorInfo`]) and the stepping
//! itself ([`TimeIntegrator`]).

// =============================================================================
// Integrable Trait
// =============================================================================

/// Vector-space operations needed by explicit time integrators.
///
/// - `scale`: x <- c * x
/// - `axpy`: x <- x + c * y
pub trait Integrable: Clone + Sized {
    /// Scale the solution by a constant: self <- c * self.
    fn scale(&mut self, c: f64);

    /// Add a scaled vector: self <- self + c * other.
    fn axpy(&mut self, c: f64, other: &Self);
}

impl Integrable for Vec<f64> {
    fn scale(&mut self, c: f64) {
        for v in self.iter_mut() {
            *v *= c;
        }
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        for (v, o) in self.iter_mut().zip(other) {
            *v += c * o;
        }
    }
}

// =============================================================================
// IntegratorInfo Trait
// =============================================================================

/// Non-generic information about a time integrator (dyn-compatible).
pub trait IntegratorInfo: Send + Sync {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> usize;

    /// Number of stages.
    fn n_stages(&self) -> usize;

    /// Whether the integrator is strong stability preserving.
    fn is_ssp(&self) -> bool;
}

// =============================================================================
// TimeIntegrator Trait
// =============================================================================

/// Explicit time integrator: advance a solution from `t` to `t + dt`.
pub trait TimeIntegrator<S: Integrable>: IntegratorInfo {
    /// Advance the solution by one time step.
    ///
    /// # Arguments
    /// * `state` - Solution to advance (modified in place)
    /// * `dt` - Time step size
    /// * `t` - Current time
    /// * `rhs` - Tendency function: f(state, time) -> time derivative
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S;
}

// =============================================================================
// SSP-RK3 Implementation
// =============================================================================

/// Strong Stability Preserving Runge-Kutta 3rd order integrator
/// (Shu-Osher form).
///
/// Stages:
/// ```text
/// u1    = u + dt * L(u, t)
/// u2    = 3/4 * u + 1/4 * u1 + 1/4 * dt * L(u1, t + dt)
/// u_new = 1/3 * u + 2/3 * u2 + 2/3 * dt * L(u2, t + dt/2)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SspRk3;

impl IntegratorInfo for SspRk3 {
    fn name(&self) -> &'static str {
        "ssp-rk3"
    }

    fn order(&self) -> usize {
        3
    }

    fn n_stages(&self) -> usize {
        3
    }

    fn is_ssp(&self) -> bool {
        true
    }
}

impl<S: Integrable> TimeIntegrator<S> for SspRk3 {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        // Stage 1: u1 = u + dt * L(u, t)
        let l_u = rhs(state, t);
        let mut u1 = state.clone();
        u1.axpy(dt, &l_u);

        // Stage 2: u2 = 3/4 * u + 1/4 * u1 + 1/4 * dt * L(u1, t + dt)
        let l_u1 = rhs(&u1, t + dt);
        let mut u2 = state.clone();
        u2.scale(0.75);
        u2.axpy(0.25, &u1);
        u2.axpy(0.25 * dt, &l_u1);

        // Stage 3: u_new = 1/3 * u + 2/3 * u2 + 2/3 * dt * L(u2, t + dt/2)
        let l_u2 = rhs(&u2, t + 0.5 * dt);
        state.scale(1.0 / 3.0);
        state.axpy(2.0 / 3.0, &u2);
        state.axpy(2.0 / 3.0 * dt, &l_u2);
    }
}

// =============================================================================
// Forward Euler (for comparison/testing)
// =============================================================================

/// Forward Euler integrator (1st order). Useful for testing and debugging.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl IntegratorInfo for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }

    fn is_ssp(&self) -> bool {
        true
    }
}

impl<S: Integrable> TimeIntegrator<S> for ForwardEuler {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        let l_u = rhs(state, t);
        state.axpy(dt, &l_u);
    }
}

// =============================================================================
// Standard Integrator Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for built-in integrators, for runtime selection via
/// configuration without dynamic dispatch.
#[derive(Clone, Copy, Debug, Default)]
pub enum StandardIntegrator {
    /// SSP-RK3 (default).
    #[default]
    SspRk3,
    /// Forward Euler (1st order, for testing).
    ForwardEuler,
}

impl IntegratorInfo for StandardIntegrator {
    fn name(&self) -> &'static str {
        match self {
            StandardIntegrator::SspRk3 => "ssp-rk3",
            StandardIntegrator::ForwardEuler => "forward-euler",
        }
    }

    fn order(&self) -> usize {
        match self {
            StandardIntegrator::SspRk3 => 3,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn n_stages(&self) -> usize {
        match self {
            StandardIntegrator::SspRk3 => 3,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn is_ssp(&self) -> bool {
        true
    }
}

impl<S: Integrable> TimeIntegrator<S> for StandardIntegrator {
    fn step<F>(&self, state: &mut S, dt: f64, t: f64, rhs: F)
    where
        F: Fn(&S, f64) -> S,
    {
        match self {
            StandardIntegrator::SspRk3 => SspRk3.step(state, dt, t, rhs),
            StandardIntegrator::ForwardEuler => ForwardEuler.step(state, dt, t, rhs),
        }
    }
}
