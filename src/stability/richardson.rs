//! Bulk Richardson number to stability parameter conversion.
//!
//! Two empirical relations convert a bulk Richardson number Rb into the
//! stability parameter ζ, and [`rb_shear`] provides the inverse diagnostic
//! (Rb from stability-corrected gradients) for cross-checking the two
//! formulations.

use crate::error::ModelError;

/// Grachev and Fairall (1996) parameters, fit to COARE data.
#[derive(Clone, Copy, Debug)]
pub struct Gf96Params {
    /// Leading coefficient C.
    pub c: f64,
    /// Critical bulk Richardson number. A value of exactly 0 requests the
    /// recomputation rbc = -z/(zi·Ch·β³).
    pub rbc: f64,
    /// Observation height (m), used only by the rbc recomputation.
    pub z: f64,
    /// Boundary-layer depth zi (m).
    pub zi: f64,
    /// Gustiness parameter β.
    pub beta: f64,
    /// Bulk transfer coefficient Ch.
    pub ch: f64,
}

impl Default for Gf96Params {
    fn default() -> Self {
        Self {
            c: 10.0,
            rbc: -4.5,
            z: 0.0,
            zi: 600.0,
            beta: 1.25,
            ch: 3e-3,
        }
    }
}

/// England and McNider (1995) stable-branch parameters.
#[derive(Clone, Copy, Debug)]
pub struct Em95Params {
    /// Shape parameter α.
    pub alpha: f64,
    /// Momentum coefficient β_m.
    pub beta_m: f64,
    /// Heat coefficient β_h.
    pub beta_h: f64,
}

impl Default for Em95Params {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta_m: 5.0,
            beta_h: 5.0,
        }
    }
}

/// Rb → ζ relation, selected by configuration.
#[derive(Clone, Copy, Debug)]
pub enum RichardsonRelation {
    /// Grachev–Fairall 1996.
    GrachevFairall96(Gf96Params),
    /// England–McNider 1995, stable branch only. The unstable branch is
    /// intentionally unimplemented and rejected as unsupported.
    EnglandMcNider95(Em95Params),
}

impl RichardsonRelation {
    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            RichardsonRelation::GrachevFairall96(_) => "grachev-fairall-96",
            RichardsonRelation::EnglandMcNider95(_) => "england-mcnider-95",
        }
    }

    /// Convert a bulk Richardson number sequence into ζ, elementwise.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidParameter`] if the GF96 rbc recomputation is
    ///   requested (rbc == 0) with a zero `zi·Ch·β³` denominator.
    /// - [`ModelError::Unsupported`] for any `rb < 0` under EM95.
    /// - [`ModelError::DegenerateDenominator`] when the EM95 general form
    ///   hits `β_m²·rb - β_h = 0`, or its degenerate form hits
    ///   `1 - β_m·rb = 0`.
    pub fn zeta_from_rb(&self, rb: &[f64]) -> Result<Vec<f64>, ModelError> {
        match self {
            RichardsonRelation::GrachevFairall96(p) => zeta_gf96(p, rb),
            RichardsonRelation::EnglandMcNider95(p) => zeta_em95(p, rb),
        }
    }
}

fn zeta_gf96(p: &Gf96Params, rb: &[f64]) -> Result<Vec<f64>, ModelError> {
    let rbc = if p.rbc == 0.0 {
        let denom = p.zi * p.ch * p.beta.powi(3);
        if denom == 0.0 {
            return Err(ModelError::InvalidParameter {
                reason: format!(
                    "GF96 rbc recomputation needs nonzero zi*Ch*beta^3 \
                     (zi = {}, Ch = {}, beta = {})",
                    p.zi, p.ch, p.beta
                ),
            });
        }
        -p.z / denom
    } else {
        p.rbc
    };

    Ok(rb.iter().map(|&r| p.c * r / (1.0 + r / rbc)).collect())
}

fn zeta_em95(p: &Em95Params, rb: &[f64]) -> Result<Vec<f64>, ModelError> {
    if let Some(level) = rb.iter().position(|&r| r < 0.0) {
        return Err(ModelError::Unsupported {
            reason: format!(
                "EM95 unstable branch (rb = {} at level {}) is not implemented",
                rb[level], level
            ),
        });
    }

    // Degenerate case selected by numeric equality, per the closure's
    // reduction when beta_m = beta_h and alpha = 1.
    let degenerate = p.beta_m == p.beta_h && p.alpha == 1.0;

    let mut zeta = Vec::with_capacity(rb.len());
    for (level, &r) in rb.iter().enumerate() {
        let z = if degenerate {
            let denom = 1.0 - p.beta_m * r;
            if denom == 0.0 {
                return Err(ModelError::DegenerateDenominator {
                    context: "EM95 degenerate form (1 - beta_m*rb)",
                    level,
                });
            }
            r / denom
        } else {
            let denom = 2.0 * (p.beta_m * p.beta_m * r - p.beta_h);
            if denom == 0.0 {
                return Err(ModelError::DegenerateDenominator {
                    context: "EM95 general form (beta_m^2*rb - beta_h)",
                    level,
                });
            }
            let disc = p.alpha * p.alpha + 4.0 * (p.beta_h - p.alpha * p.beta_m) * r;
            (p.alpha - 2.0 * p.beta_m * r * disc.sqrt()) / denom
        };
        zeta.push(z);
    }
    Ok(zeta)
}

/// Diagnostic bulk Richardson number from stability-corrected gradients:
/// `Rb = ζ·φ_h/φ_m²`, elementwise.
///
/// # Errors
///
/// Returns [`ModelError::LengthMismatch`] unless all three inputs have the
/// same length.
pub fn rb_shear(phi_m: &[f64], phi_h: &[f64], zeta: &[f64]) -> Result<Vec<f64>, ModelError> {
    if phi_m.len() != zeta.len() {
        return Err(ModelError::LengthMismatch {
            name: "phi_m",
            got: phi_m.len(),
            expected: zeta.len(),
        });
    }
    if phi_h.len() != zeta.len() {
        return Err(ModelError::LengthMismatch {
            name: "phi_h",
            got: phi_h.len(),
            expected: zeta.len(),
        });
    }
    Ok(zeta
        .iter()
        .zip(phi_m.iter().zip(phi_h))
        .map(|(&z, (&pm, &ph))| z * ph / (pm * pm))
        .collect())
}
