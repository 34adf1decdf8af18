//! Similarity stability-correction functions.
//!
//! Each variant maps the stability parameter ζ (height over Obukhov
//! length) to the dimensionless gradient corrections φ_m (momentum) and
//! φ_h (heat). Branch selection is purely by the sign of each element:
//! ζ > 0 is stable, ζ < 0 unstable, and ζ = 0 returns the neutral value 1
//! exactly. The functions are pure and elementwise; every call returns
//! freshly allocated storage.

/// Beljaars–Holtslag (1991) stable-branch parameters.
#[derive(Clone, Copy, Debug)]
pub struct BeljaarsHoltslagParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for BeljaarsHoltslagParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.667,
            c: 5.0,
            d: 0.35,
        }
    }
}

/// SHEBA parameters, fit over the stable Arctic surface layer.
///
/// Momentum and heat use separate fits; the variant is stable-only.
#[derive(Clone, Copy, Debug)]
pub struct ShebaParams {
    pub m_a: f64,
    pub m_b: f64,
    pub h_a: f64,
    pub h_b: f64,
    pub h_c: f64,
}

impl Default for ShebaParams {
    fn default() -> Self {
        Self {
            m_a: 5.0,
            m_b: 5.0 / 6.5,
            h_a: 5.0,
            h_b: 5.0,
            h_c: 3.0,
        }
    }
}

/// Similarity-function family, selected by configuration.
///
/// The SHEBA variant applies to stable boundary layers over ice; its
/// unstable branch is undefined and ζ < 0 falls through to the neutral
/// default rather than failing.
#[derive(Clone, Copy, Debug)]
pub enum StabilityVariant {
    /// Vickers and Mahrt (1999). Assumes minimal advection and an
    /// observation height well below the internal boundary-layer top.
    VickersMahrt99,
    /// Dyer (1974).
    Dyer74,
    /// Beljaars and Holtslag (1991).
    BeljaarsHoltslag91(BeljaarsHoltslagParams),
    /// SHEBA, stable-only.
    Sheba(ShebaParams),
}

impl StabilityVariant {
    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            StabilityVariant::VickersMahrt99 => "vickers-mahrt-99",
            StabilityVariant::Dyer74 => "dyer-74",
            StabilityVariant::BeljaarsHoltslag91(_) => "beljaars-holtslag-91",
            StabilityVariant::Sheba(_) => "sheba",
        }
    }

    /// Momentum stability correction φ_m, elementwise over `zeta`.
    pub fn phi_m(&self, zeta: &[f64]) -> Vec<f64> {
        zeta.iter().map(|&z| self.phi_m_scalar(z)).collect()
    }

    /// Heat stability correction φ_h, elementwise over `zeta`.
    ///
    /// Only SHEBA carries a distinct heat fit; the other families apply
    /// their momentum form to heat as well.
    pub fn phi_h(&self, zeta: &[f64]) -> Vec<f64> {
        zeta.iter().map(|&z| self.phi_h_scalar(z)).collect()
    }

    fn phi_m_scalar(&self, zeta: f64) -> f64 {
        match self {
            StabilityVariant::VickersMahrt99 => {
                if zeta > 0.0 {
                    (1.0 + 16.0 * zeta).powf(1.0 / 3.0)
                } else if zeta < 0.0 {
                    (1.0 - 35.0 * zeta).powf(-0.25)
                } else {
                    1.0
                }
            }
            StabilityVariant::Dyer74 => {
                if zeta > 0.0 {
                    1.0 + 5.0 * zeta
                } else if zeta < 0.0 {
                    (1.0 - 16.0 * zeta).powf(-0.25)
                } else {
                    1.0
                }
            }
            StabilityVariant::BeljaarsHoltslag91(p) => {
                if zeta > 0.0 {
                    1.0 + zeta * (p.a + p.b * (-p.d * zeta).exp() * (1.0 + p.c - p.d * zeta))
                } else if zeta < 0.0 {
                    (1.0 - 16.0 * zeta).powf(-0.25)
                } else {
                    1.0
                }
            }
            StabilityVariant::Sheba(p) => {
                if zeta > 0.0 {
                    1.0 + (p.m_a * zeta * (1.0 + zeta).powf(1.0 / 3.0)) / (1.0 + p.m_b * zeta)
                } else {
                    1.0
                }
            }
        }
    }

    fn phi_h_scalar(&self, zeta: f64) -> f64 {
        match self {
            StabilityVariant::Sheba(p) => {
                if zeta > 0.0 {
                    1.0 + (p.h_a * zeta + p.h_b * zeta * zeta)
                        / (1.0 + p.h_c * zeta + zeta * zeta)
                } else {
                    1.0
                }
            }
            other => other.phi_m_scalar(zeta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<StabilityVariant> {
        vec![
            StabilityVariant::VickersMahrt99,
            StabilityVariant::Dyer74,
            StabilityVariant::BeljaarsHoltslag91(BeljaarsHoltslagParams::default()),
            StabilityVariant::Sheba(ShebaParams::default()),
        ]
    }

    #[test]
    fn test_neutral_is_exactly_one() {
        for variant in all_variants() {
            let pm = variant.phi_m(&[0.0]);
            let ph = variant.phi_h(&[0.0]);
            assert_eq!(pm[0], 1.0, "{} phi_m(0)", variant.name());
            assert_eq!(ph[0], 1.0, "{} phi_h(0)", variant.name());
        }
    }

    #[test]
    fn test_mixed_signs_no_cross_contamination() {
        // Each element must match the scalar evaluation of its own sign.
        let zeta = [-0.5, -0.01, 0.0, 0.01, 0.5];
        for variant in all_variants() {
            let pm = variant.phi_m(&zeta);
            for (i, &z) in zeta.iter().enumerate() {
                let single = variant.phi_m(&[z]);
                assert_eq!(pm[i], single[0], "{} at zeta={}", variant.name(), z);
            }
        }
    }

    #[test]
    fn test_dyer_stable_linear() {
        let pm = StabilityVariant::Dyer74.phi_m(&[0.1, 0.2]);
        assert!((pm[0] - 1.5).abs() < 1e-14);
        assert!((pm[1] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_vickers_mahrt_branches() {
        let v = StabilityVariant::VickersMahrt99;
        let pm = v.phi_m(&[0.5, -0.5]);
        assert!((pm[0] - 9.0_f64.powf(1.0 / 3.0)).abs() < 1e-14);
        assert!((pm[1] - 18.5_f64.powf(-0.25)).abs() < 1e-14);
    }

    #[test]
    fn test_beljaars_holtslag_stable_value() {
        let p = BeljaarsHoltslagParams::default();
        let v = StabilityVariant::BeljaarsHoltslag91(p);
        let zeta = 1.0;
        let expected =
            1.0 + zeta * (p.a + p.b * (-p.d * zeta).exp() * (1.0 + p.c - p.d * zeta));
        let pm = v.phi_m(&[zeta]);
        assert!((pm[0] - expected).abs() < 1e-14);
    }

    #[test]
    fn test_sheba_unstable_returns_neutral() {
        // The unstable branch is undefined for SHEBA; it falls back to 1.
        let v = StabilityVariant::Sheba(ShebaParams::default());
        let pm = v.phi_m(&[-1.0, -0.1]);
        let ph = v.phi_h(&[-1.0, -0.1]);
        assert_eq!(pm, vec![1.0, 1.0]);
        assert_eq!(ph, vec![1.0, 1.0]);
    }

    #[test]
    fn test_sheba_momentum_and_heat_differ_when_stable() {
        let v = StabilityVariant::Sheba(ShebaParams::default());
        let pm = v.phi_m(&[0.5]);
        let ph = v.phi_h(&[0.5]);
        assert!(pm[0] > 1.0);
        assert!(ph[0] > 1.0);
        assert!((pm[0] - ph[0]).abs() > 1e-6);
    }

    #[test]
    fn test_output_is_fresh_and_same_length() {
        let zeta = vec![0.1; 7];
        for variant in all_variants() {
            let a = variant.phi_m(&zeta);
            let b = variant.phi_m(&zeta);
            assert_eq!(a.len(), 7);
            assert_eq!(a, b);
        }
    }
}
