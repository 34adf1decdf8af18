//! Column tendency computation.
//!
//! The right-hand side shared by temperature and both wind components:
//! a turbulent-diffusion-like damping by the TKE profile plus advection by
//! the frozen t=0 wind. The advecting wind is an independent snapshot,
//! never the live wind field; the two must stay distinguishable at every
//! stage of every step.

use crate::grid::VerticalGrid;
use crate::operators::gradient;

/// Tendency of a column scalar X:
///
/// `dX/dt = -e·dX/dz - d(u₀·X)/dz`
///
/// where `e` is the TKE profile frozen for the current outer step and `u₀`
/// is the frozen advecting wind. Pure; returns fresh storage.
pub fn scalar_tendency(
    field: &[f64],
    tke: &[f64],
    frozen_wind: &[f64],
    grid: &VerticalGrid,
) -> Vec<f64> {
    let z = grid.heights();
    debug_assert_eq!(field.len(), z.len());
    debug_assert_eq!(tke.len(), z.len());
    debug_assert_eq!(frozen_wind.len(), z.len());

    let dfield_dz = gradient(field, z);
    let flux: Vec<f64> = frozen_wind
        .iter()
        .zip(field)
        .map(|(&u0, &x)| u0 * x)
        .collect();
    let advection = gradient(&flux, z);

    dfield_dz
        .iter()
        .zip(&advection)
        .zip(tke)
        .map(|((&d, &a), &e)| -e * d - a)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_field_no_wind_is_steady() {
        let grid = VerticalGrid::uniform(0.0, 100.0, 5).unwrap();
        let field = vec![280.0; 5];
        let tke = vec![0.5; 5];
        let frozen = vec![0.0; 5];
        let tend = scalar_tendency(&field, &tke, &frozen, &grid);
        for &t in &tend {
            assert!(t.abs() < 1e-12);
        }
    }

    #[test]
    fn test_diffusive_term_sign() {
        // Positive gradient and positive TKE damp the field.
        let grid = VerticalGrid::uniform(0.0, 100.0, 5).unwrap();
        let field: Vec<f64> = grid.heights().iter().map(|&z| z).collect();
        let tke = vec![1.0; 5];
        let frozen = vec![0.0; 5];
        let tend = scalar_tendency(&field, &tke, &frozen, &grid);
        for &t in &tend {
            assert!((t + 1.0).abs() < 1e-12, "expected -1, got {}", t);
        }
    }

    #[test]
    fn test_advection_by_frozen_wind() {
        // Constant field X, linear frozen wind: d(u0*X)/dz = X * du0/dz.
        let grid = VerticalGrid::uniform(0.0, 100.0, 5).unwrap();
        let field = vec![2.0; 5];
        let tke = vec![0.0; 5];
        let frozen: Vec<f64> = grid.heights().iter().map(|&z| 0.1 * z).collect();
        let tend = scalar_tendency(&field, &tke, &frozen, &grid);
        for &t in &tend {
            assert!((t + 0.2).abs() < 1e-12, "expected -0.2, got {}", t);
        }
    }

    #[test]
    fn test_frozen_wind_is_not_the_live_field() {
        // The damping term sees the live field, the advection term the
        // frozen wind; swapping them changes the answer.
        let grid = VerticalGrid::uniform(0.0, 100.0, 5).unwrap();
        let live: Vec<f64> = grid.heights().iter().map(|&z| 5.0 + 0.01 * z).collect();
        let frozen: Vec<f64> = grid.heights().iter().map(|&z| 5.0 + 0.05 * z).collect();
        let tke = vec![0.3; 5];
        let a = scalar_tendency(&live, &tke, &frozen, &grid);
        let b = scalar_tendency(&frozen, &tke, &live, &grid);
        assert!(a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 1e-9));
    }
}
