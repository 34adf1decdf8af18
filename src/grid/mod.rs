//! Vertical grid representation.
//!
//! A column is discretized on a fixed, strictly ascending sequence of
//! heights. The grid is immutable once constructed; every profile in the
//! model is indexed identically to it.

use crate::error::ModelError;

/// Minimum number of levels: one interior level plus two boundaries.
pub const MIN_LEVELS: usize = 3;

/// Fixed vertical height coordinate (m) for a single column.
#[derive(Clone, Debug)]
pub struct VerticalGrid {
    heights: Vec<f64>,
}

impl VerticalGrid {
    /// Create a grid from an ascending height sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidGrid`] if fewer than [`MIN_LEVELS`]
    /// heights are supplied, if any height is non-finite, or if the
    /// sequence is not strictly increasing (equal consecutive heights
    /// would produce a zero grid spacing).
    pub fn new(heights: Vec<f64>) -> Result<Self, ModelError> {
        if heights.len() < MIN_LEVELS {
            return Err(ModelError::InvalidGrid {
                reason: format!("need at least {} levels, got {}", MIN_LEVELS, heights.len()),
            });
        }
        for (k, &z) in heights.iter().enumerate() {
            if !z.is_finite() {
                return Err(ModelError::InvalidGrid {
                    reason: format!("non-finite height at level {}", k),
                });
            }
        }
        for k in 1..heights.len() {
            if heights[k] <= heights[k - 1] {
                return Err(ModelError::InvalidGrid {
                    reason: format!(
                        "heights must be strictly increasing: z[{}] = {} <= z[{}] = {}",
                        k,
                        heights[k],
                        k - 1,
                        heights[k - 1]
                    ),
                });
            }
        }
        Ok(Self { heights })
    }

    /// Create a uniform grid of `nz` levels spanning `[z_min, z_max]`.
    pub fn uniform(z_min: f64, z_max: f64, nz: usize) -> Result<Self, ModelError> {
        if nz < MIN_LEVELS {
            return Err(ModelError::InvalidGrid {
                reason: format!("need at least {} levels, got {}", MIN_LEVELS, nz),
            });
        }
        if z_max <= z_min {
            return Err(ModelError::InvalidGrid {
                reason: format!("z_max ({}) must exceed z_min ({})", z_max, z_min),
            });
        }
        let h = (z_max - z_min) / (nz - 1) as f64;
        let heights = (0..nz).map(|i| z_min + i as f64 * h).collect();
        Self::new(heights)
    }

    /// Number of vertical levels.
    pub fn nz(&self) -> usize {
        self.heights.len()
    }

    /// Height values (m), strictly increasing.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Smallest spacing between consecutive levels.
    pub fn spacing_min(&self) -> f64 {
        self.heights
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(f64::INFINITY, f64::min)
    }

    /// Total column depth, `z_max - z_min`.
    pub fn depth(&self) -> f64 {
        self.heights[self.heights.len() - 1] - self.heights[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid() {
        let grid = VerticalGrid::uniform(0.0, 1000.0, 20).unwrap();
        assert_eq!(grid.nz(), 20);
        assert!((grid.heights()[0] - 0.0).abs() < 1e-14);
        assert!((grid.heights()[19] - 1000.0).abs() < 1e-12);
        assert!((grid.spacing_min() - 1000.0 / 19.0).abs() < 1e-12);
        assert!((grid.depth() - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_levels_rejected() {
        assert!(VerticalGrid::new(vec![0.0, 1.0]).is_err());
        assert!(VerticalGrid::uniform(0.0, 1.0, 2).is_err());
    }

    #[test]
    fn test_non_ascending_rejected() {
        assert!(VerticalGrid::new(vec![0.0, 2.0, 1.0]).is_err());
        // Zero spacing counts as non-ascending.
        assert!(VerticalGrid::new(vec![0.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(VerticalGrid::new(vec![0.0, f64::NAN, 2.0]).is_err());
        assert!(VerticalGrid::new(vec![0.0, 1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_non_uniform_accepted() {
        let grid = VerticalGrid::new(vec![0.0, 10.0, 50.0, 200.0]).unwrap();
        assert_eq!(grid.nz(), 4);
        assert!((grid.spacing_min() - 10.0).abs() < 1e-14);
    }
}
