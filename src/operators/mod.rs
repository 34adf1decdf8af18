//! Finite-difference operators on the vertical coordinate.

/// Vertical derivative of a field by centered finite differences.
///
/// Interior points use the centered difference over `z[k+1] - z[k-1]`;
/// the two edge points use first-order one-sided differences. The grid may
/// be non-uniform. Returns freshly allocated storage of the same length.
///
/// # Panics
///
/// Panics in debug builds if the lengths differ or fewer than two points
/// are supplied.
pub fn gradient(f: &[f64], z: &[f64]) -> Vec<f64> {
    let n = f.len();
    debug_assert_eq!(n, z.len(), "field and coordinate lengths must match");
    debug_assert!(n >= 2, "gradient needs at least two points");

    let mut df = vec![0.0; n];
    df[0] = (f[1] - f[0]) / (z[1] - z[0]);
    for k in 1..n - 1 {
        df[k] = (f[k + 1] - f[k - 1]) / (z[k + 1] - z[k - 1]);
    }
    df[n - 1] = (f[n - 1] - f[n - 2]) / (z[n - 1] - z[n - 2]);
    df
}
