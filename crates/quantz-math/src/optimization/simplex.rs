//! The probability simplex `{ w : w_i >= 0, sum(w) = 1 }`.

use crate::error::{ensure_finite, MathError, MathResult};

/// Returns `n` equal weights summing to one.
pub fn uniform_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

/// Returns true if `weights` is non-empty, non-negative and sums to one within `tolerance`.
pub fn is_on_simplex(weights: &[f64], tolerance: f64) -> bool {
    !weights.is_empty()
        && weights.iter().all(|w| w.is_finite() && *w >= 0.0)
        && (weights.iter().sum::<f64>() - 1.0).abs() <= tolerance
}

/// Euclidean projection of `v` onto the probability simplex.
///
/// Uses the sort-based algorithm of Duchi et al. (2008): find the threshold
/// `theta` such that `sum(max(v_i - theta, 0)) = 1`, then clip. The result is
/// renormalised so the sum is one to machine precision.
///
/// # Example
///
/// ```rust
/// use quantz_math::optimization::project_onto_simplex;
///
/// let w = project_onto_simplex(&[0.8, 0.6, -0.2]).unwrap();
/// assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// assert_eq!(w[2], 0.0);
/// ```
pub fn project_onto_simplex(v: &[f64]) -> MathResult<Vec<f64>> {
    if v.is_empty() {
        return Err(MathError::invalid_input("cannot project an empty vector"));
    }
    ensure_finite(v, "simplex projection input")?;

    let mut sorted = v.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut cumulative = 0.0;
    let mut theta = 0.0;
    for (j, &u) in sorted.iter().enumerate() {
        cumulative += u;
        let candidate = (cumulative - 1.0) / (j + 1) as f64;
        if u - candidate > 0.0 {
            theta = candidate;
        }
    }

    let mut projected: Vec<f64> = v.iter().map(|&x| (x - theta).max(0.0)).collect();
    let total: f64 = projected.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Ok(uniform_weights(v.len()));
    }
    for w in &mut projected {
        *w /= total;
    }

    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_on_simplex_is_fixed() {
        let w = [0.2, 0.3, 0.5];
        let p = project_onto_simplex(&w).unwrap();
        for (a, b) in p.iter().zip(w.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_projection_clips_negatives() {
        let p = project_onto_simplex(&[2.0, 0.0, -1.0]).unwrap();
        assert_relative_eq!(p[0], 1.0, epsilon = 1e-15);
        assert_relative_eq!(p[1], 0.0);
        assert_relative_eq!(p[2], 0.0);
    }

    #[test]
    fn test_projection_shifts_equally() {
        // theta = (1.2 - 1) / 2 = 0.1 is removed from each component
        let p = project_onto_simplex(&[0.6, 0.6]).unwrap();
        assert_relative_eq!(p[0], 0.5, epsilon = 1e-15);
        assert_relative_eq!(p[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_all_negative_input() {
        let p = project_onto_simplex(&[-3.0, -1.0, -2.0]).unwrap();
        assert!(is_on_simplex(&p, 1e-12));
        assert_relative_eq!(p[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_projection_input() {
        assert!(project_onto_simplex(&[]).is_err());
        assert!(project_onto_simplex(&[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_uniform_weights() {
        let w = uniform_weights(4);
        assert!(is_on_simplex(&w, 1e-15));
        assert_relative_eq!(w[0], 0.25);
        assert!(uniform_weights(0).is_empty());
    }

    #[test]
    fn test_is_on_simplex() {
        assert!(is_on_simplex(&[1.0], 0.0));
        assert!(!is_on_simplex(&[], 1e-9));
        assert!(!is_on_simplex(&[1.2, -0.2], 1e-9));
        assert!(!is_on_simplex(&[0.5, 0.4], 1e-9));
    }
}
