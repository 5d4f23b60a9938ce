//! Symmetric eigen-decomposition with eigenpairs sorted by eigenvalue.

use crate::error::{ensure_finite, MathError, MathResult};
use nalgebra::{DMatrix, DVector, SymmetricEigen};

/// Eigenpairs of a symmetric matrix, ordered by descending eigenvalue.
#[derive(Debug, Clone)]
pub struct SortedEigen {
    /// Eigenvalues, largest first.
    pub eigenvalues: DVector<f64>,
    /// Unit eigenvectors stored as columns, aligned with `eigenvalues`.
    pub eigenvectors: DMatrix<f64>,
}

impl SortedEigen {
    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Returns true if the decomposition holds no eigenpairs.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Returns the `k`-th eigenvector (0 = dominant).
    pub fn eigenvector(&self, k: usize) -> DVector<f64> {
        self.eigenvectors.column(k).into_owned()
    }

    /// Stacks the first `n` eigenvectors as the rows of an `n x dim` matrix.
    pub fn leading_rows(&self, n: usize) -> DMatrix<f64> {
        let n = n.min(self.len());
        self.eigenvectors.columns(0, n).transpose()
    }
}

/// Eigen-decomposes a symmetric matrix and sorts eigenpairs by descending eigenvalue.
///
/// Equal eigenvalues keep the order produced by the decomposition, so the
/// result is deterministic for a fixed input. Each eigenvector's sign is
/// chosen so that its largest-magnitude component is positive.
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use quantz_math::linear_algebra::sorted_symmetric_eigen;
///
/// let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 3.0]);
/// let eig = sorted_symmetric_eigen(&m).unwrap();
/// assert!((eig.eigenvalues[0] - 3.0).abs() < 1e-12);
/// ```
pub fn sorted_symmetric_eigen(matrix: &DMatrix<f64>) -> MathResult<SortedEigen> {
    let n = matrix.nrows();
    if n == 0 || n != matrix.ncols() {
        return Err(MathError::invalid_input(format!(
            "eigen-decomposition needs a non-empty square matrix, got {}x{}",
            matrix.nrows(),
            matrix.ncols()
        )));
    }
    ensure_finite(matrix.iter(), "eigen-decomposition input")?;

    let eig = SymmetricEigen::try_new(matrix.clone(), f64::EPSILON, 0).ok_or_else(|| {
        MathError::DecompositionFailed {
            reason: format!("symmetric eigen solver did not converge for {n}x{n} matrix"),
        }
    })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eig.eigenvalues[b].total_cmp(&eig.eigenvalues[a]));

    let eigenvalues = DVector::from_iterator(n, order.iter().map(|&i| eig.eigenvalues[i]));
    let mut eigenvectors = DMatrix::zeros(n, n);
    for (k, &i) in order.iter().enumerate() {
        let mut column = eig.eigenvectors.column(i).into_owned();
        if dominant_component(&column) < 0.0 {
            column.neg_mut();
        }
        eigenvectors.set_column(k, &column);
    }

    tracing::trace!(dim = n, top = eigenvalues[0], "sorted symmetric eigen-decomposition");

    Ok(SortedEigen {
        eigenvalues,
        eigenvectors,
    })
}

/// First component with the largest magnitude.
fn dominant_component(v: &DVector<f64>) -> f64 {
    v.iter()
        .fold(0.0_f64, |best, &x| if x.abs() > best.abs() { x } else { best })
}
