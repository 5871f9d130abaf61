use crate::errors::ClassicalCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is an n×n matrix and x is a length-n vector.
/// Returns an n-vector with entries normalized into the ring.
pub fn matrix_vector_mul(
    a: &Matrix,
    x: &Vector,
    ring: &Ring,
) -> Result<Vector, ClassicalCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(ClassicalCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Validates that `matrix` is square and non-ragged, returning its dimension.
pub fn check_square(matrix: &Matrix) -> Result<usize, ClassicalCryptoError> {
    let n = matrix.len();
    if n == 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(
            "Matrix must have at least one row".into(),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicalCryptoError::DimensionMismatch(format!(
                "Matrix must be square, but row {} has length {} (expected {})",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// Computes the determinant of a square matrix in the ring.
///
/// Cofactor expansion along the first row, entirely in exact integer
/// arithmetic. The result is normalized into `[0, modulus)`.
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicalCryptoError> {
    check_square(matrix)?;
    Ok(det_unchecked(matrix, ring))
}

// Assumes a square, non-empty matrix.
fn det_unchecked(matrix: &Matrix, ring: &Ring) -> i64 {
    let n = matrix.len();
    if n == 1 {
        return ring.normalize(matrix[0][0]);
    }

    let mut det = 0i64;
    for j in 0..n {
        let cofactor = ring.mul(matrix[0][j], det_unchecked(&minor(matrix, 0, j), ring));
        det = if j % 2 == 0 {
            ring.add(det, cofactor)
        } else {
            ring.sub(det, cofactor)
        };
    }
    det
}

// The (row, col) minor: the matrix with that row and column removed.
fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Computes the adjugate (transposed cofactor matrix) in the ring.
pub fn adjugate(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicalCryptoError> {
    let n = check_square(matrix)?;
    if n == 1 {
        // adj of a 1x1 matrix is the identity
        return Ok(vec![vec![1]]);
    }

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let cofactor = det_unchecked(&minor(matrix, i, j), ring);
            let signed = if (i + j) % 2 == 0 {
                cofactor
            } else {
                ring.neg(cofactor)
            };
            adj[j][i] = signed;
        }
    }
    Ok(adj)
}

/// Attempts to find the inverse of a square matrix in the ring.
///
/// Built from the adjugate and the modular inverse of the determinant rather
/// than floating-point inversion, so the result is exact:
/// `A^-1 = det(A)^-1 · adj(A) mod k`.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::NoInverse` when `gcd(det(A), k) != 1`
/// (including a zero determinant) and `DimensionMismatch` for non-square input.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicalCryptoError> {
    check_square(matrix)?;

    let det = det_unchecked(matrix, ring);
    let det_inv = ring.inv(det)?;
    let adj = adjugate(matrix, ring)?;

    Ok(adj
        .iter()
        .map(|row| row.iter().map(|&v| ring.mul(det_inv, v)).collect())
        .collect())
}
