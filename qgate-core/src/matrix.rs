//! Dense complex matrices for gate construction
//!
//! This module provides the small amount of linear algebra the gate
//! constructors need:
//! - Tensor (Kronecker) products and n-fold tensor powers
//! - Composition in gate-application order ([`Matrix::apply`])
//! - Scalar multiplication, adjoint and trace
//! - Validation (unitarity, hermiticity, approximate equality)
//!
//! Matrices are square and stored row-major in a flat vector. Row and column
//! indices are read big-endian: qubit 0 is the most significant bit of the
//! index.
//!
//! # Example
//!
//! ```rust
//! use qgate_core::{Matrix, QubitCount};
//! use num_complex::Complex64;
//!
//! let x = Matrix::from([
//!     [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
//!     [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
//! ]);
//!
//! // X ⊗ X on two qubits
//! let xx = x.tensor_power(QubitCount::TWO);
//! assert_eq!(xx.dimension(), 4);
//! assert!(xx.is_unitary(1e-10));
//! ```

use crate::{QuantumError, QubitCount, Result};
use num_complex::Complex64;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// Default tolerance for approximate comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Square complex matrix stored row-major
#[derive(Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// Create a `dim × dim` zero matrix
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![ZERO; dim * dim],
        }
    }

    /// Create a `dim × dim` identity matrix
    pub fn identity(dim: usize) -> Self {
        let mut matrix = Self::zeros(dim);
        for i in 0..dim {
            matrix.data[i * dim + i] = ONE;
        }
        matrix
    }

    /// Identity matrix spanning `qubits` qubits
    pub fn identity_for(qubits: QubitCount) -> Self {
        Self::identity(qubits.dimension())
    }

    /// Build a matrix from a list of rows
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(QuantumError::dimension_mismatch(dim, row.len()));
            }
            data.extend(row);
        }
        Ok(Self { dim, data })
    }

    /// Build a matrix from a flattened row-major vector
    ///
    /// # Errors
    /// Returns [`QuantumError::DimensionMismatch`] if the length is not a
    /// perfect square.
    pub fn from_vec(data: Vec<Complex64>) -> Result<Self> {
        let dim = (data.len() as f64).sqrt() as usize;
        if dim * dim != data.len() {
            return Err(QuantumError::dimension_mismatch(dim * dim, data.len()));
        }
        Ok(Self { dim, data })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Number of qubits the matrix spans, `log2(dimension)`
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.dim.max(1).ilog2() as usize
    }

    /// Flattened row-major entries
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Consume the matrix and return its flattened row-major entries
    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Row `i` as a slice
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[Complex64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.data.chunks_exact(self.dim.max(1))
    }

    /// Column `j` as a new vector
    ///
    /// For a gate matrix this is the image of basis state `|j⟩`.
    pub fn column(&self, j: usize) -> Vec<Complex64> {
        (0..self.dim).map(|i| self[(i, j)]).collect()
    }

    /// Copy the matrix into nested rows
    pub fn to_rows(&self) -> Vec<Vec<Complex64>> {
        self.rows().map(<[Complex64]>::to_vec).collect()
    }

    /// Exchange rows `a` and `b` in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * self.dim);
        head[lo * self.dim..(lo + 1) * self.dim].swap_with_slice(&mut tail[..self.dim]);
    }

    /// Multiply every entry of row `i` by `factor`
    pub fn scale_row(&mut self, i: usize, factor: Complex64) {
        let dim = self.dim;
        for value in &mut self.data[i * dim..(i + 1) * dim] {
            *value *= factor;
        }
    }

    /// Tensor (Kronecker) product `self ⊗ other`
    ///
    /// For matrices A (m×m) and B (n×n) the result is (mn)×(mn), with A's
    /// index forming the most significant part of the combined index.
    pub fn tensor(&self, other: &Matrix) -> Matrix {
        let n_a = self.dim;
        let n_b = other.dim;
        let n_result = n_a * n_b;
        let mut result = Matrix::zeros(n_result);

        for i in 0..n_a {
            for j in 0..n_a {
                let a_ij = self.data[i * n_a + j];
                if a_ij == ZERO {
                    continue;
                }
                for k in 0..n_b {
                    for l in 0..n_b {
                        let row = i * n_b + k;
                        let col = j * n_b + l;
                        result.data[row * n_result + col] = a_ij * other.data[k * n_b + l];
                    }
                }
            }
        }

        result
    }

    /// n-fold tensor power `self ⊗ self ⊗ … ⊗ self`
    ///
    /// Every one of the `n` factors receives the same matrix. `n = 1`
    /// returns a copy of `self`.
    pub fn tensor_power(&self, n: QubitCount) -> Matrix {
        let mut result = self.clone();
        for _ in 1..n.get() {
            result = result.tensor(self);
        }
        result
    }

    /// Matrix product `self · rhs`
    ///
    /// # Panics
    /// Panics if the dimensions differ. Use [`Matrix::checked_multiply`] for
    /// a fallible version.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.dim, rhs.dim,
            "Matrix dimensions must match for multiplication"
        );
        let n = self.dim;
        let mut result = Matrix::zeros(n);

        for i in 0..n {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                if a_ik == ZERO {
                    continue;
                }
                for j in 0..n {
                    result.data[i * n + j] += a_ik * rhs.data[k * n + j];
                }
            }
        }

        result
    }

    /// Matrix product `self · rhs`, failing on a dimension mismatch
    pub fn checked_multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.dim != rhs.dim {
            return Err(QuantumError::dimension_mismatch(self.dim, rhs.dim));
        }
        Ok(self.multiply(rhs))
    }

    /// Compose in gate-application order: apply `self`, then `next`
    ///
    /// Returns the operator product `next · self`, so
    /// `a.apply(&b).apply(&c)` equals `c · b · a`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn apply(&self, next: &Matrix) -> Matrix {
        next.multiply(self)
    }

    /// Multiply every entry by `factor`
    pub fn scale(&self, factor: Complex64) -> Matrix {
        Matrix {
            dim: self.dim,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Adjoint (conjugate transpose), `(A†)ᵢⱼ = (Aⱼᵢ)*`
    pub fn adjoint(&self) -> Matrix {
        let n = self.dim;
        let mut result = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                result.data[i * n + j] = self.data[j * n + i].conj();
            }
        }
        result
    }

    /// Sum of the diagonal entries
    pub fn trace(&self) -> Complex64 {
        (0..self.dim).map(|i| self.data[i * self.dim + i]).sum()
    }

    /// Entry-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Check `U · U† = I` within `tolerance`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.multiply(&self.adjoint())
            .approx_eq(&Matrix::identity(self.dim), tolerance)
    }

    /// Check `A = A†` within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.approx_eq(&self.adjoint(), tolerance)
    }

    /// Check that every row and column holds exactly one `1` and zeros elsewhere
    pub fn is_permutation(&self) -> bool {
        let n = self.dim;
        let mut column_hits = vec![0usize; n];
        for row in self.rows() {
            let mut hits = 0;
            for (j, &v) in row.iter().enumerate() {
                if v == ONE {
                    hits += 1;
                    column_hits[j] += 1;
                } else if v != ZERO {
                    return false;
                }
            }
            if hits != 1 {
                return false;
            }
        }
        column_hits.iter().all(|&c| c == 1)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        assert!(col < self.dim, "column {} out of range", col);
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex64 {
        assert!(col < self.dim, "column {} out of range", col);
        &mut self.data[row * self.dim + col]
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl<const N: usize> From<[[Complex64; N]; N]> for Matrix {
    fn from(rows: [[Complex64; N]; N]) -> Self {
        Self {
            dim: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

impl<const N: usize> From<&[[Complex64; N]; N]> for Matrix {
    fn from(rows: &[[Complex64; N]; N]) -> Self {
        Self::from(*rows)
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.dim, self.dim)?;
        for row in self.rows() {
            write!(f, "  ")?;
            for v in row {
                write!(f, "{:>8.4}{:+.4}i ", v.re, v.im)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
