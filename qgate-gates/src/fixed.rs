//! Fixed three-qubit gates

use crate::matrices::{self, I};
use num_complex::Complex64;
use qgate_core::Matrix;

/// Fredkin (controlled-SWAP) gate
///
/// Qubit 0 controls a swap of qubits 1 and 2, exchanging `|101⟩` and `|110⟩`.
pub fn fredkin() -> Matrix {
    tracing::trace!(gate = "FREDKIN", "building fixed gate");
    Matrix::from(&matrices::FREDKIN)
}

/// Three-qubit quantum Fourier transform
///
/// Entry (r, c) is ω^((r·c) mod 8) / √8 with ω = e^(iπ/4), the powers of ω
/// taken as powers of √i.
pub fn qft() -> Matrix {
    tracing::trace!(gate = "QFT", "building fixed gate");
    let omega = I.sqrt();
    let powers: Vec<Complex64> = (0..8).map(|k| omega.powi(k)).collect();

    let mut m = Matrix::zeros(8);
    for (r, row) in matrices::QFT_PHASE_EXPONENTS.iter().enumerate() {
        for (c, &k) in row.iter().enumerate() {
            m[(r, c)] = powers[k];
        }
    }

    m.scale(Complex64::new(1.0 / 8f64.sqrt(), 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_fredkin_swaps_five_and_six() {
        let m = fredkin();
        let identity = Matrix::identity(8);
        for i in [0, 1, 2, 3, 4, 7] {
            assert_eq!(m.row(i), identity.row(i));
        }
        assert_eq!(m.row(5), identity.row(6));
        assert_eq!(m.row(6), identity.row(5));
    }

    #[test]
    fn test_qft_first_row_and_column_uniform() {
        let m = qft();
        let amplitude = 1.0 / 8f64.sqrt();
        for k in 0..8 {
            assert_relative_eq!(m[(0, k)].re, amplitude, epsilon = 1e-10);
            assert_relative_eq!(m[(k, 0)].re, amplitude, epsilon = 1e-10);
            assert_relative_eq!(m[(k, 0)].im, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_qft_entries_are_roots_of_unity() {
        let m = qft();
        let scale = 8f64.sqrt();
        for r in 0..8 {
            for c in 0..8 {
                let expected = Complex64::from_polar(1.0, PI / 4.0 * ((r * c) % 8) as f64);
                assert_relative_eq!(m[(r, c)].re * scale, expected.re, epsilon = 1e-10);
                assert_relative_eq!(m[(r, c)].im * scale, expected.im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_qft_is_symmetric() {
        let m = qft();
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(m[(r, c)], m[(c, r)]);
            }
        }
    }
}
