//! Multi-qubit gates built by editing an identity matrix
//!
//! With big-endian basis ordering the states where every control qubit is
//! `|1⟩` sit at the end of the index range. Controlled gates on the trailing
//! qubit therefore reduce to touching the last one or two rows of the
//! identity instead of enumerating bit patterns.
//!
//! All constructors need at least two qubits; [`QubitCount::TWO`] is the
//! natural size.

use crate::matrices::{I, NEG_ONE};
use num_complex::Complex64;
use qgate_core::{Matrix, QuantumError, QubitCount, Result};

fn require_two(gate: &str, qubits: QubitCount) -> Result<Matrix> {
    if qubits.get() < 2 {
        tracing::debug!(gate, qubits = qubits.get(), "structural gate needs two qubits");
        return Err(QuantumError::unsupported_qubit_count(gate, 2, qubits.get()));
    }
    tracing::trace!(gate, qubits = qubits.get(), "building structural gate");
    Ok(Matrix::identity_for(qubits))
}

/// SWAP gate generalised by reflecting the index space
///
/// Rows `i` and `dim-1-i` are exchanged for `i` in `1..dim/2`, leaving row 0
/// and row `dim-1` in place. For two qubits this is the usual SWAP.
///
/// # Errors
/// Returns [`QuantumError::UnsupportedQubitCount`] for a single qubit.
pub fn swap(qubits: QubitCount) -> Result<Matrix> {
    let mut m = require_two("SWAP", qubits)?;
    let dim = m.dimension();

    for i in 1..dim / 2 {
        m.swap_rows(i, dim - 1 - i);
    }

    Ok(m)
}

fn with_last_phase(gate: &str, qubits: QubitCount, phase: Complex64) -> Result<Matrix> {
    let mut m = require_two(gate, qubits)?;
    let last = m.dimension() - 1;
    m[(last, last)] = phase;
    Ok(m)
}

/// Controlled-Z: phase −1 on `|1…1⟩`
///
/// Two qubits give CZ, three give CCZ.
///
/// # Errors
/// Returns [`QuantumError::UnsupportedQubitCount`] for a single qubit.
pub fn controlled_z(qubits: QubitCount) -> Result<Matrix> {
    with_last_phase("CONTROLLED_Z", qubits, NEG_ONE)
}

/// Controlled-S: phase `i` on `|1…1⟩`
///
/// # Errors
/// Returns [`QuantumError::UnsupportedQubitCount`] for a single qubit.
pub fn controlled_s(qubits: QubitCount) -> Result<Matrix> {
    with_last_phase("CONTROLLED_S", qubits, I)
}

/// Controlled-NOT on the last qubit, controlled by all preceding qubits
///
/// Two qubits give CNOT, three give Toffoli.
///
/// # Errors
/// Returns [`QuantumError::UnsupportedQubitCount`] for a single qubit.
pub fn controlled_not(qubits: QubitCount) -> Result<Matrix> {
    require_two("CONTROLLED_NOT", qubits).map(flip_last)
}

/// Toffoli (CCNOT), the three-qubit [`controlled_not`]
pub fn toffoli() -> Matrix {
    tracing::trace!(gate = "TOFFOLI", "building structural gate");
    flip_last(Matrix::identity_for(QubitCount::THREE))
}

fn flip_last(mut m: Matrix) -> Matrix {
    let dim = m.dimension();
    m.swap_rows(dim - 1, dim - 2);
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn qubits(n: usize) -> QubitCount {
        QubitCount::new(n).unwrap()
    }

    #[test]
    fn test_swap_two_qubits() {
        let m = swap(QubitCount::TWO).unwrap();
        // |01⟩ ↔ |10⟩
        assert_relative_eq!(m[(1, 2)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(2, 1)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(0, 0)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(3, 3)].re, 1.0, epsilon = 1e-10);
        assert!(m.is_permutation());
    }

    #[test]
    fn test_swap_three_qubits_reflects_inner_rows() {
        let m = swap(QubitCount::THREE).unwrap();
        let identity = Matrix::identity(8);
        assert_eq!(m.row(0), identity.row(0));
        assert_eq!(m.row(7), identity.row(7));
        for i in 1..4 {
            assert_eq!(m.row(i), identity.row(7 - i));
            assert_eq!(m.row(7 - i), identity.row(i));
        }
    }

    #[test]
    fn test_controlled_z_diagonal() {
        let m = controlled_z(QubitCount::TWO).unwrap();
        for (i, expected) in [1.0, 1.0, 1.0, -1.0].iter().enumerate() {
            assert_relative_eq!(m[(i, i)].re, *expected, epsilon = 1e-10);
        }

        let ccz = controlled_z(QubitCount::THREE).unwrap();
        assert_relative_eq!(ccz[(7, 7)].re, -1.0, epsilon = 1e-10);
        assert_relative_eq!(ccz[(6, 6)].re, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_controlled_s_last_entry() {
        let m = controlled_s(QubitCount::TWO).unwrap();
        assert_relative_eq!(m[(3, 3)].im, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(3, 3)].re, 0.0, epsilon = 1e-10);
        assert!(m.is_unitary(1e-10));
    }

    #[test]
    fn test_controlled_not_swaps_last_rows() {
        let m = controlled_not(QubitCount::TWO).unwrap();
        assert_relative_eq!(m[(2, 3)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(3, 2)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(2, 2)].re, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_toffoli_matches_controlled_not() {
        assert_eq!(toffoli(), controlled_not(QubitCount::THREE).unwrap());
    }

    #[test]
    fn test_larger_registers_stay_unitary() {
        for n in 2..=5 {
            assert!(swap(qubits(n)).unwrap().is_unitary(1e-10));
            assert!(controlled_z(qubits(n)).unwrap().is_unitary(1e-10));
            assert!(controlled_s(qubits(n)).unwrap().is_unitary(1e-10));
            assert!(controlled_not(qubits(n)).unwrap().is_unitary(1e-10));
        }
    }

    #[test]
    fn test_single_qubit_rejected() {
        assert_eq!(
            swap(QubitCount::ONE),
            Err(QuantumError::unsupported_qubit_count("SWAP", 2, 1))
        );
        assert!(controlled_z(QubitCount::ONE).is_err());
        assert!(controlled_s(QubitCount::ONE).is_err());
        assert!(controlled_not(QubitCount::ONE).is_err());
    }
}
