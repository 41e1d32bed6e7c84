//! Controlled gates on arbitrary control and target positions
//!
//! Qubit indices are big-endian: qubit 0 is the most significant bit of a
//! basis index, qubit `n-1` the least significant.

use crate::matrices::{NEG_ONE, ONE};
use qgate_core::{Matrix, QuantumError, QubitCount, Result};

/// Bit masks selecting the control and target qubits of a basis index
fn masks(qubits: QubitCount, control: usize, target: usize) -> Result<(usize, usize)> {
    qubits.check_index(control)?;
    qubits.check_index(target)?;
    if control == target {
        tracing::debug!(control, target, "control and target coincide");
        return Err(QuantumError::DuplicateQubit(control));
    }

    let n = qubits.get();
    Ok((1 << (n - 1 - control), 1 << (n - 1 - target)))
}

/// CNOT with the control at `control` and the target at `target`
///
/// Row `i` of the result is row `j` of the identity, where `j` is `i` with
/// the target bit flipped whenever the control bit of `i` is set.
///
/// # Errors
/// Returns [`QuantumError::QubitOutOfRange`] if either index is not below
/// `qubits`, or [`QuantumError::DuplicateQubit`] if they are equal.
///
/// # Example
/// ```
/// use qgate_core::QubitCount;
/// use qgate_gates::indexed::cnot;
///
/// let m = cnot(QubitCount::THREE, 0, 2).unwrap();
/// // |101⟩ → |100⟩
/// assert_eq!(m[(4, 5)].re, 1.0);
/// ```
pub fn cnot(qubits: QubitCount, control: usize, target: usize) -> Result<Matrix> {
    let (control_mask, target_mask) = masks(qubits, control, target)?;
    tracing::trace!(qubits = qubits.get(), control, target, "building CNOT");

    let dim = qubits.dimension();
    let mut m = Matrix::zeros(dim);
    for i in 0..dim {
        let j = if i & control_mask != 0 { i ^ target_mask } else { i };
        m[(i, j)] = ONE;
    }

    Ok(m)
}

/// CZ with the control at `control` and the target at `target`
///
/// Negates every row of the identity whose basis index has both the control
/// and the target bit set.
///
/// # Errors
/// Same conditions as [`cnot`].
pub fn cz(qubits: QubitCount, control: usize, target: usize) -> Result<Matrix> {
    let (control_mask, target_mask) = masks(qubits, control, target)?;
    tracing::trace!(qubits = qubits.get(), control, target, "building CZ");

    let both = control_mask | target_mask;
    let mut m = Matrix::identity_for(qubits);
    for i in (0..m.dimension()).filter(|i| i & both == both) {
        m.scale_row(i, NEG_ONE);
    }

    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cnot_two_qubits() {
        let m = cnot(QubitCount::TWO, 0, 1).unwrap();
        let identity = Matrix::identity(4);
        assert_eq!(m.row(0), identity.row(0));
        assert_eq!(m.row(1), identity.row(1));
        assert_eq!(m.row(2), identity.row(3));
        assert_eq!(m.row(3), identity.row(2));
    }

    #[test]
    fn test_cnot_reversed_control() {
        // Control on qubit 1 (LSB), target qubit 0: |01⟩ ↔ |11⟩
        let m = cnot(QubitCount::TWO, 1, 0).unwrap();
        assert_relative_eq!(m[(1, 3)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(3, 1)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(0, 0)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m[(2, 2)].re, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_cnot_non_adjacent() {
        let m = cnot(QubitCount::THREE, 0, 2).unwrap();
        // |101⟩ (5) → |100⟩ (4) and back
        assert_eq!(m.column(5)[4].re, 1.0);
        assert_eq!(m.column(4)[5].re, 1.0);
        // control clear: untouched
        for i in 0..4 {
            assert_eq!(m.column(i)[i].re, 1.0);
        }
        assert!(m.is_permutation());
    }

    #[test]
    fn test_cz_diagonal() {
        let m = cz(QubitCount::THREE, 0, 2).unwrap();
        let expected = [1.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0];
        for (i, &d) in expected.iter().enumerate() {
            assert_relative_eq!(m[(i, i)].re, d, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cz_symmetric_in_control_and_target() {
        assert_eq!(
            cz(QubitCount::THREE, 0, 1).unwrap(),
            cz(QubitCount::THREE, 1, 0).unwrap()
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            cnot(QubitCount::TWO, 2, 0),
            Err(QuantumError::QubitOutOfRange(2, 2))
        );
        assert_eq!(
            cz(QubitCount::TWO, 0, 5),
            Err(QuantumError::QubitOutOfRange(5, 2))
        );
    }

    #[test]
    fn test_duplicate_qubit() {
        assert_eq!(
            cnot(QubitCount::THREE, 1, 1),
            Err(QuantumError::DuplicateQubit(1))
        );
        assert!(cz(QubitCount::THREE, 2, 2).is_err());
    }

    #[test]
    fn test_single_qubit_register() {
        // Any pair on one qubit is either out of range or duplicate
        assert!(cnot(QubitCount::ONE, 0, 0).is_err());
        assert!(cnot(QubitCount::ONE, 0, 1).is_err());
    }
}
