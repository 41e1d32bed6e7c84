//! Single-qubit gates and their tensor-power expansion
//!
//! Each constructor takes the number of qubits the result should span and
//! returns the n-fold tensor power of the gate's 2×2 matrix, so every qubit
//! receives the same gate. [`QubitCount::ONE`] gives the plain 2×2 matrix.
//!
//! ```
//! use qgate_core::QubitCount;
//! use qgate_gates::single::hadamard;
//!
//! // H ⊗ H ⊗ H
//! let h3 = hadamard(QubitCount::THREE);
//! assert_eq!(h3.dimension(), 8);
//! ```

use crate::matrices;
use num_complex::Complex64;
use qgate_core::{Matrix, QubitCount};

fn expand(name: &str, gate: &[[Complex64; 2]; 2], qubits: QubitCount) -> Matrix {
    tracing::trace!(gate = name, qubits = qubits.get(), "building single-qubit gate");
    Matrix::from(gate).tensor_power(qubits)
}

/// Identity gate, `I^⊗n`
pub fn identity(qubits: QubitCount) -> Matrix {
    expand("I", &matrices::IDENTITY, qubits)
}

/// Pauli-X (NOT) gate, `X^⊗n`
pub fn pauli_x(qubits: QubitCount) -> Matrix {
    expand("X", &matrices::PAULI_X, qubits)
}

/// Pauli-Y gate, `Y^⊗n`
pub fn pauli_y(qubits: QubitCount) -> Matrix {
    expand("Y", &matrices::PAULI_Y, qubits)
}

/// Pauli-Z gate, `Z^⊗n`
pub fn pauli_z(qubits: QubitCount) -> Matrix {
    expand("Z", &matrices::PAULI_Z, qubits)
}

/// Hadamard gate, `H^⊗n`
///
/// Applied to `|0…0⟩` this produces the uniform superposition.
pub fn hadamard(qubits: QubitCount) -> Matrix {
    expand("H", &matrices::HADAMARD, qubits)
}

/// S (phase, √Z) gate, `S^⊗n`
pub fn s_gate(qubits: QubitCount) -> Matrix {
    expand("S", &matrices::S_GATE, qubits)
}

/// T (π/8, √S) gate, `T^⊗n`
pub fn t_gate(qubits: QubitCount) -> Matrix {
    expand("T", &matrices::T_GATE, qubits)
}

/// General single-qubit unitary
///
/// Applies the phase layer P(β), then the real rotation R(γ), then the phase
/// layer P(δ), and multiplies the result by the global phase e^(iα):
///
/// U(α,β,γ,δ) = e^(iα) · P(δ) · R(γ) · P(β)
///
/// where P(θ) = diag(e^(-iθ/2), e^(iθ/2)) and R(θ) is the real rotation by θ/2.
pub fn u(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Matrix {
    tracing::trace!(alpha, beta, gamma, delta, "building U gate");
    let first = Matrix::from(matrices::phase_layer(beta));
    let second = Matrix::from(matrices::rotation_layer(gamma));
    let third = Matrix::from(matrices::phase_layer(delta));

    first
        .apply(&second)
        .apply(&third)
        .scale(Complex64::from_polar(1.0, alpha))
}
