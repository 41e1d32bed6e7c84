//! Quantum gate matrix library for qgate
//!
//! This crate builds the dense unitary matrices of standard quantum gates.
//! Every constructor is a pure function returning a freshly allocated
//! [`Matrix`](qgate_core::Matrix).
//!
//! # Gate families
//!
//! - [`single`]: I, X, Y, Z, H, S, T expanded to n qubits by tensor power,
//!   plus the general single-qubit unitary `U(α,β,γ,δ)`
//! - [`structural`]: SWAP, controlled-Z, controlled-S, controlled-NOT and
//!   Toffoli, built by editing an identity matrix
//! - [`indexed`]: CNOT and CZ on arbitrary control/target positions
//! - [`fixed`]: Fredkin and the three-qubit QFT
//! - [`symbolic`]: serializable gate descriptions dispatching to the above
//!
//! Basis indices are big-endian: qubit 0 is the most significant bit.
//!
//! # Examples
//!
//! ```
//! use qgate_core::QubitCount;
//! use qgate_gates::{indexed, single, structural};
//!
//! let h = single::hadamard(QubitCount::ONE);
//! let cnot = indexed::cnot(QubitCount::TWO, 0, 1).unwrap();
//! assert_eq!(cnot, structural::controlled_not(QubitCount::TWO).unwrap());
//!
//! // H·H = I
//! assert!(h.multiply(&h).approx_eq(&single::identity(QubitCount::ONE), 1e-10));
//! ```

pub mod fixed;
pub mod indexed;
pub mod matrices;
pub mod single;
pub mod structural;
pub mod symbolic;

// Re-export commonly used items
pub use fixed::{fredkin, qft};
pub use indexed::{cnot, cz};
pub use single::{hadamard, identity, pauli_x, pauli_y, pauli_z, s_gate, t_gate, u};
pub use structural::{controlled_not, controlled_s, controlled_z, swap, toffoli};
pub use symbolic::SymbolicGate;
