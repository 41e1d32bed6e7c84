//! Core types for the qgate quantum gate library
//!
//! This crate provides the building blocks every gate constructor uses:
//! - [`Matrix`]: dense square complex matrix with tensor product, composition
//!   and validation helpers
//! - [`QubitCount`]: validated qubit count that sizes gate matrices
//! - [`QuantumError`]: error taxonomy for invalid qubit parameters
//!
//! # Example
//! ```
//! use qgate_core::{Matrix, QubitCount};
//!
//! let identity = Matrix::identity_for(QubitCount::TWO);
//! assert_eq!(identity.dimension(), 4);
//! assert!(identity.is_unitary(1e-10));
//! ```

pub mod error;
pub mod matrix;
pub mod qubit;

// Re-exports for convenience
pub use error::QuantumError;
pub use matrix::{Matrix, DEFAULT_TOLERANCE};
pub use num_complex::Complex64;
pub use qubit::{QubitCount, MAX_QUBITS};

/// Type alias for results in qgate
pub type Result<T> = std::result::Result<T, QuantumError>;
