//! Error types for qgate

use thiserror::Error;

/// Errors that can occur while constructing gate matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    /// Qubit count is zero or exceeds the supported maximum
    #[error("Invalid qubit count {requested}: must be between 1 and {max}")]
    InvalidQubitCount { requested: usize, max: usize },

    /// Control or target index outside the register
    #[error("Invalid qubit index {0}: register has only {1} qubits")]
    QubitOutOfRange(usize, usize),

    /// Control and target refer to the same qubit
    #[error("Duplicate qubit {0}: control and target must differ")]
    DuplicateQubit(usize),

    /// Gate needs more qubits than were requested
    #[error("Gate '{gate}' requires at least {minimum} qubits, but {actual} were requested")]
    UnsupportedQubitCount {
        gate: String,
        minimum: usize,
        actual: usize,
    },

    /// Matrix operands or rows have incompatible dimensions
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Symbolic gate name not recognised
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),
}

impl QuantumError {
    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(requested: usize, max: usize) -> Self {
        Self::InvalidQubitCount { requested, max }
    }

    /// Create an out-of-range qubit error
    pub fn qubit_out_of_range(qubit: usize, num_qubits: usize) -> Self {
        Self::QubitOutOfRange(qubit, num_qubits)
    }

    /// Create an unsupported qubit count error
    pub fn unsupported_qubit_count(gate: impl Into<String>, minimum: usize, actual: usize) -> Self {
        Self::UnsupportedQubitCount {
            gate: gate.into(),
            minimum,
            actual,
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_count_error() {
        let err = QuantumError::invalid_qubit_count(0, 30);
        let msg = format!("{}", err);
        assert!(msg.contains("0"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_qubit_out_of_range_error() {
        let err = QuantumError::qubit_out_of_range(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_unsupported_qubit_count_error() {
        let err = QuantumError::unsupported_qubit_count("SWAP", 2, 1);
        let msg = format!("{}", err);
        assert!(msg.contains("SWAP"));
        assert!(msg.contains("2"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn test_duplicate_qubit_error() {
        let err = QuantumError::DuplicateQubit(1);
        assert!(err.to_string().contains("must differ"));
    }
}
