//! Qubit counts used to size gate matrices

use crate::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest register a gate matrix may span.
///
/// Keeps `1 << n` and `dim * dim` inside `usize` on 64-bit targets.
pub const MAX_QUBITS: usize = 30;

/// Validated number of qubits a gate matrix spans
///
/// Gate constructors take a `QubitCount` instead of a variable-length
/// argument list. Single-qubit gates use [`QubitCount::ONE`] as their natural
/// size, the structural controlled gates use [`QubitCount::TWO`].
///
/// # Example
/// ```
/// use qgate_core::QubitCount;
///
/// let n = QubitCount::new(3).unwrap();
/// assert_eq!(n.get(), 3);
/// assert_eq!(n.dimension(), 8);
/// assert!(QubitCount::new(0).is_err());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct QubitCount(usize);

impl QubitCount {
    /// A single qubit (2×2 matrices)
    pub const ONE: Self = Self(1);
    /// Two qubits (4×4 matrices)
    pub const TWO: Self = Self(2);
    /// Three qubits (8×8 matrices)
    pub const THREE: Self = Self(3);

    /// Create a qubit count
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubitCount`] if `n` is zero or larger
    /// than [`MAX_QUBITS`].
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 || n > MAX_QUBITS {
            tracing::debug!(requested = n, max = MAX_QUBITS, "rejected qubit count");
            return Err(QuantumError::invalid_qubit_count(n, MAX_QUBITS));
        }
        Ok(Self(n))
    }

    /// Number of qubits
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Matrix dimension 2^n
    #[inline]
    pub const fn dimension(&self) -> usize {
        1 << self.0
    }

    /// Check that `index` names a qubit inside this register
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.0 {
            tracing::debug!(index, num_qubits = self.0, "qubit index out of range");
            return Err(QuantumError::qubit_out_of_range(index, self.0));
        }
        Ok(())
    }
}

impl Default for QubitCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for QubitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} qubit(s)", self.0)
    }
}

impl TryFrom<usize> for QubitCount {
    type Error = QuantumError;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<QubitCount> for usize {
    #[inline]
    fn from(n: QubitCount) -> Self {
        n.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_count_bounds() {
        assert!(QubitCount::new(1).is_ok());
        assert!(QubitCount::new(MAX_QUBITS).is_ok());
        assert_eq!(
            QubitCount::new(0),
            Err(QuantumError::invalid_qubit_count(0, MAX_QUBITS))
        );
        assert!(QubitCount::new(MAX_QUBITS + 1).is_err());
    }

    #[test]
    fn test_dimension() {
        assert_eq!(QubitCount::ONE.dimension(), 2);
        assert_eq!(QubitCount::TWO.dimension(), 4);
        assert_eq!(QubitCount::THREE.dimension(), 8);
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(QubitCount::default(), QubitCount::ONE);
    }

    #[test]
    fn test_check_index() {
        let n = QubitCount::THREE;
        assert!(n.check_index(2).is_ok());
        assert_eq!(n.check_index(3), Err(QuantumError::QubitOutOfRange(3, 3)));
    }

    #[test]
    fn test_serde_validates() {
        let n: QubitCount = serde_json::from_str("4").unwrap();
        assert_eq!(n.get(), 4);
        assert_eq!(serde_json::to_string(&n).unwrap(), "4");
        assert!(serde_json::from_str::<QubitCount>("0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(QubitCount::TWO.to_string(), "2 qubit(s)");
    }
}
