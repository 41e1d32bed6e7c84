//! Gates described by name and parameters
//!
//! [`SymbolicGate`] is a serializable description of one gate constructor
//! call. Hosts can load gate descriptions from JSON (or any other serde
//! format) and turn them into matrices with [`SymbolicGate::build`].
//!
//! ```
//! use qgate_gates::symbolic::SymbolicGate;
//!
//! let gate: SymbolicGate =
//!     serde_json::from_str(r#"{"gate":"CNOT","qubits":3,"control":0,"target":2}"#).unwrap();
//! let matrix = gate.build().unwrap();
//! assert_eq!(matrix.dimension(), 8);
//! ```

use crate::{fixed, indexed, single, structural};
use qgate_core::{Matrix, QuantumError, QubitCount, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn two_qubits() -> QubitCount {
    QubitCount::TWO
}

/// Serializable description of a gate constructor call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate")]
pub enum SymbolicGate {
    #[serde(rename = "I")]
    Identity {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "X")]
    PauliX {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "Y")]
    PauliY {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "Z")]
    PauliZ {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "H")]
    Hadamard {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "S")]
    S {
        #[serde(default)]
        qubits: QubitCount,
    },
    #[serde(rename = "T")]
    T {
        #[serde(default)]
        qubits: QubitCount,
    },
    /// General single-qubit unitary U(α,β,γ,δ)
    #[serde(rename = "U")]
    U {
        alpha: f64,
        beta: f64,
        gamma: f64,
        delta: f64,
    },
    #[serde(rename = "SWAP")]
    Swap {
        #[serde(default = "two_qubits")]
        qubits: QubitCount,
    },
    #[serde(rename = "CONTROLLED_Z")]
    ControlledZ {
        #[serde(default = "two_qubits")]
        qubits: QubitCount,
    },
    #[serde(rename = "CONTROLLED_S")]
    ControlledS {
        #[serde(default = "two_qubits")]
        qubits: QubitCount,
    },
    #[serde(rename = "CONTROLLED_NOT")]
    ControlledNot {
        #[serde(default = "two_qubits")]
        qubits: QubitCount,
    },
    #[serde(rename = "TOFFOLI")]
    Toffoli,
    /// CNOT at explicit control/target positions
    #[serde(rename = "CNOT")]
    Cnot {
        qubits: QubitCount,
        control: usize,
        target: usize,
    },
    /// CZ at explicit control/target positions
    #[serde(rename = "CZ")]
    Cz {
        qubits: QubitCount,
        control: usize,
        target: usize,
    },
    #[serde(rename = "FREDKIN")]
    Fredkin,
    #[serde(rename = "QFT")]
    Qft,
}

impl SymbolicGate {
    /// Symbolic name, identical to the serde tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity { .. } => "I",
            Self::PauliX { .. } => "X",
            Self::PauliY { .. } => "Y",
            Self::PauliZ { .. } => "Z",
            Self::Hadamard { .. } => "H",
            Self::S { .. } => "S",
            Self::T { .. } => "T",
            Self::U { .. } => "U",
            Self::Swap { .. } => "SWAP",
            Self::ControlledZ { .. } => "CONTROLLED_Z",
            Self::ControlledS { .. } => "CONTROLLED_S",
            Self::ControlledNot { .. } => "CONTROLLED_NOT",
            Self::Toffoli => "TOFFOLI",
            Self::Cnot { .. } => "CNOT",
            Self::Cz { .. } => "CZ",
            Self::Fredkin => "FREDKIN",
            Self::Qft => "QFT",
        }
    }

    /// Gate for `name` at its natural size
    ///
    /// Only gates that need no further parameters can be named this way;
    /// `U`, `CNOT` and `CZ` must be built from their variants directly.
    ///
    /// # Errors
    /// Returns [`QuantumError::UnknownGate`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        let one = QubitCount::ONE;
        let two = QubitCount::TWO;
        let gate = match name {
            "I" => Self::Identity { qubits: one },
            "X" => Self::PauliX { qubits: one },
            "Y" => Self::PauliY { qubits: one },
            "Z" => Self::PauliZ { qubits: one },
            "H" => Self::Hadamard { qubits: one },
            "S" => Self::S { qubits: one },
            "T" => Self::T { qubits: one },
            "SWAP" => Self::Swap { qubits: two },
            "CONTROLLED_Z" => Self::ControlledZ { qubits: two },
            "CONTROLLED_S" => Self::ControlledS { qubits: two },
            "CONTROLLED_NOT" => Self::ControlledNot { qubits: two },
            "TOFFOLI" => Self::Toffoli,
            "FREDKIN" => Self::Fredkin,
            "QFT" => Self::Qft,
            other => {
                tracing::debug!(name = other, "unknown gate name");
                return Err(QuantumError::UnknownGate(other.to_string()));
            }
        };
        Ok(gate)
    }

    /// Construct the gate matrix
    ///
    /// # Errors
    /// Propagates the validation errors of the underlying constructor.
    pub fn build(&self) -> Result<Matrix> {
        match *self {
            Self::Identity { qubits } => Ok(single::identity(qubits)),
            Self::PauliX { qubits } => Ok(single::pauli_x(qubits)),
            Self::PauliY { qubits } => Ok(single::pauli_y(qubits)),
            Self::PauliZ { qubits } => Ok(single::pauli_z(qubits)),
            Self::Hadamard { qubits } => Ok(single::hadamard(qubits)),
            Self::S { qubits } => Ok(single::s_gate(qubits)),
            Self::T { qubits } => Ok(single::t_gate(qubits)),
            Self::U {
                alpha,
                beta,
                gamma,
                delta,
            } => Ok(single::u(alpha, beta, gamma, delta)),
            Self::Swap { qubits } => structural::swap(qubits),
            Self::ControlledZ { qubits } => structural::controlled_z(qubits),
            Self::ControlledS { qubits } => structural::controlled_s(qubits),
            Self::ControlledNot { qubits } => structural::controlled_not(qubits),
            Self::Toffoli => Ok(structural::toffoli()),
            Self::Cnot {
                qubits,
                control,
                target,
            } => indexed::cnot(qubits, control, target),
            Self::Cz {
                qubits,
                control,
                target,
            } => indexed::cz(qubits, control, target),
            Self::Fredkin => Ok(fixed::fredkin()),
            Self::Qft => Ok(fixed::qft()),
        }
    }
}

impl FromStr for SymbolicGate {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for SymbolicGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity { qubits }
            | Self::PauliX { qubits }
            | Self::PauliY { qubits }
            | Self::PauliZ { qubits }
            | Self::Hadamard { qubits }
            | Self::S { qubits }
            | Self::T { qubits }
            | Self::Swap { qubits }
            | Self::ControlledZ { qubits }
            | Self::ControlledS { qubits }
            | Self::ControlledNot { qubits } => write!(f, "{}({})", self.name(), qubits.get()),
            Self::U {
                alpha,
                beta,
                gamma,
                delta,
            } => write!(f, "U({}, {}, {}, {})", alpha, beta, gamma, delta),
            Self::Cnot {
                qubits,
                control,
                target,
            }
            | Self::Cz {
                qubits,
                control,
                target,
            } => write!(f, "{}({}, {}, {})", self.name(), qubits.get(), control, target),
            Self::Toffoli | Self::Fredkin | Self::Qft => write!(f, "{}", self.name()),
        }
    }
}
