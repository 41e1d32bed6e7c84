//! Canonical gate matrices
//!
//! Constant 2×2 and 8×8 tables for the fixed gates, plus the rotation
//! layers the parametric `U` gate is composed from.

use num_complex::Complex64;

// Compile-time constant helpers
pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub(crate) const I: Complex64 = Complex64::new(0.0, 1.0);
pub(crate) const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
pub(crate) const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

// Common mathematical constants
const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, ONE],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [
    [ZERO, NEG_I],
    [I, ZERO],
];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S gate matrix (Phase gate, √Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, I],
];

/// T gate matrix (π/8 gate, √S)
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)], // e^(iπ/4) = (1+i)/√2
];

/// Fredkin gate matrix (CSWAP - controlled SWAP)
/// Swaps |101⟩ and |110⟩, identity elsewhere
pub const FREDKIN: [[Complex64; 8]; 8] = [
    [ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE],
];

/// Powers of ω = e^(iπ/4) making up the 3-qubit QFT
///
/// Entry (r, c) is the exponent k of ω^k, equal to (r·c) mod 8.
pub const QFT_PHASE_EXPONENTS: [[usize; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 3, 4, 5, 6, 7],
    [0, 2, 4, 6, 0, 2, 4, 6],
    [0, 3, 6, 1, 4, 7, 2, 5],
    [0, 4, 0, 4, 0, 4, 0, 4],
    [0, 5, 2, 7, 4, 1, 6, 3],
    [0, 6, 4, 2, 0, 6, 4, 2],
    [0, 7, 6, 5, 4, 3, 2, 1],
];

// Parameterized gate matrix generators

/// Generate the phase layer of the `U` gate
/// P(θ) = [[e^(-iθ/2),  0       ],
///         [0,          e^(iθ/2)]]
#[inline]
pub fn phase_layer(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;

    [
        [
            Complex64::new(half_theta.cos(), -half_theta.sin()),
            ZERO,
        ],
        [
            ZERO,
            Complex64::new(half_theta.cos(), half_theta.sin()),
        ],
    ]
}

/// Generate the real rotation layer of the `U` gate
/// R(θ) = [[cos(θ/2),  -sin(θ/2)],
///         [sin(θ/2),   cos(θ/2)]]
#[inline]
pub fn rotation_layer(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    [
        [
            Complex64::new(cos_val, 0.0),
            Complex64::new(-sin_val, 0.0),
        ],
        [
            Complex64::new(sin_val, 0.0),
            Complex64::new(cos_val, 0.0),
        ],
    ]
}
