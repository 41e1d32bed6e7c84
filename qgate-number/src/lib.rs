//! Integer helpers for order-finding
//!
//! - [`pow`]: plain integer power
//! - [`mod_exp2`]: iterated modular multiplication used when preparing
//!   controlled modular-exponentiation stages
//!
//! # Example
//! ```
//! use qgate_number::{mod_exp2, pow};
//!
//! assert_eq!(pow(2, 10), 1024);
//! assert_eq!(mod_exp2(7, 3, 15).unwrap(), 1);
//! ```

use thiserror::Error;

/// Errors from the number helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Modulus was zero
    #[error("Modulus must be non-zero")]
    ZeroModulus,
}

/// Type alias for results in this crate
pub type Result<T> = std::result::Result<T, NumberError>;

/// Integer power `a^r`
///
/// Returns 0 when `a == 0` (including `0^0`), 1 when `r == 0`, and the
/// repeated product otherwise. Overflow wraps; use [`checked_pow`] to detect
/// it.
pub fn pow(a: u64, r: u32) -> u64 {
    if a == 0 {
        return 0;
    }
    if r == 0 {
        return 1;
    }

    let mut p = a;
    for _ in 1..r {
        p = p.wrapping_mul(a);
    }
    p
}

/// [`pow`] returning `None` on overflow
pub fn checked_pow(a: u64, r: u32) -> Option<u64> {
    if a == 0 {
        return Some(0);
    }
    if r == 0 {
        return Some(1);
    }

    let mut p = a;
    for _ in 1..r {
        p = p.checked_mul(a)?;
    }
    Some(p)
}

/// Iterated modular multiplication starting from `a`
///
/// Returns 0 when `a == 0` and `a mod n` when `j == 0`. Otherwise starts from
/// `p = a` and performs `p = (p · a) mod n` exactly `j` times, which yields
/// `a^(j+1) mod n`. The result always lies in `[0, n)`.
///
/// # Errors
/// Returns [`NumberError::ZeroModulus`] if `n == 0`.
pub fn mod_exp2(a: u64, j: u32, n: u64) -> Result<u64> {
    if n == 0 {
        tracing::debug!(a, j, "modular exponentiation with zero modulus");
        return Err(NumberError::ZeroModulus);
    }
    if a == 0 {
        return Ok(0);
    }
    if j == 0 {
        return Ok(a % n);
    }

    let modulus = u128::from(n);
    let base = u128::from(a);
    let mut p = base;
    for _ in 0..j {
        p = (p * base) % modulus;
    }

    tracing::trace!(a, j, n, result = p as u64, "modular exponentiation");
    Ok(p as u64)
}
