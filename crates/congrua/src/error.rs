//! Error types for congruence-class construction and arithmetic.

use thiserror::Error;

/// Errors raised by congruence-class construction and arithmetic.
///
/// Note that an empty Chinese-remainder intersection is *not* an
/// error: [`CongruenceClass::intersect`](crate::CongruenceClass::intersect)
/// reports disjoint congruences as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CongruenceError {
    /// A modulus smaller than 1 was supplied at construction.
    #[error("modulus must be a positive integer")]
    NonPositiveModulus,

    /// A binary operation or comparison was attempted between
    /// congruence classes with different moduli.
    #[error("congruence classes do not have the same modulus")]
    ModulusMismatch,

    /// Division, inversion, or a negative exponent was attempted on a
    /// class whose residue is not coprime with the modulus.
    #[error("congruence class has no inverse")]
    NotInvertible,
}
