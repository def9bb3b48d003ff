//! Constructor notation for classes and sets.
//!
//! The marker type [`Z`] stands for the ring of integers and supports
//! the familiar algebraic spellings, each desugaring to an ordinary
//! constructor call:
//!
//! - `k * Z` is the class of `0` modulo `k`
//!   ([`CongruenceClass::new`]`(0, k)`);
//! - `offset + k * Z` is the class of `offset` modulo `k`;
//! - `Z / (n * Z)` is the set Z/nZ ([`CongruenceSet::new`]`(n)`).
//!
//! This layer is pure sugar: it carries no state and no semantics of
//! its own. Because the spellings are operator expressions, misuse
//! (a non-positive modulus, or a quotient by a class with a nonzero
//! residue) panics instead of returning an error.

use std::ops::{Div, Mul};

use congrua_integers::Integer;
use num_traits::Zero;

use crate::class::CongruenceClass;
use crate::set::CongruenceSet;

/// Marker for the ring of integers, usable as a symbol in constructor
/// expressions such as `17 + 23 * Z` and `Z / (23 * Z)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Z;

impl Mul<Z> for i64 {
    type Output = CongruenceClass;

    /// `k * Z` is the class of `0` modulo `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k < 1`.
    fn mul(self, _z: Z) -> CongruenceClass {
        CongruenceClass::new(0, self).expect("left-hand argument must be a positive integer")
    }
}

impl Mul<Z> for Integer {
    type Output = CongruenceClass;

    /// `k * Z` is the class of `0` modulo `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k < 1`.
    fn mul(self, _z: Z) -> CongruenceClass {
        CongruenceClass::new(0, self).expect("left-hand argument must be a positive integer")
    }
}

impl Div<CongruenceClass> for Z {
    type Output = CongruenceSet;

    /// `Z / (n * Z)` is the set Z/nZ.
    ///
    /// # Panics
    ///
    /// Panics if the right-hand class has a nonzero residue.
    fn div(self, rhs: CongruenceClass) -> CongruenceSet {
        assert!(
            rhs.residue().is_zero(),
            "right-hand argument must be a congruence class represented by 0"
        );
        CongruenceSet::new(rhs.modulus().clone()).expect("modulus is positive")
    }
}
