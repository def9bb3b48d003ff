//! Sets of congruence classes: the residue rings Z/nZ.

use std::fmt;
use std::ops::Rem;

use congrua_integers::Integer;
use num_traits::{One, Zero};

use crate::class::CongruenceClass;
use crate::error::CongruenceError;

/// The set Z/nZ of all congruence classes modulo `n`, a finite field
/// when `n` is prime.
///
/// The set stores only its modulus; the classes it contains are
/// generated on demand by [`iter`](Self::iter) and
/// [`class_of`](Self::class_of). Two sets are equal exactly when their
/// moduli agree, and hashing is consistent with that equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CongruenceSet {
    modulus: Integer,
}

impl CongruenceSet {
    /// Creates the set of congruence classes modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NonPositiveModulus`] if `modulus < 1`.
    pub fn new(modulus: impl Into<Integer>) -> Result<Self, CongruenceError> {
        let modulus = modulus.into();
        if modulus <= Integer::zero() {
            return Err(CongruenceError::NonPositiveModulus);
        }
        Ok(Self { modulus })
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Returns the number of congruence classes in the set, which
    /// equals the modulus. Returned as an [`Integer`] because the
    /// modulus may exceed `usize`.
    #[must_use]
    pub fn order(&self) -> &Integer {
        &self.modulus
    }

    /// Returns true if `class` is one of the classes of this set,
    /// i.e. if its modulus equals the set's modulus.
    #[must_use]
    pub fn contains(&self, class: &CongruenceClass) -> bool {
        self.modulus == *class.modulus()
    }

    /// Always true: every integer lies in exactly one class of the
    /// set. Provided for symmetry with [`CongruenceClass::contains`].
    #[must_use]
    pub fn contains_integer(&self, _value: impl Into<Integer>) -> bool {
        true
    }

    /// Returns the class of this set containing `value`. Also
    /// available as `value % &set`.
    #[must_use]
    pub fn class_of(&self, value: impl Into<Integer>) -> CongruenceClass {
        CongruenceClass::new(value, self.modulus.clone()).expect("modulus is positive")
    }

    /// Iterates over the classes of the set with residues
    /// `0, 1, ..., n-1`, each carrying the set's modulus. A fresh call
    /// restarts from residue 0.
    #[must_use]
    pub fn iter(&self) -> Classes {
        Classes {
            next: Integer::zero(),
            modulus: self.modulus.clone(),
        }
    }
}

impl fmt::Display for CongruenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z/{}Z", self.modulus)
    }
}

impl fmt::Debug for CongruenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CongruenceSet({})", self.modulus)
    }
}

impl IntoIterator for &CongruenceSet {
    type Item = CongruenceClass;
    type IntoIter = Classes;

    fn into_iter(self) -> Classes {
        self.iter()
    }
}

impl Rem<&CongruenceSet> for i64 {
    type Output = CongruenceClass;

    /// `value % &set` is the class of the set containing `value`.
    fn rem(self, rhs: &CongruenceSet) -> CongruenceClass {
        rhs.class_of(self)
    }
}

/// Finite iterator over the congruence classes of a [`CongruenceSet`],
/// produced by [`CongruenceSet::iter`].
#[derive(Clone, Debug)]
pub struct Classes {
    next: Integer,
    modulus: Integer,
}

impl Iterator for Classes {
    type Item = CongruenceClass;

    fn next(&mut self) -> Option<CongruenceClass> {
        if self.next < self.modulus {
            let class = CongruenceClass::new(self.next.clone(), self.modulus.clone())
                .expect("modulus is positive");
            self.next = &self.next + &Integer::one();
            Some(class)
        } else {
            None
        }
    }
}
