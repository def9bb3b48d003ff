//! Congruence classes (elements of Z/nZ).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, Div, Mul, Neg, Not, Sub};

use congrua_integers::euclid::{extended_gcd, mod_inverse};
use congrua_integers::Integer;
use num_traits::{One, Zero};

use crate::error::CongruenceError;

/// A congruence class `r (mod n)`: the set of all integers congruent
/// to `r` modulo `n`.
///
/// The residue is always stored canonically, `0 <= r < n`; two classes
/// are equal exactly when their moduli and canonical residues agree,
/// and hashing is consistent with that equality. Instances are
/// immutable; every operation constructs a new class.
///
/// Arithmetic is available in two forms. The named `checked_*` methods
/// (and [`inverse`](Self::inverse) / [`pow`](Self::pow)) return a
/// `Result`, while the operator impls (`+`, `-`, `*`, `/`, unary `-`,
/// and `!` for the multiplicative inverse) panic on the same
/// conditions. The `/` operator is *exact modular
/// division* (multiplication by the inverse), not a truncating integer
/// division. The `&` operator is Chinese-remainder intersection and
/// returns an `Option` rather than panicking, because disjoint
/// congruences are an expected outcome.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CongruenceClass {
    residue: Integer,
    modulus: Integer,
}

impl CongruenceClass {
    /// Creates the congruence class of `residue` modulo `modulus`.
    ///
    /// The supplied residue may be any integer; it is reduced to the
    /// least nonnegative representative. A modulus of 1 gives the
    /// trivial class, whose residue is always 0.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NonPositiveModulus`] if `modulus < 1`.
    pub fn new(
        residue: impl Into<Integer>,
        modulus: impl Into<Integer>,
    ) -> Result<Self, CongruenceError> {
        let modulus = modulus.into();
        if modulus <= Integer::zero() {
            return Err(CongruenceError::NonPositiveModulus);
        }
        let residue = residue.into().floor_mod(&modulus);
        Ok(Self { residue, modulus })
    }

    /// Returns the canonical (least nonnegative) residue.
    #[must_use]
    pub fn residue(&self) -> &Integer {
        &self.residue
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    fn require_same_modulus(&self, other: &Self) -> Result<(), CongruenceError> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(CongruenceError::ModulusMismatch)
        }
    }

    /// Builds a class with this modulus from an unreduced value.
    fn reduced(&self, value: Integer) -> Self {
        Self {
            residue: value.floor_mod(&self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Modular addition.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::ModulusMismatch`] if the moduli
    /// differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CongruenceError> {
        self.require_same_modulus(other)?;
        Ok(self.reduced(&self.residue + &other.residue))
    }

    /// Modular subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::ModulusMismatch`] if the moduli
    /// differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, CongruenceError> {
        self.require_same_modulus(other)?;
        Ok(self.reduced(&self.residue - &other.residue))
    }

    /// Modular multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::ModulusMismatch`] if the moduli
    /// differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, CongruenceError> {
        self.require_same_modulus(other)?;
        Ok(self.reduced(&self.residue * &other.residue))
    }

    /// Returns the additive inverse, `(n - r) (mod n)`.
    #[must_use]
    pub fn negated(&self) -> Self {
        self.reduced(-&self.residue)
    }

    /// Returns the multiplicative inverse, computed with the extended
    /// Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NotInvertible`] if
    /// `gcd(r, n) != 1`.
    pub fn inverse(&self) -> Result<Self, CongruenceError> {
        mod_inverse(&self.residue, &self.modulus)
            .map(|residue| Self {
                residue,
                modulus: self.modulus.clone(),
            })
            .ok_or(CongruenceError::NotInvertible)
    }

    /// Exact modular division: multiplication by the inverse of
    /// `other`. This is not a truncating integer division.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::ModulusMismatch`] if the moduli
    /// differ, and [`CongruenceError::NotInvertible`] if
    /// `gcd(other.residue, n) != 1`.
    pub fn checked_div(&self, other: &Self) -> Result<Self, CongruenceError> {
        self.require_same_modulus(other)?;
        let inverse = other.inverse()?;
        self.checked_mul(&inverse)
    }

    /// Modular exponentiation by square-and-multiply, using
    /// `O(log exponent)` multiplications.
    ///
    /// A negative exponent inverts the base first and then raises the
    /// inverse to the absolute value of the exponent. An exponent of 0
    /// yields the class of 1, whose residue is 0 when the modulus is 1.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NotInvertible`] if the exponent is
    /// negative and `gcd(r, n) != 1`.
    pub fn pow(&self, exponent: &Integer) -> Result<Self, CongruenceError> {
        let (base, exponent) = if exponent.is_negative() {
            (self.inverse()?, -exponent)
        } else {
            (self.clone(), exponent.clone())
        };

        let mut result = Integer::one();
        let mut square = base.residue;
        for index in 0..exponent.bit_len() {
            if exponent.bit(index) {
                result = (&result * &square).floor_mod(&self.modulus);
            }
            square = (&square * &square).floor_mod(&self.modulus);
        }
        Ok(self.reduced(result))
    }

    /// Convenience form of [`pow`](Self::pow) for machine-word
    /// exponents.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NotInvertible`] if the exponent is
    /// negative and `gcd(r, n) != 1`.
    pub fn pow_i64(&self, exponent: i64) -> Result<Self, CongruenceError> {
        self.pow(&Integer::new(exponent))
    }

    /// Raises this class to the canonical residue of `exponent`.
    ///
    /// Useful when exponents are themselves treated as elements of
    /// their own group, for example modulo the totient via Euler's
    /// theorem. The exponent's modulus plays no role here.
    #[must_use]
    pub fn pow_class(&self, exponent: &Self) -> Self {
        self.pow(exponent.residue())
            .expect("canonical residues are nonnegative")
    }

    /// Compares two classes by their canonical residues.
    ///
    /// The `<`, `<=`, `>`, `>=` operators go through [`PartialOrd`]
    /// and evaluate to `false` across moduli; this is the fallible
    /// named form.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::ModulusMismatch`] if the moduli
    /// differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, CongruenceError> {
        self.require_same_modulus(other)?;
        Ok(self.residue.cmp(&other.residue))
    }

    /// Returns true if `value` is a member of this class, i.e. if
    /// `value` is congruent to the residue modulo `n`.
    #[must_use]
    pub fn contains(&self, value: impl Into<Integer>) -> bool {
        value.into().floor_mod(&self.modulus) == self.residue
    }

    /// Iterates over the nonnegative members of the class in
    /// increasing order: `r, r + n, r + 2n, ...`.
    ///
    /// The iterator is infinite; bound consumption externally, for
    /// example with [`Iterator::take`]. A fresh call restarts from the
    /// canonical residue.
    #[must_use]
    pub fn members(&self) -> Members {
        Members {
            next: self.residue.clone(),
            step: self.modulus.clone(),
        }
    }

    /// Returns the member at offset `index` from the canonical
    /// residue: `r + index * n`. Negative offsets yield the members
    /// below zero.
    #[must_use]
    pub fn nth_member(&self, index: i64) -> Integer {
        &self.residue + &(&Integer::new(index) * &self.modulus)
    }

    /// Returns true if every member of this class is also a member of
    /// `other`.
    ///
    /// This holds exactly when the modulus of `other` divides this
    /// class's modulus and the residues agree modulo the modulus of
    /// `other`. Residue agreement alone is not sufficient: without the
    /// divisibility requirement, `2 (mod 3)` would be reported as a
    /// subset of `2 (mod 4)` even though it contains `5`, which
    /// `2 (mod 4)` does not.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.modulus.floor_mod(&other.modulus).is_zero()
            && self.residue.floor_mod(&other.modulus) == other.residue
    }

    /// Re-reduces the canonical residue under a different modulus.
    ///
    /// # Errors
    ///
    /// Returns [`CongruenceError::NonPositiveModulus`] if
    /// `modulus < 1`.
    pub fn with_modulus(&self, modulus: impl Into<Integer>) -> Result<Self, CongruenceError> {
        Self::new(self.residue.clone(), modulus)
    }

    /// Intersects two congruence classes via the Chinese remainder
    /// theorem. The moduli may differ and need not be coprime.
    ///
    /// When the congruences are compatible, the result is the unique
    /// class modulo `lcm(n1, n2)` contained in both operands. When the
    /// residues differ modulo `gcd(n1, n2)` the two classes are
    /// disjoint and the result is `None`; disjointness is an expected
    /// outcome, not an error.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let (g, x, _) = extended_gcd(&self.modulus, &other.modulus);
        let diff = &other.residue - &self.residue;
        if !diff.floor_mod(&g).is_zero() {
            return None;
        }

        // n1*x = g (mod n2), so stepping r1 by n1 * ((diff/g)*x) lands
        // on r2 modulo n2; reducing the step count modulo n2/g keeps
        // the result inside [0, lcm).
        let quotient = &other.modulus / &g;
        let steps = (&(&diff / &g) * &x).floor_mod(&quotient);
        let residue = &self.residue + &(&self.modulus * &steps);
        let modulus = &self.modulus * &quotient;
        Some(Self { residue, modulus })
    }
}

impl fmt::Display for CongruenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.residue, self.modulus)
    }
}

impl fmt::Debug for CongruenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CongruenceClass({}, {})", self.residue, self.modulus)
    }
}

impl PartialOrd for CongruenceClass {
    /// Residue ordering for equal moduli; `None` across moduli.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.modulus == other.modulus).then(|| self.residue.cmp(&other.residue))
    }
}

impl From<CongruenceClass> for Integer {
    /// The canonical integer representative of the class.
    fn from(class: CongruenceClass) -> Self {
        class.residue
    }
}

impl IntoIterator for &CongruenceClass {
    type Item = Integer;
    type IntoIter = Members;

    fn into_iter(self) -> Members {
        self.members()
    }
}

/// Infinite iterator over the nonnegative members of a congruence
/// class, produced by [`CongruenceClass::members`].
#[derive(Clone, Debug)]
pub struct Members {
    next: Integer,
    step: Integer,
}

impl Iterator for Members {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        let value = self.next.clone();
        self.next = &self.next + &self.step;
        Some(value)
    }
}

// Operator facades over the checked methods. These panic where the
// checked forms return an error.

impl Add for &CongruenceClass {
    type Output = CongruenceClass;

    fn add(self, rhs: Self) -> CongruenceClass {
        self.checked_add(rhs)
            .expect("congruence classes do not have the same modulus")
    }
}

impl Add for CongruenceClass {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<i64> for &CongruenceClass {
    type Output = CongruenceClass;

    fn add(self, rhs: i64) -> CongruenceClass {
        self.reduced(&self.residue + &Integer::new(rhs))
    }
}

impl Add<i64> for CongruenceClass {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        &self + rhs
    }
}

impl Add<&CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn add(self, rhs: &CongruenceClass) -> CongruenceClass {
        rhs + self
    }
}

impl Add<CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn add(self, rhs: CongruenceClass) -> CongruenceClass {
        &rhs + self
    }
}

impl Sub for &CongruenceClass {
    type Output = CongruenceClass;

    fn sub(self, rhs: Self) -> CongruenceClass {
        self.checked_sub(rhs)
            .expect("congruence classes do not have the same modulus")
    }
}

impl Sub for CongruenceClass {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<i64> for &CongruenceClass {
    type Output = CongruenceClass;

    fn sub(self, rhs: i64) -> CongruenceClass {
        self.reduced(&self.residue - &Integer::new(rhs))
    }
}

impl Sub<i64> for CongruenceClass {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        &self - rhs
    }
}

impl Sub<&CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn sub(self, rhs: &CongruenceClass) -> CongruenceClass {
        rhs.reduced(Integer::new(self) - &rhs.residue)
    }
}

impl Sub<CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn sub(self, rhs: CongruenceClass) -> CongruenceClass {
        self - &rhs
    }
}

impl Mul for &CongruenceClass {
    type Output = CongruenceClass;

    fn mul(self, rhs: Self) -> CongruenceClass {
        self.checked_mul(rhs)
            .expect("congruence classes do not have the same modulus")
    }
}

impl Mul for CongruenceClass {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Mul<i64> for &CongruenceClass {
    type Output = CongruenceClass;

    fn mul(self, rhs: i64) -> CongruenceClass {
        self.reduced(&self.residue * &Integer::new(rhs))
    }
}

impl Mul<i64> for CongruenceClass {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        &self * rhs
    }
}

impl Mul<&CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn mul(self, rhs: &CongruenceClass) -> CongruenceClass {
        rhs * self
    }
}

impl Mul<CongruenceClass> for i64 {
    type Output = CongruenceClass;

    fn mul(self, rhs: CongruenceClass) -> CongruenceClass {
        &rhs * self
    }
}

impl Div for &CongruenceClass {
    type Output = CongruenceClass;

    fn div(self, rhs: Self) -> CongruenceClass {
        self.checked_div(rhs)
            .expect("division by a non-invertible congruence class")
    }
}

impl Div for CongruenceClass {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl Neg for &CongruenceClass {
    type Output = CongruenceClass;

    fn neg(self) -> CongruenceClass {
        self.negated()
    }
}

impl Neg for CongruenceClass {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl Not for &CongruenceClass {
    type Output = CongruenceClass;

    /// `!class` is the multiplicative inverse.
    fn not(self) -> CongruenceClass {
        self.inverse().expect("congruence class has no inverse")
    }
}

impl Not for CongruenceClass {
    type Output = Self;

    fn not(self) -> Self {
        !&self
    }
}

impl BitAnd for &CongruenceClass {
    type Output = Option<CongruenceClass>;

    fn bitand(self, rhs: Self) -> Option<CongruenceClass> {
        self.intersect(rhs)
    }
}

impl BitAnd for CongruenceClass {
    type Output = Option<CongruenceClass>;

    fn bitand(self, rhs: Self) -> Option<CongruenceClass> {
        self.intersect(&rhs)
    }
}
