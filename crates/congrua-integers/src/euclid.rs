//! The extended Euclidean algorithm and modular inversion.
//!
//! This is the helper layer behind modular division, inversion,
//! negative exponents, and the Chinese remainder theorem.

use num_traits::{One, Zero};

use crate::Integer;

/// Computes `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
///
/// The returned gcd is always nonnegative, so `extended_gcd(a, b).0`
/// agrees with [`Integer::gcd`] for all sign combinations.
#[must_use]
pub fn extended_gcd(a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = Integer::one();
    let mut s = Integer::zero();
    let mut old_t = Integer::zero();
    let mut t = Integer::one();

    while !r.is_zero() {
        let q = old_r.clone() / r.clone();
        let rem = old_r.clone() % r.clone();
        old_r = r;
        r = rem;

        let new_s = old_s.clone() - q.clone() * s.clone();
        old_s = s;
        s = new_s;

        let new_t = old_t.clone() - q * t.clone();
        old_t = t;
        t = new_t;
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Computes the inverse of `a` modulo `modulus`, which must be
/// positive.
///
/// Returns the canonical (least nonnegative) inverse, or `None` when
/// `gcd(a, modulus) != 1`.
#[must_use]
pub fn mod_inverse(a: &Integer, modulus: &Integer) -> Option<Integer> {
    let (g, x, _) = extended_gcd(a, modulus);
    if g.is_one() {
        Some(x.floor_mod(modulus))
    } else {
        None
    }
}
