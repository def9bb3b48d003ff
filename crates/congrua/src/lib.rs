//! # congrua
//!
//! Congruence classes and the residue rings Z/nZ as immutable value
//! types with exact modular arithmetic.
//!
//! A [`CongruenceClass`] is an element `r (mod n)` with its residue
//! held in canonical form, `0 <= r < n`. A [`CongruenceSet`] is the
//! full ring Z/nZ, a finite field when `n` is prime. Both are plain
//! values: no operation mutates its operands, so they can be shared
//! freely across threads.
//!
//! ## Operations
//!
//! - The ring operations `+`, `-` (binary and unary), and `*`, plus
//!   `/` for *exact modular division* (multiplication by the inverse;
//!   never a truncating integer division), unary `!` for the
//!   multiplicative inverse, and [`pow`](CongruenceClass::pow) for
//!   square-and-multiply exponentiation with negative-exponent
//!   support.
//! - Comparison by canonical residue within a modulus, equality and
//!   hashing over `(residue, modulus)`.
//! - Membership tests, infinite iteration over a class's members, and
//!   finite iteration over a set's classes.
//! - `&` for Chinese-remainder intersection of two classes with
//!   arbitrary (possibly non-coprime) moduli, yielding `None` for
//!   disjoint congruences.
//!
//! Each operator has a named `checked_*`/fallible counterpart that
//! returns a [`CongruenceError`] instead of panicking.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use congrua::{CongruenceClass, CongruenceSet, Z};
//!
//! let a = CongruenceClass::new(3, 7)?;
//! let b = CongruenceClass::new(5, 7)?;
//! assert_eq!(a + b, CongruenceClass::new(1, 7)?);
//!
//! // CRT intersection across moduli:
//! let c = CongruenceClass::new(23, 100)? & CongruenceClass::new(31, 49)?;
//! assert_eq!(c, Some(CongruenceClass::new(423, 4900)?));
//!
//! // Notation sugar:
//! assert_eq!(17 + 23 * Z, CongruenceClass::new(17, 23)?);
//! assert_eq!(Z / (7 * Z), CongruenceSet::new(7)?);
//! ```
//!
//! Arbitrary precision residues and moduli are provided by the
//! re-exported [`Integer`] type from `congrua-integers`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class;
pub mod error;
pub mod notation;
pub mod set;

#[cfg(test)]
mod proptests;

pub use class::{CongruenceClass, Members};
pub use error::CongruenceError;
pub use notation::Z;
pub use set::{Classes, CongruenceSet};

pub use congrua_integers::{euclid, Integer};
