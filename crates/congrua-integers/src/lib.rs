//! # congrua-integers
//!
//! Arbitrary precision integer support for the congrua crates.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - The extended Euclidean algorithm and modular inversion (`euclid`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod euclid;
pub mod integer;

pub use integer::Integer;
