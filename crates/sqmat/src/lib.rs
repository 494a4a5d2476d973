//! A dense square matrix arithmetic kernel.
//!
//! # Motivation
//!
//! This library implements one thing: a runtime-sized square matrix value
//! type with a complete arithmetic, comparison, and linear-algebra operation
//! surface. It is a self-contained kernel with exact, textbook semantics,
//! not a facade over a general-purpose linear-algebra package: the
//! determinant is the literal recursive cofactor expansion, exponentiation
//! is literal square-and-multiply, and no pivoting or precision compensation
//! is performed anywhere. Results for the same inputs are reproducible bit
//! for bit.
//!
//! # Goals & Non-Goals
//!
//! - Support only dense, square, runtime-sized matrices. Fixed-size and
//!   non-square matrices are better served by const-generics-based
//!   libraries; sparse storage is out of scope.
//! - Be generic over the cell type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Report contract violations (zero sizes, size mismatches, division by
//!   zero, negative powers, out-of-range accesses) as typed [`Error`]
//!   values from checked methods; operators delegate to those methods and
//!   panic, the way slice indexing does.
//! - Make no numerical-stability guarantees. The exact operation order is
//!   part of the contract instead.
//!
//! # A caveat on comparison
//!
//! Equality and ordering of matrices are defined over the *sum of all
//! cells*, not cell-wise; matrices of different sizes can compare equal.
//! See [`SquareMatrix`]'s `PartialEq` impl before using `==` on matrices.

mod error;
mod matrix;
mod traits;

pub use error::*;
pub use matrix::*;
pub use traits::*;
