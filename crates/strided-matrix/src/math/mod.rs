//! The strided matrix type and its arithmetic.
//!
//! `Matrix` keeps one flat `f64` buffer plus a row and a column stride.
//! Transposition only swaps the strides; fills and random draws rebuild
//! the buffer in row-major order.
pub mod matrix;
pub mod ops;
pub mod random;

pub use matrix::Matrix;
