//! strided-matrix: a dense 2-D `f64` matrix over a strided flat buffer.
//!
//! This crate provides a single `Matrix` type with checked and unchecked
//! element access, detached row/column views, stride-swap transposition,
//! scalar and elementwise arithmetic, and a naive matrix product. Random
//! fills take an injected generator, or a serde-backed `RandomConfig`.
pub mod config;
pub mod error;
pub mod math;

pub use config::{FillDistribution, RandomConfig};
pub use error::{MatrixError, Result};
pub use math::Matrix;
