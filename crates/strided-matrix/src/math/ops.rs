//! Operator overloads for [`Matrix`].
//!
//! Matrix-matrix operators borrow both operands and allocate a new matrix;
//! they panic on a shape mismatch. Use the `*_elementwise` methods for a
//! `Result` instead. Scalar operators consume the matrix, mutate it in place
//! and hand the same instance back.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::Result;
use crate::math::matrix::Matrix;

fn unwrap_shape(result: Result<Matrix>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(err) => panic!("{}", err),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        unwrap_shape(self.add_elementwise(rhs))
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        unwrap_shape(self.subtract_elementwise(rhs))
    }
}

/// Elementwise (Hadamard) product. Use [`Matrix::dot`] for the matrix product.
impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        unwrap_shape(self.multiply_elementwise(rhs))
    }
}

impl<'a, 'b> Div<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn div(self, rhs: &'b Matrix) -> Self::Output {
        unwrap_shape(self.divide_elementwise(rhs))
    }
}

impl Add<f64> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs);
        self
    }
}

impl Sub<f64> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: f64) -> Self::Output {
        self.subtract_scalar(rhs);
        self
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.multiply_scalar(rhs);
        self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, mut rhs: Matrix) -> Self::Output {
        rhs.multiply_scalar(self);
        rhs
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.divide_scalar(rhs);
        self
    }
}

impl AddAssign<f64> for Matrix {
    fn add_assign(&mut self, rhs: f64) {
        self.add_scalar(rhs);
    }
}

impl SubAssign<f64> for Matrix {
    fn sub_assign(&mut self, rhs: f64) {
        self.subtract_scalar(rhs);
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_scalar(rhs);
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, rhs: f64) {
        self.divide_scalar(rhs);
    }
}
