use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// A dense `f64` matrix over a flat buffer addressed through row and
/// column strides.
///
/// Cell `(row, column)` lives at `row * row_stride + column * column_stride`.
/// A freshly built matrix is row-major and contiguous; `transpose_in_place`
/// swaps the strides so the same buffer is read column-major.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    columns: usize,
    row_stride: usize,
    column_stride: usize,
}

fn buffer_len(rows: usize, columns: usize) -> Result<usize> {
    rows.checked_mul(columns)
        .ok_or(MatrixError::InvalidShape { rows, columns })
}

impl Matrix {
    /// A `rows x columns` matrix of zeros.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, 0.0)
    }

    /// A `rows x columns` matrix with every cell set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Result<Self> {
        let len = buffer_len(rows, columns)?;
        Ok(Self::contiguous(rows, columns, vec![value; len]))
    }

    /// Takes ownership of `values` as the row-major backing buffer.
    pub fn from_vec(rows: usize, columns: usize, values: Vec<f64>) -> Result<Self> {
        let len = buffer_len(rows, columns)?;
        if values.len() != len {
            return Err(MatrixError::ShapeMismatch {
                operation: "from_vec",
                expected: vec![len],
                actual: vec![values.len()],
            });
        }
        Ok(Self::contiguous(rows, columns, values))
    }

    /// Builds a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(buffer_len(rows.len(), columns)?);
        for row in rows {
            if row.len() != columns {
                return Err(MatrixError::ShapeMismatch {
                    operation: "from_rows",
                    expected: vec![columns],
                    actual: vec![row.len()],
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::contiguous(rows.len(), columns, data))
    }

    pub(crate) fn contiguous(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * columns);
        Self {
            data,
            rows,
            columns,
            row_stride: columns,
            column_stride: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn strides(&self) -> (usize, usize) {
        (self.row_stride, self.column_stride)
    }

    /// Number of cells in the backing buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw backing buffer in storage order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Buffer offset of `(row, column)`. No bounds check is performed.
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.row_stride + column * self.column_stride
    }

    #[inline]
    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.check_bounds(row, column)?;
        // SAFETY: bounds checked above, so the offset lies inside the buffer.
        Ok(unsafe { self.get_unchecked(row, column) })
    }

    /// Reads `(row, column)` without validating the coordinates.
    ///
    /// # Safety
    ///
    /// `row < self.rows()` and `column < self.columns()` must hold. Any other
    /// coordinate may address memory outside the buffer.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, column: usize) -> f64 {
        *self.data.get_unchecked(self.index(row, column))
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_bounds(row, column)?;
        // SAFETY: bounds checked above.
        unsafe { self.set_unchecked(row, column, value) };
        Ok(())
    }

    /// Writes `(row, column)` without validating the coordinates.
    ///
    /// # Safety
    ///
    /// Same contract as [`Matrix::get_unchecked`].
    #[inline]
    pub unsafe fn set_unchecked(&mut self, row: usize, column: usize, value: f64) {
        let offset = self.index(row, column);
        *self.data.get_unchecked_mut(offset) = value;
    }

    /// Detached copy of logical row `row`.
    pub fn view_row(&self, row: usize) -> Result<Vec<f64>> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.row_values(row).collect())
    }

    /// Detached copy of logical column `column`.
    pub fn view_column(&self, column: usize) -> Result<Vec<f64>> {
        if column >= self.columns {
            return Err(MatrixError::IndexOutOfRange {
                row: 0,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let start = self.index(0, column);
        Ok((0..self.rows)
            .map(|r| self.data[start + r * self.row_stride])
            .collect())
    }

    /// Row sugar over [`Matrix::view_row`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vec<f64> {
        match self.view_row(row) {
            Ok(values) => values,
            Err(err) => panic!("{}", err),
        }
    }

    /// Deep copy sharing no storage with `self`. Shape and strides are kept.
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// New matrix holding the transpose of `self`.
    pub fn transpose(&self) -> Matrix {
        let mut transposed = self.copy();
        transposed.transpose_in_place();
        transposed
    }

    /// Swaps the axes by exchanging shape and strides. The buffer is untouched.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        std::mem::swap(&mut self.rows, &mut self.columns);
        std::mem::swap(&mut self.row_stride, &mut self.column_stride);
        log::trace!(
            "transposed to {} x {} (strides {}, {})",
            self.rows,
            self.columns,
            self.row_stride,
            self.column_stride
        );
        self
    }

    /// Rebuilds the buffer with every cell set to `value`. Strides revert
    /// to contiguous row-major.
    pub fn assign(&mut self, value: f64) -> &mut Self {
        self.replace_buffer(vec![value; self.rows * self.columns])
    }

    /// Swaps in a freshly built row-major buffer of `rows * columns` cells.
    pub(crate) fn replace_buffer(&mut self, data: Vec<f64>) -> &mut Self {
        debug_assert_eq!(data.len(), self.rows * self.columns);
        self.data = data;
        self.row_stride = self.columns;
        self.column_stride = 1;
        self
    }

    /// Applies `f` to every cell in storage order, which differs from logical
    /// row-major order once the matrix has been transposed in place.
    pub fn assign_with<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64) -> f64,
    {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
        self
    }

    /// Like [`Matrix::assign_with`], also passing the flat buffer index.
    pub fn assign_indexed<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64, usize) -> f64,
    {
        for (idx, value) in self.data.iter_mut().enumerate() {
            *value = f(*value, idx);
        }
        self
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Walks logical row `row` through the column stride. `row` must be valid.
    fn row_values(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        let start = self.index(row, 0);
        (0..self.columns).map(move |c| self.data[start + c * self.column_stride])
    }

    fn logical_values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).flat_map(move |r| self.row_values(r))
    }

    /// Nested rows in logical order, whatever the stride layout.
    pub fn to_array(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row_values(r).collect()).collect()
    }

    /// Copy of the raw buffer in storage order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn shape(&self) -> String {
        format!("{} x {} matrix", self.rows, self.columns)
    }

    fn zip_with<F>(&self, other: &Matrix, operation: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dims() != other.dims() {
            return Err(MatrixError::ShapeMismatch {
                operation,
                expected: vec![self.rows, self.columns],
                actual: vec![other.rows, other.columns],
            });
        }
        log::trace!("{} on {}", operation, self.shape());
        // Buffers are paired by flat position, not by logical coordinate.
        // The result reads its buffer with self's strides.
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            columns: self.columns,
            row_stride: self.row_stride,
            column_stride: self.column_stride,
        })
    }

    /// Elementwise sum into a new matrix laid out like `self`.
    ///
    /// Cells are paired by buffer position. Two matrices with different stride
    /// layouts (e.g. one transposed in place) are combined positionally, not by
    /// logical coordinate.
    pub fn add_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add_elementwise", |a, b| a + b)
    }

    pub fn subtract_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract_elementwise", |a, b| a - b)
    }

    pub fn multiply_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "multiply_elementwise", |a, b| a * b)
    }

    pub fn divide_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "divide_elementwise", |a, b| a / b)
    }

    pub fn add_scalar(&mut self, value: f64) -> &mut Self {
        self.assign_with(|v| v + value)
    }

    pub fn subtract_scalar(&mut self, value: f64) -> &mut Self {
        self.assign_with(|v| v - value)
    }

    pub fn multiply_scalar(&mut self, value: f64) -> &mut Self {
        self.assign_with(|v| v * value)
    }

    pub fn divide_scalar(&mut self, value: f64) -> &mut Self {
        self.assign_with(|v| v / value)
    }

    /// Matrix product `self · other`, computed with the plain triple loop.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns != other.rows {
            return Err(MatrixError::ShapeMismatch {
                operation: "dot",
                expected: vec![self.columns],
                actual: vec![other.rows],
            });
        }
        log::trace!("dot: {} · {}", self.shape(), other.shape());
        let mut out = Matrix::new(self.rows, other.columns)?;
        for i in 0..out.rows {
            for j in 0..out.columns {
                let mut sum = 0.0;
                for k in 0..self.columns {
                    // SAFETY: i < self.rows, k < self.columns == other.rows, j < other.columns.
                    sum += unsafe { self.get_unchecked(i, k) * other.get_unchecked(k, j) };
                }
                // SAFETY: out is self.rows x other.columns.
                unsafe { out.set_unchecked(i, j, sum) };
            }
        }
        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if let Err(err) = self.check_bounds(index.0, index.1) {
            panic!("{}", err);
        }
        &self.data[Matrix::index(self, index.0, index.1)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        if let Err(err) = self.check_bounds(index.0, index.1) {
            panic!("{}", err);
        }
        let offset = Matrix::index(self, index.0, index.1);
        &mut self.data[offset]
    }
}

/// Logical equality: same shape and same value at every coordinate.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.logical_values().eq(other.logical_values())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in self.row_values(r).enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

/// Serialized layout of a [`Matrix`]: shape, strides and raw buffer.
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    columns: usize,
    row_stride: usize,
    column_stride: usize,
    data: Vec<f64>,
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        Self {
            rows: m.rows,
            columns: m.columns,
            row_stride: m.row_stride,
            column_stride: m.column_stride,
            data: m.data,
        }
    }
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let len = buffer_len(raw.rows, raw.columns)?;
        if raw.data.len() != len {
            return Err(MatrixError::ShapeMismatch {
                operation: "deserialize",
                expected: vec![len],
                actual: vec![raw.data.len()],
            });
        }
        if len > 0 {
            let last = (raw.rows - 1)
                .checked_mul(raw.row_stride)
                .zip((raw.columns - 1).checked_mul(raw.column_stride))
                .and_then(|(a, b)| a.checked_add(b));
            if !matches!(last, Some(offset) if offset < len) {
                return Err(MatrixError::InvalidShape {
                    rows: raw.rows,
                    columns: raw.columns,
                });
            }
        }
        Ok(Self {
            data: raw.data,
            rows: raw.rows,
            columns: raw.columns,
            row_stride: raw.row_stride,
            column_stride: raw.column_stride,
        })
    }
}
