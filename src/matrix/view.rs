//! Borrowed 2-D view over a flat row-major buffer.

use crate::error::{ShapeError, check_shape};

/// Read-only `rows × cols` matrix view over a flat row-major slice.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. The length is checked
/// once on construction so the rest of the API can't go out of bounds.
///
/// # Example
///
/// ```
/// use matvec::matrix::view::MatRef;
///
/// let data = [1, 2, 3,
///             4, 5, 6];
/// let a = MatRef::new(&data, 2, 3).unwrap();
///
/// let mut y = [0; 2];
/// a.mul_vec(&[7, 8, 9], &mut y).unwrap();
/// assert_eq!(y, [50, 122]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatRef<'a> {
    data: &'a [i32],
    rows: usize,
    cols: usize,
}

impl<'a> MatRef<'a> {
    /// Wraps `data` as a `rows × cols` matrix.
    pub fn new(data: &'a [i32], rows: usize, cols: usize) -> Result<Self, ShapeError> {
        check_shape(data.len(), cols, rows, rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &'a [i32] {
        self.data
    }

    /// Row `i`, or `None` past the last row.
    pub fn row(&self, i: usize) -> Option<&'a [i32]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterates rows top to bottom. Yields `rows` empty slices when `cols == 0`.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &'a [i32]> + use<'a> {
        let (data, cols) = (self.data, self.cols);
        (0..self.rows).map(move |i| &data[i * cols..(i + 1) * cols])
    }

    /// `y = self * x`. See [`crate::multiply`].
    pub fn mul_vec(&self, x: &[i32], y: &mut [i32]) -> Result<(), ShapeError> {
        crate::multiply(self.data, x, y, self.rows, self.cols)
    }
}
