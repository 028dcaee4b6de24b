//! Shape errors reported by the checked entry points.

use thiserror::Error;

/// A mismatch between the stated `m`, `n` and the buffers passed in.
///
/// Returned by [`crate::multiply`], [`crate::multiply_parallel`] and
/// [`crate::matrix::view::MatRef`]. All checks happen before anything is
/// written, so `y` is untouched when one of these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// `m * n` does not fit in `usize`.
    #[error("a {rows}x{cols} matrix overflows usize")]
    Overflow { rows: usize, cols: usize },

    /// The matrix buffer is not exactly `rows * cols` long.
    #[error("A: expected {rows}x{cols}={expected} elements, found {found}")]
    MatrixLength {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    /// The input vector is shorter than the number of columns.
    #[error("x: expected at least {expected} elements, found {found}")]
    VectorLength { expected: usize, found: usize },

    /// The output vector is shorter than the number of rows.
    #[error("y: expected at least {expected} elements, found {found}")]
    OutputLength { expected: usize, found: usize },
}

/// Validates the shape contract for `y = A·x`.
///
/// Order: overflow, then A, then x, then y.
pub fn check_shape(
    a_len: usize,
    x_len: usize,
    y_len: usize,
    m: usize,
    n: usize,
) -> Result<(), ShapeError> {
    let expected = m
        .checked_mul(n)
        .ok_or(ShapeError::Overflow { rows: m, cols: n })?;

    if a_len != expected {
        return Err(ShapeError::MatrixLength {
            rows: m,
            cols: n,
            expected,
            found: a_len,
        });
    }
    if x_len < n {
        return Err(ShapeError::VectorLength {
            expected: n,
            found: x_len,
        });
    }
    if y_len < m {
        return Err(ShapeError::OutputLength {
            expected: m,
            found: y_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_and_longer_vectors() {
        assert_eq!(check_shape(6, 3, 2, 2, 3), Ok(()));
        assert_eq!(check_shape(6, 5, 9, 2, 3), Ok(()));
        assert_eq!(check_shape(0, 0, 0, 0, 0), Ok(()));
        assert_eq!(check_shape(0, 0, 4, 4, 0), Ok(()));
    }

    #[test]
    fn reports_first_violation() {
        assert_eq!(
            check_shape(5, 0, 0, 2, 3),
            Err(ShapeError::MatrixLength {
                rows: 2,
                cols: 3,
                expected: 6,
                found: 5
            })
        );
        assert_eq!(
            check_shape(6, 2, 0, 2, 3),
            Err(ShapeError::VectorLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            check_shape(6, 3, 1, 2, 3),
            Err(ShapeError::OutputLength {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn overflow_is_checked_before_lengths() {
        assert_eq!(
            check_shape(0, 0, 0, usize::MAX, 2),
            Err(ShapeError::Overflow {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn message_names_the_buffer() {
        let err = check_shape(4, 3, 2, 2, 3).unwrap_err();
        assert_eq!(err.to_string(), "A: expected 2x3=6 elements, found 4");
    }
}
