//! Fast dense integer matrix-vector multiplication in Rust, built from scratch.
//!
//! Computes `y = A·x` for a row-major `m × n` matrix of `i32`. The scalar
//! version is the textbook two-loop kernel; on x86_64 the same traversal runs
//! four rows at a time in AVX2 or AVX-512 registers, and rows can be split
//! across threads for large matrices.
//!
//! Arithmetic wraps on overflow, the same as a 32-bit `int`. Every kernel
//! produces bit-identical output.
//!
//! ## Usage
//!
//! ```
//! use matvec::multiply;
//!
//! let a = [1, 2, 3,
//!          4, 5, 6];
//! let x = [7, 8, 9];
//! let mut y = [0; 2];
//!
//! multiply(&a, &x, &mut y, 2, 3).unwrap();
//! assert_eq!(y, [50, 122]);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use matvec::multiply_parallel;
//!
//! let a = vec![1; 2048 * 2048];
//! let x = vec![1; 2048];
//! let mut y = vec![0; 2048];
//!
//! multiply_parallel(&a, &x, &mut y, 2048, 2048, 4).unwrap();
//! assert!(y.iter().all(|&v| v == 2048));
//! ```
//!
//! ## What's inside
//!
//! - Scalar reference kernel
//! - 4×8 AVX2 and 4×16 AVX-512 kernels
//! - Adaptive multi-threading over row chunks (scales down for small matrices)

pub mod error;
#[cfg(target_arch = "x86_64")]
pub mod kernels;
pub mod matrix;
pub mod threaded;
#[cfg(target_arch = "x86_64")]
pub mod tiled;

pub use error::ShapeError;
pub use matrix::naive::matvec_naive;
pub use matrix::view::MatRef;

use log::debug;

/// Matrix-vector multiply: y = A * x
///
/// Picks the fastest available kernel for your CPU (AVX-512 > AVX2 > scalar).
/// A is m×n, row-major. Only `x[..n]` is read and only `y[..m]` is written;
/// y is never read.
///
/// # Errors
///
/// Returns [`ShapeError`] if `a.len() != m * n`, `x.len() < n` or
/// `y.len() < m`. Nothing is written in that case.
pub fn multiply(
    a: &[i32],
    x: &[i32],
    y: &mut [i32],
    m: usize,
    n: usize,
) -> Result<(), ShapeError> {
    error::check_shape(a.len(), x.len(), y.len(), m, n)?;
    matvec_dispatch(a, x, y, m, n);
    Ok(())
}

/// Same as [`multiply`] but uses multiple threads.
///
/// Thread count adapts to matrix size - small matrices use fewer threads
/// because the overhead isn't worth it.
///
/// # Errors
///
/// Same as [`multiply`].
pub fn multiply_parallel(
    a: &[i32],
    x: &[i32],
    y: &mut [i32],
    m: usize,
    n: usize,
    num_threads: usize,
) -> Result<(), ShapeError> {
    error::check_shape(a.len(), x.len(), y.len(), m, n)?;
    threaded::gemv_mt::matvec_mt(a, x, y, m, n, num_threads);
    Ok(())
}

/// Single-threaded kernel selection. Shapes must already be valid.
pub(crate) fn matvec_dispatch(a: &[i32], x: &[i32], y: &mut [i32], m: usize, n: usize) {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            debug!("gemv {}x{}: 4x16 AVX-512", m, n);
            unsafe { tiled::gemv_4x16::matvec_tiled_4x16(a, x, y, m, n) };
            return;
        }
        if is_x86_feature_detected!("avx2") {
            debug!("gemv {}x{}: 4x8 AVX2", m, n);
            unsafe { tiled::gemv_4x8::matvec_tiled_4x8(a, x, y, m, n) };
            return;
        }
    }

    debug!("gemv {}x{}: scalar", m, n);
    matrix::naive::matvec_naive(a, x, y, m, n);
}
