/// Textbook matrix-vector multiply: y = A * x
///
/// Outer loop over rows, inner loop over columns, one running sum per row
/// and a single write to `y[i]`. Both A and x are read with stride 1, so
/// this order is already the cache-friendly one.
///
/// Arithmetic wraps on overflow, like a 32-bit `int` would.
///
/// Use this as a correctness baseline and as the fallback on CPUs without
/// AVX2.
///
/// # Arguments
///
/// * `a` - Matrix A (m × n), row-major
/// * `x` - Vector x, at least n elements
/// * `y` - Vector y, at least m elements, overwritten (never read)
/// * `m` - Rows of A
/// * `n` - Columns of A
///
/// # Panics
///
/// Panics on out-of-bounds access if the slices are shorter than m, n
/// imply. [`crate::multiply`] checks the shapes first.
pub fn matvec_naive(a: &[i32], x: &[i32], y: &mut [i32], m: usize, n: usize) {
    for i in 0..m {
        let mut sum = 0i32;
        for j in 0..n {
            sum = sum.wrapping_add(a[i * n + j].wrapping_mul(x[j]));
        }
        y[i] = sum;
    }
}

/// Dot product of one row with x, wrapping.
///
/// Used by the SIMD drivers to finish column tails.
#[inline]
pub fn dot_wrapping(row: &[i32], x: &[i32]) -> i32 {
    row.iter()
        .zip(x)
        .fold(0i32, |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b)))
}
