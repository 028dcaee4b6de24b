//! 4-row tiled GEMV using AVX2.

use crate::kernels::kernel_4x8::{dot_avx2, kernel_4x8_avx2};

/// Matrix-vector multiply using the 4×8 AVX2 kernel.
///
/// Walks A four rows at a time, writes each tile's four sums to y, then
/// finishes the `m % 4` leftover rows one at a time.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2
/// - `a.len() >= m * n`, `x.len() >= n`, `y.len() >= m`
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn matvec_tiled_4x8(a: &[i32], x: &[i32], y: &mut [i32], m: usize, n: usize) {
    let m_main = (m / 4) * 4;

    for i in (0..m_main).step_by(4) {
        let sums = kernel_4x8_avx2(&a[i * n..(i + 4) * n], x, n);
        y[i..i + 4].copy_from_slice(&sums);
    }

    for i in m_main..m {
        y[i] = dot_avx2(&a[i * n..(i + 1) * n], x, n);
    }
}
