//! 4-row tiled GEMV using AVX-512.

use crate::kernels::kernel_4x16::{dot_avx512, kernel_4x16_avx512};

/// Matrix-vector multiply using the 4×16 AVX-512 kernel.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX-512F
/// - `a.len() >= m * n`, `x.len() >= n`, `y.len() >= m`
#[target_feature(enable = "avx512f")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn matvec_tiled_4x16(a: &[i32], x: &[i32], y: &mut [i32], m: usize, n: usize) {
    let m_main = (m / 4) * 4;

    for i in (0..m_main).step_by(4) {
        let sums = kernel_4x16_avx512(&a[i * n..(i + 4) * n], x, n);
        y[i..i + 4].copy_from_slice(&sums);
    }

    for i in m_main..m {
        y[i] = dot_avx512(&a[i * n..(i + 1) * n], x, n);
    }
}
