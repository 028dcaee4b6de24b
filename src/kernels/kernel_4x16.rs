//! 4×16 AVX-512 microkernel for matrix-vector multiplication.
//!
//! Same shape as the AVX2 4×8 kernel but with 512-bit registers, so each
//! step covers 16 columns of four rows.

use std::arch::x86_64::*;

use crate::matrix::naive::dot_wrapping;

/// Computes four row sums at once: out[r] = A[r, 0:n] · x[0:n]
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX-512F (checked via `#[target_feature]`)
/// - `a` holds at least `4 * n` values: 4 consecutive rows of length `n`
/// - `x` holds at least `n` values
#[target_feature(enable = "avx512f")]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn kernel_4x16_avx512(a: &[i32], x: &[i32], n: usize) -> [i32; 4] {
    debug_assert!(a.len() >= 4 * n && x.len() >= n);

    let n_main = (n / 16) * 16;
    let a_ptr = a.as_ptr();
    let x_ptr = x.as_ptr();

    let mut c0 = _mm512_setzero_si512();
    let mut c1 = _mm512_setzero_si512();
    let mut c2 = _mm512_setzero_si512();
    let mut c3 = _mm512_setzero_si512();

    for j in (0..n_main).step_by(16) {
        let x_vec = _mm512_loadu_epi32(x_ptr.add(j));

        let a0 = _mm512_loadu_epi32(a_ptr.add(0 * n + j));
        let a1 = _mm512_loadu_epi32(a_ptr.add(1 * n + j));
        let a2 = _mm512_loadu_epi32(a_ptr.add(2 * n + j));
        let a3 = _mm512_loadu_epi32(a_ptr.add(3 * n + j));

        c0 = _mm512_add_epi32(c0, _mm512_mullo_epi32(a0, x_vec));
        c1 = _mm512_add_epi32(c1, _mm512_mullo_epi32(a1, x_vec));
        c2 = _mm512_add_epi32(c2, _mm512_mullo_epi32(a2, x_vec));
        c3 = _mm512_add_epi32(c3, _mm512_mullo_epi32(a3, x_vec));
    }

    let mut out = [
        hsum_avx512(c0),
        hsum_avx512(c1),
        hsum_avx512(c2),
        hsum_avx512(c3),
    ];

    if n_main < n {
        let x_tail = &x[n_main..n];
        for (r, sum) in out.iter_mut().enumerate() {
            let tail = dot_wrapping(&a[r * n + n_main..(r + 1) * n], x_tail);
            *sum = sum.wrapping_add(tail);
        }
    }

    out
}

/// Single-row version of [`kernel_4x16_avx512`].
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F, and `row` and `x` both hold
/// at least `n` values.
#[target_feature(enable = "avx512f")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dot_avx512(row: &[i32], x: &[i32], n: usize) -> i32 {
    debug_assert!(row.len() >= n && x.len() >= n);

    let n_main = (n / 16) * 16;
    let mut acc = _mm512_setzero_si512();

    for j in (0..n_main).step_by(16) {
        let x_vec = _mm512_loadu_epi32(x.as_ptr().add(j));
        let r_vec = _mm512_loadu_epi32(row.as_ptr().add(j));
        acc = _mm512_add_epi32(acc, _mm512_mullo_epi32(r_vec, x_vec));
    }

    hsum_avx512(acc).wrapping_add(dot_wrapping(&row[n_main..n], &x[n_main..n]))
}

#[target_feature(enable = "avx512f")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn hsum_avx512(v: __m512i) -> i32 {
    let mut lanes = [0i32; 16];
    _mm512_storeu_epi32(lanes.as_mut_ptr(), v);
    lanes.iter().fold(0i32, |acc, &l| acc.wrapping_add(l))
}
