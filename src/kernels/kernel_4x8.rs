//! 4×8 AVX2 microkernel for matrix-vector multiplication.

use std::arch::x86_64::*;

use crate::matrix::naive::dot_wrapping;

/// Computes four row sums at once: out[r] = A[r, 0:n] · x[0:n]
///
/// Keeps 4 AVX2 accumulators (one per row), loads 8 elements of x once per
/// step and reuses them for all four rows. `mullo`/`add` keep the low 32
/// bits, so the result is identical to the wrapping scalar sum.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 (checked via `#[target_feature]`)
/// - `a` holds at least `4 * n` values: 4 consecutive rows of length `n`
/// - `x` holds at least `n` values
#[target_feature(enable = "avx2")]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn kernel_4x8_avx2(a: &[i32], x: &[i32], n: usize) -> [i32; 4] {
    debug_assert!(a.len() >= 4 * n && x.len() >= n);

    let n_main = (n / 8) * 8;
    let a_ptr = a.as_ptr();
    let x_ptr = x.as_ptr();

    let mut c0 = _mm256_setzero_si256();
    let mut c1 = _mm256_setzero_si256();
    let mut c2 = _mm256_setzero_si256();
    let mut c3 = _mm256_setzero_si256();

    for j in (0..n_main).step_by(8) {
        let x_vec = _mm256_loadu_si256(x_ptr.add(j) as *const __m256i);

        let a0 = _mm256_loadu_si256(a_ptr.add(0 * n + j) as *const __m256i);
        let a1 = _mm256_loadu_si256(a_ptr.add(1 * n + j) as *const __m256i);
        let a2 = _mm256_loadu_si256(a_ptr.add(2 * n + j) as *const __m256i);
        let a3 = _mm256_loadu_si256(a_ptr.add(3 * n + j) as *const __m256i);

        c0 = _mm256_add_epi32(c0, _mm256_mullo_epi32(a0, x_vec));
        c1 = _mm256_add_epi32(c1, _mm256_mullo_epi32(a1, x_vec));
        c2 = _mm256_add_epi32(c2, _mm256_mullo_epi32(a2, x_vec));
        c3 = _mm256_add_epi32(c3, _mm256_mullo_epi32(a3, x_vec));
    }

    let mut out = [hsum_avx2(c0), hsum_avx2(c1), hsum_avx2(c2), hsum_avx2(c3)];

    // Column tail
    if n_main < n {
        let x_tail = &x[n_main..n];
        for (r, sum) in out.iter_mut().enumerate() {
            let tail = dot_wrapping(&a[r * n + n_main..(r + 1) * n], x_tail);
            *sum = sum.wrapping_add(tail);
        }
    }

    out
}

/// Single-row version of [`kernel_4x8_avx2`], used for the `m % 4` leftover rows.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2, and `row` and `x` both hold at
/// least `n` values.
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dot_avx2(row: &[i32], x: &[i32], n: usize) -> i32 {
    debug_assert!(row.len() >= n && x.len() >= n);

    let n_main = (n / 8) * 8;
    let mut acc = _mm256_setzero_si256();

    for j in (0..n_main).step_by(8) {
        let x_vec = _mm256_loadu_si256(x.as_ptr().add(j) as *const __m256i);
        let r_vec = _mm256_loadu_si256(row.as_ptr().add(j) as *const __m256i);
        acc = _mm256_add_epi32(acc, _mm256_mullo_epi32(r_vec, x_vec));
    }

    hsum_avx2(acc).wrapping_add(dot_wrapping(&row[n_main..n], &x[n_main..n]))
}

#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn hsum_avx2(v: __m256i) -> i32 {
    let mut lanes = [0i32; 8];
    _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, v);
    lanes.iter().fold(0i32, |acc, &l| acc.wrapping_add(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive::matvec_naive;

    #[test]
    fn matches_naive_across_tails() {
        if !is_x86_feature_detected!("avx2") {
            println!("Skipping - AVX2 not available");
            return;
        }

        for n in [0, 1, 7, 8, 9, 16, 17, 31] {
            let a: Vec<i32> = (0..4 * n).map(|i| (i % 11) as i32 - 5).collect();
            let x: Vec<i32> = (0..n).map(|i| (i % 7) as i32 - 3).collect();
            let mut expected = [0; 4];
            matvec_naive(&a, &x, &mut expected, 4, n);

            let got = unsafe { kernel_4x8_avx2(&a, &x, n) };
            assert_eq!(got, expected, "n = {}", n);

            let single = unsafe { dot_avx2(&a[..n], &x, n) };
            assert_eq!(single, expected[0], "dot n = {}", n);
        }
    }

    #[test]
    fn wraps_like_scalar() {
        if !is_x86_feature_detected!("avx2") {
            println!("Skipping - AVX2 not available");
            return;
        }

        let n = 16;
        let a = vec![i32::MAX; 4 * n];
        let x = vec![3; n];
        let mut expected = [0; 4];
        matvec_naive(&a, &x, &mut expected, 4, n);

        assert_eq!(unsafe { kernel_4x8_avx2(&a, &x, n) }, expected);
    }
}
