//! Row-parallel GEMV.

use log::{debug, trace};
use std::thread;

/// Below this many multiply-adds, one thread does the whole job.
pub const SINGLE_THREAD_THRESHOLD: usize = 1 << 20;

/// Below this many multiply-adds, two threads are enough.
pub const TWO_THREAD_THRESHOLD: usize = 1 << 22;

/// Don't hand a thread fewer rows than this.
pub const MIN_ROWS_PER_THREAD: usize = 64;

/// Multi-threaded matrix-vector multiply.
///
/// Splits y into contiguous row chunks, one per thread, and runs the
/// single-threaded dispatch on each chunk with the matching rows of A.
/// Every `y[i]` is written by exactly one thread; A and x are shared
/// read-only, nothing is copied. Thread count adapts to the work size:
/// - < `SINGLE_THREAD_THRESHOLD` multiply-adds: 1 thread
/// - < `TWO_THREAD_THRESHOLD` multiply-adds: 2 threads
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
///
/// # Panics
///
/// Panics if `a.len() < m * n`, `x.len() < n` or `y.len() < m`.
/// [`crate::multiply_parallel`] checks the shapes first.
pub fn matvec_mt(a: &[i32], x: &[i32], y: &mut [i32], m: usize, n: usize, num_threads: usize) {
    let effective_threads = choose_thread_count(m, n, num_threads);
    debug!(
        "gemv {}x{}: {} thread(s) (requested {})",
        m, n, effective_threads, num_threads
    );

    if effective_threads == 1 || n == 0 {
        crate::matvec_dispatch(a, x, y, m, n);
        return;
    }

    let rows_per_thread = m.div_ceil(effective_threads);
    let a = &a[..m * n];
    let x = &x[..n];

    thread::scope(|s| {
        let chunks = y[..m]
            .chunks_mut(rows_per_thread)
            .zip(a.chunks(rows_per_thread * n));

        for (t, (y_chunk, a_chunk)) in chunks.enumerate() {
            s.spawn(move || {
                let start_row = t * rows_per_thread;
                let rows = y_chunk.len();
                trace!("worker {}: rows {}..{}", t, start_row, start_row + rows);
                crate::matvec_dispatch(a_chunk, x, y_chunk, rows, n);
            });
        }
    });
}

/// Picks how many threads to use for an `m × n` product, capped at `max_threads`.
pub fn choose_thread_count(m: usize, n: usize, max_threads: usize) -> usize {
    let work = m.saturating_mul(n);
    let max_threads = max_threads.max(1);

    let optimal_threads = if work < SINGLE_THREAD_THRESHOLD {
        1
    } else if work < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (m / MIN_ROWS_PER_THREAD).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_work_is_single_threaded() {
        assert_eq!(choose_thread_count(0, 0, 8), 1);
        assert_eq!(choose_thread_count(100, 100, 8), 1);
    }

    #[test]
    fn medium_work_uses_two() {
        assert_eq!(choose_thread_count(2048, 1024, 8), 2);
    }

    #[test]
    fn large_work_uses_requested() {
        assert_eq!(choose_thread_count(4096, 4096, 8), 8);
        assert_eq!(choose_thread_count(4096, 4096, 3), 3);
    }

    #[test]
    fn capped_by_rows() {
        // Short and very wide: plenty of work but only 2 row chunks of 64
        assert_eq!(choose_thread_count(128, 1 << 20, 8), 2);
        assert_eq!(choose_thread_count(10, 1 << 24, 8), 1);
    }

    #[test]
    fn zero_threads_means_one() {
        assert_eq!(choose_thread_count(4096, 4096, 0), 1);
    }

    #[test]
    fn splits_rows_without_overlap() {
        let (m, n) = (1031, 1031);
        let a: Vec<i32> = (0..m * n).map(|i| (i % 17) as i32 - 8).collect();
        let x: Vec<i32> = (0..n).map(|i| (i % 13) as i32 - 6).collect();

        let mut expected = vec![0; m];
        crate::matrix::naive::matvec_naive(&a, &x, &mut expected, m, n);

        let mut got = vec![i32::MIN; m + 3];
        matvec_mt(&a, &x, &mut got, m, n, 4);

        assert_eq!(&got[..m], &expected[..]);
        assert_eq!(&got[m..], &[i32::MIN; 3]);
    }
}
