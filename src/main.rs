//! Demo and benchmark runner for the GEMV implementations.

use matvec::matrix::naive::matvec_naive;
use matvec::threaded::gemv_mt::matvec_mt;
#[cfg(target_arch = "x86_64")]
use matvec::tiled::{gemv_4x8::matvec_tiled_4x8, gemv_4x16::matvec_tiled_4x16};
use matvec::{MatRef, ShapeError};
use std::time::Instant;

type Gemv<'f> = Box<dyn Fn(&[i32], &[i32], &mut [i32], usize, usize) + 'f>;

fn main() -> Result<(), ShapeError> {
    env_logger::init();

    demo()?;

    println!("=== Matrix-Vector Multiplication Benchmark ===\n");

    let sizes = [512, 1024, 2048, 4096];
    let iterations = 10;
    let mut all_results = Vec::new();

    #[cfg(target_arch = "x86_64")]
    let (has_avx2, has_avx512) = (
        is_x86_feature_detected!("avx2"),
        is_x86_feature_detected!("avx512f"),
    );
    #[cfg(not(target_arch = "x86_64"))]
    let (has_avx2, has_avx512) = (false, false);

    println!("CPU Features: AVX2={}, AVX-512={}\n", has_avx2, has_avx512);

    let methods = methods(has_avx2, has_avx512);

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let (m, n) = (size, size);
        let a: Vec<i32> = (0..m * n).map(|i| (i % 100) as i32).collect();
        let x: Vec<i32> = (0..n).map(|i| (i % 100) as i32).collect();

        let results: Vec<(&str, (f64, f64))> = methods
            .iter()
            .map(|(name, f)| (*name, bench_fn(&a, &x, m, n, iterations, f)))
            .collect();

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:16} {:8.3} ms  {:6.2} GOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    Ok(())
}

/// The fixed 2×3 example.
fn demo() -> Result<(), ShapeError> {
    let data = [1, 2, 3, 4, 5, 6];
    let x = [7, 8, 9];
    let mut y = [0; 2];

    let a = MatRef::new(&data, 2, 3)?;
    a.mul_vec(&x, &mut y)?;

    println!("A = {:?}", a.row_iter().collect::<Vec<_>>());
    println!("x = {:?}", x);
    println!("y = A·x = {:?}\n", y);
    Ok(())
}

#[allow(unused_variables)]
fn methods(has_avx2: bool, has_avx512: bool) -> Vec<(&'static str, Gemv<'static>)> {
    let mut methods: Vec<(&'static str, Gemv<'static>)> = Vec::new();
    methods.push((
        "Scalar",
        Box::new(|a: &[i32], x: &[i32], y: &mut [i32], m, n| matvec_naive(a, x, y, m, n)),
    ));

    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2 {
            methods.push((
                "4×8 AVX2",
                Box::new(|a: &[i32], x: &[i32], y: &mut [i32], m, n| unsafe {
                    matvec_tiled_4x8(a, x, y, m, n)
                }),
            ));
        }
        if has_avx512 {
            methods.push((
                "4×16 AVX-512",
                Box::new(|a: &[i32], x: &[i32], y: &mut [i32], m, n| unsafe {
                    matvec_tiled_4x16(a, x, y, m, n)
                }),
            ));
        }
    }

    methods.push((
        "Auto MT",
        Box::new(|a: &[i32], x: &[i32], y: &mut [i32], m, n| matvec_mt(a, x, y, m, n, 4)),
    ));

    methods
}

/// Benchmark one GEMV implementation, returns (avg ms, GOPS)
fn bench_fn(
    a: &[i32],
    x: &[i32],
    m: usize,
    n: usize,
    iterations: usize,
    f: &Gemv,
) -> (f64, f64) {
    // Warmup
    let mut y = vec![0; m];
    f(a, x, &mut y, m, n);

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(a, x, &mut y, m, n);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gops = 2.0 * (m * n) as f64 / avg / 1e9;
    (avg * 1000.0, gops)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<16}", "Method");
    for (size, _) in all_results {
        print!(" {:>13}", format!("{}×{}", size, size));
    }
    println!(" {:>10}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;
        print!("{:<16}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>8.2} GOPS", gops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>9.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGOPS = billion integer operations per second (one multiply + one add each)");
    println!("Speedup relative to Scalar. Higher is better.\n");
}
