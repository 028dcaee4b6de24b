//! SIMD microkernels for the inner loop of matrix-vector multiplication.
//!
//! Each kernel computes the dot products of 4 consecutive rows of A with x,
//! loading x once per step and sharing it across the four row accumulators.
//! They're called by the tiled drivers in [`crate::tiled`].
//!
//! Available kernels:
//! - `kernel_4x8`: 4 rows × 8 columns per step, AVX2
//! - `kernel_4x16`: 4 rows × 16 columns per step, AVX-512

pub mod kernel_4x16;
pub mod kernel_4x8;
