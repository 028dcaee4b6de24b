//! Row-tiled GEMV drivers.
//!
//! These walk A in tiles of 4 rows and hand each tile to a SIMD microkernel
//! from [`crate::kernels`]. A is already row-major, which is the layout the
//! kernels want, so there's no packing step.
//!
//! Available drivers:
//! - `gemv_4x8`: AVX2
//! - `gemv_4x16`: AVX-512

pub mod gemv_4x16;
pub mod gemv_4x8;
