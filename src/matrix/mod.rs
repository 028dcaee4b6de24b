//! Scalar kernel and the matrix view type.
//!
//! The naive kernel is the correctness baseline the SIMD kernels are
//! checked against, and the fallback when no SIMD is available.

pub mod naive;
pub mod view;
