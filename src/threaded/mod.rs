//! Multi-threaded GEMV.
//!
//! Rows of y are independent, so the work splits into contiguous row chunks
//! with no synchronization beyond joining the threads.

pub mod gemv_mt;
