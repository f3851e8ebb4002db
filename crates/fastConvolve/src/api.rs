//! High-level API for convolution smoothing with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points of `fastConvolve`. It
//! extends the `convolve` API with a parallel builder, the range runner and
//! column-parallel table smoothing.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `convolve` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution where beneficial.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelSmootherBuilder`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.half_width()`, `.sigma()`, `.threads()`).
//! 3. Call `.build()` to get a parallel processor.

// Publicly re-exported types
pub use crate::adapters::sequence::{ParallelSmootherBuilder, ParallelSmoothingProcessor};
pub use crate::adapters::table::{smooth_table_parallel, smooth_table_with_kernels};
pub use crate::engine::runner::{default_threads, parallel_run, try_parallel_run};
pub use crate::input::ConvolveInput;
pub use convolve::internals::adapters::table::{Column, ColumnData, Table, TableKernels, smooth_table};
pub use convolve::internals::engine::executor::{convolve, convolve_slice};
pub use convolve::internals::engine::output::ConvolutionResult;
pub use convolve::internals::math::kernel::{Kernel, KernelShape};
pub use convolve::internals::primitives::chunk::{ChunkPlan, run_chunks};
pub use convolve::internals::primitives::errors::ConvolveError;
