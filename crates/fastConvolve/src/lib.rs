//! # Fast Convolve (Parallel 1-D Convolution Smoothing)
//!
//! Multi-threaded extension of the [`convolve`] crate. It adds a generic
//! fan-out/fan-in range runner, a parallel interior pass for long sequences,
//! column-parallel table smoothing and native `ndarray` input.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastConvolve::prelude::*;
//! use ndarray::Array1;
//!
//! let y = Array1::from_vec((0..10_000).map(|i| (i as f64 / 50.0).sin()).collect());
//!
//! // Build the smoother with parallel execution (default)
//! let model = Smoother::new()
//!     .half_width(4)      // 9-tap kernel
//!     .sigma(0.5)         // Spread relative to the half-width
//!     .build()?;
//!
//! let result = model.smooth(&y)?;
//! assert_eq!(result.y.len(), y.len());
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Parallel Range Runner
//!
//! ```rust
//! use fastConvolve::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let visited = AtomicUsize::new(0);
//!
//! // [0, 10) on 3 workers runs [0, 4), [4, 8) and [8, 10)
//! parallel_run(
//!     |start, end| {
//!         visited.fetch_add(end - start, Ordering::Relaxed);
//!     },
//!     10,
//!     3,
//! )?;
//!
//! assert_eq!(visited.load(Ordering::Relaxed), 10);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Tables
//!
//! ```rust
//! use fastConvolve::prelude::*;
//!
//! let table = Table::new()
//!     .with_column("a", ColumnData::Float64((1..=10).map(f64::from).collect()))?
//!     .with_column("b", ColumnData::Float32((1..=10).map(|i| i as f32).collect()))?;
//!
//! // One task per column
//! let smoothed = smooth_table_parallel(&table, 1, 0.5)?;
//! assert_eq!(smoothed, smooth_table(&table, 1, 0.5)?);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Execution plans are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` and `trace` level. No logger is installed by the crate.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// Layer 5: Adapters - parallel sequence and table adapters.
mod adapters;

// High-level fluent API for parallel smoothing.
mod api;

// Input data handling.
mod input;

pub use api::{
    ConvolveInput, ParallelSmootherBuilder, ParallelSmoothingProcessor, default_threads,
    parallel_run, smooth_table_parallel, smooth_table_with_kernels, try_parallel_run,
};

// Standard fastConvolve prelude.
pub mod prelude {
    pub use crate::api::{
        ChunkPlan, Column, ColumnData, ConvolutionResult, ConvolveError, ConvolveInput, Kernel,
        KernelShape::{self, Gaussian, Triangle, Uniform},
        ParallelSmootherBuilder as Smoother, ParallelSmoothingProcessor, Table, TableKernels,
        convolve, convolve_slice, default_threads, parallel_run, run_chunks, smooth_table,
        smooth_table_parallel, try_parallel_run,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
