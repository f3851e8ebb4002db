//! # convolve: 1-D Convolution Smoothing for Rust
//!
//! Discrete convolution of numeric sequences with normalized, symmetric
//! kernels, with edge handling that never loses signal mass.
//!
//! ## What does it do?
//!
//! Each output element is a weighted average of its neighbours. Where the
//! kernel window fits inside the signal, that is a plain weighted sum. Near
//! the ends, only the taps that land inside the signal are used, and their
//! weights are divided by their own sum, so a constant signal stays constant
//! all the way to the edges instead of darkening toward zero.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let y: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! // Build the smoother
//! let model = Smoother::new()
//!     .half_width(1)      // 3-tap kernel
//!     .sigma(0.5)         // Spread relative to the half-width
//!     .build()?;
//!
//! // Smooth the data
//! let result = model.smooth(&y)?;
//!
//! println!("{}", result);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Low-Level Functions
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let kernel = Kernel::gaussian(2, 0.5_f64)?;
//! let src: Vec<f64> = (0..20).map(|i| i as f64).collect();
//!
//! let mut dest = Vec::new();
//! convolve(&mut dest, &src, &kernel)?;
//! assert_eq!(dest.len(), src.len());
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Tables
//!
//! ```rust
//! use convolve::prelude::*;
//!
//! let table = Table::new()
//!     .with_column("t", ColumnData::Int64((0..6).collect()))?
//!     .with_column("v", ColumnData::Float64(vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0]))?;
//!
//! // Float columns are smoothed, everything else is copied.
//! let smoothed = smooth_table(&table, 1, 0.5)?;
//! assert_eq!(smoothed.column("t"), table.column("t"));
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, ConvolveError>`. Size
//! preconditions (empty kernel or source, even kernel, source shorter than the
//! kernel) are checked before the destination is written, so a failed call
//! leaves it untouched.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! convolve = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - kernel construction.
mod math;

// Layer 3: Algorithms - convolution passes.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
mod engine;

// Layer 5: Adapters - sequence and table adapters.
mod adapters;

// High-level fluent API.
mod api;

pub use api::{
    ChunkPlan, Column, ColumnData, ConvolutionResult, ConvolveError, Kernel, KernelShape,
    SmoothingProcessor, Table, TableKernels, convolve, convolve_slice, run_chunks, smooth_table,
};

// Standard convolve prelude.
pub mod prelude {
    pub use crate::api::{
        ChunkPlan, Column, ColumnData, ConvolutionResult, ConvolveError, Kernel,
        KernelShape::{self, Gaussian, Triangle, Uniform},
        SmootherBuilder as Smoother, SmoothingProcessor, Table, TableKernels, convolve,
        convolve_slice, run_chunks, smooth_table,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
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
