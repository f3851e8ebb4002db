//! Parallel interior pass for convolution.
//!
//! ## Purpose
//!
//! This module provides the multi-threaded interior pass that is injected
//! into the `convolve` executor. The interior dominates the cost of a
//! convolution on long sequences; the boundary passes stay sequential.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential interior pass
//!   through the `InteriorPassFn` hook.
//! * **Parallelism**: Splits the output into disjoint chunks with the same
//!   `ChunkPlan` as the range runner and fills them with `rayon`.
//! * **Threshold**: Short interiors run sequentially; spawning costs more than
//!   it saves.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output is bit-identical to the sequential pass: each element is computed
//!   by the same expression, only on a different thread.
//! * Chunks are non-overlapping, so no two tasks write the same element.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not handle boundaries (handled by the `convolve` executor).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::trace;
use num_traits::Float;

// Export dependencies from convolve crate
use convolve::internals::algorithms::convolution::interior_pass;
#[cfg(feature = "cpu")]
use convolve::internals::algorithms::convolution::convolve_range;
#[cfg(feature = "cpu")]
use convolve::internals::primitives::chunk::ChunkPlan;

/// Interiors shorter than this are convolved on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4096;

// ============================================================================
// Parallel Interior Pass
// ============================================================================

/// Fill the interior of the destination in parallel.
///
/// `out[0]` corresponds to output index `k_half`; see
/// `convolve::internals::algorithms::convolution::interior_pass`.
#[cfg(feature = "cpu")]
pub fn interior_pass_parallel<T>(src: &[T], kernel: &[T], out: &mut [T])
where
    T: Float + Send + Sync,
{
    if out.len() < PARALLEL_THRESHOLD {
        trace!(
            "interior_pass_parallel: {} outputs below threshold, running sequentially",
            out.len()
        );
        interior_pass(src, kernel, out);
        return;
    }

    let plan = match ChunkPlan::new(out.len(), rayon::current_num_threads().max(1)) {
        Ok(plan) => plan,
        Err(_) => {
            interior_pass(src, kernel, out);
            return;
        }
    };

    let k_half = kernel.len() / 2;
    let chunk_size = plan.chunk_size();

    out.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            convolve_range(src, kernel, chunk, k_half + chunk_idx * chunk_size);
        });
}

/// Sequential fallback when the `cpu` feature is disabled.
#[cfg(not(feature = "cpu"))]
pub fn interior_pass_parallel<T>(src: &[T], kernel: &[T], out: &mut [T])
where
    T: Float + Send + Sync,
{
    trace!("interior_pass_parallel: cpu feature disabled, running sequentially");
    interior_pass(src, kernel, out);
}
