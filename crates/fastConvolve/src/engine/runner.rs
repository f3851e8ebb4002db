//! Parallel range runner.
//!
//! ## Purpose
//!
//! This module executes a caller-supplied function over disjoint sub-ranges
//! of `[0, total)` concurrently and returns once every sub-range is done.
//! Column-wise smoothing and other embarrassingly parallel work are driven
//! through it.
//!
//! ## Design notes
//!
//! * **Planning**: Ranges come from `convolve`'s `ChunkPlan`, chunk size
//!   `ceil(total / n_threads)`, so at most `n_threads` units are launched.
//! * **Fan-out/fan-in**: One `rayon` scoped task per chunk; the scope is the
//!   barrier, so the call blocks until every task has finished.
//! * **Failures**: The fallible variant runs every chunk and reports the error
//!   of the lowest-indexed failing chunk. Panics resume on the caller after
//!   the scope has joined.
//!
//! ## Invariants
//!
//! * Every index in `[0, total)` is passed to exactly one invocation.
//! * `total == 0` launches nothing.
//!
//! ## Non-goals
//!
//! * This module does not cancel, time out or rebalance work.
//! * This module does not order work units relative to each other.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::scope;

// External dependencies
use log::debug;

// Export dependencies from convolve crate
use convolve::internals::primitives::chunk::ChunkPlan;
use convolve::internals::primitives::errors::ConvolveError;

// ============================================================================
// Infallible Runner
// ============================================================================

/// Run `f(start, end)` concurrently over the chunks of `[0, total)`.
///
/// The range is split into `ceil(total / n_threads)`-sized chunks and each
/// chunk is handed to its own task. Returns after all tasks have completed.
///
/// Fails with [`ConvolveError::InvalidThreadCount`] when `n_threads` is 0,
/// before anything runs.
pub fn parallel_run<F>(f: F, total: usize, n_threads: usize) -> Result<(), ConvolveError>
where
    F: Fn(usize, usize) + Sync,
{
    let plan = ChunkPlan::new(total, n_threads)?;
    log_plan(&plan, n_threads);

    #[cfg(feature = "cpu")]
    {
        let f = &f;
        scope(|s| {
            for range in &plan {
                s.spawn(move |_| f(range.start, range.end));
            }
        });
    }
    #[cfg(not(feature = "cpu"))]
    {
        for range in &plan {
            f(range.start, range.end);
        }
    }

    Ok(())
}

// ============================================================================
// Fallible Runner
// ============================================================================

/// Like [`parallel_run`], for range functions that can fail.
///
/// Every chunk runs to completion. If any fail, the error of the chunk with
/// the smallest start index is returned, independent of scheduling order.
pub fn try_parallel_run<F, E>(f: F, total: usize, n_threads: usize) -> Result<(), E>
where
    F: Fn(usize, usize) -> Result<(), E> + Sync,
    E: From<ConvolveError> + Send,
{
    let plan = ChunkPlan::new(total, n_threads)?;
    log_plan(&plan, n_threads);

    let mut results: Vec<Option<Result<(), E>>> = (0..plan.len()).map(|_| None).collect();

    #[cfg(feature = "cpu")]
    {
        let f = &f;
        scope(|s| {
            for (slot, range) in results.iter_mut().zip(&plan) {
                s.spawn(move |_| *slot = Some(f(range.start, range.end)));
            }
        });
    }
    #[cfg(not(feature = "cpu"))]
    {
        for (slot, range) in results.iter_mut().zip(&plan) {
            *slot = Some(f(range.start, range.end));
        }
    }

    results.into_iter().flatten().collect()
}

/// Worker count used when the caller does not choose one.
pub fn default_threads() -> usize {
    #[cfg(feature = "cpu")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "cpu"))]
    {
        1
    }
}

fn log_plan(plan: &ChunkPlan, n_threads: usize) {
    debug!(
        "parallel_run: total={} threads={} chunk_size={} chunks={}",
        plan.total(),
        n_threads,
        plan.chunk_size(),
        plan.len()
    );
}
