//! Range decomposition for chunked execution.
//!
//! ## Purpose
//!
//! This module splits an index range `[0, total)` into contiguous chunks, one
//! per worker. It is the planning half of the parallel runner in
//! `fastConvolve`; the sequential [`run_chunks`] executes the same plan on
//! the calling thread.
//!
//! ## Design notes
//!
//! * **Implicit**: A plan stores only `total` and the chunk size; ranges are
//!   computed on demand and never materialized.
//! * **Ceiling division**: Chunk size is `ceil(total / n_threads)`, so the
//!   number of chunks never exceeds `n_threads`.
//!
//! ## Invariants
//!
//! * Chunks cover `[0, total)` exactly once, with no gaps or overlaps.
//! * Every chunk is non-empty; only the last one may be shorter.
//! * `total == 0` produces an empty plan.
//!
//! ## Non-goals
//!
//! * This module does not balance work dynamically.
//! * This module does not spawn threads.

// External dependencies
use core::iter::FusedIterator;
use core::ops::Range;

// Internal dependencies
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Chunk Plan
// ============================================================================

/// Division of `[0, total)` into contiguous, equally sized chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    total: usize,
    chunk_size: usize,
}

impl ChunkPlan {
    /// Plan `total` indices across `n_threads` workers.
    ///
    /// Fails with [`ConvolveError::InvalidThreadCount`] when `n_threads` is 0.
    pub fn new(total: usize, n_threads: usize) -> Result<Self, ConvolveError> {
        if n_threads == 0 {
            return Err(ConvolveError::InvalidThreadCount(n_threads));
        }

        Ok(Self {
            total,
            chunk_size: total.div_ceil(n_threads),
        })
    }

    /// Number of indices covered by the plan.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Size of every chunk except possibly the last.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks.
    #[inline]
    pub fn len(&self) -> usize {
        if self.chunk_size == 0 {
            0
        } else {
            self.total.div_ceil(self.chunk_size)
        }
    }

    /// Returns `true` if the plan has no chunks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Range of the chunk at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.chunk_size;
        let end = start + self.chunk_size.min(self.total - start);
        Some(start..end)
    }

    /// Iterate over the chunk ranges in index order.
    pub fn iter(&self) -> Chunks {
        Chunks {
            plan: *self,
            next: 0,
            count: self.len(),
        }
    }
}

impl IntoIterator for &ChunkPlan {
    type Item = Range<usize>;
    type IntoIter = Chunks;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ChunkPlan {
    type Item = Range<usize>;
    type IntoIter = Chunks;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Chunk Iterator
// ============================================================================

/// Iterator over the ranges of a [`ChunkPlan`].
#[derive(Debug, Clone)]
pub struct Chunks {
    plan: ChunkPlan,
    next: usize,
    count: usize,
}

impl Iterator for Chunks {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let range = self.plan.get(self.next);
        self.next += 1;
        range
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks {}

impl FusedIterator for Chunks {}

// ============================================================================
// Sequential Runner
// ============================================================================

/// Run `f(start, end)` for every chunk of the plan on the calling thread.
///
/// Chunks are visited in index order. This is the single-threaded counterpart
/// of `fastConvolve::parallel_run` and shares its chunking.
pub fn run_chunks<F>(mut f: F, total: usize, n_threads: usize) -> Result<(), ConvolveError>
where
    F: FnMut(usize, usize),
{
    let plan = ChunkPlan::new(total, n_threads)?;
    for range in &plan {
        f(range.start, range.end);
    }
    Ok(())
}
