//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine: a generic range runner
//! and the multi-threaded interior convolution pass injected into the
//! `convolve` executor.

// Parallel interior pass using CPU threads
pub mod executor;

// Fan-out/fan-in execution of range functions
pub mod runner;
