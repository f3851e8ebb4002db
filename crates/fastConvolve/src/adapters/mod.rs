//! Layer 5: Adapters
//!
//! This layer wraps the `convolve` adapters with parallel execution.

// Parallel sequence smoothing
pub mod sequence;

// Column-parallel table smoothing
pub mod table;
