//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine to the shapes callers hold their data in:
//! single sequences and tables of typed columns.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequence smoothing with a prebuilt kernel.
pub mod sequence;

/// Column-wise table smoothing.
pub mod table;
