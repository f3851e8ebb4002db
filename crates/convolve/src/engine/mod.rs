//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a convolution: it validates inputs, prepares the
//! destination, runs the interior pass (sequential by default, replaceable
//! through a hook) and the two boundary passes, and packages results.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for convolution.
pub mod executor;

/// Output types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
