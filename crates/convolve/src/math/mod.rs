//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the smoothing kernels consumed by the convolution
//! passes. Kernels are pure values with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normalized symmetric smoothing kernels.
pub mod kernel;
