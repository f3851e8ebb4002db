//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the convolution passes: the full-window interior pass
//! and the renormalized boundary passes.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Interior and boundary convolution passes.
pub mod convolution;
