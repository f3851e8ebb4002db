//! Smoothing kernels for discrete convolution.
//!
//! ## Purpose
//!
//! This module builds the normalized, symmetric weight sequences that the
//! convolution engine slides across a signal. The discrete Gaussian is the
//! primary shape; moving-average and triangular shapes are provided for
//! callers that want a compact support.
//!
//! ## Design notes
//!
//! * **Generics**: One algorithm for `f32` and `f64`, parameterized over `Float`.
//! * **Exact symmetry**: Weights are evaluated on `|i - k_half|`, so mirrored taps
//!   are bit-identical before and after normalization.
//! * **Immutability**: A built [`Kernel`] cannot be modified; it derefs to `[T]`.
//!
//! ## Key concepts
//!
//! * **Half-width**: Kernel radius `k_half`; the kernel has `2 * k_half + 1` taps.
//! * **Gaussian**: `exp(-x^2 / 2)` with `x = (i - k_half) / (sigma * k_half)`,
//!   so `sigma` is the spread relative to the half-width.
//! * **Normalization**: Every weight is divided by the sum of all weights.
//!
//! ## Invariants
//!
//! * Kernel length is always odd.
//! * Weights are non-negative and sum to 1 up to rounding.
//! * `k_half == 0` yields the identity kernel `[1]`.
//!
//! ## Non-goals
//!
//! * This module does not apply kernels to data (see the convolution pass).
//! * This module does not select the half-width or spread automatically.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Kernel Shape
// ============================================================================

/// Profile of a smoothing kernel.
///
/// | Shape    | Unnormalized weight at offset `d = i - k_half`     |
/// |----------|----------------------------------------------------|
/// | Gaussian | `exp(-0.5 * (d / (sigma * k_half))^2)`             |
/// | Triangle | `k_half + 1 - abs(d)`                              |
/// | Uniform  | `1`                                                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelShape {
    /// Discrete Gaussian with spread `sigma` relative to the half-width.
    #[default]
    Gaussian,

    /// Linear taper reaching zero one tap beyond each end.
    Triangle,

    /// Equal weights (moving average).
    Uniform,
}

impl KernelShape {
    /// Get the name of the kernel shape.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelShape::Gaussian => "Gaussian",
            KernelShape::Triangle => "Triangle",
            KernelShape::Uniform => "Uniform",
        }
    }

    /// Unnormalized weight at distance `offset` from the center.
    ///
    /// `sigma` is only read by the Gaussian shape. The caller guarantees
    /// `k_half > 0`.
    #[inline]
    fn raw_weight<T: Float>(&self, offset: usize, k_half: usize, sigma: T) -> T {
        match self {
            KernelShape::Gaussian => {
                let x = cast::<T>(offset) / (sigma * cast::<T>(k_half));
                let half = cast::<T>(1) / cast::<T>(2);
                (-half * x * x).exp()
            }
            KernelShape::Triangle => cast::<T>(k_half + 1 - offset),
            KernelShape::Uniform => T::one(),
        }
    }
}

// ============================================================================
// Kernel
// ============================================================================

/// Normalized, symmetric, odd-length convolution kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<T> {
    weights: Vec<T>,
}

impl<T: Float> Kernel<T> {
    /// Build a discrete Gaussian kernel.
    ///
    /// The kernel has `2 * k_half + 1` taps. Fails with
    /// [`ConvolveError::InvalidSigma`] unless `sigma` is positive and finite.
    pub fn gaussian(k_half: usize, sigma: T) -> Result<Self, ConvolveError> {
        Self::build(KernelShape::Gaussian, k_half, sigma)
    }

    /// Build a kernel of the given shape.
    pub fn build(shape: KernelShape, k_half: usize, sigma: T) -> Result<Self, ConvolveError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(ConvolveError::InvalidSigma(
                sigma.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // The centered coordinate divides by k_half
        if k_half == 0 {
            return Ok(Self {
                weights: vec![T::one()],
            });
        }

        let len = 2 * k_half + 1;
        let mut weights = Vec::with_capacity(len);
        for i in 0..len {
            weights.push(shape.raw_weight(i.abs_diff(k_half), k_half, sigma));
        }

        normalize(&mut weights);
        Ok(Self { weights })
    }

    /// Build a kernel from caller-supplied weights, normalizing them to sum to 1.
    ///
    /// The weights must be odd in number, finite, non-negative and not all zero.
    /// Symmetry is not enforced.
    pub fn from_weights(mut weights: Vec<T>) -> Result<Self, ConvolveError> {
        if weights.is_empty() {
            return Err(ConvolveError::EmptyKernel);
        }
        if weights.len() % 2 == 0 {
            return Err(ConvolveError::EvenKernel { len: weights.len() });
        }

        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < T::zero() {
                return Err(ConvolveError::InvalidKernel(format!(
                    "weight[{}]={} (must be finite and >= 0)",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        if !normalize(&mut weights) {
            return Err(ConvolveError::InvalidKernel(
                "weights sum to zero".into(),
            ));
        }

        Ok(Self { weights })
    }

    /// Kernel radius; the kernel has `2 * half_width() + 1` taps.
    #[inline]
    pub fn half_width(&self) -> usize {
        (self.weights.len() - 1) / 2
    }

    /// Sum of all weights (1 up to rounding).
    pub fn sum(&self) -> T {
        self.weights.iter().fold(T::zero(), |acc, &w| acc + w)
    }

    /// Borrow the weights.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.weights
    }

    /// Take ownership of the weights.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.weights
    }

    /// Convert the weights to another float width.
    ///
    /// Weights that cannot be represented become zero.
    pub fn cast<U: Float>(&self) -> Kernel<U> {
        Kernel {
            weights: self
                .weights
                .iter()
                .map(|&w| w.to_f64().and_then(U::from).unwrap_or_else(U::zero))
                .collect(),
        }
    }
}

impl<T> Deref for Kernel<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.weights
    }
}

impl<T> AsRef<[T]> for Kernel<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.weights
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Divide every weight by the total. Returns `false` if the total is not positive.
fn normalize<T: Float>(weights: &mut [T]) -> bool {
    let sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    if !sum.is_finite() || sum <= T::zero() {
        return false;
    }
    for w in weights.iter_mut() {
        *w = *w / sum;
    }
    true
}

#[inline]
fn cast<T: Float>(v: usize) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
