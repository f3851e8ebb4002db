//! Interior and boundary convolution passes.
//!
//! ## Purpose
//!
//! This module computes convolution outputs for the three regions of a
//! sequence: the interior, where the whole kernel window lies inside the
//! source, and the left and right boundaries, where part of the window falls
//! outside it.
//!
//! ## Design notes
//!
//! * **Interior**: A direct weighted sum; the kernel already sums to 1.
//! * **Boundaries**: Only in-range taps are used and their weights are
//!   renormalized by their own sum. No zero padding, no index clamping.
//! * **Range-addressable**: The interior pass writes any contiguous sub-range
//!   of outputs, so callers can split it across threads.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Window**: For output `i`, tap `j` reads `src[i - k_half + j]`.
//! * **Renormalization**: `dest[i] = sum(src * w) / sum(w)` over the taps used.
//!
//! ## Invariants
//!
//! * Kernel length is odd and at most `src.len()` (checked by the validator).
//! * The weights applied to any output sum to 1 after renormalization.
//! * Every output is a function of `src` and the kernel only.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes or allocate output.

// External dependencies
use num_traits::Float;

// ============================================================================
// Interior Pass
// ============================================================================

/// Full-window weighted sum centered at `center`.
#[inline]
fn window_sum<T: Float>(src: &[T], kernel: &[T], center: usize) -> T {
    let k_half = kernel.len() / 2;
    let window = &src[center - k_half..center + k_half + 1];
    window
        .iter()
        .zip(kernel)
        .fold(T::zero(), |acc, (&s, &k)| acc + s * k)
}

/// Fill `out` with interior outputs starting at output index `first`.
///
/// `out[j]` receives the output for index `first + j`. Every such index must
/// lie in `[k_half, src.len() - k_half)`.
pub fn convolve_range<T: Float>(src: &[T], kernel: &[T], out: &mut [T], first: usize) {
    for (j, value) in out.iter_mut().enumerate() {
        *value = window_sum(src, kernel, first + j);
    }
}

/// Sequential interior pass.
///
/// `out` is the interior slice of the destination: `out[0]` corresponds to
/// output index `k_half`, and `out.len() == src.len() - 2 * k_half`.
pub fn interior_pass<T: Float>(src: &[T], kernel: &[T], out: &mut [T]) {
    convolve_range(src, kernel, out, kernel.len() / 2);
}

// ============================================================================
// Boundary Passes
// ============================================================================

/// Renormalized weighted sum at `center` using only taps inside `src`.
#[inline]
fn renormalized_sum<T: Float>(src: &[T], kernel: &[T], center: usize) -> T {
    let n = src.len();
    let k_half = kernel.len() / 2;

    // Taps j with 0 <= center - k_half + j < n
    let first_tap = k_half.saturating_sub(center);
    let last_tap = kernel.len().min(n + k_half - center);

    let mut sum = T::zero();
    let mut weight_sum = T::zero();
    for (j, &w) in kernel.iter().enumerate().take(last_tap).skip(first_tap) {
        sum = sum + src[center + j - k_half] * w;
        weight_sum = weight_sum + w;
    }

    sum / weight_sum
}

/// Fill `dest[0..k_half)` with renormalized outputs.
pub fn left_boundary_pass<T: Float>(src: &[T], kernel: &[T], dest: &mut [T]) {
    let k_half = kernel.len() / 2;
    for (i, value) in dest.iter_mut().enumerate().take(k_half) {
        *value = renormalized_sum(src, kernel, i);
    }
}

/// Fill `dest[n - k_half..n)` with renormalized outputs.
pub fn right_boundary_pass<T: Float>(src: &[T], kernel: &[T], dest: &mut [T]) {
    let n = src.len();
    let k_half = kernel.len() / 2;
    for (i, value) in dest.iter_mut().enumerate().take(n).skip(n - k_half) {
        *value = renormalized_sum(src, kernel, i);
    }
}
