//! Tests for the builder API.
//!
//! These tests verify the user-facing configuration surface:
//! - Default parameters
//! - Duplicate-parameter detection
//! - Kernel selection (shape, custom weights)
//! - Processor outputs and result formatting
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Parameters left unset
//! 2. **Validation** - Rejected configurations
//! 3. **Kernel Selection** - Shapes and custom weights
//! 4. **Processing** - smooth, smooth_into, shared use across threads
//! 5. **Output** - Result helpers and Display

use approx::assert_abs_diff_eq;

use convolve::prelude::*;

fn signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.3).cos() * 2.0 + i as f64 * 0.1).collect()
}

// ============================================================================
// Defaults
// ============================================================================

/// Defaults: Gaussian kernel with half-width 2 and sigma 0.5.
#[test]
fn test_defaults() {
    let processor = Smoother::<f64>::new().build().unwrap();

    assert_eq!(processor.half_width(), 2);
    assert_eq!(processor.kernel(), &Kernel::gaussian(2, 0.5).unwrap());
}

/// Setting only the half-width keeps the default sigma.
#[test]
fn test_partial_configuration() {
    let processor = Smoother::<f64>::new().half_width(4).build().unwrap();
    assert_eq!(processor.kernel(), &Kernel::gaussian(4, 0.5).unwrap());

    let processor = Smoother::<f32>::new().sigma(1.5).build().unwrap();
    assert_eq!(processor.kernel(), &Kernel::gaussian(2, 1.5_f32).unwrap());
}

// ============================================================================
// Validation
// ============================================================================

/// Setting a parameter twice is an error.
#[test]
fn test_duplicate_parameters() {
    let err = Smoother::<f64>::new()
        .half_width(1)
        .half_width(2)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConvolveError::DuplicateParameter {
            parameter: "half_width"
        }
    );

    let err = Smoother::new().sigma(0.5).sigma(0.7).build().unwrap_err();
    assert_eq!(err, ConvolveError::DuplicateParameter { parameter: "sigma" });

    let err = Smoother::<f64>::new()
        .kernel_shape(Uniform)
        .kernel_shape(Triangle)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConvolveError::DuplicateParameter {
            parameter: "kernel_shape"
        }
    );
}

/// Non-positive or non-finite sigma is rejected.
#[test]
fn test_invalid_sigma() {
    for sigma in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let err = Smoother::new().sigma(sigma).build().unwrap_err();
        assert!(matches!(err, ConvolveError::InvalidSigma(_)));
    }
}

/// Zero worker threads is rejected.
#[test]
fn test_zero_threads() {
    let err = Smoother::<f64>::new().threads(0).build().unwrap_err();
    assert_eq!(err, ConvolveError::InvalidThreadCount(0));
}

/// Unusable custom weights are rejected.
#[test]
fn test_invalid_custom_kernel() {
    let err = Smoother::new().kernel(vec![1.0, 1.0]).build().unwrap_err();
    assert_eq!(err, ConvolveError::EvenKernel { len: 2 });

    let err = Smoother::new().kernel(vec![1.0, -1.0, 1.0]).build().unwrap_err();
    assert!(matches!(err, ConvolveError::InvalidKernel(_)));
}

// ============================================================================
// Kernel Selection
// ============================================================================

/// Custom weights override shape, half-width and sigma.
#[test]
fn test_custom_kernel() {
    let processor = Smoother::new()
        .kernel(vec![1.0, 2.0, 1.0])
        .half_width(5)
        .build()
        .unwrap();

    assert_eq!(processor.half_width(), 1);
    assert_eq!(processor.kernel().as_slice(), &[0.25, 0.5, 0.25]);
}

/// The Uniform shape is a moving average.
#[test]
fn test_uniform_moving_average() {
    let processor = Smoother::new()
        .kernel_shape(Uniform)
        .half_width(1)
        .build()
        .unwrap();

    let src = [3.0, 6.0, 0.0, 9.0, 3.0];
    let result = processor.smooth(&src).unwrap();

    assert_abs_diff_eq!(result.y[0], 4.5, epsilon = 1e-12);
    assert_abs_diff_eq!(result.y[1], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.y[2], 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.y[3], 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.y[4], 6.0, epsilon = 1e-12);
}

/// Builder kernels match the free constructors.
#[test]
fn test_shapes_match_constructors() {
    for shape in [Gaussian, Triangle, Uniform] {
        let processor = Smoother::new()
            .kernel_shape(shape)
            .half_width(3)
            .sigma(0.8)
            .build()
            .unwrap();
        assert_eq!(processor.kernel(), &Kernel::build(shape, 3, 0.8_f64).unwrap());
    }
}

// ============================================================================
// Processing
// ============================================================================

/// The processor reproduces a ramp on the interior.
#[test]
fn test_ramp_reproduction() {
    let src: Vec<f64> = (0..25).map(|i| 2.0 * i as f64 - 7.0).collect();
    let processor = Smoother::new().half_width(2).sigma(0.5).build().unwrap();
    let result = processor.smooth(&src).unwrap();

    for i in 2..23 {
        assert_abs_diff_eq!(result.y[i], src[i], epsilon = 1e-7);
    }
}

/// `smooth` and `smooth_into` agree; `smooth_into` reuses storage.
#[test]
fn test_smooth_into() {
    let src = signal(64);
    let processor = Smoother::new().half_width(3).build().unwrap();

    let result = processor.smooth(&src).unwrap();

    let mut dest = Vec::with_capacity(128);
    processor.smooth_into(&mut dest, &src).unwrap();
    assert_eq!(dest, result.y);
    assert!(dest.capacity() >= 128);

    let mut expected = Vec::new();
    convolve(&mut expected, &src, processor.kernel()).unwrap();
    assert_eq!(dest, expected);
}

/// Precondition failures surface from the processor.
#[test]
fn test_smooth_errors() {
    let processor = Smoother::new().half_width(3).build().unwrap();

    let err = processor.smooth(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        ConvolveError::KernelTooLong {
            kernel_len: 7,
            src_len: 2
        }
    );
    assert_eq!(processor.smooth(&[]).unwrap_err(), ConvolveError::EmptyInput);
}

/// One processor can serve several threads on disjoint buffers.
#[test]
fn test_shared_across_threads() {
    let processor = Smoother::new().half_width(2).sigma(0.9).build().unwrap();
    let inputs: Vec<Vec<f64>> = (0..4).map(|k| signal(50 + k * 10)).collect();

    let expected: Vec<Vec<f64>> = inputs
        .iter()
        .map(|src| processor.smooth(src).unwrap().y)
        .collect();

    let shared = &processor;
    let outputs: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|src| s.spawn(move || shared.smooth(src).unwrap().y))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outputs, expected);
}

// ============================================================================
// Output
// ============================================================================

/// Result helpers and kernel metadata.
#[test]
fn test_result_metadata() {
    let processor = Smoother::new().half_width(1).build().unwrap();
    let result = processor.smooth(&signal(10)).unwrap();

    assert_eq!(result.len(), 10);
    assert!(!result.is_empty());
    assert!(result.all_finite());
    assert_eq!(result.half_width, 1);
    assert_eq!(result.kernel, processor.kernel().as_slice());
}

/// Display prints a summary and the smoothed values.
#[test]
fn test_display() {
    let processor = Smoother::new().half_width(1).build().unwrap();
    let result = processor.smooth(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let text = result.to_string();

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Data points: 4"));
    assert!(text.contains("Half-width: 1"));
    assert!(text.contains("Kernel: [0.106507, 0.786986, 0.106507]"));
    assert!(text.contains("Smoothed Data:"));
    assert!(text.contains("Y_smooth"));
    assert!(text.contains("2.00000"));
}
