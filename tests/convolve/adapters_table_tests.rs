//! Tests for column-wise table smoothing.
//!
//! These tests verify the table adapter:
//! - Float columns are smoothed in their own precision
//! - Non-float columns pass through unchanged
//! - Column names, order and lengths are preserved
//! - Precondition failures in any column fail the whole table
//!
//! ## Test Organization
//!
//! 1. **Smoothing** - Float64 and Float32 columns
//! 2. **Pass-through** - Int64 and Text columns
//! 3. **Errors** - Short columns, invalid sigma, ragged tables
//! 4. **Table Model** - Construction and lookup

use approx::assert_abs_diff_eq;

use convolve::prelude::*;

fn one_to_ten() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

// ============================================================================
// Smoothing
// ============================================================================

/// A rising Float64 column stays rising and finite after smoothing.
#[test]
fn test_float64_monotonic() {
    let table = Table::new()
        .with_column("x", ColumnData::Float64(one_to_ten()))
        .unwrap();

    let smoothed = smooth_table(&table, 1, 0.5).unwrap();
    let ColumnData::Float64(y) = &smoothed.column("x").unwrap().data else {
        panic!("expected a Float64 column");
    };

    assert_eq!(y.len(), 10);
    assert!(y.iter().all(|v| v.is_finite()));
    for w in y.windows(2) {
        assert!(w[1] > w[0], "smoothed column must stay increasing: {y:?}");
    }

    // Interior reproduces the ramp, edges are pulled inward.
    for i in 1..9 {
        assert_abs_diff_eq!(y[i], (i + 1) as f64, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(y[0], 1.119_202_9, epsilon = 1e-6);
    assert_abs_diff_eq!(y[9], 9.880_797_1, epsilon = 1e-6);
}

/// Float64 columns match a direct convolution.
#[test]
fn test_float64_matches_convolve() {
    let values: Vec<f64> = (0..40).map(|i| ((i * 7) % 11) as f64).collect();
    let table = Table::new()
        .with_column("v", ColumnData::Float64(values.clone()))
        .unwrap();

    let smoothed = smooth_table(&table, 3, 0.7).unwrap();

    let kernel = Kernel::gaussian(3, 0.7).unwrap();
    let mut expected = Vec::new();
    convolve(&mut expected, &values, &kernel).unwrap();

    assert_eq!(smoothed.columns()[0].data, ColumnData::Float64(expected));
}

/// Float32 columns are smoothed with an f32 kernel.
#[test]
fn test_float32_column() {
    let values: Vec<f32> = (0..16).map(|i| (i * i) as f32).collect();
    let table = Table::new()
        .with_column("sq", ColumnData::Float32(values.clone()))
        .unwrap();

    let smoothed = smooth_table(&table, 2, 0.5).unwrap();

    let kernel = Kernel::gaussian(2, 0.5_f32).unwrap();
    let mut expected = Vec::new();
    convolve(&mut expected, &values, &kernel).unwrap();

    assert_eq!(smoothed.columns()[0].data, ColumnData::Float32(expected));
    assert_eq!(smoothed.columns()[0].data.type_name(), "f32");
}

/// Custom kernels apply through the processor.
#[test]
fn test_processor_table() {
    let processor = Smoother::new().kernel(vec![1.0, 2.0, 1.0]).build().unwrap();
    let table = Table::new()
        .with_column("a", ColumnData::Float64(vec![0.0, 4.0, 0.0, 4.0]))
        .unwrap()
        .with_column("b", ColumnData::Float32(vec![0.0, 4.0, 0.0, 4.0]))
        .unwrap();

    let smoothed = processor.smooth_table(&table).unwrap();

    assert_eq!(
        smoothed.column("a").unwrap().data,
        ColumnData::Float64(vec![4.0 / 3.0, 2.0, 2.0, 8.0 / 3.0])
    );
    let ColumnData::Float32(b) = &smoothed.column("b").unwrap().data else {
        panic!("expected a Float32 column");
    };
    assert_abs_diff_eq!(b[1], 2.0, epsilon = 1e-6);
}

// ============================================================================
// Pass-through
// ============================================================================

/// Non-float columns are copied as they are; order and names are kept.
#[test]
fn test_non_float_passthrough() {
    let ids = ColumnData::Int64((0..6).collect());
    let labels = ColumnData::Text(["a", "b", "c", "d", "e", "f"].map(String::from).to_vec());
    let table = Table::new()
        .with_column("id", ids.clone())
        .unwrap()
        .with_column("value", ColumnData::Float64(vec![1.0, 9.0, 1.0, 9.0, 1.0, 9.0]))
        .unwrap()
        .with_column("label", labels.clone())
        .unwrap();

    let smoothed = smooth_table(&table, 1, 0.5).unwrap();

    let names: Vec<&str> = smoothed.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "value", "label"]);
    assert_eq!(smoothed.column("id").unwrap().data, ids);
    assert_eq!(smoothed.column("label").unwrap().data, labels);
    assert_ne!(
        smoothed.column("value").unwrap().data,
        table.column("value").unwrap().data
    );
    assert_eq!(smoothed.num_rows(), Some(6));
}

/// The input table is not modified.
#[test]
fn test_input_unchanged() {
    let table = Table::new()
        .with_column("x", ColumnData::Float64(one_to_ten()))
        .unwrap();
    let before = table.clone();

    let _ = smooth_table(&table, 2, 0.5).unwrap();
    assert_eq!(table, before);
}

/// A table without float columns is returned as is.
#[test]
fn test_no_float_columns() {
    let table = Table::new()
        .with_column("id", ColumnData::Int64(vec![1]))
        .unwrap();

    // A single row would be too short for the kernel, but nothing is smoothed.
    assert_eq!(smooth_table(&table, 3, 0.5).unwrap(), table);
    assert_eq!(smooth_table(&Table::new(), 3, 0.5).unwrap(), Table::new());
}

// ============================================================================
// Errors
// ============================================================================

/// A float column shorter than the kernel fails the whole table.
#[test]
fn test_short_column_fails() {
    let table = Table::new()
        .with_column("x", ColumnData::Float64(vec![1.0, 2.0, 3.0]))
        .unwrap();

    assert_eq!(
        smooth_table(&table, 2, 0.5).unwrap_err(),
        ConvolveError::KernelTooLong {
            kernel_len: 5,
            src_len: 3
        }
    );
}

/// An empty float column is rejected.
#[test]
fn test_empty_column_fails() {
    let table = Table::new()
        .with_column("x", ColumnData::Float32(vec![]))
        .unwrap();

    assert_eq!(
        smooth_table(&table, 0, 0.5).unwrap_err(),
        ConvolveError::EmptyInput
    );
}

/// Invalid sigma is reported before any column is touched.
#[test]
fn test_invalid_sigma() {
    let table = Table::new()
        .with_column("x", ColumnData::Float64(one_to_ten()))
        .unwrap();

    assert!(matches!(
        smooth_table(&table, 1, 0.0).unwrap_err(),
        ConvolveError::InvalidSigma(_)
    ));
}

/// A spread that only exists in f64 still smooths Float64 columns.
#[test]
fn test_sigma_outside_f32_range() {
    let values = vec![4.0, -1.0, 7.5, 2.0, 0.25];
    let table = Table::new()
        .with_column("x", ColumnData::Float64(values.clone()))
        .unwrap()
        .with_column("id", ColumnData::Int64(vec![1, 2, 3, 4, 5]))
        .unwrap();

    for sigma in [1e-50, 1e300] {
        let smoothed = smooth_table(&table, 1, sigma).unwrap();

        let kernel = Kernel::gaussian(1, sigma).unwrap();
        let mut expected = Vec::new();
        convolve(&mut expected, &values, &kernel).unwrap();
        assert_eq!(smoothed.column("x").unwrap().data, ColumnData::Float64(expected));
    }

    // The f32 kernel is only required once a Float32 column shows up.
    let mixed = table
        .with_column("y", ColumnData::Float32(vec![1.0; 5]))
        .unwrap();
    assert!(matches!(
        smooth_table(&mixed, 1, 1e-50).unwrap_err(),
        ConvolveError::InvalidSigma(_)
    ));
}

/// Table kernels expose both widths.
#[test]
fn test_table_kernels_accessors() {
    let kernels = TableKernels::gaussian(2, 0.5).unwrap();
    assert_eq!(kernels.double(), &Kernel::gaussian(2, 0.5).unwrap());
    assert_eq!(kernels.single().unwrap(), &Kernel::gaussian(2, 0.5_f32).unwrap());

    let deferred = TableKernels::gaussian(2, 1e-50).unwrap();
    assert!(matches!(
        deferred.single().unwrap_err(),
        ConvolveError::InvalidSigma(_)
    ));
}

// ============================================================================
// Table Model
// ============================================================================

/// Columns of mismatched length are rejected.
#[test]
fn test_ragged_table_rejected() {
    let mut table = Table::new()
        .with_column("a", ColumnData::Int64(vec![1, 2, 3]))
        .unwrap();

    let err = table
        .push_column(Column::new("b", ColumnData::Float64(vec![1.0, 2.0])))
        .unwrap_err();
    assert!(matches!(err, ConvolveError::InvalidInput(_)));
    assert_eq!(table.num_columns(), 1);

    let err = Table::from_columns(vec![
        Column::new("a", ColumnData::Int64(vec![1])),
        Column::new("b", ColumnData::Int64(vec![1, 2])),
    ])
    .unwrap_err();
    assert!(matches!(err, ConvolveError::InvalidInput(_)));
}

/// Column metadata helpers.
#[test]
fn test_column_metadata() {
    let data = ColumnData::Text(vec!["x".into(), "y".into()]);
    assert_eq!(data.len(), 2);
    assert!(!data.is_empty());
    assert!(!data.is_float());
    assert_eq!(data.type_name(), "text");

    assert!(ColumnData::Float64(vec![]).is_float());
    assert!(ColumnData::Float64(vec![]).is_empty());
    assert_eq!(ColumnData::Int64(vec![]).type_name(), "i64");

    let table = Table::new();
    assert_eq!(table.num_rows(), None);
    assert!(table.column("missing").is_none());
}
