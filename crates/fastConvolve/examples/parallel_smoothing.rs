//! fastConvolve Parallel Smoothing Examples
//!
//! This example demonstrates features specific to `fastConvolve`:
//! - Parallel interior pass using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Column-parallel table smoothing
//! - The range runner on its own

use fastConvolve::prelude::*;
use ndarray::Array1;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

fn main() -> Result<(), ConvolveError> {
    println!("{}", "=".repeat(80));
    println!("fastConvolve Parallel Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_table_smoothing()?;
    example_5_range_runner()?;

    Ok(())
}

fn signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            (x * 0.01).sin() + 0.2 * (x * 1.7).cos()
        })
        .collect()
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution() -> Result<(), ConvolveError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let y = signal(n);

    let start = Instant::now();
    let smoother = Smoother::new()
        .half_width(8) // 17-tap kernel
        .sigma(0.5)
        .build()?;

    let result = smoother.smooth(&y)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("Execution mode: Parallel");
    println!("All finite: {}", result.all_finite());

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), ConvolveError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let y = signal(n);

    let start = Instant::now();
    let smoother = Smoother::new()
        .half_width(8)
        .sigma(0.5)
        .parallel(false) // Disable parallel execution
        .build()?;

    let result = smoother.smooth(&y)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("Execution mode: Sequential");
    println!("All finite: {}", result.all_finite());

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Demonstrates smoothing an `Array1` directly
fn example_3_ndarray_integration() -> Result<(), ConvolveError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let y = Array1::from_vec(signal(12));
    let smoother = Smoother::new().half_width(2).threads(2).build()?;

    let result = smoother.smooth(&y)?;
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 4: Table Smoothing
/// Demonstrates smoothing every float column of a table in parallel
fn example_4_table_smoothing() -> Result<(), ConvolveError> {
    println!("Example 4: Table Smoothing");
    println!("{}", "-".repeat(80));

    let rows = 10;
    let table = Table::new()
        .with_column("id", ColumnData::Int64((0..rows).collect()))?
        .with_column("value", ColumnData::Float64((1..=rows).map(|i| i as f64).collect()))?
        .with_column(
            "reading",
            ColumnData::Float32((0..rows).map(|i| ((i * 3) % 5) as f32).collect()),
        )?;

    let smoothed = smooth_table_parallel(&table, 1, 0.5)?;

    for column in smoothed.columns() {
        println!("{:>8} ({}): {:?}", column.name, column.data.type_name(), column.data);
    }

    println!();
    Ok(())
}

/// Example 5: Range Runner
/// Demonstrates splitting an arbitrary computation into chunks
fn example_5_range_runner() -> Result<(), ConvolveError> {
    println!("Example 5: Range Runner");
    println!("{}", "-".repeat(80));

    let data: Vec<u64> = (1..=1_000_000).collect();
    let total = AtomicU64::new(0);

    parallel_run(
        |start, end| {
            let partial: u64 = data[start..end].iter().sum();
            total.fetch_add(partial, Ordering::Relaxed);
        },
        data.len(),
        default_threads(),
    )?;

    println!("Sum of 1..=1_000_000: {}", total.load(Ordering::Relaxed));

    println!();
    Ok(())
}
