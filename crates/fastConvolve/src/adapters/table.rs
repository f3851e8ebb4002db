//! Column-parallel table smoothing.
//!
//! ## Purpose
//!
//! This module smooths every float column of a table concurrently. Columns
//! are independent, so they are distributed over the range runner with one
//! index per column.
//!
//! ## Design notes
//!
//! * **Composition**: Uses `try_parallel_run` over `[0, num_columns)`; each
//!   work unit smooths the columns of its range into write-once slots.
//! * **Determinism**: Column order is preserved and, on failure, the error of
//!   the first failing chunk is returned.
//!
//! ## Invariants
//!
//! * The result equals `convolve::smooth_table` on the same input.
//!
//! ## Non-goals
//!
//! * This module does not parallelize within a column (see the sequence adapter).

// External dependencies
use log::debug;
use std::sync::OnceLock;

// Export dependencies from convolve crate
use convolve::internals::adapters::table::{Column, Table, TableKernels};
use convolve::internals::primitives::errors::ConvolveError;

// Internal dependencies
use crate::engine::runner::{default_threads, try_parallel_run};

/// Gaussian-smooth every float column of `table`, one column per task.
pub fn smooth_table_parallel(
    table: &Table,
    k_half: usize,
    sigma: f64,
) -> Result<Table, ConvolveError> {
    let kernels = TableKernels::gaussian(k_half, sigma)?;
    smooth_table_with_kernels(table, &kernels)
}

/// Smooth every float column of `table` with prebuilt kernels, in parallel.
pub fn smooth_table_with_kernels(
    table: &Table,
    kernels: &TableKernels,
) -> Result<Table, ConvolveError> {
    let columns = table.columns();
    let slots: Vec<OnceLock<Column>> = columns.iter().map(|_| OnceLock::new()).collect();

    try_parallel_run(
        |start, end| -> Result<(), ConvolveError> {
            for (column, slot) in columns[start..end].iter().zip(&slots[start..end]) {
                let smoothed = Column {
                    name: column.name.clone(),
                    data: kernels.smooth_column(&column.data)?,
                };
                // Ranges are disjoint, so each slot is set once
                let _ = slot.set(smoothed);
            }
            Ok(())
        },
        columns.len(),
        default_threads(),
    )?;

    let smoothed: Vec<Column> = slots.into_iter().filter_map(OnceLock::into_inner).collect();
    debug!(
        "smooth_table_parallel: {} columns, {} smoothed",
        smoothed.len(),
        smoothed.iter().filter(|c| c.data.is_float()).count()
    );

    Table::from_columns(smoothed)
}
