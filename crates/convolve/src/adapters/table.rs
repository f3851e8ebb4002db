//! Column-wise smoothing of tabular data.
//!
//! ## Purpose
//!
//! This module provides a minimal column container and the adapter that
//! convolves every floating-point column of it. It is the shape in which
//! tabular consumers hand data to the convolution engine.
//!
//! ## Design notes
//!
//! * **Tagged columns**: Element types are a closed [`ColumnData`] enum, matched
//!   explicitly; only `Float32` and `Float64` columns are smoothed.
//! * **Pure mapping**: The input table is never modified; a smoothed copy is
//!   returned. Columns are independent, so the mapping parallelizes by column.
//! * **Two precisions**: [`TableKernels`] holds one kernel per float width.
//!
//! ## Invariants
//!
//! * The output has the same column names, order and lengths as the input.
//! * Non-float columns are passed through unchanged.
//! * A column that fails a convolution precondition fails the whole table.
//!
//! ## Non-goals
//!
//! * This module does not provide indexing, joins or any other table semantics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::ConvolveExecutor;
use crate::math::kernel::{Kernel, KernelShape};
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Column Data
// ============================================================================

/// Backing storage of a column, tagged by element type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Single-precision values.
    Float32(Vec<f32>),

    /// Double-precision values.
    Float64(Vec<f64>),

    /// Integer values (passed through by smoothing).
    Int64(Vec<i64>),

    /// Text values (passed through by smoothing).
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for `Float32` and `Float64` columns.
    pub fn is_float(&self) -> bool {
        matches!(self, ColumnData::Float32(_) | ColumnData::Float64(_))
    }

    /// Get the name of the element type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            ColumnData::Float32(_) => "f32",
            ColumnData::Float64(_) => "f64",
            ColumnData::Int64(_) => "i64",
            ColumnData::Text(_) => "text",
        }
    }
}

// ============================================================================
// Column and Table
// ============================================================================

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Column values.
    pub data: ColumnData,
}

impl Column {
    /// Create a column.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Ordered collection of equally long named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns, checking that their lengths agree.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, ConvolveError> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column.
    ///
    /// Fails if the column length differs from the existing row count.
    pub fn push_column(&mut self, column: Column) -> Result<(), ConvolveError> {
        if let Some(rows) = self.num_rows() {
            if column.data.len() != rows {
                return Err(ConvolveError::InvalidInput(format!(
                    "column '{}' has {} rows, table has {}",
                    column.name,
                    column.data.len(),
                    rows
                )));
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Append a column, builder style.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        data: ColumnData,
    ) -> Result<Self, ConvolveError> {
        self.push_column(Column::new(name, data))?;
        Ok(self)
    }

    /// All columns in order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, or `None` for a table without columns.
    pub fn num_rows(&self) -> Option<usize> {
        self.columns.first().map(|c| c.data.len())
    }
}

// ============================================================================
// Table Kernels
// ============================================================================

/// One kernel per float width, shared by every column of a table.
///
/// The `f32` kernel may be unbuildable (a spread that is valid in `f64` can
/// underflow or overflow in `f32`). Its error is kept and only reported when
/// a `Float32` column is smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct TableKernels {
    single: Result<Kernel<f32>, ConvolveError>,
    double: Kernel<f64>,
}

impl TableKernels {
    /// Build both kernels with the given shape, half-width and spread.
    ///
    /// Fails if the `f64` kernel cannot be built; an `f32` failure is deferred
    /// to the first `Float32` column.
    pub fn new(shape: KernelShape, k_half: usize, sigma: f64) -> Result<Self, ConvolveError> {
        let double = Kernel::build(shape, k_half, sigma)?;
        Ok(Self {
            single: Kernel::build(shape, k_half, sigma as f32),
            double,
        })
    }

    /// Build both kernels as discrete Gaussians.
    pub fn gaussian(k_half: usize, sigma: f64) -> Result<Self, ConvolveError> {
        Self::new(KernelShape::Gaussian, k_half, sigma)
    }

    /// Derive both kernels from an existing one.
    pub fn from_kernel<T: num_traits::Float>(kernel: &Kernel<T>) -> Self {
        Self {
            single: Ok(kernel.cast()),
            double: kernel.cast(),
        }
    }

    /// Kernel applied to `Float32` columns, or the error that prevented building it.
    pub fn single(&self) -> Result<&Kernel<f32>, ConvolveError> {
        self.single.as_ref().map_err(Clone::clone)
    }

    /// Kernel applied to `Float64` columns.
    #[inline]
    pub fn double(&self) -> &Kernel<f64> {
        &self.double
    }

    /// Smooth one column; non-float columns are cloned unchanged.
    pub fn smooth_column(&self, data: &ColumnData) -> Result<ColumnData, ConvolveError> {
        self.smooth_column_with(data, &ConvolveExecutor::new(), &ConvolveExecutor::new())
    }

    /// Smooth one column with explicit executors for each width.
    pub fn smooth_column_with(
        &self,
        data: &ColumnData,
        single: &ConvolveExecutor<f32>,
        double: &ConvolveExecutor<f64>,
    ) -> Result<ColumnData, ConvolveError> {
        match data {
            ColumnData::Float32(src) => {
                let mut dest = Vec::with_capacity(src.len());
                single.run(&mut dest, src, self.single()?)?;
                Ok(ColumnData::Float32(dest))
            }
            ColumnData::Float64(src) => {
                let mut dest = Vec::with_capacity(src.len());
                double.run(&mut dest, src, &self.double)?;
                Ok(ColumnData::Float64(dest))
            }
            other => Ok(other.clone()),
        }
    }

    /// Smooth every float column of `table` into a new table.
    pub fn smooth_table(&self, table: &Table) -> Result<Table, ConvolveError> {
        let mut columns = Vec::with_capacity(table.num_columns());
        for column in table.columns() {
            columns.push(Column {
                name: column.name.clone(),
                data: self.smooth_column(&column.data)?,
            });
        }
        Ok(Table { columns })
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Gaussian-smooth every `f32`/`f64` column of `table`.
///
/// Returns a copy of the table in which each float column is replaced by its
/// convolution with a Gaussian kernel of half-width `k_half` and spread
/// `sigma`; all other columns are copied as they are.
pub fn smooth_table(table: &Table, k_half: usize, sigma: f64) -> Result<Table, ConvolveError> {
    TableKernels::gaussian(k_half, sigma)?.smooth_table(table)
}
