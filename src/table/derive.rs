// src/table/derive.rs
//! Derived text-length columns, computed either row by row or as a single
//! whole-column transform. Both strategies end in the same table state.

use anyhow::{Context, Result};
use arrow::array::Int64Array;
use std::sync::Arc;
use tracing::debug;

use super::IndexedTable;

/// Character count of `text` (chars, not bytes), as stored in length columns.
fn char_count(text: &str) -> i64 {
    text.chars().count() as i64
}

/// Row-wise strategy: visit every row in storage order and assign the
/// character count of its `src_column` cell into `dst_column` at that row's
/// label. Null source cells produce null derived cells.
pub fn derive_length_rowwise(
    table: &mut IndexedTable,
    src_column: &str,
    dst_column: &str,
) -> Result<()> {
    let mut values: Vec<Option<i64>> = vec![None; table.num_rows()];
    for label in table.labels() {
        let pos = table.position_of(label)?;
        let text = table
            .str_value(label, src_column)
            .with_context(|| format!("reading {src_column:?} at row {label:?}"))?;
        values[pos] = text.map(char_count);
    }

    debug!(rows = values.len(), src = %src_column, dst = %dst_column, "derived lengths row-wise");
    table.set_column(dst_column, Arc::new(Int64Array::from(values)))
}

/// Columnar strategy: apply the character count to the whole `src_column` at
/// once. Same contract and end state as [`derive_length_rowwise`].
pub fn derive_length_columnar(
    table: &mut IndexedTable,
    src_column: &str,
    dst_column: &str,
) -> Result<()> {
    let src = table
        .str_column(src_column)
        .with_context(|| format!("reading {src_column:?} for columnar transform"))?;
    let lengths: Int64Array = src.iter().map(|v| v.map(char_count)).collect();

    debug!(rows = lengths.len(), src = %src_column, dst = %dst_column, "derived lengths columnar");
    table.set_column(dst_column, Arc::new(lengths))
}
