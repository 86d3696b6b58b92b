// src/table/mod.rs
pub mod derive;
pub mod load;

pub use load::{load_csv, IndexColumn};

use anyhow::{anyhow, bail, Context, Result};
use arrow::{
    array::{Array, ArrayRef, Int64Array, StringArray},
    compute::cast,
    datatypes::{DataType, Field, FieldRef, Schema},
    record_batch::RecordBatch,
    util::pretty::pretty_format_batches,
};
use std::{collections::HashMap, sync::Arc};

/// An in-memory table whose rows are addressable by the values of a
/// designated index column.
///
/// Columns are Arrow arrays, so "mutating" the table means rebuilding the
/// underlying batch with the affected column swapped out. The index column
/// itself is never replaced, which keeps the label → position map valid for
/// the table's lifetime.
#[derive(Debug, Clone)]
pub struct IndexedTable {
    batch: RecordBatch,
    index_column: String,
    /// Row labels in storage order.
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl IndexedTable {
    /// Wrap `batch`, using `index_column` as the source of row labels.
    /// Labels must be unique; a duplicate would make label-aligned column
    /// assignment ambiguous.
    pub fn new(batch: RecordBatch, index_column: &str) -> Result<Self> {
        let idx = batch
            .schema()
            .index_of(index_column)
            .with_context(|| format!("index column {index_column:?} not present in table"))?;

        let labels = stringify_labels(batch.column(idx))?;
        let mut positions = HashMap::with_capacity(labels.len());
        for (pos, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), pos).is_some() {
                bail!("duplicate row label {label:?} in index column {index_column:?}");
            }
        }

        Ok(Self {
            batch,
            index_column: index_column.to_string(),
            labels,
            positions,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn index_column(&self) -> &str {
        &self.index_column
    }

    /// Row labels, in storage order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Storage position of the row labelled `label`.
    pub fn position_of(&self, label: &str) -> Result<usize> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("no row labelled {label:?}"))
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Borrow a text column by name.
    pub fn str_column(&self, name: &str) -> Result<&StringArray> {
        self.column(name)?
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| anyhow!("column {name:?} is not a text column"))
    }

    /// Borrow an integer column by name.
    pub fn i64_column(&self, name: &str) -> Result<&Int64Array> {
        self.column(name)?
            .as_any()
            .downcast_ref::<Int64Array>()
            .ok_or_else(|| anyhow!("column {name:?} is not an integer column"))
    }

    /// The text value at (`label`, `column`), `None` for a null cell.
    pub fn str_value(&self, label: &str, column: &str) -> Result<Option<&str>> {
        let pos = self.position_of(label)?;
        let col = self.str_column(column)?;
        Ok(if col.is_null(pos) {
            None
        } else {
            Some(col.value(pos))
        })
    }

    /// Store `array` under `name`, replacing the column if it already exists
    /// and appending it otherwise.
    pub fn set_column(&mut self, name: &str, array: ArrayRef) -> Result<()> {
        if name == self.index_column {
            bail!("cannot overwrite index column {name:?}");
        }
        if array.len() != self.batch.num_rows() {
            bail!(
                "column {name:?} has {} values but the table has {} rows",
                array.len(),
                self.batch.num_rows()
            );
        }

        let schema = self.batch.schema();
        let field = Arc::new(Field::new(name, array.data_type().clone(), true));

        let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
        let mut columns: Vec<ArrayRef> = self.batch.columns().to_vec();
        match schema.index_of(name) {
            Ok(i) => {
                fields[i] = field;
                columns[i] = array;
            }
            Err(_) => {
                fields.push(field);
                columns.push(array);
            }
        }

        self.batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
            .with_context(|| format!("rebuilding table with column {name:?}"))?;
        Ok(())
    }

    /// Column-aligned rendering of the whole table, row labels included.
    pub fn render(&self) -> Result<String> {
        let rendered = pretty_format_batches(std::slice::from_ref(&self.batch))
            .context("formatting table for display")?;
        Ok(rendered.to_string())
    }

    fn column(&self, name: &str) -> Result<&ArrayRef> {
        let idx = self
            .batch
            .schema()
            .index_of(name)
            .with_context(|| format!("no column named {name:?}"))?;
        Ok(self.batch.column(idx))
    }
}

/// Stringify an index column of any castable type into row labels.
fn stringify_labels(column: &ArrayRef) -> Result<Vec<String>> {
    let as_text = cast(column.as_ref(), &DataType::Utf8).context("casting index column to text")?;
    let arr = as_text
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| anyhow!("index column did not cast to text"))?;

    let mut labels = Vec::with_capacity(arr.len());
    for i in 0..arr.len() {
        if arr.is_null(i) {
            bail!("null value in index column at row {i}");
        }
        labels.push(arr.value(i).to_string());
    }
    Ok(labels)
}
