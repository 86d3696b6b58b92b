// src/table/load.rs
use anyhow::{bail, Context, Result};
use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
};
use std::{fs::File, io::Seek, path::Path, sync::Arc};
use tracing::debug;

use super::IndexedTable;

/// Which column of the file supplies the row labels.
#[derive(Debug, Clone)]
pub enum IndexColumn {
    /// Zero-based position in the header row.
    Position(usize),
    /// Header name.
    Name(String),
}

/// Read a comma-separated file with a header row into an [`IndexedTable`].
///
/// Column types are inferred from the data, so text columns stay text and
/// numeric columns come back as numbers. The file handle lives only as long
/// as the reader and is closed once every batch is in memory.
#[tracing::instrument(level = "info", skip(path, index), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P, index: IndexColumn) -> Result<IndexedTable> {
    let path = path.as_ref();
    let mut file =
        File::open(path).with_context(|| format!("failed to open CSV file {}", path.display()))?;

    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut file, None)
        .with_context(|| format!("inferring schema of {}", path.display()))?;
    file.rewind().context("rewinding after schema inference")?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .build(file)
        .context("creating CSV reader")?;

    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading CSV batches from {}", path.display()))?;
    let batch = concat_batches(&schema, &batches).context("concatenating CSV batches")?;

    let index_name = match index {
        IndexColumn::Position(p) => {
            let fields = schema.fields();
            if p >= fields.len() {
                bail!(
                    "index column position {p} out of range for {} columns",
                    fields.len()
                );
            }
            fields[p].name().clone()
        }
        IndexColumn::Name(name) => name,
    };

    debug!(
        rows = batch.num_rows(),
        cols = batch.num_columns(),
        index = %index_name,
        "loaded CSV"
    );
    IndexedTable::new(batch, &index_name)
}
