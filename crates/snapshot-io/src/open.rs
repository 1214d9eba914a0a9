use anyhow::Result;
use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Load a whole parquet snapshot into one in-memory batch, row order preserved.
///
/// Reader and decode failures are returned as-is.
pub fn read_snapshot(path: &Path) -> Result<RecordBatch> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), batches = batches.len(), "read parquet snapshot");
    Ok(concat_batches(&schema, &batches)?)
}
