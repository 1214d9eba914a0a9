use anyhow::Result;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::path::Path;

const CHUNK: usize = 1_000;

/// Write a batch as a ZSTD-compressed parquet snapshot, `CHUNK` rows per row group.
pub fn export_batch_to_parquet(batch: &RecordBatch, out: &Path) -> Result<()> {
    etl_core::ensure_parent_dir(out)?;
    let file = std::fs::File::create(out)?;

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::ZSTD(Default::default()))
        .set_max_row_group_size(CHUNK)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;

    let mut offset = 0;
    while offset < batch.num_rows() {
        let len = CHUNK.min(batch.num_rows() - offset);
        writer.write(&batch.slice(offset, len))?;
        offset += len;
    }

    writer.close()?;
    Ok(())
}
