use anyhow::Result;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Leading marker spreadsheet tools use to detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize a batch as comma-separated text: BOM, header row from the schema
/// field names, then one record per row. Nulls become empty fields.
pub fn export_batch_to_csv(batch: &RecordBatch, out: &Path) -> Result<()> {
    let schema = batch.schema();
    let headers: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();

    let options = FormatOptions::default();
    let formatters = batch
        .columns()
        .iter()
        .map(|c| ArrayFormatter::try_new(c.as_ref(), &options))
        .collect::<Result<Vec<_>, _>>()?;

    let rows = (0..batch.num_rows())
        .map(|row| formatters.iter().map(move |f| f.value(row).to_string()));
    export_rows_to_csv(&headers, rows, out)
}

/// Serialize already-rendered rows with the same layout as [`export_batch_to_csv`].
pub fn export_rows_to_csv<I, R, S>(headers: &[&str], rows: I, out: &Path) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut file = BufWriter::new(File::create(out)?);
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
