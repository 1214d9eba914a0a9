//! Table I/O for the pipeline: parquet snapshots in, BOM-prefixed CSV out.

pub mod arrow_schemas;
mod delimited;
mod export_csv;
mod export_parquet;
mod open;

pub use delimited::DelimitedTable;
pub use export_csv::{export_batch_to_csv, export_rows_to_csv, UTF8_BOM};
pub use export_parquet::export_batch_to_parquet;
pub use open::read_snapshot;
