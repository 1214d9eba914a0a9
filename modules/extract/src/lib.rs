//! Extraction stages: load a snapshot, check and project its columns,
//! rename them and write a delimited file.

use anyhow::Result;
use arrow::array::ArrayRef;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use etl_core::{EtlError, StageReport};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub mod mapping;
pub mod sanitize;

pub use mapping::{CellTransform, ColumnMap, StageSpec, ALL_STAGES, COMMIT_DETAILS, PULL_REQUESTS, REPOSITORIES, TASK_TYPES};

/// Run one extraction stage from `input` (parquet) to `output` (CSV).
pub fn run_extraction(spec: &StageSpec, input: &Path, output: &Path) -> Result<StageReport> {
    etl_core::require_file(input)?;
    info!(stage = spec.name, input = %input.display(), "loading snapshot");

    let table = snapshot_io::read_snapshot(input)?;
    let projected = project(spec, &table)?;

    etl_core::ensure_parent_dir(output)?;
    snapshot_io::export_batch_to_csv(&projected, output)?;
    info!(stage = spec.name, rows = projected.num_rows(), output = %output.display(), "stage written");

    Ok(StageReport { stage: spec.label, rows: projected.num_rows(), output: output.to_path_buf() })
}

/// Names of mapped source columns absent from `schema`, in mapping order.
pub fn missing_columns(spec: &StageSpec, schema: &Schema) -> Vec<String> {
    spec.source_columns()
        .filter(|name| schema.column_with_name(name).is_none())
        .map(str::to_string)
        .collect()
}

/// Select the mapped columns in mapping order, apply cell transforms and
/// rename each to its target. Row count and order are untouched.
pub fn project(spec: &StageSpec, table: &RecordBatch) -> Result<RecordBatch> {
    let schema = table.schema();
    let missing = missing_columns(spec, &schema);
    if !missing.is_empty() {
        return Err(EtlError::MissingColumns(missing).into());
    }

    let mut fields = Vec::with_capacity(spec.columns.len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(spec.columns.len());
    for map in spec.columns {
        let idx = schema.index_of(map.source)?;
        let source_field = schema.field(idx);
        let (field, column) = match map.transform {
            None => (source_field.clone().with_name(map.target), table.column(idx).clone()),
            Some(CellTransform::AsciiOnly) => (
                Field::new(map.target, DataType::Utf8, false),
                sanitize::clean_column(table.column(idx))?,
            ),
        };
        debug!(source = map.source, target = map.target, data_type = %field.data_type(), "projected column");
        fields.push(field);
        columns.push(column);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
