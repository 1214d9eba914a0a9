use anyhow::Result;
use csv::StringRecord;
use etl_core::EtlError;
use std::path::Path;

use crate::UTF8_BOM;

/// A comma-separated file held in memory as text cells.
///
/// Produced by reading back a stage output; every value stays a string so
/// that key comparison is exact text equality.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl DelimitedTable {
    /// Read a header + records file. A leading UTF-8 BOM is skipped.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let mut rdr = csv::Reader::from_reader(body);
        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        Ok(DelimitedTable { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of `name`, or [`EtlError::KeyLookup`] when absent.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.find_column(name)
            .ok_or_else(|| EtlError::KeyLookup(name.to_string()).into())
    }
}
