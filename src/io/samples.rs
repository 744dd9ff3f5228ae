//! CSV ingest of halo samples for batch conversion.
//!
//! Input schema: a header row containing `mass` (or `m`) and `redshift`
//! (or `z`) columns, in any order, extra columns ignored. Bad rows are
//! skipped but reported with their line numbers so a batch run never fails
//! silently on a single malformed line.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::HaloSample;
use crate::error::ConvertError;

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: usable samples plus per-row diagnostics.
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub samples: Vec<HaloSample>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Read halo samples from a CSV file.
pub fn read_samples(path: &Path) -> Result<SampleSet, ConvertError> {
    let file = File::open(path)
        .map_err(|e| ConvertError::io(format!("failed to open samples CSV '{}'", path.display()), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ConvertError::io("failed to read CSV headers", e))?
        .clone();

    let mass_col = find_column(&headers, &["mass", "m", "m1"]).ok_or_else(|| {
        ConvertError::io(
            format!("samples CSV '{}'", path.display()),
            "missing required column 'mass' (or 'm')",
        )
    })?;
    let z_col = find_column(&headers, &["redshift", "z"]).ok_or_else(|| {
        ConvertError::io(
            format!("samples CSV '{}'", path.display()),
            "missing required column 'redshift' (or 'z')",
        )
    })?;

    let mut samples = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, record) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        rows_read += 1;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("unreadable row: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, mass_col, z_col) {
            Ok(sample) => samples.push(sample),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    Ok(SampleSet {
        samples,
        row_errors,
        rows_read,
    })
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.contains(&h.to_lowercase().as_str()))
}

fn parse_row(record: &StringRecord, mass_col: usize, z_col: usize) -> Result<HaloSample, String> {
    let field = |col: usize, label: &str| -> Result<f64, String> {
        let raw = record
            .get(col)
            .ok_or_else(|| format!("missing {label} field"))?;
        raw.parse::<f64>()
            .map_err(|_| format!("{label} '{raw}' is not a number"))
    };

    let mass = field(mass_col, "mass")?;
    let redshift = field(z_col, "redshift")?;

    if !(mass > 0.0) {
        return Err(format!("mass must be positive, got {mass}"));
    }
    if redshift < 0.0 {
        return Err(format!("redshift must be non-negative, got {redshift}"));
    }

    Ok(HaloSample { mass, redshift })
}
