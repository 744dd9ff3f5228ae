//! Export converted batches to CSV or JSON.
//!
//! Exports are meant to be easy to consume in spreadsheets or downstream
//! pipeline stages. Masses can optionally be written as log10 values, which
//! is how some host pipelines store them.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::convert::MassConversion;
use crate::error::ConvertError;

/// Write converted rows to CSV.
pub fn write_results_csv(
    path: &Path,
    rows: &[MassConversion],
    log_mass: bool,
) -> Result<(), ConvertError> {
    let mut file = File::create(path)
        .map_err(|e| ConvertError::io(format!("failed to create export CSV '{}'", path.display()), e))?;

    let mass_label = if log_mass { "log10_m" } else { "m" };
    writeln!(file, "{mass_label}1,redshift,c1,c2,{mass_label}2")
        .map_err(|e| ConvertError::io("failed to write export CSV header", e))?;

    for row in rows {
        let (m1, m2) = if log_mass {
            (row.m1.log10(), row.m2.log10())
        } else {
            (row.m1, row.m2)
        };
        writeln!(
            file,
            "{m1:.10e},{},{:.10},{:.10},{m2:.10e}",
            row.redshift, row.c1, row.c2
        )
        .map_err(|e| ConvertError::io("failed to write export CSV row", e))?;
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    tool: &'a str,
    def1: &'a str,
    def2: &'a str,
    log_mass: bool,
    rows: Vec<MassConversion>,
}

/// Write converted rows to JSON, with the run's definitions as metadata.
pub fn write_results_json(
    path: &Path,
    rows: &[MassConversion],
    def1: &str,
    def2: &str,
    log_mass: bool,
) -> Result<(), ConvertError> {
    let rows = if log_mass {
        rows.iter()
            .map(|r| MassConversion {
                m1: r.m1.log10(),
                m2: r.m2.log10(),
                ..*r
            })
            .collect()
    } else {
        rows.to_vec()
    };

    let export = JsonExport {
        tool: "hmass",
        def1,
        def2,
        log_mass,
        rows,
    };

    let file = File::create(path)
        .map_err(|e| ConvertError::io(format!("failed to create export JSON '{}'", path.display()), e))?;
    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| ConvertError::io("failed to serialize export JSON", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<MassConversion> {
        vec![MassConversion {
            m1: 1e14,
            redshift: 0.3,
            c1: 4.0,
            c2: 4.9,
            m2: 1.2e14,
        }]
    }

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hmass_export_{tag}_{}.out", std::process::id()))
    }

    #[test]
    fn csv_export_linear_mass() {
        let path = temp_path("csv");
        write_results_csv(&path, &rows(), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(content.starts_with("m1,redshift,c1,c2,m2\n"));
        assert!(content.contains("0.3"));
    }

    #[test]
    fn csv_export_log_mass_header() {
        let path = temp_path("csvlog");
        write_results_csv(&path, &rows(), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(content.starts_with("log10_m1,redshift,c1,c2,log10_m2\n"));
        assert!(content.contains("1.4000000000e1"), "log10(1e14) = 14: {content}");
    }

    #[test]
    fn json_export_round_trips() {
        let path = temp_path("json");
        write_results_json(&path, &rows(), "200m", "500c", false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["def1"], "200m");
        assert_eq!(value["rows"][0]["c2"], 4.9);
    }
}
