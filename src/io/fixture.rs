//! Reader for the whitespace-delimited conversion truth tables.
//!
//! Format: two header lines to skip, then whitespace-separated columns
//!
//! `m1  c1  z  omega_m  omega_l  c2_truth  m2_truth`
//!
//! These files hold conversions computed with an exact NFW inversion and
//! are used to bound the fitting function's residual in tests.

use std::path::Path;

use crate::domain::Cosmology;
use crate::error::ConvertError;

/// One truth-table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureRow {
    pub m1: f64,
    pub c1: f64,
    pub z: f64,
    pub omega_m: f64,
    pub omega_l: f64,
    pub c2_truth: f64,
    pub m2_truth: f64,
}

impl FixtureRow {
    /// Cosmology for this row; curvature closes the budget.
    pub fn cosmology(&self) -> Cosmology {
        Cosmology {
            omega_m: self.omega_m,
            omega_k: 1.0 - self.omega_m - self.omega_l,
            omega_l: self.omega_l,
        }
    }
}

/// Parse fixture content already held in memory.
pub fn parse_fixture(content: &str) -> Result<Vec<FixtureRow>, ConvertError> {
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(2) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<f64> = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    ConvertError::io(
                        format!("fixture line {}", idx + 1),
                        format!("'{field}' is not a number"),
                    )
                })
            })
            .collect::<Result<_, _>>()?;

        if fields.len() != 7 {
            return Err(ConvertError::io(
                format!("fixture line {}", idx + 1),
                format!("expected 7 columns, found {}", fields.len()),
            ));
        }

        rows.push(FixtureRow {
            m1: fields[0],
            c1: fields[1],
            z: fields[2],
            omega_m: fields[3],
            omega_l: fields[4],
            c2_truth: fields[5],
            m2_truth: fields[6],
        });
    }

    Ok(rows)
}

/// Read a truth table from disk.
pub fn read_fixture(path: &Path) -> Result<Vec<FixtureRow>, ConvertError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConvertError::io(format!("failed to read fixture '{}'", path.display()), e))?;
    parse_fixture(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Computed with an exact NFW inversion
# M1\tc1\tz\tOmM\tOmL\tc2truth\tm2truth
1.0e+14  4.0  0.20  0.30  0.70  4.9  1.15e+14
2.5e+14  3.0  0.50  0.25  0.75  3.8  2.90e+14
";

    #[test]
    fn parses_rows_after_two_header_lines() {
        let rows = parse_fixture(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].m1, 1.0e14);
        assert_eq!(rows[1].omega_m, 0.25);
        assert_eq!(rows[1].m2_truth, 2.90e14);
    }

    #[test]
    fn cosmology_closes_the_density_budget() {
        let rows = parse_fixture(SAMPLE).unwrap();
        let cosmo = rows[1].cosmology();
        assert!((cosmo.omega_k - 0.0).abs() < 1e-12);
        assert!((cosmo.omega_m + cosmo.omega_k + cosmo.omega_l - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let bad = "h1\nh2\n1.0 2.0 3.0\n";
        assert!(matches!(parse_fixture(bad), Err(ConvertError::Io { .. })));
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let bad = "h1\nh2\n1.0 2.0 x 0.3 0.7 4.0 1.0e14\n";
        assert!(matches!(parse_fixture(bad), Err(ConvertError::Io { .. })));
    }
}
