//! Plain-text summaries for the CLI.
//!
//! Formatting lives here so the conversion code stays clean and the output
//! shape is localized in one place.

use crate::convert::MassConversion;
use crate::domain::Cosmology;
use crate::io::samples::RowError;

/// Summary of a single concentration conversion.
pub fn format_concentration_summary(
    c1: f64,
    c2: f64,
    z: f64,
    def1: &str,
    def2: &str,
) -> String {
    let mut out = String::new();
    out.push_str("=== hmass - concentration conversion ===\n");
    out.push_str(&format!("c({def1})  = {c1}\n"));
    out.push_str(&format!("z        = {z}\n"));
    out.push_str(&format!("c({def2})  = {c2:.6}\n"));
    out
}

/// Summary of a single mass conversion, including the intermediates.
pub fn format_mass_summary(
    conversion: &MassConversion,
    def1: &str,
    def2: &str,
    model_name: &str,
) -> String {
    let mut out = String::new();
    out.push_str("=== hmass - mass conversion ===\n");
    out.push_str(&format!("model    = {model_name}\n"));
    out.push_str(&format!("m({def1})  = {:e}\n", conversion.m1));
    out.push_str(&format!("z        = {}\n", conversion.redshift));
    out.push_str(&format!("c({def1})  = {:.6}\n", conversion.c1));
    out.push_str(&format!("c({def2})  = {:.6}\n", conversion.c2));
    out.push_str(&format!("m({def2})  = {:e}\n", conversion.m2));
    out
}

/// Summary of a batch run: counts, cosmology, and row diagnostics.
pub fn format_batch_summary(
    rows: &[MassConversion],
    row_errors: &[RowError],
    rows_read: usize,
    def1: &str,
    def2: &str,
    cosmo: Option<&Cosmology>,
) -> String {
    let mut out = String::new();
    out.push_str("=== hmass - batch mass conversion ===\n");
    out.push_str(&format!("conversion: {def1} -> {def2}\n"));
    match cosmo {
        Some(c) => out.push_str(&format!(
            "cosmology : omega_m={} omega_k={} omega_l={}\n",
            c.omega_m, c.omega_k, c.omega_l
        )),
        None => out.push_str("cosmology : none\n"),
    }
    out.push_str(&format!(
        "samples   : {} read, {} converted, {} skipped\n",
        rows_read,
        rows.len(),
        row_errors.len()
    ));

    for err in row_errors {
        out.push_str(&format!("  line {}: {}\n", err.line, err.message));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_summary_lists_row_errors() {
        let errors = vec![RowError {
            line: 3,
            message: "mass must be positive, got -1".into(),
        }];
        let out = format_batch_summary(&[], &errors, 1, "200m", "500c", None);
        assert!(out.contains("200m -> 500c"));
        assert!(out.contains("line 3"));
        assert!(out.contains("cosmology : none"));
    }
}
