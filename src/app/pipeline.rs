//! Batch pipeline: ingest -> model construction -> parallel conversion.
//!
//! Kept separate from argument handling so the whole batch path is
//! exercisable from tests without a process boundary.

use std::path::Path;

use crate::convert::{MassConversion, convert_mass_batch};
use crate::domain::Cosmology;
use crate::error::ConvertError;
use crate::io::samples::{self, RowError};
use crate::models::{ModelParams, select_model};

/// All computed outputs of one batch run.
#[derive(Debug)]
pub struct BatchOutput {
    pub rows: Vec<MassConversion>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Run the batch conversion pipeline over a samples CSV.
pub fn run_batch(
    input: &Path,
    def1: &str,
    def2: &str,
    model_name: &str,
    params: &ModelParams,
    cosmo: Option<&Cosmology>,
) -> Result<BatchOutput, ConvertError> {
    // Model construction validates the name and parameters up front, before
    // any file is touched.
    let model = select_model(model_name, params)?;

    let set = samples::read_samples(input)?;
    let rows = convert_mass_batch(&set.samples, def1, def2, model.as_ref(), cosmo)?;

    Ok(BatchOutput {
        rows,
        row_errors: set.row_errors,
        rows_read: set.rows_read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_mass;
    use crate::models::FixedC200c;

    fn write_temp(content: &str) -> std::path::PathBuf {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("hmass_batch_{}_{n}.csv", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn batch_run_matches_scalar_conversions() {
        let path = write_temp("mass,redshift\n1e14,0.2\n5e14,0.6\n");
        let cosmo = Cosmology {
            omega_m: 0.3,
            omega_k: 0.0,
            omega_l: 0.7,
        };
        let out = run_batch(
            &path,
            "200m",
            "500c",
            "fixedc200c",
            &ModelParams::default(),
            Some(&cosmo),
        )
        .unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(out.rows.len(), 2);
        let model = FixedC200c::new(4.0).unwrap();
        let expect = convert_mass(1e14, 0.2, "200m", "500c", &model, Some(&cosmo)).unwrap();
        assert_eq!(out.rows[0].m2, expect);
    }

    #[test]
    fn unknown_model_fails_before_reading_input() {
        let missing = std::path::Path::new("/nonexistent/samples.csv");
        let err = run_batch(
            missing,
            "200m",
            "500c",
            "child18",
            &ModelParams::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedModel { .. }));
    }
}
