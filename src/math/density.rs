//! Ratio of reference densities (mean matter vs critical) at a redshift.
//!
//! Keeping the mean/crit bookkeeping here keeps the case analysis out of the
//! functions doing the science.

use crate::domain::{Cosmology, DensityRef};
use crate::error::ConvertError;

/// Compute `ρ(to) / ρ(from)` at redshift z.
///
/// Equal references need no cosmology and return exactly 1.0. Differing
/// references use
///
/// `ρ_mean(z) / ρ_crit(z) = Ωm (1+z)³ / E(z)²`
///
/// (both densities in units of the present-day critical density). Fails with
/// `CosmologyRequired` when the references differ and `cosmo` is `None`.
pub fn density_ratio(
    from: DensityRef,
    to: DensityRef,
    z: f64,
    cosmo: Option<&Cosmology>,
) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(1.0);
    }

    let cosmo = cosmo.ok_or(ConvertError::CosmologyRequired)?;

    match (from, to) {
        (DensityRef::Crit, DensityRef::Mean) => Ok(cosmo.mean_density(z) / cosmo.ez_squared(z)),
        (DensityRef::Mean, DensityRef::Crit) => Ok(cosmo.ez_squared(z) / cosmo.mean_density(z)),
        // Equal pairs were handled above; the enum has no other values.
        _ => Err(ConvertError::Internal(format!(
            "unreachable density reference pair {from:?}/{to:?}"
        ))),
    }
}
