//! The concentration-mass capability and its concrete variants.

use std::fmt;

use crate::convert;
use crate::domain::{Cosmology, MassDefinition};
use crate::error::ConvertError;

/// Mass/redshift range a model was calibrated for. `None` bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApplicabilityMask {
    pub mass_min: Option<f64>,
    pub mass_max: Option<f64>,
    pub z_min: Option<f64>,
    pub z_max: Option<f64>,
}

impl ApplicabilityMask {
    /// Whether a (mass, redshift) sample lies inside the calibrated range.
    pub fn contains(&self, mass: f64, z: f64) -> bool {
        self.mass_min.is_none_or(|lo| mass >= lo)
            && self.mass_max.is_none_or(|hi| mass <= hi)
            && self.z_min.is_none_or(|lo| z >= lo)
            && self.z_max.is_none_or(|hi| z <= hi)
    }
}

/// Descriptive metadata carried by every model.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: &'static str,
    /// Mass definition the relation is natively calibrated in.
    pub native_mdef: MassDefinition,
    pub mask: Option<ApplicabilityMask>,
    pub note: &'static str,
}

/// A concentration-mass relation.
///
/// One behavior: given a halo mass and redshift, produce the concentration
/// in the requested mass definition. Implementations are constructed once
/// (via the registry) and never mutated afterwards, so they are shared
/// freely across threads during batch conversion.
pub trait ConcentrationModel: Send + Sync + fmt::Debug {
    fn info(&self) -> &ModelInfo;

    /// Concentration of a halo of mass `mass` (in `mdef`) at redshift `z`,
    /// returned in that same `mdef`.
    fn concentration(
        &self,
        mass: f64,
        z: f64,
        mdef: &MassDefinition,
        cosmo: Option<&Cosmology>,
    ) -> Result<f64, ConvertError>;
}

/// Constant-concentration model: c200c fixed regardless of mass or redshift.
///
/// For high-mass clusters the concentration-mass relation plateaus near
/// c200c ~ 4, so a constant is a usable approximation there. The stored
/// value is defined at 200-critical and converted to the requested
/// definition on every call.
#[derive(Debug)]
pub struct FixedC200c {
    c200c: f64,
    info: ModelInfo,
}

impl FixedC200c {
    pub fn new(c200c: f64) -> Result<Self, ConvertError> {
        if !(c200c > 0.0) {
            return Err(ConvertError::domain(format!(
                "fixedc200c requires a positive concentration, got {c200c}"
            )));
        }
        let native_mdef: MassDefinition = "200c"
            .parse()
            .map_err(|e| ConvertError::Internal(format!("native mass definition: {e}")))?;
        Ok(FixedC200c {
            c200c,
            info: ModelInfo {
                name: "fixedc200c",
                native_mdef,
                mask: None,
                note: "Approximation for high mass clusters",
            },
        })
    }

    pub fn c200c(&self) -> f64 {
        self.c200c
    }
}

impl ConcentrationModel for FixedC200c {
    fn info(&self) -> &ModelInfo {
        &self.info
    }

    fn concentration(
        &self,
        _mass: f64,
        z: f64,
        mdef: &MassDefinition,
        cosmo: Option<&Cosmology>,
    ) -> Result<f64, ConvertError> {
        // Mass is deliberately ignored: the relation is flat by construction.
        convert::convert_concentration_between(self.c200c, z, &self.info.native_mdef, mdef, cosmo)
    }
}

impl fmt::Display for FixedC200c {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Concentration-mass relation '{}'", self.info.name)?;
        writeln!(f, "Defined for mass definition: {}", self.info.native_mdef)?;
        writeln!(f, "{}", self.info.note)?;
        write!(f, "c200c = {}", self.c200c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosmo() -> Cosmology {
        Cosmology {
            omega_m: 0.3,
            omega_k: 0.0,
            omega_l: 0.7,
        }
    }

    #[test]
    fn native_definition_returns_near_constant() {
        // Same-definition conversion round-trips through the approximate
        // inverse, so the result is close to (not exactly) the constant.
        let model = FixedC200c::new(4.0).unwrap();
        let mdef: MassDefinition = "200c".parse().unwrap();
        let c = model.concentration(1e15, 0.5, &mdef, None).unwrap();
        assert!((c - 4.0).abs() / 4.0 < 5e-3, "c = {c}");
    }

    #[test]
    fn ignores_mass_and_redshift_dependence_in_native_def() {
        let model = FixedC200c::new(4.0).unwrap();
        let mdef: MassDefinition = "200c".parse().unwrap();
        let a = model.concentration(1e13, 0.0, &mdef, None).unwrap();
        let b = model.concentration(5e15, 1.0, &mdef, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cross_definition_requires_cosmology() {
        let model = FixedC200c::new(4.0).unwrap();
        let mdef: MassDefinition = "200m".parse().unwrap();
        assert!(matches!(
            model.concentration(1e15, 0.5, &mdef, None),
            Err(ConvertError::CosmologyRequired)
        ));
        let c = model
            .concentration(1e15, 0.5, &mdef, Some(&cosmo()))
            .unwrap();
        assert!(c > 4.0, "c200m should exceed c200c at z=0.5, got {c}");
    }

    #[test]
    fn mask_bounds_are_half_open_when_absent() {
        let mask = ApplicabilityMask {
            mass_min: Some(1e14),
            ..Default::default()
        };
        assert!(mask.contains(1e15, 10.0));
        assert!(!mask.contains(1e13, 0.0));
    }
}
