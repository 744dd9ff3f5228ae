//! Shared domain types.
//!
//! These types are intentionally lightweight and serializable so they can be:
//!
//! - passed around during conversion without copies mattering
//! - parsed from CLI flags or JSON configuration
//! - embedded in batch export rows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Reference density that an overdensity is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityRef {
    /// Mean matter density of the universe at the halo redshift.
    Mean,
    /// Critical density of the universe at the halo redshift.
    Crit,
}

impl DensityRef {
    /// Single-character suffix used in mass-definition tokens.
    pub fn suffix(self) -> char {
        match self {
            DensityRef::Mean => 'm',
            DensityRef::Crit => 'c',
        }
    }
}

/// A spherical-overdensity mass definition, e.g. `200m` or `500c`.
///
/// Immutable once parsed. The supported overdensity band mirrors the
/// reference implementation exactly: everything is accepted except values
/// strictly between 200 and 500. That check is an inequality, not a
/// whitelist, so e.g. `1000c` parses even though no concentration model may
/// support it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassDefinition {
    delta: f64,
    reference: DensityRef,
}

impl MassDefinition {
    /// Overdensity factor (e.g. 200.0).
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Reference density kind.
    pub fn reference(&self) -> DensityRef {
        self.reference
    }
}

impl FromStr for MassDefinition {
    type Err = ConvertError;

    /// Parse a `"<number><m|c>"` token.
    ///
    /// Fails with `InvalidMassDefinition` when the trailing character is not
    /// `m` or `c` (or the numeric prefix does not parse), and with
    /// `UnsupportedOverdensity` when the overdensity lies strictly inside
    /// (200, 500).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bad_token = || ConvertError::InvalidMassDefinition {
            token: token.to_string(),
        };

        let reference = match token.chars().last() {
            Some('m') => DensityRef::Mean,
            Some('c') => DensityRef::Crit,
            _ => return Err(bad_token()),
        };

        let prefix = &token[..token.len() - 1];
        let delta: f64 = prefix.parse().map_err(|_| bad_token())?;

        if 200.0 < delta && delta < 500.0 {
            return Err(ConvertError::UnsupportedOverdensity { delta });
        }

        Ok(MassDefinition { delta, reference })
    }
}

impl fmt::Display for MassDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.delta, self.reference.suffix())
    }
}

/// Present-day density parameters of a flat or non-flat LCDM-like cosmology.
///
/// Supplied by the caller per call; the converters keep no cosmology state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cosmology {
    pub omega_m: f64,
    pub omega_k: f64,
    pub omega_l: f64,
}

impl Cosmology {
    /// A flat cosmology: omega_k fixed to 1 - omega_m - omega_l.
    pub fn flat(omega_m: f64, omega_l: f64) -> Self {
        Cosmology {
            omega_m,
            omega_k: 1.0 - omega_m - omega_l,
            omega_l,
        }
    }

    /// Dimensionless Hubble parameter squared,
    /// `E(z)^2 = omega_m (1+z)^3 + omega_k (1+z)^2 + omega_l`.
    ///
    /// Not validated against z < -1; that region is unphysical and left to
    /// the caller.
    pub fn ez_squared(&self, z: f64) -> f64 {
        let a = 1.0 + z;
        self.omega_m * (a * a * a) + self.omega_k * (a * a) + self.omega_l
    }

    /// Mean matter density at redshift z in units of the present-day
    /// critical density, `omega_m (1+z)^3`.
    pub fn mean_density(&self, z: f64) -> f64 {
        let a = 1.0 + z;
        self.omega_m * (a * a * a)
    }
}

/// One halo to convert: transient, only ever a function argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaloSample {
    pub mass: f64,
    pub redshift: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(token: &str) -> Result<MassDefinition, ConvertError> {
        token.parse()
    }

    #[test]
    fn parse_mean_and_crit_tokens() {
        let d = parse("200m").unwrap();
        assert_eq!(d.delta(), 200.0);
        assert_eq!(d.reference(), DensityRef::Mean);

        let d = parse("500c").unwrap();
        assert_eq!(d.delta(), 500.0);
        assert_eq!(d.reference(), DensityRef::Crit);
    }

    #[test]
    fn parse_rejects_open_band() {
        for token in ["350m", "201c", "499.9m"] {
            match parse(token) {
                Err(ConvertError::UnsupportedOverdensity { delta }) => {
                    assert!(200.0 < delta && delta < 500.0)
                }
                other => panic!("expected UnsupportedOverdensity for {token}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_rejects_bad_suffix_and_prefix() {
        for token in ["200x", "200", "m", "", "abcm"] {
            assert!(matches!(
                parse(token),
                Err(ConvertError::InvalidMassDefinition { .. })
            ));
        }
    }

    #[test]
    fn parse_boundary_carried_over_verbatim() {
        // The band check is an inequality, not a whitelist: these all parse.
        for token in ["1000c", "50m", "500m", "200c"] {
            assert!(parse(token).is_ok(), "{token} should parse");
        }
    }

    #[test]
    fn display_round_trips_token() {
        let d: MassDefinition = "200m".parse().unwrap();
        assert_eq!(d.to_string(), "200m");
    }

    #[test]
    fn ez_squared_is_one_today_for_flat_cosmology() {
        let cosmo = Cosmology::flat(0.3, 0.7);
        assert_eq!(cosmo.ez_squared(0.0), 1.0);
    }

    #[test]
    fn ez_squared_reference_value() {
        let cosmo = Cosmology {
            omega_m: 0.3,
            omega_k: 0.0,
            omega_l: 0.7,
        };
        let e2 = cosmo.ez_squared(0.5);
        assert!((e2 - 1.7125).abs() < 1e-12, "E(0.5)^2 = {e2}");
    }
}
