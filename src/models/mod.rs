//! Concentration-mass relations and the model registry.
//!
//! Models are selected by name at configuration time through a static
//! registry, constructed once, then invoked per sample. There is no mutable
//! global state: the registry is a fixed table of constructors.

pub mod model;

pub use model::{ApplicabilityMask, ConcentrationModel, FixedC200c, ModelInfo};

use crate::error::ConvertError;

/// Parameters a model constructor may consume.
///
/// Parsed from configuration (CLI flags or a host pipeline's config
/// section) before any conversion runs.
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    /// Constant c200c for the fixed-concentration model.
    pub c200c: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        // High-mass clusters plateau near c200c ~ 4.
        ModelParams { c200c: 4.0 }
    }
}

type Constructor = fn(&ModelParams) -> Result<Box<dyn ConcentrationModel>, ConvertError>;

fn build_fixed_c200c(params: &ModelParams) -> Result<Box<dyn ConcentrationModel>, ConvertError> {
    Ok(Box::new(FixedC200c::new(params.c200c)?))
}

/// Name -> constructor table. Extend here when adding calibrated models.
static REGISTRY: &[(&str, Constructor)] = &[("fixedc200c", build_fixed_c200c)];

/// Names of all registered models.
pub fn supported_models() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Build the named concentration-mass model.
///
/// Matching is case-insensitive, like the reference configuration parser.
/// Fails with `UnsupportedModel` for unknown names.
pub fn select_model(
    name: &str,
    params: &ModelParams,
) -> Result<Box<dyn ConcentrationModel>, ConvertError> {
    let lowered = name.to_lowercase();
    for (registered, construct) in REGISTRY {
        if *registered == lowered {
            return construct(params);
        }
    }
    Err(ConvertError::UnsupportedModel {
        name: name.to_string(),
        supported: supported_models().join(", "),
    })
}
