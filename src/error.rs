//! Error taxonomy for the conversion library.
//!
//! Every failure is detected at the point it occurs and propagated to the
//! caller; the core never logs or swallows errors. Presentation (messages,
//! process exit codes) is handled at the binary boundary.

use thiserror::Error;

/// All errors the conversion core can produce.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed mass-definition token (bad trailing character or numeric prefix).
    #[error("'{token}' is not a valid mass definition; expected \"<number><m|c>\", e.g. \"200m\" or \"500c\"")]
    InvalidMassDefinition { token: String },

    /// Parsed overdensity falls in the unsupported open band (200, 500).
    #[error("mass definition with delta={delta} is not supported; overdensities strictly between 200 and 500 are rejected")]
    UnsupportedOverdensity { delta: f64 },

    /// A mean/crit density conversion needs cosmology parameters, but none were given.
    #[error("cosmology parameters (omega_m, omega_k, omega_l) are required to convert between mean-density and critical-density mass definitions")]
    CosmologyRequired,

    /// Unknown concentration-mass model name requested at configuration time.
    #[error("'{name}' is not a supported concentration-mass model (supported: {supported})")]
    UnsupportedModel { name: String, supported: String },

    /// A kernel input is outside its mathematical domain.
    #[error("out-of-domain input: {reason}")]
    Domain { reason: String },

    /// File or stream I/O failure in the batch front-end.
    #[error("{context}: {message}")]
    Io { context: String, message: String },

    /// An invariant that the two-valued enums should make unreachable.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl ConvertError {
    pub fn domain(reason: impl Into<String>) -> Self {
        ConvertError::Domain {
            reason: reason.into(),
        }
    }

    pub fn io(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ConvertError::Io {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code for the `hmass` binary.
    ///
    /// 2 = bad input (tokens, files), 3 = missing configuration, 4 = math
    /// domain or internal failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::InvalidMassDefinition { .. }
            | ConvertError::UnsupportedOverdensity { .. }
            | ConvertError::Io { .. } => 2,
            ConvertError::CosmologyRequired | ConvertError::UnsupportedModel { .. } => 3,
            ConvertError::Domain { .. } | ConvertError::Internal(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_class() {
        let bad_token = ConvertError::InvalidMassDefinition {
            token: "200x".into(),
        };
        assert_eq!(bad_token.exit_code(), 2);
        assert_eq!(ConvertError::CosmologyRequired.exit_code(), 3);
        assert_eq!(ConvertError::domain("f <= 0").exit_code(), 4);
    }

    #[test]
    fn messages_name_the_offender() {
        let err = ConvertError::UnsupportedOverdensity { delta: 350.0 };
        assert!(err.to_string().contains("350"));
    }
}
