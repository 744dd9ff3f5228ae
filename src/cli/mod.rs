//! Command-line parsing for the halo mass converter.
//!
//! Argument parsing and command dispatch stay separate from the
//! conversion math.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Cosmology;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "hmass",
    version,
    about = "Convert halo masses and concentrations between spherical-overdensity definitions (NFW, Hu & Kravtsov 2002)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a single concentration between mass definitions.
    Concentration(ConcentrationArgs),
    /// Convert a single mass using a concentration-mass model.
    Mass(MassArgs),
    /// Convert a CSV of (mass, redshift) samples.
    Batch(BatchArgs),
}

/// Cosmology flags shared by all subcommands.
///
/// A cosmology is only required when converting between mean-density and
/// critical-density definitions. When `--omega-k` is omitted, curvature
/// closes the budget: omega_k = 1 - omega_m - omega_l.
#[derive(Debug, Parser, Clone, Copy)]
pub struct CosmoArgs {
    /// Present-day matter density parameter.
    #[arg(long)]
    pub omega_m: Option<f64>,

    /// Present-day dark-energy density parameter.
    #[arg(long)]
    pub omega_l: Option<f64>,

    /// Present-day curvature density parameter.
    #[arg(long)]
    pub omega_k: Option<f64>,
}

impl CosmoArgs {
    /// Build a cosmology if both omega_m and omega_l were given.
    pub fn to_cosmology(self) -> Option<Cosmology> {
        match (self.omega_m, self.omega_l) {
            (Some(omega_m), Some(omega_l)) => Some(Cosmology {
                omega_m,
                omega_k: self.omega_k.unwrap_or(1.0 - omega_m - omega_l),
                omega_l,
            }),
            _ => None,
        }
    }
}

/// Options for a single concentration conversion.
#[derive(Debug, Parser)]
pub struct ConcentrationArgs {
    /// Input concentration, in the `--from` definition.
    #[arg(long)]
    pub c1: f64,

    /// Halo redshift.
    #[arg(short, long, default_value_t = 0.0)]
    pub z: f64,

    /// Input mass definition, e.g. 200m or 500c.
    #[arg(long = "from", value_name = "MDEF")]
    pub def1: String,

    /// Output mass definition.
    #[arg(long = "to", value_name = "MDEF")]
    pub def2: String,

    #[command(flatten)]
    pub cosmo: CosmoArgs,
}

/// Options for a single mass conversion.
#[derive(Debug, Parser)]
pub struct MassArgs {
    /// Input mass, in the `--from` definition (e.g. 1e15).
    #[arg(long)]
    pub m1: f64,

    /// Halo redshift.
    #[arg(short, long, default_value_t = 0.0)]
    pub z: f64,

    /// Input mass definition, e.g. 200m or 500c.
    #[arg(long = "from", value_name = "MDEF")]
    pub def1: String,

    /// Output mass definition.
    #[arg(long = "to", value_name = "MDEF")]
    pub def2: String,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub cosmo: CosmoArgs,
}

/// Concentration-mass model selection.
#[derive(Debug, Parser, Clone)]
pub struct ModelArgs {
    /// Concentration-mass model name.
    #[arg(long, default_value = "fixedc200c")]
    pub model: String,

    /// Constant c200c for the fixedc200c model.
    #[arg(long, default_value_t = 4.0)]
    pub c200c: f64,
}

/// Export format for batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Options for batch conversion.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Input CSV with `mass` and `redshift` columns.
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,

    /// Input mass definition.
    #[arg(long = "from", value_name = "MDEF")]
    pub def1: String,

    /// Output mass definition.
    #[arg(long = "to", value_name = "MDEF")]
    pub def2: String,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub cosmo: CosmoArgs,

    /// Write converted rows to this file.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format for `--output`.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write masses as log10 values.
    #[arg(long)]
    pub log_mass: bool,
}
