//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that
//! parses CLI arguments, runs the requested conversion, prints the summary,
//! and writes optional exports.

use clap::Parser;

use crate::cli::{BatchArgs, Cli, Command, ConcentrationArgs, ExportFormat, MassArgs};
use crate::convert;
use crate::domain::HaloSample;
use crate::error::ConvertError;
use crate::models::{ModelParams, select_model};

pub mod pipeline;

/// Entry point for the `hmass` binary.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Concentration(args) => handle_concentration(args),
        Command::Mass(args) => handle_mass(args),
        Command::Batch(args) => handle_batch(args),
    }
}

fn handle_concentration(args: ConcentrationArgs) -> Result<(), ConvertError> {
    let cosmo = args.cosmo.to_cosmology();
    let c2 = convert::convert_concentration(args.c1, args.z, &args.def1, &args.def2, cosmo.as_ref())?;

    print!(
        "{}",
        crate::report::format_concentration_summary(args.c1, c2, args.z, &args.def1, &args.def2)
    );
    Ok(())
}

fn handle_mass(args: MassArgs) -> Result<(), ConvertError> {
    let cosmo = args.cosmo.to_cosmology();
    let params = ModelParams {
        c200c: args.model.c200c,
    };
    let model = select_model(&args.model.model, &params)?;

    let def1 = args.def1.parse()?;
    let def2 = args.def2.parse()?;
    let sample = HaloSample {
        mass: args.m1,
        redshift: args.z,
    };
    let conversion = convert::convert_sample(&sample, &def1, &def2, model.as_ref(), cosmo.as_ref())?;

    print!(
        "{}",
        crate::report::format_mass_summary(&conversion, &args.def1, &args.def2, &args.model.model)
    );
    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), ConvertError> {
    let cosmo = args.cosmo.to_cosmology();
    let params = ModelParams {
        c200c: args.model.c200c,
    };

    let out = pipeline::run_batch(
        &args.input,
        &args.def1,
        &args.def2,
        &args.model.model,
        &params,
        cosmo.as_ref(),
    )?;

    print!(
        "{}",
        crate::report::format_batch_summary(
            &out.rows,
            &out.row_errors,
            out.rows_read,
            &args.def1,
            &args.def2,
            cosmo.as_ref(),
        )
    );

    if let Some(path) = &args.output {
        match args.format {
            ExportFormat::Csv => {
                crate::io::export::write_results_csv(path, &out.rows, args.log_mass)?
            }
            ExportFormat::Json => crate::io::export::write_results_json(
                path,
                &out.rows,
                &args.def1,
                &args.def2,
                args.log_mass,
            )?,
        }
        println!("wrote {} rows to {}", out.rows.len(), path.display());
    }

    Ok(())
}
