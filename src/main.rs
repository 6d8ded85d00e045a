//! Command-line driver: reads the configured CSV files, sorts every action
//! and prints the report on stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};

use electre_tri::adapters::{writer_for, CsvProblemSource};
use electre_tri::config::{AppConfig, ConfigError};
use electre_tri::domain::electre::{ElectreError, ElectreTri};
use electre_tri::ports::{ProblemSource, ReportError, SourceError};
use electre_tri::telemetry::init_tracing;

/// Any fault that ends a run.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sorting(#[from] ElectreError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging);

    let sorter = ElectreTri::with_threshold(
        config
            .sorting
            .cutting_threshold()
            .map_err(ConfigError::from)?,
    );
    let problem = CsvProblemSource::from_config(&config.input).load()?;
    let outcome = sorter.sort(&problem)?;

    let writer = writer_for(&config.output);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write(&outcome, &mut out)?;
    out.flush().map_err(ReportError::from)?;

    info!(
        actions = outcome.rankings.len(),
        lambda = sorter.cutting_threshold().value(),
        "report written"
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "electre-tri failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
