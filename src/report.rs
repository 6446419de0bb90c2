use crate::training::{Package, Training, TrainingError};
use std::io::{self, Write};
use thiserror::Error;

/// How each workout summary is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed human-readable template.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Outcome of a batch of packages.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    pub failures: Vec<PackageFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A package that was skipped, keyed by its textual form.
#[derive(Debug)]
pub struct PackageFailure {
    pub input: String,
    pub error: TrainingError,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Training(#[from] TrainingError),
}

/// Print a single workout summary to stdout.
pub fn show_training(training: &impl Training) -> Result<(), TrainingError> {
    let info = training.show_training_info()?;
    println!("{}", info.get_message());
    Ok(())
}

/// Write one summary line for `training` in the requested format.
///
/// Nothing is written when the workout cannot produce its summary.
pub fn write_summary<W: Write>(
    writer: &mut W,
    training: &impl Training,
    format: OutputFormat,
) -> Result<(), ReportError> {
    let info = training.show_training_info()?;

    match format {
        OutputFormat::Text => writeln!(writer, "{}", info.get_message())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &info).map_err(io::Error::from)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Dispatch and report every package in order.
///
/// A package that fails is logged, recorded in the report and skipped.
/// Only I/O errors on `writer` stop the run.
pub fn process_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<RunReport> {
    let batch = packages
        .iter()
        .map(|package| (package.to_string(), Ok(package.clone())));
    run_batch(batch, format, writer)
}

/// Like [`process_packages`], but parses each `CODE:P1,P2,...` input first.
/// Malformed inputs are recorded as failures alongside the others.
pub fn process_inputs<W: Write, S: AsRef<str>>(
    inputs: &[S],
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<RunReport> {
    let batch = inputs.iter().map(|input| {
        let input = input.as_ref();
        (input.to_string(), input.parse::<Package>())
    });
    run_batch(batch, format, writer)
}

fn run_batch<W: Write>(
    batch: impl IntoIterator<Item = (String, Result<Package, TrainingError>)>,
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<RunReport> {
    let mut report = RunReport::default();

    for (input, package) in batch {
        let outcome = package
            .and_then(|package| package.read())
            .map_err(ReportError::from)
            .and_then(|workout| write_summary(&mut *writer, &workout, format));

        match outcome {
            Ok(()) => report.processed += 1,
            Err(ReportError::Io(err)) => return Err(err),
            Err(ReportError::Training(error)) => {
                tracing::error!(package = %input, %error, "skipping package");
                report.failures.push(PackageFailure { input, error });
            }
        }
    }

    tracing::debug!(
        processed = report.processed,
        failed = report.failures.len(),
        "packages done"
    );
    Ok(report)
}
