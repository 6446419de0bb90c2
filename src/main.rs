use std::io;
use std::process::ExitCode;

use clap::Parser;
use fittracker::{OutputFormat, default_packages, process_inputs, process_packages};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fittracker")]
#[command(about = "Distance, speed and calories for tracker sensor packages")]
struct Cli {
    /// Sensor package as CODE:P1,P2,... (RUN, WLK or SWM). Repeatable;
    /// replaces the built-in sample packages.
    #[arg(short, long = "package", value_name = "PACKAGE")]
    packages: Vec<String>,

    /// Print one JSON object per workout instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut stdout = io::stdout().lock();
    let outcome = if cli.packages.is_empty() {
        process_packages(&default_packages(), format, &mut stdout)
    } else {
        process_inputs(&cli.packages, format, &mut stdout)
    };

    match outcome {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::warn!(
                failed = report.failures.len(),
                processed = report.processed,
                "some packages could not be processed"
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("failed to write report: {err}");
            ExitCode::FAILURE
        }
    }
}
