//! # velocity-cli
//!
//! Command-line interface for rolling confidence interval forecasts of team
//! velocity.

mod report;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use velocity_facade::interval::{lower_index_with, upper_index_with, z_score};
use velocity_facade::prelude::*;

/// Velocity history used by `--sample`.
const SAMPLE_OBSERVATIONS: [f64; 19] = [
    -22.0, -53.0, 28.0, 19.0, 32.0, 5.0, 20.0, -2.0, 20.0, 20.0, 25.0, 36.0, 37.0, 36.0, 5.0,
    29.0, 45.0, 24.0, 23.0,
];

const NO_OBSERVATIONS_MESSAGE: &str =
    "No (valid) observations provided for forecasting; exiting forecast!";

#[derive(Parser)]
#[command(name = "velocity")]
#[command(about = "Sprint velocity confidence interval forecasting", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast the next sprint and classify past sprints
    Forecast {
        /// Velocities in sprint order; negative marks an invalid sprint (-0 for zero)
        #[arg(allow_negative_numbers = true, conflicts_with = "sample")]
        values: Vec<f64>,

        /// Use the bundled sample history instead of VALUES
        #[arg(long)]
        sample: bool,

        /// Confidence level of the interval
        #[arg(short, long, default_value = "0.90")]
        confidence: f64,

        /// Valid observations below which the interval is the observed range
        #[arg(long, default_value = "7")]
        small_sample_threshold: usize,

        /// Valid observations required before the first forecast
        #[arg(long, default_value = "2")]
        min_history: usize,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the confidence interval rank indexes for sample sizes 1..=MAX
    Indexes {
        /// Largest sample size
        #[arg(short, long, default_value = "9")]
        max: usize,

        /// Confidence level
        #[arg(short, long, default_value = "0.90")]
        confidence: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("velocity_core={level},velocity_cli={level}").into()),
        )
        .init();
}

/// Write `contents` to `output`, or stdout when absent.
fn write_output(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output {:?}", path))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write output {:?}", path))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
        }
    }
    Ok(())
}

/// Run forecast command
fn run_forecast(
    values: Vec<f64>,
    sample: bool,
    config: ForecastConfig,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let raw = if sample {
        SAMPLE_OBSERVATIONS.to_vec()
    } else {
        values
    };
    let observations = observations_from_signed(&raw)?;
    tracing::debug!(count = observations.len(), "observations loaded");

    let analysis = VelocityAnalyzer::new(config)?.analyze(&observations)?;

    let rendered = match format {
        OutputFormat::Text => report::render_text(&analysis),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&analysis)
                .context("Failed to serialize analysis")?;
            json.push('\n');
            json
        }
    };
    write_output(&rendered, output.as_deref())
}

/// Run indexes command
fn run_indexes(max: usize, confidence: f64) -> anyhow::Result<()> {
    let config = ForecastConfig::builder()
        .confidence_level(confidence)
        .build()?;
    let estimator = RankIntervalEstimator::from_config(&config);
    let z = z_score(config.confidence_level);

    let mut out = String::new();
    out.push_str("    n  LowerCII  UpperCII  Used\n");
    for n in 1..=max {
        let (lo, hi) = estimator.indexes(n)?;
        out.push_str(&format!(
            "{:>5}  {:>8}  {:>8}  {}-{}\n",
            n,
            lower_index_with(n, z),
            upper_index_with(n, z),
            lo,
            hi
        ));
    }
    write_output(&out, None)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Forecast {
            values,
            sample,
            confidence,
            small_sample_threshold,
            min_history,
            format,
            output,
        } => {
            let config = ForecastConfig::builder()
                .confidence_level(confidence)
                .small_sample_threshold(small_sample_threshold)
                .min_history(min_history)
                .build()?;
            run_forecast(values, sample, config, format, output)
        }
        Commands::Indexes { max, confidence } => run_indexes(max, confidence),
    }
}

/// Report a failed run and pick the exit status.
///
/// Having nothing to forecast is a normal early exit: the notice goes to
/// `stdout` and the status is 0. Every other error goes to `stderr` with
/// status 1.
fn report_failure(err: &anyhow::Error, stdout: &mut impl Write, stderr: &mut impl Write) -> i32 {
    match err.downcast_ref::<VelocityError>() {
        Some(VelocityError::NoValidObservations) => {
            let _ = writeln!(stdout, "{}", NO_OBSERVATIONS_MESSAGE);
            0
        }
        _ => {
            let _ = writeln!(stderr, "Error: {:#}", err);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        let code = report_failure(&e, &mut std::io::stdout(), &mut std::io::stderr());
        std::process::exit(code);
    }
}
