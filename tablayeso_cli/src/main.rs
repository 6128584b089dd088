//! # Tablayeso CLI
//!
//! Estimates a project file from the command line.
//!
//! ```text
//! tablayeso project.json                       # text report
//! tablayeso project.json --format json         # machine-readable outcome
//! tablayeso project.json --settings merma.toml # override estimator settings
//! tablayeso project.json --finishing           # add compound, tape, basecoat...
//! tablayeso preview project.json               # metraje per item, no validation
//! ```
//!
//! Exits with status 1 when the project cannot be estimated.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tablayeso_core::project::{EstimatorSettings, Project};

#[derive(Parser, Debug)]
#[command(name = "tablayeso")]
#[command(about = "Drywall and metal-framing material estimator")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    estimate: EstimateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate materials for a project (the default)
    Estimate(EstimateArgs),
    /// Show the billing quantity of every item without validating it
    Preview {
        /// Path to the project JSON file
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct EstimateArgs {
    /// Path to the project JSON file
    file: Option<PathBuf>,

    /// TOML file overriding the project's estimator settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Work area label printed on the estimate
    #[arg(long, value_name = "LABEL")]
    work_area: Option<String>,

    /// Add joint finishing goods to the bill
    #[arg(long)]
    finishing: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Preview { file }) => preview(&file),
        Some(Command::Estimate(args)) => estimate(args),
        None => estimate(cli.estimate),
    }
}

fn estimate(args: EstimateArgs) -> Result<ExitCode> {
    let Some(file) = args.file else {
        bail!("no project file given (try `tablayeso --help`)");
    };
    let mut project = load_project(&file)?;
    if let Some(path) = &args.settings {
        project.settings = load_settings(path)?;
    }
    if let Some(label) = args.work_area {
        project.meta.work_area = label;
    }
    if args.finishing {
        project.settings.include_finishing = true;
    }

    tracing::info!(
        file = %file.display(),
        items = project.item_count(),
        waste_percent = project.settings.waste_percent,
        "estimating project"
    );
    let outcome = project.calculate();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Format::Text => match outcome.report() {
            Some(report) => print!("{}", render::Estimate(report)),
            None => eprint!("{}", render::Failure(outcome.errors())),
        },
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn preview(file: &Path) -> Result<ExitCode> {
    let project = load_project(file)?;
    print!("{}", render::Preview(&project));
    Ok(ExitCode::SUCCESS)
}

fn load_project(path: &Path) -> Result<Project> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid project JSON in {}", path.display()))
}

fn load_settings(path: &Path) -> Result<EstimatorSettings> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("invalid settings TOML in {}", path.display()))
}
