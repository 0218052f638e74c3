use crate::demo::{run_demo, DemoArgs};
use crate::infra::DataSources;
use crate::report::{run_departments, run_report, run_students, ReportArgs, StudentsArgs};
use clap::{Args, Parser, Subcommand};
use placement_analytics::config::AppConfig;
use placement_analytics::error::AppError;
use placement_analytics::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "placement-dashboard",
    about = "Placement analytics for college departments from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    sources: SourceArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List departments with their student counts
    Departments,
    /// Summarise one department (default command)
    Report(ReportArgs),
    /// List a department's students with search and sorting
    Students(StudentsArgs),
    /// Generate mock placement data and report on every department
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Placement records (CSV, or JSON by extension). Defaults to PLACEMENT_DATA_PATH, then mock data.
    #[arg(long, global = true)]
    pub(crate) data: Option<PathBuf>,
    /// Skill demand CSV (`skill,demand`). Defaults to PLACEMENT_DEMAND_PATH, then simulated demand.
    #[arg(long, global = true)]
    pub(crate) demand: Option<PathBuf>,
    /// Seed for mock records and simulated demand. Defaults to PLACEMENT_DEMAND_SEED.
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    let sources = &cli.sources;
    match command {
        Command::Departments => run_departments(&DataSources::load(sources, &config)?),
        Command::Report(args) => run_report(args, &DataSources::load(sources, &config)?),
        Command::Students(args) => run_students(args, &DataSources::load(sources, &config)?),
        Command::Demo(args) => run_demo(args, sources, &config),
    }
}
