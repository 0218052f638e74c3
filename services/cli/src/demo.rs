use crate::cli::SourceArgs;
use crate::infra::load_demand;
use crate::report::render_dashboard;
use clap::Args;
use placement_analytics::config::AppConfig;
use placement_analytics::dashboard::{DepartmentDashboard, MockDirectory};
use placement_analytics::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the generated records as JSON (loadable again with --data)
    #[arg(long)]
    pub(crate) write: Option<PathBuf>,
}

pub(crate) fn run_demo(
    args: DemoArgs,
    sources: &SourceArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let seed = sources.seed.unwrap_or(config.data.demand_seed);
    if sources.data.is_some() {
        tracing::warn!("demo always generates mock records; ignoring --data");
    }

    let directory = MockDirectory::generate(seed);
    let demand = load_demand(sources, config, seed)?;

    println!(
        "Placement dashboard demo (seed {seed}): {} departments, {} students",
        directory.len(),
        directory.total_students()
    );
    for (department, records) in directory.iter() {
        let dashboard = DepartmentDashboard::build(department, records, demand.as_ref());
        println!();
        render_dashboard(&dashboard);
    }

    if let Some(path) = args.write {
        std::fs::write(&path, serde_json::to_string_pretty(&directory)?)?;
        tracing::info!(path = %path.display(), "wrote mock placement records");
        println!("\nWrote mock records to {}", path.display());
    }

    Ok(())
}
