mod cli;
mod demo;
mod infra;
mod report;

use placement_analytics::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
